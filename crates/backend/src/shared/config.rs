use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Runtime configuration, read from config.toml next to the executable.
/// Falls back to the embedded default so a bare binary still starts.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub path: String,
}

const DEFAULT_CONFIG: &str = r#"
[database]
path = "target/db/app.db"
"#;

impl Config {
    /// Resolved database file path. Relative paths are anchored at the
    /// executable directory, not the working directory.
    pub fn database_path(&self) -> PathBuf {
        let raw = Path::new(&self.database.path);
        if raw.is_absolute() {
            return raw.to_path_buf();
        }
        exe_dir()
            .map(|dir| dir.join(raw))
            .unwrap_or_else(|| PathBuf::from(&self.database.path))
    }
}

fn exe_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
}

/// Load config.toml, or the embedded default when the file is absent
pub fn load_config() -> anyhow::Result<Config> {
    if let Some(dir) = exe_dir() {
        let config_path = dir.join("config.toml");
        if config_path.exists() {
            tracing::info!("Loading config from: {}", config_path.display());
            let contents = std::fs::read_to_string(&config_path)?;
            return Ok(toml::from_str(&contents)?);
        }
        tracing::warn!("config.toml not found at: {}", config_path.display());
    }

    tracing::info!("Using default embedded configuration");
    Ok(toml::from_str(DEFAULT_CONFIG)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.database.path, "target/db/app.db");
    }

    #[test]
    fn test_absolute_path_is_kept_as_is() {
        let config = Config {
            database: DatabaseConfig {
                path: "/var/lib/app/app.db".to_string(),
            },
        };
        assert_eq!(config.database_path(), PathBuf::from("/var/lib/app/app.db"));
    }
}
