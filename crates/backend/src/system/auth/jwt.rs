use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use contracts::system::auth::TokenClaims;
use contracts::system::roles::UserRole;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use rand::Rng;

// Long-lived tokens: re-login on every visit is not worth it for this
// deployment, revocation happens through the refresh-token table.
const ACCESS_TOKEN_HOURS: i64 = 24;
const REFRESH_TOKEN_DAYS: i64 = 90;

/// Issue a JWT access token carrying the marketplace role
pub async fn generate_access_token(
    user_id: &str,
    username: &str,
    is_admin: bool,
    role: Option<UserRole>,
) -> Result<String> {
    let issued = Utc::now();
    let claims = TokenClaims {
        sub: user_id.to_string(),
        username: username.to_string(),
        is_admin,
        role,
        exp: (issued + Duration::hours(ACCESS_TOKEN_HOURS)).timestamp() as usize,
        iat: issued.timestamp() as usize,
    };

    let secret = jwt_secret().await?;
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .context("Failed to encode JWT token")
}

/// Validate a JWT token and extract the claims
pub async fn validate_token(token: &str) -> Result<TokenClaims> {
    let secret = jwt_secret().await?;
    let data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .context("Failed to decode JWT token")?;
    Ok(data.claims)
}

/// Opaque refresh token, stored server-side
pub fn generate_refresh_token() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Expiration timestamp for a refresh token issued now
pub fn calculate_refresh_token_expiration() -> String {
    (Utc::now() + Duration::days(REFRESH_TOKEN_DAYS)).to_rfc3339()
}

/// The signing secret lives in sys_settings so that restarts keep existing
/// sessions valid; a fresh database gets a generated one on first use.
async fn jwt_secret() -> Result<String> {
    if let Ok(Some(secret)) = read_setting("jwt_secret").await {
        return Ok(secret);
    }
    let secret = random_secret();
    let _ = write_setting(
        "jwt_secret",
        &secret,
        "Auto-generated JWT secret for authentication",
    )
    .await;
    Ok(secret)
}

/// 256 random bits, base64
fn random_secret() -> String {
    use base64::{engine::general_purpose, Engine as _};
    let mut rng = rand::thread_rng();
    let bytes: [u8; 32] = rng.gen();
    general_purpose::STANDARD.encode(bytes)
}

async fn read_setting(key: &str) -> Result<Option<String>> {
    use crate::shared::data::db::get_connection;
    use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

    let row = get_connection()
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT value FROM sys_settings WHERE key = ?",
            [key.into()],
        ))
        .await?;

    row.map(|r| r.try_get("", "value")).transpose().map_err(Into::into)
}

async fn write_setting(key: &str, value: &str, description: &str) -> Result<()> {
    use crate::shared::data::db::get_connection;
    use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

    let now = Utc::now().to_rfc3339();
    get_connection()
        .execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "INSERT OR REPLACE INTO sys_settings (key, value, description, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?)",
            [
                key.into(),
                value.into(),
                description.into(),
                now.clone().into(),
                now.into(),
            ],
        ))
        .await?;

    Ok(())
}
