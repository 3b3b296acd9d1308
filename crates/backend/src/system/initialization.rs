use anyhow::Result;
use contracts::system::roles::UserRole;
use contracts::system::users::CreateUserDto;

use crate::system::users::{repository, service};

/// Make sure the back-office admin account exists
pub async fn ensure_admin_user_exists() -> Result<()> {
    if repository::get_by_username("admin").await?.is_some() {
        return Ok(());
    }

    tracing::info!("Creating default admin user");
    let dto = CreateUserDto {
        username: "admin".to_string(),
        password: "admin123!".to_string(),
        email: None,
        full_name: Some("Administrator".to_string()),
        role: None,
        is_admin: true,
    };
    service::create(dto, None).await?;

    Ok(())
}

/// Seed one demo account per marketplace role on a fresh database.
/// Usernames follow the role codes; dev-only convenience.
pub async fn ensure_demo_accounts_exist() -> Result<()> {
    for role in UserRole::all() {
        let username = role.code().to_lowercase();
        if repository::get_by_username(&username).await?.is_some() {
            continue;
        }

        tracing::info!("Creating demo account {}", username);
        let dto = CreateUserDto {
            username,
            password: "welcome123!".to_string(),
            email: None,
            full_name: Some(role.display_name().to_string()),
            role: Some(role),
            is_admin: false,
        };
        service::create(dto, None).await?;
    }

    Ok(())
}
