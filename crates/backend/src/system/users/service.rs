use anyhow::{anyhow, Result};
use chrono::Utc;
use contracts::system::users::{ChangePasswordDto, CreateUserDto, UpdateUserDto, User};

use super::repository;
use crate::system::auth::password;

fn validate_email(email: &Option<String>) -> Result<()> {
    if let Some(email) = email {
        if !email.trim().is_empty() && !email.contains('@') {
            return Err(anyhow!("Invalid email format"));
        }
    }
    Ok(())
}

/// Create a new user
pub async fn create(dto: CreateUserDto, created_by: Option<String>) -> Result<String> {
    if dto.username.trim().is_empty() {
        return Err(anyhow!("Username cannot be empty"));
    }
    if repository::get_by_username(&dto.username).await?.is_some() {
        return Err(anyhow!("Username already exists"));
    }
    validate_email(&dto.email)?;
    password::validate_password_strength(&dto.password)?;

    let password_hash = password::hash_password(&dto.password)?;
    let now = Utc::now().to_rfc3339();
    let user = User {
        id: uuid::Uuid::new_v4().to_string(),
        username: dto.username,
        email: dto.email,
        full_name: dto.full_name,
        role: dto.role,
        is_active: true,
        is_admin: dto.is_admin,
        created_at: now.clone(),
        updated_at: now,
        last_login_at: None,
        created_by,
    };

    repository::create_with_password(&user, &password_hash).await?;
    Ok(user.id)
}

/// Update user master data. The role is editable here on purpose: support
/// corrects mis-registered accounts through the admin surface.
pub async fn update(dto: UpdateUserDto) -> Result<()> {
    let mut user = repository::get_by_id(&dto.id)
        .await?
        .ok_or_else(|| anyhow!("User not found"))?;

    validate_email(&dto.email)?;

    user.email = dto.email;
    user.full_name = dto.full_name;
    user.role = dto.role;
    user.is_active = dto.is_active;
    user.is_admin = dto.is_admin;
    user.updated_at = Utc::now().to_rfc3339();

    repository::update(&user).await
}

pub async fn delete(id: &str) -> Result<bool> {
    repository::delete(id).await
}

pub async fn get_by_id(id: &str) -> Result<Option<User>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> Result<Vec<User>> {
    repository::list_all().await
}

/// Change a user's password.
/// Admins may reset anyone without the old password; a user changing their
/// own supplies it for verification.
pub async fn change_password(dto: ChangePasswordDto, requester_id: &str) -> Result<()> {
    repository::get_by_id(&dto.user_id)
        .await?
        .ok_or_else(|| anyhow!("User not found"))?;

    let requester = repository::get_by_id(requester_id)
        .await?
        .ok_or_else(|| anyhow!("Requester not found"))?;

    let changing_own = dto.user_id == requester_id;
    if !changing_own && !requester.is_admin {
        return Err(anyhow!("Permission denied"));
    }
    if changing_own {
        if let Some(ref old_password) = dto.old_password {
            let current_hash = repository::get_password_hash(&dto.user_id)
                .await?
                .ok_or_else(|| anyhow!("Password hash not found"))?;
            if !password::verify_password(old_password, &current_hash)? {
                return Err(anyhow!("Invalid old password"));
            }
        }
    }

    password::validate_password_strength(&dto.new_password)?;
    let new_hash = password::hash_password(&dto.new_password)?;
    repository::set_password_hash(&dto.user_id, &new_hash).await
}
