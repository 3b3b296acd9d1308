use anyhow::{Context, Result};
use contracts::system::roles::UserRole;
use contracts::system::users::User;
use sea_orm::{ConnectionTrait, DatabaseBackend, QueryResult, Statement};

use crate::shared::data::db::get_connection;

const USER_COLUMNS: &str = "id, username, email, full_name, role, is_active, is_admin, \
                            created_at, updated_at, last_login_at, created_by";

fn row_to_user(row: &QueryResult) -> Result<User> {
    let role: Option<String> = row.try_get("", "role")?;
    Ok(User {
        id: row.try_get("", "id")?,
        username: row.try_get("", "username")?,
        email: row.try_get("", "email")?,
        full_name: row.try_get("", "full_name")?,
        role: role.as_deref().and_then(UserRole::from_code),
        is_active: row.try_get::<i32>("", "is_active")? != 0,
        is_admin: row.try_get::<i32>("", "is_admin")? != 0,
        created_at: row.try_get("", "created_at")?,
        updated_at: row.try_get("", "updated_at")?,
        last_login_at: row.try_get("", "last_login_at")?,
        created_by: row.try_get("", "created_by")?,
    })
}

/// Create user with password hash
pub async fn create_with_password(user: &User, password_hash: &str) -> Result<()> {
    let conn = get_connection();

    conn.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        "INSERT INTO sys_users (id, username, email, password_hash, full_name, role, is_active, is_admin, created_at, updated_at, last_login_at, created_by)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        [
            user.id.clone().into(),
            user.username.clone().into(),
            user.email.clone().into(),
            password_hash.to_string().into(),
            user.full_name.clone().into(),
            user.role.map(|r| r.code().to_string()).into(),
            (if user.is_active { 1 } else { 0 }).into(),
            (if user.is_admin { 1 } else { 0 }).into(),
            user.created_at.clone().into(),
            user.updated_at.clone().into(),
            user.last_login_at.clone().into(),
            user.created_by.clone().into(),
        ],
    ))
    .await
    .context("Failed to insert user")?;

    Ok(())
}

/// Get user by ID
pub async fn get_by_id(id: &str) -> Result<Option<User>> {
    let conn = get_connection();

    let result = conn
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            format!("SELECT {} FROM sys_users WHERE id = ?", USER_COLUMNS),
            [id.into()],
        ))
        .await?;

    result.as_ref().map(row_to_user).transpose()
}

/// Get user by username
pub async fn get_by_username(username: &str) -> Result<Option<User>> {
    let conn = get_connection();

    let result = conn
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            format!("SELECT {} FROM sys_users WHERE username = ?", USER_COLUMNS),
            [username.into()],
        ))
        .await?;

    result.as_ref().map(row_to_user).transpose()
}

/// List all users, newest first
pub async fn list_all() -> Result<Vec<User>> {
    let conn = get_connection();

    let rows = conn
        .query_all(Statement::from_string(
            DatabaseBackend::Sqlite,
            format!(
                "SELECT {} FROM sys_users ORDER BY created_at DESC",
                USER_COLUMNS
            ),
        ))
        .await?;

    rows.iter().map(row_to_user).collect()
}

/// Update user fields (password is changed separately)
pub async fn update(user: &User) -> Result<()> {
    let conn = get_connection();

    conn.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        "UPDATE sys_users SET email = ?, full_name = ?, role = ?, is_active = ?, is_admin = ?, updated_at = ? WHERE id = ?",
        [
            user.email.clone().into(),
            user.full_name.clone().into(),
            user.role.map(|r| r.code().to_string()).into(),
            (if user.is_active { 1 } else { 0 }).into(),
            (if user.is_admin { 1 } else { 0 }).into(),
            user.updated_at.clone().into(),
            user.id.clone().into(),
        ],
    ))
    .await?;

    Ok(())
}

/// Delete user by ID
pub async fn delete(id: &str) -> Result<bool> {
    let conn = get_connection();

    let result = conn
        .execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "DELETE FROM sys_users WHERE id = ?",
            [id.into()],
        ))
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Get the stored password hash of a user
pub async fn get_password_hash(id: &str) -> Result<Option<String>> {
    let conn = get_connection();

    let result = conn
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT password_hash FROM sys_users WHERE id = ?",
            [id.into()],
        ))
        .await?;

    match result {
        Some(row) => Ok(Some(row.try_get("", "password_hash")?)),
        None => Ok(None),
    }
}

/// Replace the stored password hash of a user
pub async fn set_password_hash(id: &str, password_hash: &str) -> Result<()> {
    let conn = get_connection();

    conn.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        "UPDATE sys_users SET password_hash = ?, updated_at = ? WHERE id = ?",
        [
            password_hash.into(),
            chrono::Utc::now().to_rfc3339().into(),
            id.into(),
        ],
    ))
    .await?;

    Ok(())
}

/// Record a successful login
pub async fn touch_last_login(id: &str) -> Result<()> {
    let conn = get_connection();

    conn.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        "UPDATE sys_users SET last_login_at = ? WHERE id = ?",
        [chrono::Utc::now().to_rfc3339().into(), id.into()],
    ))
    .await?;

    Ok(())
}

// ----------------------------------------------------------------------------
// Refresh tokens
// ----------------------------------------------------------------------------

/// Store a refresh token
pub async fn insert_refresh_token(token: &str, user_id: &str, expires_at: &str) -> Result<()> {
    let conn = get_connection();

    conn.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        "INSERT INTO sys_refresh_tokens (token, user_id, expires_at, created_at) VALUES (?, ?, ?, ?)",
        [
            token.into(),
            user_id.into(),
            expires_at.into(),
            chrono::Utc::now().to_rfc3339().into(),
        ],
    ))
    .await?;

    Ok(())
}

/// Look up the user of an unexpired refresh token
pub async fn get_refresh_token_user(token: &str) -> Result<Option<String>> {
    let conn = get_connection();

    let result = conn
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT user_id FROM sys_refresh_tokens WHERE token = ? AND expires_at > ?",
            [token.into(), chrono::Utc::now().to_rfc3339().into()],
        ))
        .await?;

    match result {
        Some(row) => Ok(Some(row.try_get("", "user_id")?)),
        None => Ok(None),
    }
}

/// Drop a refresh token (logout)
pub async fn delete_refresh_token(token: &str) -> Result<()> {
    let conn = get_connection();

    conn.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        "DELETE FROM sys_refresh_tokens WHERE token = ?",
        [token.into()],
    ))
    .await?;

    Ok(())
}
