use axum::{http::StatusCode, Extension, Json};
use contracts::system::auth::{
    LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, TokenClaims, UserInfo,
};
use contracts::system::users::User;

use crate::system::auth::{jwt, password};
use crate::system::users::repository;

fn to_user_info(user: &User) -> UserInfo {
    UserInfo {
        id: user.id.clone(),
        username: user.username.clone(),
        full_name: user.full_name.clone(),
        email: user.email.clone(),
        is_admin: user.is_admin,
        role: user.role,
    }
}

/// POST /api/system/auth/login
pub async fn login(Json(req): Json<LoginRequest>) -> Result<Json<LoginResponse>, StatusCode> {
    let user = repository::get_by_username(&req.username)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .ok_or(StatusCode::UNAUTHORIZED)?;

    if !user.is_active {
        return Err(StatusCode::UNAUTHORIZED);
    }

    let stored_hash = repository::get_password_hash(&user.id)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let valid = password::verify_password(&req.password, &stored_hash)
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    if !valid {
        return Err(StatusCode::UNAUTHORIZED);
    }

    let access_token = jwt::generate_access_token(&user.id, &user.username, user.is_admin, user.role)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let refresh_token = jwt::generate_refresh_token();
    let expires_at = jwt::calculate_refresh_token_expiration();
    repository::insert_refresh_token(&refresh_token, &user.id, &expires_at)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let _ = repository::touch_last_login(&user.id).await;

    Ok(Json(LoginResponse {
        access_token,
        refresh_token,
        user: to_user_info(&user),
    }))
}

/// POST /api/system/auth/refresh
pub async fn refresh(Json(req): Json<RefreshRequest>) -> Result<Json<RefreshResponse>, StatusCode> {
    let user_id = repository::get_refresh_token_user(&req.refresh_token)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let user = repository::get_by_id(&user_id)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .ok_or(StatusCode::UNAUTHORIZED)?;

    if !user.is_active {
        return Err(StatusCode::UNAUTHORIZED);
    }

    let access_token = jwt::generate_access_token(&user.id, &user.username, user.is_admin, user.role)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(RefreshResponse { access_token }))
}

/// POST /api/system/auth/logout
pub async fn logout(Json(req): Json<RefreshRequest>) -> Result<(), StatusCode> {
    repository::delete_refresh_token(&req.refresh_token)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    Ok(())
}

/// GET /api/system/auth/me (protected)
pub async fn current_user(
    Extension(claims): Extension<TokenClaims>,
) -> Result<Json<UserInfo>, StatusCode> {
    let user = repository::get_by_id(&claims.sub)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .ok_or(StatusCode::UNAUTHORIZED)?;

    Ok(Json(to_user_info(&user)))
}
