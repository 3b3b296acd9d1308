use axum::{extract::Path, http::StatusCode, Extension, Json};
use contracts::system::auth::TokenClaims;
use contracts::system::users::{ChangePasswordDto, CreateUserDto, UpdateUserDto, User};
use serde_json::json;

use crate::system::users::service;

/// GET /api/system/users (admin)
pub async fn list() -> Result<Json<Vec<User>>, StatusCode> {
    match service::list_all().await {
        Ok(users) => Ok(Json(users)),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// GET /api/system/users/:id (admin)
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<User>, StatusCode> {
    match service::get_by_id(&id).await {
        Ok(Some(user)) => Ok(Json(user)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// POST /api/system/users (admin)
pub async fn create(
    Extension(claims): Extension<TokenClaims>,
    Json(dto): Json<CreateUserDto>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    match service::create(dto, Some(claims.sub)).await {
        Ok(id) => Ok(Json(json!({"id": id}))),
        Err(_) => Err(StatusCode::BAD_REQUEST),
    }
}

/// PUT /api/system/users/:id (admin)
pub async fn update(
    Path(id): Path<String>,
    Json(mut dto): Json<UpdateUserDto>,
) -> Result<(), StatusCode> {
    dto.id = id;
    match service::update(dto).await {
        Ok(()) => Ok(()),
        Err(_) => Err(StatusCode::BAD_REQUEST),
    }
}

/// DELETE /api/system/users/:id (admin)
pub async fn delete(Path(id): Path<String>) -> Result<(), StatusCode> {
    match service::delete(&id).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(StatusCode::NOT_FOUND),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// POST /api/system/users/:id/change-password (authenticated)
pub async fn change_password(
    Extension(claims): Extension<TokenClaims>,
    Path(id): Path<String>,
    Json(mut dto): Json<ChangePasswordDto>,
) -> Result<(), StatusCode> {
    dto.user_id = id;
    match service::change_password(dto, &claims.sub).await {
        Ok(()) => Ok(()),
        Err(_) => Err(StatusCode::BAD_REQUEST),
    }
}
