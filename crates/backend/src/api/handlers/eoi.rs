use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use contracts::eoi::aggregate::{EoiInvitation, EoiInvitationDto};
use serde_json::json;

use crate::domain::eoi::service;

fn parse_id(id: &str) -> Result<uuid::Uuid, StatusCode> {
    uuid::Uuid::parse_str(id).map_err(|_| StatusCode::BAD_REQUEST)
}

/// GET /api/eoi
pub async fn list_all() -> Result<Json<Vec<EoiInvitation>>, StatusCode> {
    match service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => Err(e.status_code()),
    }
}

/// GET /api/eoi/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<EoiInvitation>, StatusCode> {
    let uuid = parse_id(&id)?;
    match service::get_by_id(uuid).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => Err(e.status_code()),
    }
}

/// POST /api/eoi
pub async fn upsert(
    Json(dto): Json<EoiInvitationDto>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let result = if dto.id.is_some() {
        service::update(dto).await.map(|_| uuid::Uuid::nil().to_string())
    } else {
        service::create(dto).await.map(|id| id.to_string())
    };
    match result {
        Ok(id) => Ok(Json(json!({"id": id}))),
        Err(e) => Err(e.status_code()),
    }
}

/// DELETE /api/eoi/:id
pub async fn delete(Path(id): Path<String>) -> Result<(), StatusCode> {
    let uuid = parse_id(&id)?;
    match service::delete(uuid).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(StatusCode::NOT_FOUND),
        Err(e) => Err(e.status_code()),
    }
}

/// GET /api/eoi/:id/coc-export, the COC list as a CSV download
pub async fn export_coc(Path(id): Path<String>) -> Result<impl IntoResponse, StatusCode> {
    let uuid = parse_id(&id)?;
    match service::export_coc_csv(uuid).await {
        Ok(csv) => Ok((
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"coc-{}.csv\"", id),
                ),
            ],
            csv,
        )),
        Err(e) => Err(e.status_code()),
    }
}
