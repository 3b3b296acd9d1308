use axum::{http::StatusCode, Extension, Json};
use contracts::dashboard::dto::{ServiceRequestStats, WorkOrderStats};
use contracts::system::auth::TokenClaims;

use crate::domain::{service_request, work_order};

/// GET /api/service-requests/stats
pub async fn service_request_stats(
    Extension(claims): Extension<TokenClaims>,
) -> Result<Json<ServiceRequestStats>, StatusCode> {
    match service_request::service::get_stats(&claims.sub).await {
        Ok(stats) => Ok(Json(stats)),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// GET /api/work-orders/stats
pub async fn work_order_stats(
    Extension(claims): Extension<TokenClaims>,
) -> Result<Json<WorkOrderStats>, StatusCode> {
    match work_order::service::get_stats(&claims.sub).await {
        Ok(stats) => Ok(Json(stats)),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}
