use axum::{http::StatusCode, Extension, Json};
use contracts::dashboard::dto::DashboardData;
use contracts::system::auth::TokenClaims;

use crate::dashboards::service;

/// GET /api/dashboard
pub async fn get_dashboard_data(
    Extension(claims): Extension<TokenClaims>,
) -> Result<Json<DashboardData>, StatusCode> {
    let role = claims.role.ok_or(StatusCode::FORBIDDEN)?;
    match service::get_dashboard_data(&claims.sub, role).await {
        Ok(data) => Ok(Json(data)),
        Err(e) => Err(e.status_code()),
    }
}
