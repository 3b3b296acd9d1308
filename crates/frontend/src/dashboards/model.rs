use contracts::dashboard::dto::DashboardData;
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;
use crate::system::auth::storage;

fn get_auth_header() -> Option<String> {
    storage::get_access_token().map(|token| format!("Bearer {}", token))
}

/// Fetch the assembled dashboard payload for the signed-in user
pub async fn fetch_dashboard_data() -> Result<DashboardData, String> {
    let auth_header = get_auth_header().ok_or("Not authenticated")?;

    let response = Request::get(&format!("{}/api/dashboard", api_base()))
        .header("Authorization", &auth_header)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to load dashboard data: {}", response.status()));
    }

    response
        .json::<DashboardData>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
