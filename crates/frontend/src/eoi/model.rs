use contracts::eoi::aggregate::{EoiInvitation, EoiInvitationDto};
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;
use crate::system::auth::storage;

fn get_auth_header() -> Option<String> {
    storage::get_access_token().map(|token| format!("Bearer {}", token))
}

/// Fetch all invitations
pub async fn fetch_list() -> Result<Vec<EoiInvitation>, String> {
    let auth_header = get_auth_header().ok_or("Not authenticated")?;

    let response = Request::get(&format!("{}/api/eoi", api_base()))
        .header("Authorization", &auth_header)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch invitations: {}", response.status()));
    }

    response
        .json::<Vec<EoiInvitation>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Fetch one invitation by id
pub async fn fetch_by_id(id: String) -> Result<EoiInvitation, String> {
    let auth_header = get_auth_header().ok_or("Not authenticated")?;

    let response = Request::get(&format!("{}/api/eoi/{}", api_base(), id))
        .header("Authorization", &auth_header)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch invitation: {}", response.status()));
    }

    response
        .json::<EoiInvitation>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create or update an invitation
pub async fn save_form(dto: &EoiInvitationDto) -> Result<(), String> {
    let auth_header = get_auth_header().ok_or("Not authenticated")?;

    let response = Request::post(&format!("{}/api/eoi", api_base()))
        .header("Authorization", &auth_header)
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to save invitation: {}", response.status()));
    }

    Ok(())
}

/// Delete an invitation
pub async fn delete(id: String) -> Result<(), String> {
    let auth_header = get_auth_header().ok_or("Not authenticated")?;

    let response = Request::delete(&format!("{}/api/eoi/{}", api_base(), id))
        .header("Authorization", &auth_header)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete invitation: {}", response.status()));
    }

    Ok(())
}

/// Fetch the COC list CSV export of an invitation
pub async fn fetch_coc_csv(id: String) -> Result<String, String> {
    let auth_header = get_auth_header().ok_or("Not authenticated")?;

    let response = Request::get(&format!("{}/api/eoi/{}/coc-export", api_base(), id))
        .header("Authorization", &auth_header)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to export COC list: {}", response.status()));
    }

    response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))
}
