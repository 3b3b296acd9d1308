use contracts::profile::dto::{ProfileResponse, SaveProfileRequest};
use contracts::profile::record::ProfileRecord;
use contracts::profile::verification::VerificationOutcome;
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;
use crate::system::auth::storage;

fn get_auth_header() -> Option<String> {
    storage::get_access_token().map(|token| format!("Bearer {}", token))
}

/// Fetch the stored profile of the signed-in user
pub async fn fetch_profile() -> Result<ProfileResponse, String> {
    let auth_header = get_auth_header().ok_or("Not authenticated")?;

    let response = Request::get(&format!("{}/api/profile", api_base()))
        .header("Authorization", &auth_header)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to load profile: {}", response.status()));
    }

    response
        .json::<ProfileResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Persist the (possibly partial) record; the wizard calls this on every
/// "save and next" step and on submit
pub async fn save_profile(record: &ProfileRecord) -> Result<ProfileResponse, String> {
    let auth_header = get_auth_header().ok_or("Not authenticated")?;

    let body = SaveProfileRequest {
        record: record.clone(),
    };

    let response = Request::post(&format!("{}/api/profile", api_base()))
        .header("Authorization", &auth_header)
        .json(&body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to save profile: {}", response.status()));
    }

    response
        .json::<ProfileResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Submit the identity proof for verification
pub async fn verify_document(
    file: &web_sys::File,
    doc_type_code: &str,
    number: &str,
) -> Result<VerificationOutcome, String> {
    let auth_header = get_auth_header().ok_or("Not authenticated")?;

    let form = web_sys::FormData::new().map_err(|_| "Failed to build form data".to_string())?;
    form.append_with_str("documentType", doc_type_code)
        .map_err(|_| "Failed to build form data".to_string())?;
    form.append_with_str("number", number)
        .map_err(|_| "Failed to build form data".to_string())?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|_| "Failed to build form data".to_string())?;

    let response = Request::post(&format!("{}/api/profile/verify-document", api_base()))
        .header("Authorization", &auth_header)
        .body(form)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Verification request failed: {}", response.status()));
    }

    response
        .json::<VerificationOutcome>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
