use axum::extract::Multipart;
use axum::{http::StatusCode, Extension, Json};
use contracts::profile::dto::{ProfileResponse, SaveProfileRequest};
use contracts::profile::verification::{DocumentType, VerificationOutcome};
use contracts::system::auth::TokenClaims;
use contracts::system::roles::UserRole;

use crate::domain::profile::verification::{DocumentVerifier, RuleBasedVerifier};
use crate::domain::profile::service;

fn role_of(claims: &TokenClaims) -> Result<UserRole, StatusCode> {
    // Accounts without a marketplace role have no profile surface
    claims.role.ok_or(StatusCode::FORBIDDEN)
}

/// GET /api/profile
pub async fn get_profile(
    Extension(claims): Extension<TokenClaims>,
) -> Result<Json<ProfileResponse>, StatusCode> {
    let role = role_of(&claims)?;
    match service::get_profile(&claims.sub, role).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => Err(e.status_code()),
    }
}

/// POST /api/profile, the wizard's "save and next" / submit persistence
pub async fn save_profile(
    Extension(claims): Extension<TokenClaims>,
    Json(req): Json<SaveProfileRequest>,
) -> Result<Json<ProfileResponse>, StatusCode> {
    let role = role_of(&claims)?;
    match service::create_or_update_profile(&claims.sub, role, req.record).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => Err(e.status_code()),
    }
}

/// GET /api/profile/completion
pub async fn completion(
    Extension(claims): Extension<TokenClaims>,
) -> Result<Json<ProfileResponse>, StatusCode> {
    let role = role_of(&claims)?;
    match service::completion_status(&claims.sub, role).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => Err(e.status_code()),
    }
}

/// POST /api/profile/verify-document (multipart: documentType, number, file)
pub async fn verify_document(
    Extension(_claims): Extension<TokenClaims>,
    mut multipart: Multipart,
) -> Result<Json<VerificationOutcome>, StatusCode> {
    let mut doc_type: Option<DocumentType> = None;
    let mut number = String::new();
    let mut file_name = String::new();
    let mut file_size = 0usize;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| StatusCode::BAD_REQUEST)?
    {
        match field.name().unwrap_or_default() {
            "documentType" => {
                let text = field.text().await.map_err(|_| StatusCode::BAD_REQUEST)?;
                doc_type = DocumentType::from_code(&text);
            }
            "number" => {
                number = field.text().await.map_err(|_| StatusCode::BAD_REQUEST)?;
            }
            "file" => {
                file_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await.map_err(|_| StatusCode::BAD_REQUEST)?;
                file_size = bytes.len();
            }
            _ => {}
        }
    }

    let Some(doc_type) = doc_type else {
        return Ok(Json(VerificationOutcome::rejected(vec![
            "Unknown document type".to_string(),
        ])));
    };

    let outcome = RuleBasedVerifier
        .verify(&file_name, file_size, doc_type, &number)
        .await;
    Ok(Json(outcome))
}
