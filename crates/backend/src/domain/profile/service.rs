use contracts::profile::completion::{calculate_completion, eligible_for_permanent_id};
use contracts::profile::dto::ProfileResponse;
use contracts::profile::record::ProfileRecord;
use contracts::system::roles::UserRole;

use super::repository;
use crate::shared::error::{ServiceError, ServiceResult};

/// Load a user's profile with its derived completion state.
/// A user without a stored record gets a fresh wizard-shaped one.
pub async fn get_profile(user_id: &str, role: UserRole) -> ServiceResult<ProfileResponse> {
    let record = repository::get_by_user_id(user_id)
        .await
        .map_err(ServiceError::Internal)?
        .map(|stored| stored.record)
        .unwrap_or_else(ProfileRecord::new_for_wizard);

    Ok(to_response(record, role))
}

/// Persist a (possibly partial) record, as the wizard does on every
/// "save and next" step and on submit. Partial data is expected here; the
/// only hard gate is that the record parses, which Json extraction already
/// guaranteed.
pub async fn create_or_update_profile(
    user_id: &str,
    role: UserRole,
    record: ProfileRecord,
) -> ServiceResult<ProfileResponse> {
    if record.account_numbers_mismatch() {
        // Surfaced as a field-level warning client-side as well; the save
        // still goes through, only the permanent-id gate stays closed.
        tracing::debug!(user_id, "saving profile with mismatched account numbers");
    }

    repository::upsert(user_id, role, &record)
        .await
        .map_err(ServiceError::Internal)?;

    Ok(to_response(record, role))
}

/// Completion summary of a stored profile without loading the full record
/// into the caller
pub async fn completion_status(user_id: &str, role: UserRole) -> ServiceResult<ProfileResponse> {
    get_profile(user_id, role).await
}

fn to_response(record: ProfileRecord, role: UserRole) -> ProfileResponse {
    let completion_status = calculate_completion(&record, role);
    let eligible = eligible_for_permanent_id(&record, &completion_status);
    ProfileResponse {
        role,
        record,
        completion_status,
        eligible_for_permanent_id: eligible,
    }
}
