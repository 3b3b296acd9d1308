use serde::{Deserialize, Serialize};

use super::completion::CompletionStatus;
use super::record::ProfileRecord;
use crate::system::roles::UserRole;

/// Profile payload returned to the wizard and the dashboards
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub role: UserRole,
    pub record: ProfileRecord,
    pub completion_status: CompletionStatus,
    pub eligible_for_permanent_id: bool,
}

/// Body of the wizard's "save and next" / submit persistence call.
/// Partial records are expected; completion is recomputed server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveProfileRequest {
    pub record: ProfileRecord,
}
