//! Profile completion scoring.
//!
//! A pure function of `(ProfileRecord, UserRole)`: no hidden state, no I/O.
//! Callers recompute on every field mutation and persist the result
//! themselves if they need to.

use serde::{Deserialize, Serialize};

use super::fields::{mandatory_fields, resolve_path, value_is_filled};
use super::record::ProfileRecord;
use crate::system::roles::UserRole;

/// Derived completion state of a profile. Never stored, always recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionStatus {
    /// Integer percentage in [0, 100], round-half-up
    pub overall_percentage: u8,
    /// Labels of the mandatory fields still empty, in table order
    pub missing_mandatory_fields: Vec<String>,
    /// True iff every mandatory field of the role is filled
    pub is_complete: bool,
}

impl CompletionStatus {
    pub fn empty() -> Self {
        Self {
            overall_percentage: 0,
            missing_mandatory_fields: Vec::new(),
            is_complete: false,
        }
    }
}

/// Compute the completion status of a profile for a role.
///
/// A field counts as complete when its resolved value is a non-null,
/// non-whitespace primitive (numbers count even when zero). A role with an
/// empty mandatory-field table is fully complete by definition.
pub fn calculate_completion(record: &ProfileRecord, role: UserRole) -> CompletionStatus {
    let specs = mandatory_fields(role);
    if specs.is_empty() {
        return CompletionStatus {
            overall_percentage: 100,
            missing_mandatory_fields: Vec::new(),
            is_complete: true,
        };
    }

    // Single serialization per call; path resolution happens on the wire shape.
    let value = match serde_json::to_value(record) {
        Ok(v) => v,
        Err(_) => return CompletionStatus::empty(),
    };

    let mut missing = Vec::new();
    let mut filled = 0usize;
    for spec in specs {
        let is_filled = resolve_path(&value, spec.path)
            .map(value_is_filled)
            .unwrap_or(false);
        if is_filled {
            filled += 1;
        } else {
            missing.push(spec.label.to_string());
        }
    }

    // Round half up, integer arithmetic keeps the result exact.
    let total = specs.len();
    let overall_percentage = ((200 * filled + total) / (2 * total)) as u8;

    CompletionStatus {
        overall_percentage,
        is_complete: filled == total,
        missing_mandatory_fields: missing,
    }
}

/// The stricter "permanent registration number" gate.
///
/// Distinct from `is_complete` on purpose: the percentage counts only
/// declarative field values, while this gate additionally requires the
/// uploaded identity-proof file and matching bank account numbers.
pub fn eligible_for_permanent_id(record: &ProfileRecord, status: &CompletionStatus) -> bool {
    status.is_complete && record.has_identity_proof_file() && !record.account_numbers_mismatch()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::record::BankingDetail;

    fn filled_team_member() -> ProfileRecord {
        let mut record = ProfileRecord::default();
        record.name = "A".into();
        record.email = "a@b.com".into();
        record.contact_number = "123".into();
        record.identity_document.doc_type = "PAN".into();
        record.identity_document.number = "X".into();
        record.address.street = "S".into();
        record.address.city = "C".into();
        record.address.state = "ST".into();
        record.address.pin_code = "1".into();
        record
    }

    #[test]
    fn test_all_fields_filled_is_100() {
        let status = calculate_completion(&filled_team_member(), UserRole::SeekerTeamMember);
        assert_eq!(status.overall_percentage, 100);
        assert!(status.is_complete);
        assert!(status.missing_mandatory_fields.is_empty());
    }

    #[test]
    fn test_two_of_nine_rounds_to_22() {
        let mut record = ProfileRecord::default();
        record.name = "A".into();
        record.email = "a@b.com".into();
        let status = calculate_completion(&record, UserRole::SeekerTeamMember);
        assert_eq!(status.overall_percentage, 22);
        assert!(!status.is_complete);
        assert_eq!(status.missing_mandatory_fields.len(), 7);
    }

    #[test]
    fn test_deterministic() {
        let record = filled_team_member();
        let a = calculate_completion(&record, UserRole::ProviderEntityAdmin);
        let b = calculate_completion(&record, UserRole::ProviderEntityAdmin);
        assert_eq!(a, b);
    }

    #[test]
    fn test_monotonic_in_filled_fields() {
        let mut record = ProfileRecord::default();
        let mut last = calculate_completion(&record, UserRole::SeekerTeamMember).overall_percentage;

        record.name = "A".into();
        let next = calculate_completion(&record, UserRole::SeekerTeamMember).overall_percentage;
        assert!(next >= last);
        last = next;

        record.address.city = "C".into();
        let next = calculate_completion(&record, UserRole::SeekerTeamMember).overall_percentage;
        assert!(next >= last);

        // Clearing a filled field never increases the percentage
        record.address.city = "  ".into();
        let cleared = calculate_completion(&record, UserRole::SeekerTeamMember).overall_percentage;
        assert!(cleared <= next);
    }

    #[test]
    fn test_bounds_for_every_role() {
        let empty = ProfileRecord::default();
        let full = filled_team_member();
        for role in UserRole::all() {
            let a = calculate_completion(&empty, role).overall_percentage;
            let b = calculate_completion(&full, role).overall_percentage;
            assert!(a <= 100);
            assert!(b <= 100);
            assert!(a <= b);
        }
    }

    #[test]
    fn test_explicit_zero_staff_count_is_filled() {
        let mut record = ProfileRecord::default();
        let before =
            calculate_completion(&record, UserRole::ProviderEntityAdmin).overall_percentage;
        record.resource_infra.number_of_partners = Some(0);
        let after = calculate_completion(&record, UserRole::ProviderEntityAdmin).overall_percentage;
        assert!(after > before);
    }

    #[test]
    fn test_permanent_id_gate_is_stricter_than_percentage() {
        let mut record = filled_team_member();
        let status = calculate_completion(&record, UserRole::SeekerTeamMember);
        assert!(status.is_complete);
        // 100% alone is not enough: the proof file is missing
        assert!(!eligible_for_permanent_id(&record, &status));

        record.identity_document.uploaded_file = Some("pan.pdf".into());
        assert!(eligible_for_permanent_id(&record, &status));

        // A banking mismatch blocks the gate without touching the percentage
        record.banking_details.push(BankingDetail {
            account_number: "123".into(),
            confirm_account_number: "456".into(),
            ..BankingDetail::default()
        });
        let status_after = calculate_completion(&record, UserRole::SeekerTeamMember);
        assert_eq!(status_after.overall_percentage, 100);
        assert!(!eligible_for_permanent_id(&record, &status_after));
    }
}
