use serde::{Deserialize, Serialize};

/// Postal address block shared by all profile variants
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub pin_code: String,
}

/// Identity document (PAN, Aadhaar, GSTIN, IBBI registration)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityDocument {
    /// Wire code of the document type, see `verification::DocumentType`
    #[serde(rename = "type")]
    pub doc_type: String,
    pub number: String,
    /// Server-side reference of the uploaded proof file, once present
    pub uploaded_file: Option<String>,
}

/// A single bank account row. `confirm_account_number` is re-entered by the
/// user; a mismatch is a validation warning, never a completion deduction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankingDetail {
    pub beneficiary_name: String,
    pub account_number: String,
    pub confirm_account_number: String,
    pub account_type: String,
    pub ifsc_code: String,
}

impl BankingDetail {
    pub fn account_numbers_match(&self) -> bool {
        self.account_number.trim().is_empty()
            || self.confirm_account_number.trim().is_empty()
            || self.account_number == self.confirm_account_number
    }
}

/// Contact sub-record required on entity profiles
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizedRepresentative {
    pub name: String,
    pub email: String,
    pub contact_number: String,
}

/// Staffing and office details of a provider entity.
/// Counts are optional so that an untouched form stays incomplete, while an
/// explicit zero counts as an answer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceInfra {
    pub number_of_partners: Option<u32>,
    pub number_of_professional_staff: Option<u32>,
    pub number_of_support_staff: Option<u32>,
    pub office_locations: String,
}

/// Profile record accumulated by the onboarding wizard.
///
/// The shape is a superset over all role variants; which fields are
/// mandatory for a given role is decided by `fields::mandatory_fields`.
/// The record is owned exclusively by the active wizard session and is
/// persisted at each "save and next" step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    pub name: String,
    pub email: String,
    pub contact_number: String,
    pub address: Address,
    pub identity_document: IdentityDocument,
    pub banking_details: Vec<BankingDetail>,
    pub entity_name: String,
    pub designation: String,
    pub years_of_experience: Option<u32>,
    pub authorized_representative: AuthorizedRepresentative,
    pub resource_infra: ResourceInfra,
    pub services_offered: Vec<String>,
}

impl ProfileRecord {
    /// New record with a single empty banking row, the shape the wizard edits
    pub fn new_for_wizard() -> Self {
        Self {
            banking_details: vec![BankingDetail::default()],
            ..Self::default()
        }
    }

    /// True when any banking row has a re-entered account number that does
    /// not match the original
    pub fn account_numbers_mismatch(&self) -> bool {
        self.banking_details
            .iter()
            .any(|b| !b.account_numbers_match())
    }

    /// True when an identity-proof file has been uploaded
    pub fn has_identity_proof_file(&self) -> bool {
        self.identity_document
            .uploaded_file
            .as_deref()
            .map(|f| !f.trim().is_empty())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatch_only_when_both_entered() {
        let mut record = ProfileRecord::new_for_wizard();
        assert!(!record.account_numbers_mismatch());

        record.banking_details[0].account_number = "123".into();
        assert!(!record.account_numbers_mismatch());

        record.banking_details[0].confirm_account_number = "456".into();
        assert!(record.account_numbers_mismatch());

        record.banking_details[0].confirm_account_number = "123".into();
        assert!(!record.account_numbers_mismatch());
    }

    #[test]
    fn test_identity_proof_presence() {
        let mut record = ProfileRecord::default();
        assert!(!record.has_identity_proof_file());
        record.identity_document.uploaded_file = Some("  ".into());
        assert!(!record.has_identity_proof_file());
        record.identity_document.uploaded_file = Some("pan-card.pdf".into());
        assert!(record.has_identity_proof_file());
    }

    #[test]
    fn test_wire_shape_is_camel_case() {
        let record = ProfileRecord::new_for_wizard();
        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("contactNumber").is_some());
        assert!(value["address"].get("pinCode").is_some());
        assert!(value["identityDocument"].get("type").is_some());
        assert!(value["bankingDetails"][0].get("ifscCode").is_some());
    }
}
