use serde::{Deserialize, Serialize};

/// Identity document types accepted by onboarding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentType {
    Pan,
    Aadhaar,
    Gstin,
    IbbiRegistration,
}

impl DocumentType {
    /// Wire code of the document type
    pub fn code(&self) -> &'static str {
        match self {
            DocumentType::Pan => "PAN",
            DocumentType::Aadhaar => "AADHAAR",
            DocumentType::Gstin => "GSTIN",
            DocumentType::IbbiRegistration => "IBBI_REGISTRATION",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            DocumentType::Pan => "PAN Card",
            DocumentType::Aadhaar => "Aadhaar Card",
            DocumentType::Gstin => "GSTIN Certificate",
            DocumentType::IbbiRegistration => "IBBI Registration Certificate",
        }
    }

    /// All document types
    pub fn all() -> Vec<DocumentType> {
        vec![
            DocumentType::Pan,
            DocumentType::Aadhaar,
            DocumentType::Gstin,
            DocumentType::IbbiRegistration,
        ]
    }

    /// Parse from the wire code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "PAN" => Some(DocumentType::Pan),
            "AADHAAR" => Some(DocumentType::Aadhaar),
            "GSTIN" => Some(DocumentType::Gstin),
            "IBBI_REGISTRATION" => Some(DocumentType::IbbiRegistration),
            _ => None,
        }
    }
}

/// Result of one document verification call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationOutcome {
    pub is_valid: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl VerificationOutcome {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    pub fn rejected(errors: Vec<String>) -> Self {
        Self {
            is_valid: false,
            errors,
        }
    }
}

/// State of the verification sub-flow for one document.
///
/// `Rejected` is a terminal display state; it blocks the permanent-id gate
/// but never other sections of the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VerificationStatus {
    #[default]
    NotStarted,
    Pending,
    Verified,
    Rejected,
}

impl VerificationStatus {
    pub fn badge_label(&self) -> &'static str {
        match self {
            VerificationStatus::NotStarted => "Not verified",
            VerificationStatus::Pending => "Verifying…",
            VerificationStatus::Verified => "Verified",
            VerificationStatus::Rejected => "Rejected",
        }
    }
}
