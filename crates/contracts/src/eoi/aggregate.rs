use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{AggregateId, BaseAggregate};
use crate::eoi::timeline::{compute_timeline, EoiTimeline};
use chrono::NaiveDate;

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of an EOI invitation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EoiInvitationId(pub Uuid);

impl EoiInvitationId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for EoiInvitationId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(EoiInvitationId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Value objects
// ============================================================================

/// Resolution process the invitation is issued under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProcessType {
    Cirp,
    Liquidation,
}

impl ProcessType {
    pub fn code(&self) -> &'static str {
        match self {
            ProcessType::Cirp => "CIRP",
            ProcessType::Liquidation => "LIQUIDATION",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ProcessType::Cirp => "Corporate Insolvency Resolution Process",
            ProcessType::Liquidation => "Liquidation",
        }
    }

    pub fn all() -> Vec<ProcessType> {
        vec![ProcessType::Cirp, ProcessType::Liquidation]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "CIRP" => Some(ProcessType::Cirp),
            "LIQUIDATION" => Some(ProcessType::Liquidation),
            _ => None,
        }
    }
}

/// One Committee of Creditors contact attached to the invitation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CocMember {
    pub name: String,
    pub organisation: String,
    pub email: String,
    pub voting_share: f64,
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Expression of Interest invitation built by the multi-tab form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EoiInvitation {
    #[serde(flatten)]
    pub base: BaseAggregate<EoiInvitationId>,

    #[serde(rename = "corporateDebtor")]
    pub corporate_debtor: String,

    #[serde(rename = "processType")]
    pub process_type: ProcessType,

    #[serde(rename = "issueDate")]
    pub issue_date: NaiveDate,

    #[serde(rename = "eligibilityCriteria")]
    pub eligibility_criteria: String,

    #[serde(rename = "contactEmail")]
    pub contact_email: String,

    #[serde(rename = "cocMembers")]
    pub coc_members: Vec<CocMember>,
}

impl EoiInvitation {
    /// Create a new invitation for insertion
    pub fn new_for_insert(
        code: String,
        description: String,
        corporate_debtor: String,
        process_type: ProcessType,
        issue_date: NaiveDate,
        comment: Option<String>,
    ) -> Self {
        let mut base = BaseAggregate::new(EoiInvitationId::new_v4(), code, description);
        base.comment = comment;

        Self {
            base,
            corporate_debtor,
            process_type,
            issue_date,
            eligibility_criteria: String::new(),
            contact_email: String::new(),
            coc_members: Vec::new(),
        }
    }

    /// Get the ID as a string
    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Derived key-date schedule of this invitation
    pub fn timeline(&self) -> EoiTimeline {
        compute_timeline(self.issue_date)
    }

    /// Total voting share of the attached COC members
    pub fn total_voting_share(&self) -> f64 {
        self.coc_members.iter().map(|m| m.voting_share).sum()
    }

    /// Update data from the DTO
    pub fn update(&mut self, dto: &EoiInvitationDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.corporate_debtor = dto.corporate_debtor.clone();
        self.process_type = dto.process_type;
        self.issue_date = dto.issue_date;
        self.eligibility_criteria = dto.eligibility_criteria.clone();
        self.contact_email = dto.contact_email.clone();
        self.coc_members = dto.coc_members.clone();
    }

    /// Validate invitation data
    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Title must not be empty".into());
        }
        if self.corporate_debtor.trim().is_empty() {
            return Err("Corporate debtor must not be empty".into());
        }
        if !self.contact_email.trim().is_empty()
            && !crate::eoi::email::is_valid_email(&self.contact_email)
        {
            return Err("Contact email is not a valid address".into());
        }
        for member in &self.coc_members {
            if member.name.trim().is_empty() {
                return Err("Every COC member needs a name".into());
            }
            if !(0.0..=100.0).contains(&member.voting_share) {
                return Err("Voting share must be between 0 and 100".into());
            }
        }
        if self.total_voting_share() > 100.0 + 1e-9 {
            return Err("Combined voting share exceeds 100%".into());
        }
        Ok(())
    }

    /// Hook before write
    pub fn before_write(&mut self) {
        self.base.touch();
    }

    /// Render the invitation as the plain-text document used for the
    /// preview tab and the outgoing email body.
    pub fn render_invitation_text(&self) -> String {
        let timeline = self.timeline();
        let mut text = String::new();
        text.push_str(&format!(
            "EXPRESSION OF INTEREST: {}\n\n",
            self.base.description
        ));
        text.push_str(&format!(
            "Invitation for expression of interest in the {} of {}.\n\n",
            self.process_type.display_name(),
            self.corporate_debtor
        ));
        text.push_str("Key dates:\n");
        text.push_str(&format!("  Issue date: {}\n", format_date(timeline.issue_date)));
        text.push_str(&format!(
            "  Last date for submission: {}\n",
            format_date(timeline.last_submission_date)
        ));
        text.push_str(&format!(
            "  Provisional list of applicants: {}\n",
            format_date(timeline.provisional_list_date)
        ));
        text.push_str(&format!(
            "  Objections close: {}\n",
            format_date(timeline.objection_deadline)
        ));
        text.push_str(&format!(
            "  Final list of applicants: {}\n",
            format_date(timeline.final_list_date)
        ));
        if !self.eligibility_criteria.trim().is_empty() {
            text.push_str(&format!(
                "\nEligibility criteria:\n{}\n",
                self.eligibility_criteria
            ));
        }
        if !self.contact_email.trim().is_empty() {
            text.push_str(&format!("\nSubmissions to: {}\n", self.contact_email));
        }
        text
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO for creating/updating an EOI invitation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EoiInvitationDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,

    #[serde(rename = "corporateDebtor")]
    pub corporate_debtor: String,

    #[serde(rename = "processType")]
    pub process_type: ProcessType,

    #[serde(rename = "issueDate")]
    pub issue_date: NaiveDate,

    #[serde(rename = "eligibilityCriteria")]
    pub eligibility_criteria: String,

    #[serde(rename = "contactEmail")]
    pub contact_email: String,

    #[serde(rename = "cocMembers")]
    pub coc_members: Vec<CocMember>,

    pub comment: Option<String>,
}

impl Default for EoiInvitationDto {
    fn default() -> Self {
        Self {
            id: None,
            code: None,
            description: String::new(),
            corporate_debtor: String::new(),
            process_type: ProcessType::Cirp,
            issue_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            eligibility_criteria: String::new(),
            contact_email: String::new(),
            coc_members: Vec::new(),
            comment: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invitation() -> EoiInvitation {
        EoiInvitation::new_for_insert(
            "EOI-2026-001".into(),
            "EOI for resolution of Acme Industries".into(),
            "Acme Industries Ltd".into(),
            ProcessType::Cirp,
            NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
            None,
        )
    }

    #[test]
    fn test_validate_rejects_blank_debtor() {
        let mut inv = invitation();
        inv.corporate_debtor = "  ".into();
        assert!(inv.validate().is_err());
    }

    #[test]
    fn test_validate_caps_voting_share() {
        let mut inv = invitation();
        inv.coc_members.push(CocMember {
            name: "State Bank".into(),
            voting_share: 60.0,
            ..CocMember::default()
        });
        inv.coc_members.push(CocMember {
            name: "Axis Bank".into(),
            voting_share: 45.0,
            ..CocMember::default()
        });
        assert!(inv.validate().is_err());

        inv.coc_members[1].voting_share = 40.0;
        assert!(inv.validate().is_ok());
    }

    #[test]
    fn test_rendered_text_carries_the_schedule() {
        let text = invitation().render_invitation_text();
        assert!(text.contains("Acme Industries Ltd"));
        assert!(text.contains("Last date for submission: 20/01/2026"));
        assert!(text.contains("Final list of applicants: 14/02/2026"));
    }
}
