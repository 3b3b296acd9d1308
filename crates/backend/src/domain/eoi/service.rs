use contracts::eoi::aggregate::{EoiInvitation, EoiInvitationDto};
use uuid::Uuid;

use super::repository;
use crate::shared::error::{ServiceError, ServiceResult};

pub async fn create(dto: EoiInvitationDto) -> ServiceResult<Uuid> {
    let code = dto
        .code
        .clone()
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| format!("EOI-{}", Uuid::new_v4()));
    let mut aggregate = EoiInvitation::new_for_insert(
        code,
        dto.description.clone(),
        dto.corporate_debtor.clone(),
        dto.process_type,
        dto.issue_date,
        dto.comment.clone(),
    );
    aggregate.eligibility_criteria = dto.eligibility_criteria;
    aggregate.contact_email = dto.contact_email;
    aggregate.coc_members = dto.coc_members;

    aggregate.validate().map_err(ServiceError::Validation)?;
    aggregate.before_write();

    repository::insert(&aggregate)
        .await
        .map_err(ServiceError::Internal)
}

pub async fn update(dto: EoiInvitationDto) -> ServiceResult<()> {
    let id = dto
        .id
        .as_ref()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| ServiceError::validation("Invalid ID"))?;

    let mut aggregate = repository::get_by_id(id)
        .await
        .map_err(ServiceError::Internal)?
        .ok_or_else(|| ServiceError::not_found("Invitation not found"))?;

    aggregate.update(&dto);

    aggregate.validate().map_err(ServiceError::Validation)?;
    aggregate.before_write();

    repository::update(&aggregate)
        .await
        .map_err(ServiceError::Internal)
}

pub async fn delete(id: Uuid) -> ServiceResult<bool> {
    repository::soft_delete(id)
        .await
        .map_err(ServiceError::Internal)
}

pub async fn get_by_id(id: Uuid) -> ServiceResult<Option<EoiInvitation>> {
    repository::get_by_id(id).await.map_err(ServiceError::Internal)
}

pub async fn list_all() -> ServiceResult<Vec<EoiInvitation>> {
    repository::list_all().await.map_err(ServiceError::Internal)
}

/// COC contact list of an invitation as a CSV download
pub async fn export_coc_csv(id: Uuid) -> ServiceResult<String> {
    let aggregate = repository::get_by_id(id)
        .await
        .map_err(ServiceError::Internal)?
        .ok_or_else(|| ServiceError::not_found("Invitation not found"))?;

    render_coc_csv(&aggregate).map_err(ServiceError::Internal)
}

fn render_coc_csv(aggregate: &EoiInvitation) -> anyhow::Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["Name", "Organisation", "Email", "Voting share (%)"])?;
    for member in &aggregate.coc_members {
        writer.write_record([
            member.name.as_str(),
            member.organisation.as_str(),
            member.email.as_str(),
            &format!("{:.2}", member.voting_share),
        ])?;
    }
    let bytes = writer.into_inner()?;
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::eoi::aggregate::{CocMember, ProcessType};

    #[test]
    fn test_coc_csv_rendering() {
        let mut aggregate = EoiInvitation::new_for_insert(
            "EOI-1".into(),
            "Test".into(),
            "Acme Ltd".into(),
            ProcessType::Cirp,
            NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            None,
        );
        aggregate.coc_members.push(CocMember {
            name: "State Bank".into(),
            organisation: "SBI".into(),
            email: "resolution@sbi.example".into(),
            voting_share: 62.5,
        });

        let csv = render_coc_csv(&aggregate).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("Name,Organisation,Email,Voting share (%)")
        );
        assert_eq!(
            lines.next(),
            Some("State Bank,SBI,resolution@sbi.example,62.50")
        );
    }
}
