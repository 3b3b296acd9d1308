use chrono::Utc;
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use contracts::eoi::aggregate::{CocMember, EoiInvitation, EoiInvitationId, ProcessType};
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "eoi_invitations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub code: String,
    pub description: String,
    pub comment: Option<String>,
    pub corporate_debtor: String,
    pub process_type: String,
    pub issue_date: String,
    pub eligibility_criteria: String,
    pub contact_email: String,
    pub coc_members: String,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for EoiInvitation {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());
        let coc_members: Vec<CocMember> = serde_json::from_str(&m.coc_members).unwrap_or_default();

        EoiInvitation {
            base: BaseAggregate::with_metadata(
                EoiInvitationId(uuid),
                m.code,
                m.description,
                m.comment.clone(),
                metadata,
            ),
            corporate_debtor: m.corporate_debtor,
            process_type: ProcessType::from_code(&m.process_type).unwrap_or(ProcessType::Cirp),
            issue_date: m
                .issue_date
                .parse()
                .unwrap_or_else(|_| Utc::now().date_naive()),
            eligibility_criteria: m.eligibility_criteria,
            contact_email: m.contact_email,
            coc_members,
        }
    }
}

fn to_active(aggregate: &EoiInvitation, keep_created_at: bool) -> anyhow::Result<ActiveModel> {
    let coc_members = serde_json::to_string(&aggregate.coc_members)?;
    Ok(ActiveModel {
        id: Set(aggregate.base.id.value().to_string()),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        comment: Set(aggregate.base.comment.clone()),
        corporate_debtor: Set(aggregate.corporate_debtor.clone()),
        process_type: Set(aggregate.process_type.code().to_string()),
        issue_date: Set(aggregate.issue_date.to_string()),
        eligibility_criteria: Set(aggregate.eligibility_criteria.clone()),
        contact_email: Set(aggregate.contact_email.clone()),
        coc_members: Set(coc_members),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
        created_at: if keep_created_at {
            sea_orm::ActiveValue::NotSet
        } else {
            Set(Some(aggregate.base.metadata.created_at))
        },
    })
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_all() -> anyhow::Result<Vec<EoiInvitation>> {
    let mut items: Vec<EoiInvitation> = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    // Newest issue first
    items.sort_by(|a, b| b.issue_date.cmp(&a.issue_date));
    Ok(items)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<EoiInvitation>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(aggregate: &EoiInvitation) -> anyhow::Result<Uuid> {
    let uuid = aggregate.base.id.value();
    to_active(aggregate, false)?.insert(conn()).await?;
    Ok(uuid)
}

pub async fn update(aggregate: &EoiInvitation) -> anyhow::Result<()> {
    to_active(aggregate, true)?.update(conn()).await?;
    Ok(())
}

pub async fn soft_delete(id: Uuid) -> anyhow::Result<bool> {
    use sea_orm::sea_query::Expr;
    let result = Entity::update_many()
        .col_expr(Column::IsDeleted, Expr::value(true))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(Column::Id.eq(id.to_string()))
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
}
