use contracts::dashboard::dto::WorkOrderStats;
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, QuerySelect};
use serde::{Deserialize, Serialize};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "work_orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub seeker_id: String,
    pub provider_id: String,
    pub title: String,
    pub seeker_name: String,
    pub provider_name: String,
    pub status: String,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn party_condition(user_id: &str) -> Condition {
    Condition::any()
        .add(Column::SeekerId.eq(user_id))
        .add(Column::ProviderId.eq(user_id))
}

/// Status counts of the orders a user is a party to, on either side
pub async fn stats_for_user(user_id: &str) -> anyhow::Result<WorkOrderStats> {
    let rows = Entity::find()
        .filter(party_condition(user_id))
        .all(conn())
        .await?;

    let mut stats = WorkOrderStats::default();
    for row in &rows {
        stats.total += 1;
        match row.status.as_str() {
            "Open" => stats.open += 1,
            "In Progress" => stats.in_progress += 1,
            "Review" => stats.review += 1,
            "Closed" => stats.closed += 1,
            _ => {}
        }
    }
    Ok(stats)
}

/// Most recently updated orders of a user
pub async fn recent_for_user(user_id: &str, limit: u64) -> anyhow::Result<Vec<Model>> {
    let rows = Entity::find()
        .filter(party_condition(user_id))
        .order_by_desc(Column::UpdatedAt)
        .limit(limit)
        .all(conn())
        .await?;
    Ok(rows)
}
