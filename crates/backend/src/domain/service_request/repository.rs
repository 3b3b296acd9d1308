use contracts::dashboard::dto::ServiceRequestStats;
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect};
use serde::{Deserialize, Serialize};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service_requests")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub seeker_id: String,
    pub title: String,
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

/// Status counts of a seeker's requests
pub async fn stats_for_seeker(seeker_id: &str) -> anyhow::Result<ServiceRequestStats> {
    let rows = Entity::find()
        .filter(Column::SeekerId.eq(seeker_id))
        .all(conn())
        .await?;

    let mut stats = ServiceRequestStats::default();
    for row in &rows {
        stats.total += 1;
        match row.status.as_str() {
            "Open" => stats.open += 1,
            "In Progress" => stats.in_progress += 1,
            "Closed" => stats.closed += 1,
            _ => {}
        }
    }
    Ok(stats)
}

/// Most recently updated requests of a seeker
pub async fn recent_for_seeker(seeker_id: &str, limit: u64) -> anyhow::Result<Vec<Model>> {
    let rows = Entity::find()
        .filter(Column::SeekerId.eq(seeker_id))
        .order_by_desc(Column::UpdatedAt)
        .limit(limit)
        .all(conn())
        .await?;
    Ok(rows)
}
