use contracts::dashboard::dto::NotificationItem;
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect};
use serde::{Deserialize, Serialize};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "notifications")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for NotificationItem {
    fn from(m: Model) -> Self {
        NotificationItem {
            id: m.id,
            title: m.title,
            message: m.message,
            created_at: m.created_at.map(|t| t.to_rfc3339()).unwrap_or_default(),
            is_read: m.is_read,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// Latest notifications of a user, unread first
pub async fn list_for_user(user_id: &str, limit: u64) -> anyhow::Result<Vec<NotificationItem>> {
    let rows = Entity::find()
        .filter(Column::UserId.eq(user_id))
        .order_by_asc(Column::IsRead)
        .order_by_desc(Column::CreatedAt)
        .limit(limit)
        .all(conn())
        .await?;
    Ok(rows.into_iter().map(Into::into).collect())
}
