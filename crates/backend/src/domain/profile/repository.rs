use chrono::Utc;
use contracts::profile::record::ProfileRecord;
use contracts::system::roles::UserRole;
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, Set};

use crate::shared::data::db::get_connection;

/// One stored profile per user. The record itself is a JSON column: the
/// shape varies by role variant and only the pure engine interprets it.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "profile_records")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,
    pub role: String,
    pub data: String,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub struct StoredProfile {
    pub user_id: String,
    pub role: Option<UserRole>,
    pub record: ProfileRecord,
}

impl From<Model> for StoredProfile {
    fn from(m: Model) -> Self {
        let record = serde_json::from_str(&m.data).unwrap_or_default();
        StoredProfile {
            user_id: m.user_id,
            role: UserRole::from_code(&m.role),
            record,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn get_by_user_id(user_id: &str) -> anyhow::Result<Option<StoredProfile>> {
    let result = Entity::find_by_id(user_id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

/// Insert or update the stored record of a user
pub async fn upsert(user_id: &str, role: UserRole, record: &ProfileRecord) -> anyhow::Result<()> {
    let data = serde_json::to_string(record)?;
    let now = Utc::now();

    let existing = Entity::find_by_id(user_id.to_string()).one(conn()).await?;
    match existing {
        Some(model) => {
            let version = model.version + 1;
            let active = ActiveModel {
                user_id: Set(user_id.to_string()),
                role: Set(role.code().to_string()),
                data: Set(data),
                updated_at: Set(Some(now)),
                version: Set(version),
                created_at: sea_orm::ActiveValue::NotSet,
            };
            active.update(conn()).await?;
        }
        None => {
            let active = ActiveModel {
                user_id: Set(user_id.to_string()),
                role: Set(role.code().to_string()),
                data: Set(data),
                created_at: Set(Some(now)),
                updated_at: Set(Some(now)),
                version: Set(0),
            };
            active.insert(conn()).await?;
        }
    }

    Ok(())
}

/// Profiles created by team members of an entity admin, for the dashboard's
/// team block. Membership is tracked through `sys_users.created_by`.
pub async fn list_for_admin(admin_user_id: &str) -> anyhow::Result<Vec<StoredProfile>> {
    use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

    let rows = conn()
        .query_all(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT p.user_id, p.role, p.data, p.created_at, p.updated_at, p.version
             FROM profile_records p
             JOIN sys_users u ON u.id = p.user_id
             WHERE u.created_by = ?",
            [admin_user_id.into()],
        ))
        .await?;

    let mut profiles = Vec::with_capacity(rows.len());
    for row in rows {
        let model = Model {
            user_id: row.try_get("", "user_id")?,
            role: row.try_get("", "role")?,
            data: row.try_get("", "data")?,
            created_at: None,
            updated_at: None,
            version: row.try_get("", "version")?,
        };
        profiles.push(model.into());
    }
    Ok(profiles)
}
