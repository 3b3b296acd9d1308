use contracts::dashboard::dto::{WorkOrderStats, WorkOrderSummary};

use super::repository;

pub async fn get_stats(user_id: &str) -> anyhow::Result<WorkOrderStats> {
    repository::stats_for_user(user_id).await
}

/// Recent orders with the counterpart resolved for the viewing side
pub async fn recent_orders(user_id: &str, limit: u64) -> anyhow::Result<Vec<WorkOrderSummary>> {
    let rows = repository::recent_for_user(user_id, limit).await?;
    Ok(rows
        .into_iter()
        .map(|r| {
            let counterpart_name = if r.seeker_id == user_id {
                r.provider_name
            } else {
                r.seeker_name
            };
            WorkOrderSummary {
                id: r.id,
                title: r.title,
                counterpart_name,
                status: r.status,
                updated_at: r
                    .updated_at
                    .map(|t| t.to_rfc3339())
                    .unwrap_or_default(),
            }
        })
        .collect())
}
