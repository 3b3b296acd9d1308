use contracts::dashboard::dto::{ActivityItem, ServiceRequestStats};

use super::repository;

pub async fn get_stats(user_id: &str) -> anyhow::Result<ServiceRequestStats> {
    repository::stats_for_seeker(user_id).await
}

/// Recent request updates as dashboard activity lines
pub async fn recent_activity(user_id: &str, limit: u64) -> anyhow::Result<Vec<ActivityItem>> {
    let rows = repository::recent_for_seeker(user_id, limit).await?;
    Ok(rows
        .into_iter()
        .map(|r| ActivityItem {
            id: r.id,
            description: format!("Service request \"{}\" is {}", r.title, r.status),
            occurred_at: r
                .updated_at
                .map(|t| t.to_rfc3339())
                .unwrap_or_default(),
        })
        .collect())
}
