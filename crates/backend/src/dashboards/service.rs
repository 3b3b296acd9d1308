//! Dashboard content assembly.
//!
//! The two stat sources are independent and fetched concurrently; the
//! response is only assembled once both resolve. Everything downstream
//! (notifications, team, activity) depends on data already in hand.

use chrono::{Duration, Utc};
use contracts::dashboard::dto::{
    CompletionSummary, DashboardData, DashboardStats, EntitySummary, SubscriptionSummary,
};
use contracts::system::roles::UserRole;

use crate::domain::{notification, profile, service_request, work_order};
use crate::shared::error::{ServiceError, ServiceResult};

const NOTIFICATION_LIMIT: u64 = 10;
const RECENT_LIMIT: u64 = 5;

pub async fn get_dashboard_data(user_id: &str, role: UserRole) -> ServiceResult<DashboardData> {
    // Independent fetches fan out, the join is the "loaded" barrier.
    let (service_requests, work_orders_stats) = tokio::join!(
        service_request::service::get_stats(user_id),
        work_order::service::get_stats(user_id),
    );
    let stats = DashboardStats {
        service_requests: service_requests.map_err(ServiceError::Internal)?,
        work_orders: work_orders_stats.map_err(ServiceError::Internal)?,
    };

    let notifications = notification::repository::list_for_user(user_id, NOTIFICATION_LIMIT)
        .await
        .map_err(ServiceError::Internal)?;

    let work_orders = work_order::service::recent_orders(user_id, RECENT_LIMIT)
        .await
        .map_err(ServiceError::Internal)?;

    let entities = if role.is_entity_admin() {
        team_entities(user_id).await?
    } else {
        Vec::new()
    };

    let recent_activity = if role.is_service_seeker() {
        service_request::service::recent_activity(user_id, RECENT_LIMIT)
            .await
            .map_err(ServiceError::Internal)?
    } else {
        work_orders
            .iter()
            .map(|o| contracts::dashboard::dto::ActivityItem {
                id: o.id.clone(),
                description: format!("Work order \"{}\" is {}", o.title, o.status),
                occurred_at: o.updated_at.clone(),
            })
            .collect()
    };

    let profile_completion = completion_summary(user_id, role).await?;

    Ok(DashboardData {
        stats,
        notifications,
        work_orders,
        entities,
        subscriptions: vec![subscription_for(role)],
        recent_activity,
        profile_completion,
    })
}

/// Team members visible to an entity admin, with a status derived from
/// each member's onboarding progress
async fn team_entities(admin_user_id: &str) -> ServiceResult<Vec<EntitySummary>> {
    let profiles = profile::repository::list_for_admin(admin_user_id)
        .await
        .map_err(ServiceError::Internal)?;

    Ok(profiles
        .into_iter()
        .map(|stored| {
            let (name, status) = match stored.role {
                Some(role) => {
                    let completion =
                        contracts::profile::completion::calculate_completion(&stored.record, role);
                    let status = if completion.is_complete {
                        "Active"
                    } else {
                        "In Progress"
                    };
                    (stored.record.name.clone(), status)
                }
                None => (stored.record.name.clone(), "Inactive"),
            };
            EntitySummary {
                id: stored.user_id,
                name,
                member_role: stored
                    .role
                    .map(|r| r.display_name().to_string())
                    .unwrap_or_default(),
                status: status.to_string(),
            }
        })
        .collect())
}

async fn completion_summary(user_id: &str, role: UserRole) -> ServiceResult<CompletionSummary> {
    let response = profile::service::get_profile(user_id, role).await?;
    Ok(CompletionSummary {
        overall_percentage: response.completion_status.overall_percentage,
        missing_count: response.completion_status.missing_mandatory_fields.len(),
        eligible_for_permanent_id: response.eligible_for_permanent_id,
    })
}

fn subscription_for(role: UserRole) -> SubscriptionSummary {
    let plan = if role.is_service_provider() {
        "Provider Professional"
    } else {
        "Seeker Standard"
    };
    SubscriptionSummary {
        plan: plan.to_string(),
        status: "Active".to_string(),
        valid_till: (Utc::now() + Duration::days(365)).format("%Y-%m-%d").to_string(),
    }
}
