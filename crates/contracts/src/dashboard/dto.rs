//! Dashboard aggregate DTOs.
//!
//! Everything here is externally supplied data the dashboards render;
//! status strings on the summaries feed the badge vocabulary in `status`.

use serde::{Deserialize, Serialize};

use crate::system::roles::UserRole;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRequestStats {
    pub total: u32,
    pub open: u32,
    pub in_progress: u32,
    pub closed: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkOrderStats {
    pub total: u32,
    pub open: u32,
    pub in_progress: u32,
    pub review: u32,
    pub closed: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub service_requests: ServiceRequestStats,
    pub work_orders: WorkOrderStats,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationItem {
    pub id: String,
    pub title: String,
    pub message: String,
    pub created_at: String,
    pub is_read: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkOrderSummary {
    pub id: String,
    pub title: String,
    /// The other party of the order (provider for seekers, seeker for providers)
    pub counterpart_name: String,
    pub status: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitySummary {
    pub id: String,
    pub name: String,
    pub member_role: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionSummary {
    pub plan: String,
    pub status: String,
    pub valid_till: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityItem {
    pub id: String,
    pub description: String,
    pub occurred_at: String,
}

/// Completion summary shown on the dashboard header card
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionSummary {
    pub overall_percentage: u8,
    pub missing_count: usize,
    pub eligible_for_permanent_id: bool,
}

/// The aggregate a dashboard renders after its fan-out load completes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub stats: DashboardStats,
    pub notifications: Vec<NotificationItem>,
    pub work_orders: Vec<WorkOrderSummary>,
    pub entities: Vec<EntitySummary>,
    pub subscriptions: Vec<SubscriptionSummary>,
    pub recent_activity: Vec<ActivityItem>,
    pub profile_completion: CompletionSummary,
}

/// Sections a dashboard variant can render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardSection {
    ProfileCompletion,
    Stats,
    WorkOrders,
    Notifications,
    Entities,
    Subscriptions,
    RecentActivity,
}

const INDIVIDUAL_SECTIONS: [DashboardSection; 6] = [
    DashboardSection::ProfileCompletion,
    DashboardSection::Stats,
    DashboardSection::WorkOrders,
    DashboardSection::Notifications,
    DashboardSection::Subscriptions,
    DashboardSection::RecentActivity,
];

const ENTITY_ADMIN_SECTIONS: [DashboardSection; 7] = [
    DashboardSection::ProfileCompletion,
    DashboardSection::Stats,
    DashboardSection::WorkOrders,
    DashboardSection::Notifications,
    DashboardSection::Entities,
    DashboardSection::Subscriptions,
    DashboardSection::RecentActivity,
];

const TEAM_MEMBER_SECTIONS: [DashboardSection; 5] = [
    DashboardSection::ProfileCompletion,
    DashboardSection::Stats,
    DashboardSection::WorkOrders,
    DashboardSection::Notifications,
    DashboardSection::RecentActivity,
];

/// Which sections a role's dashboard renders, in order. Entity admins are
/// the only roles that see the team/entities block; team members have no
/// subscription of their own.
pub fn visible_sections(role: UserRole) -> &'static [DashboardSection] {
    match role {
        UserRole::SeekerIndividualPartner | UserRole::ProviderIndividualPartner => {
            &INDIVIDUAL_SECTIONS
        }
        UserRole::SeekerEntityAdmin | UserRole::ProviderEntityAdmin => &ENTITY_ADMIN_SECTIONS,
        UserRole::SeekerTeamMember | UserRole::ProviderTeamMember => &TEAM_MEMBER_SECTIONS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entities_section_is_entity_admin_only() {
        for role in UserRole::all() {
            let has_entities = visible_sections(role)
                .iter()
                .any(|s| *s == DashboardSection::Entities);
            assert_eq!(has_entities, role.is_entity_admin());
        }
    }

    #[test]
    fn test_every_role_sees_completion_and_stats() {
        for role in UserRole::all() {
            let sections = visible_sections(role);
            assert!(sections.contains(&DashboardSection::ProfileCompletion));
            assert!(sections.contains(&DashboardSection::Stats));
        }
    }
}
