use contracts::dashboard::dto::{visible_sections, DashboardData, DashboardSection};
use contracts::system::roles::UserRole;
use leptos::prelude::*;

use super::sections::{
    ActivitySection, CompletionCard, EntitiesSection, NotificationsSection, SubscriptionsSection,
    WorkOrdersSection,
};
use super::view_model::DashboardViewModel;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::ui::Button;
use crate::system::auth::context::use_auth;

/// Dashboard variant for the service-seeker roles
#[component]
pub fn SeekerDashboard() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let vm = DashboardViewModel::new();
    vm.load();

    view! {
        <div class="dashboard seeker-dashboard">
            <PageHeader
                title="Service Seeker Dashboard"
                subtitle="Your requests, engagements and team at a glance"
            />

            {move || vm.error.get().map(|e| view! {
                <div class="error-banner">
                    {e}
                    <Button variant="secondary" size="sm" on_click=Callback::new(move |_| vm.load())>
                        "Retry"
                    </Button>
                </div>
            })}

            {move || {
                if vm.is_loading.get() && vm.data.get().is_none() {
                    return view! { <div class="loading-placeholder">"Loading dashboard…"</div> }
                        .into_any();
                }
                match vm.data.get() {
                    None => view! { <div></div> }.into_any(),
                    Some(data) => {
                        let role = auth_state
                            .get_untracked()
                            .role()
                            .unwrap_or(UserRole::SeekerIndividualPartner);
                        render_sections(&data, role).into_any()
                    }
                }
            }}
        </div>
    }
}

fn render_sections(data: &DashboardData, role: UserRole) -> impl IntoView {
    visible_sections(role)
        .iter()
        .map(|section| match section {
            DashboardSection::ProfileCompletion => {
                view! { <CompletionCard completion=data.profile_completion.clone() /> }.into_any()
            }
            DashboardSection::Stats => view! { <SeekerStatsGrid data=data.clone() /> }.into_any(),
            DashboardSection::WorkOrders => {
                view! { <WorkOrdersSection orders=data.work_orders.clone() /> }.into_any()
            }
            DashboardSection::Notifications => {
                view! { <NotificationsSection items=data.notifications.clone() /> }.into_any()
            }
            DashboardSection::Entities => {
                view! { <EntitiesSection entities=data.entities.clone() /> }.into_any()
            }
            DashboardSection::Subscriptions => {
                view! { <SubscriptionsSection subscriptions=data.subscriptions.clone() /> }
                    .into_any()
            }
            DashboardSection::RecentActivity => {
                view! { <ActivitySection items=data.recent_activity.clone() /> }.into_any()
            }
        })
        .collect_view()
}

/// Seeker stat grid: service requests first, engagements second
#[component]
fn SeekerStatsGrid(data: DashboardData) -> impl IntoView {
    let requests = data.stats.service_requests;
    let orders = data.stats.work_orders;

    view! {
        <section class="dashboard-section stats-grid">
            <StatCard label="Service Requests".to_string() value=Some(requests.total) />
            <StatCard label="Open".to_string() value=Some(requests.open) accent="info" />
            <StatCard
                label="In Progress".to_string()
                value=Some(requests.in_progress)
                accent="warning"
            />
            <StatCard label="Closed".to_string() value=Some(requests.closed) accent="success" />
            <StatCard label="Work Orders".to_string() value=Some(orders.total) />
        </section>
    }
}
