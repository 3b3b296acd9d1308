use contracts::system::roles::{dashboard_route, DashboardRoute};
use leptos::prelude::*;

use super::provider::ProviderDashboard;
use super::seeker::SeekerDashboard;
use crate::system::auth::context::use_auth;

/// Dashboard entry point: selects exactly one rendering branch from the
/// session role. Absent sessions and roles outside the seeker/provider
/// partition land on terminal fallback views, never on an error.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        {move || {
            let state = auth_state.get();
            let route = if state.user_info.is_some() && state.role().is_none() {
                // Authenticated account whose role code we do not recognize
                DashboardRoute::AccessRestricted
            } else {
                dashboard_route(state.role())
            };
            match route {
                DashboardRoute::AuthenticationRequired => view! {
                    <div class="dashboard-fallback">
                        <h2>"Authentication Required"</h2>
                        <p>"Please sign in to view your dashboard."</p>
                    </div>
                }
                .into_any(),
                DashboardRoute::AccessRestricted => view! {
                    <div class="dashboard-fallback">
                        <h2>"Access Restricted"</h2>
                        <p>"Unsupported user role. Contact support if you believe this is a mistake."</p>
                    </div>
                }
                .into_any(),
                DashboardRoute::ServiceSeeker => view! { <SeekerDashboard /> }.into_any(),
                DashboardRoute::ServiceProvider => view! { <ProviderDashboard /> }.into_any(),
            }
        }}
    }
}
