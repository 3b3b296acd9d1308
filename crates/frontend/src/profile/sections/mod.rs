mod address;
mod banking;
mod identity;
mod infrastructure;
mod personal;
mod representative;
mod services;

use leptos::prelude::*;

use super::view_model::ProfileWizardViewModel;

/// Dispatch a wizard section id to its form component
pub fn section_view(id: &str, vm: ProfileWizardViewModel) -> AnyView {
    match id {
        "personal" => view! { <personal::PersonalSection vm=vm /> }.into_any(),
        "address" => view! { <address::AddressSection vm=vm /> }.into_any(),
        "identity" => view! { <identity::IdentitySection vm=vm /> }.into_any(),
        "representative" => view! { <representative::RepresentativeSection vm=vm /> }.into_any(),
        "infrastructure" => view! { <infrastructure::InfrastructureSection vm=vm /> }.into_any(),
        "services" => view! { <services::ServicesSection vm=vm /> }.into_any(),
        "banking" => view! { <banking::BankingSection vm=vm /> }.into_any(),
        _ => view! { <div class="error">"Unknown section"</div> }.into_any(),
    }
}
