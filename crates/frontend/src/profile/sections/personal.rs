use contracts::system::roles::UserRole;
use leptos::prelude::*;

use crate::profile::view_model::ProfileWizardViewModel;
use crate::shared::components::ui::TextInput;

/// Personal details. Entity admins additionally name their entity, provider
/// team members their designation, individual providers their experience.
#[component]
pub fn PersonalSection(vm: ProfileWizardViewModel) -> impl IntoView {
    let role = vm.role;

    view! {
        <div class="wizard-section-form">
            <TextInput
                label="Name"
                required=true
                value=Signal::derive(move || vm.record.get().name)
                on_input=Callback::new(move |v| vm.update_record(|r| r.name = v))
                placeholder="Full name"
            />
            <TextInput
                label="Email"
                required=true
                input_type="email"
                value=Signal::derive(move || vm.record.get().email)
                on_input=Callback::new(move |v| vm.update_record(|r| r.email = v))
                placeholder="name@example.com"
            />
            <TextInput
                label="Contact number"
                required=true
                input_type="tel"
                value=Signal::derive(move || vm.record.get().contact_number)
                on_input=Callback::new(move |v| vm.update_record(|r| r.contact_number = v))
                placeholder="10-digit mobile number"
            />

            <Show when=move || role.is_entity_admin()>
                <TextInput
                    label="Entity name"
                    required=true
                    value=Signal::derive(move || vm.record.get().entity_name)
                    on_input=Callback::new(move |v| vm.update_record(|r| r.entity_name = v))
                    placeholder="Registered entity name"
                />
            </Show>

            <Show when=move || role == UserRole::ProviderTeamMember>
                <TextInput
                    label="Designation"
                    required=true
                    value=Signal::derive(move || vm.record.get().designation)
                    on_input=Callback::new(move |v| vm.update_record(|r| r.designation = v))
                    placeholder="e.g. Associate, Analyst"
                />
            </Show>

            <Show when=move || role == UserRole::ProviderIndividualPartner>
                <TextInput
                    label="Years of experience"
                    required=true
                    input_type="number"
                    value=Signal::derive(move || {
                        vm.record
                            .get()
                            .years_of_experience
                            .map(|y| y.to_string())
                            .unwrap_or_default()
                    })
                    on_input=Callback::new(move |v: String| {
                        vm.update_record(|r| r.years_of_experience = v.trim().parse().ok())
                    })
                    placeholder="e.g. 12"
                />
            </Show>
        </div>
    }
}
