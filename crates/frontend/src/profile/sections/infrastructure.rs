use leptos::prelude::*;

use crate::profile::view_model::ProfileWizardViewModel;
use crate::shared::components::ui::TextInput;

fn count_text(value: Option<u32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Staffing and office details of a provider entity. An explicit zero is a
/// valid answer; leaving a count blank keeps the field unfilled.
#[component]
pub fn InfrastructureSection(vm: ProfileWizardViewModel) -> impl IntoView {
    view! {
        <div class="wizard-section-form">
            <TextInput
                label="Number of partners"
                required=true
                input_type="number"
                value=Signal::derive(move || {
                    count_text(vm.record.get().resource_infra.number_of_partners)
                })
                on_input=Callback::new(move |v: String| {
                    vm.update_record(|r| {
                        r.resource_infra.number_of_partners = v.trim().parse().ok()
                    })
                })
            />
            <TextInput
                label="Number of professional staff"
                required=true
                input_type="number"
                value=Signal::derive(move || {
                    count_text(vm.record.get().resource_infra.number_of_professional_staff)
                })
                on_input=Callback::new(move |v: String| {
                    vm.update_record(|r| {
                        r.resource_infra.number_of_professional_staff = v.trim().parse().ok()
                    })
                })
            />
            <TextInput
                label="Number of support staff"
                required=true
                input_type="number"
                value=Signal::derive(move || {
                    count_text(vm.record.get().resource_infra.number_of_support_staff)
                })
                on_input=Callback::new(move |v: String| {
                    vm.update_record(|r| {
                        r.resource_infra.number_of_support_staff = v.trim().parse().ok()
                    })
                })
            />
            <TextInput
                label="Office locations"
                value=Signal::derive(move || vm.record.get().resource_infra.office_locations)
                on_input=Callback::new(move |v| {
                    vm.update_record(|r| r.resource_infra.office_locations = v)
                })
                placeholder="Cities, comma separated"
            />
        </div>
    }
}
