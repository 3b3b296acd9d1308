use leptos::prelude::*;

use crate::profile::view_model::ProfileWizardViewModel;
use crate::shared::components::ui::TextInput;

/// Authorized representative of an entity
#[component]
pub fn RepresentativeSection(vm: ProfileWizardViewModel) -> impl IntoView {
    view! {
        <div class="wizard-section-form">
            <TextInput
                label="Representative name"
                required=true
                value=Signal::derive(move || vm.record.get().authorized_representative.name)
                on_input=Callback::new(move |v| {
                    vm.update_record(|r| r.authorized_representative.name = v)
                })
            />
            <TextInput
                label="Representative email"
                required=true
                input_type="email"
                value=Signal::derive(move || vm.record.get().authorized_representative.email)
                on_input=Callback::new(move |v| {
                    vm.update_record(|r| r.authorized_representative.email = v)
                })
            />
            <TextInput
                label="Representative contact number"
                required=true
                input_type="tel"
                value=Signal::derive(move || {
                    vm.record.get().authorized_representative.contact_number
                })
                on_input=Callback::new(move |v| {
                    vm.update_record(|r| r.authorized_representative.contact_number = v)
                })
            />
        </div>
    }
}
