use leptos::prelude::*;

use crate::profile::view_model::ProfileWizardViewModel;
use crate::shared::components::ui::TextInput;

#[component]
pub fn AddressSection(vm: ProfileWizardViewModel) -> impl IntoView {
    view! {
        <div class="wizard-section-form">
            <TextInput
                label="Street"
                required=true
                value=Signal::derive(move || vm.record.get().address.street)
                on_input=Callback::new(move |v| vm.update_record(|r| r.address.street = v))
                placeholder="Street / building"
            />
            <TextInput
                label="City"
                required=true
                value=Signal::derive(move || vm.record.get().address.city)
                on_input=Callback::new(move |v| vm.update_record(|r| r.address.city = v))
            />
            <TextInput
                label="State"
                required=true
                value=Signal::derive(move || vm.record.get().address.state)
                on_input=Callback::new(move |v| vm.update_record(|r| r.address.state = v))
            />
            <TextInput
                label="PIN code"
                required=true
                value=Signal::derive(move || vm.record.get().address.pin_code)
                on_input=Callback::new(move |v| vm.update_record(|r| r.address.pin_code = v))
                placeholder="6-digit PIN"
            />
        </div>
    }
}
