use leptos::prelude::*;

use crate::profile::view_model::ProfileWizardViewModel;

/// Service catalog offered on the marketplace
const SERVICE_CATALOG: &[&str] = &[
    "CIRP Support",
    "Liquidation Support",
    "Valuation",
    "Claims Management",
    "Avoidance Transaction Review",
    "Compliance & Reporting",
];

/// Services offered by a provider; at least one selection counts the field
/// as filled for completion.
#[component]
pub fn ServicesSection(vm: ProfileWizardViewModel) -> impl IntoView {
    view! {
        <div class="wizard-section-form">
            <p class="wizard-section-form__hint">"Select every service your practice offers."</p>
            <div class="service-catalog">
                {SERVICE_CATALOG
                    .iter()
                    .map(|service| {
                        let name = service.to_string();
                        let name_for_check = name.clone();
                        let checked = move || {
                            vm.record
                                .get()
                                .services_offered
                                .iter()
                                .any(|s| s == &name_for_check)
                        };
                        view! {
                            <label class="service-catalog__item">
                                <input
                                    type="checkbox"
                                    prop:checked=checked
                                    on:change=move |_| {
                                        let name = name.clone();
                                        vm.update_record(move |r| {
                                            if let Some(pos) =
                                                r.services_offered.iter().position(|s| s == &name)
                                            {
                                                r.services_offered.remove(pos);
                                            } else {
                                                r.services_offered.push(name);
                                            }
                                        });
                                    }
                                />
                                {*service}
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
