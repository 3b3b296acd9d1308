use contracts::profile::record::BankingDetail;
use leptos::prelude::*;

use crate::profile::view_model::ProfileWizardViewModel;
use crate::shared::components::ui::{Button, TextInput};

const ACCOUNT_TYPES: &[&str] = &["Savings", "Current"];

/// Banking details. The re-entered account number is compared inline; a
/// mismatch is a warning next to the field and never blocks saving.
#[component]
pub fn BankingSection(vm: ProfileWizardViewModel) -> impl IntoView {
    let row_count = move || vm.record.get().banking_details.len();

    view! {
        <div class="wizard-section-form">
            {move || {
                (0..row_count())
                    .map(|index| view! { <BankingRow vm=vm index=index /> })
                    .collect_view()
            }}
            <div class="banking-actions">
                <Button
                    variant="secondary"
                    size="sm"
                    on_click=Callback::new(move |_| {
                        vm.update_record(|r| r.banking_details.push(BankingDetail::default()))
                    })
                >
                    "Add account"
                </Button>
                <Show when=move || { row_count() > 1 }>
                    <Button
                        variant="ghost"
                        size="sm"
                        on_click=Callback::new(move |_| {
                            vm.update_record(|r| {
                                r.banking_details.pop();
                            })
                        })
                    >
                        "Remove last"
                    </Button>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn BankingRow(vm: ProfileWizardViewModel, index: usize) -> impl IntoView {
    let row = move || {
        vm.record
            .get()
            .banking_details
            .get(index)
            .cloned()
            .unwrap_or_default()
    };

    let mismatch_warning = move || {
        if row().account_numbers_match() {
            String::new()
        } else {
            "Account numbers do not match".to_string()
        }
    };

    let edit = move |f: fn(&mut BankingDetail, String), value: String| {
        vm.update_record(|r| {
            if let Some(detail) = r.banking_details.get_mut(index) {
                f(detail, value);
            }
        });
    };

    view! {
        <fieldset class="banking-row">
            <legend>{format!("Account {}", index + 1)}</legend>
            <TextInput
                label="Beneficiary name"
                required=true
                value=Signal::derive(move || row().beneficiary_name)
                on_input=Callback::new(move |v| edit(|d, v| d.beneficiary_name = v, v))
            />
            <TextInput
                label="Account number"
                required=true
                value=Signal::derive(move || row().account_number)
                on_input=Callback::new(move |v| edit(|d, v| d.account_number = v, v))
            />
            <TextInput
                label="Confirm account number"
                required=true
                value=Signal::derive(move || row().confirm_account_number)
                on_input=Callback::new(move |v| edit(|d, v| d.confirm_account_number = v, v))
                warning=Signal::derive(mismatch_warning)
            />
            <div class="form-group">
                <label>"Account type" <span class="form-group__required">"*"</span></label>
                <select on:change=move |ev| edit(|d, v| d.account_type = v, event_target_value(&ev))>
                    <option value="" selected=move || row().account_type.is_empty()>
                        "— select —"
                    </option>
                    {ACCOUNT_TYPES
                        .iter()
                        .map(|t| {
                            let t = t.to_string();
                            let t2 = t.clone();
                            view! {
                                <option value=t.clone() selected=move || row().account_type == t2>
                                    {t.clone()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
            <TextInput
                label="IFSC code"
                required=true
                value=Signal::derive(move || row().ifsc_code)
                on_input=Callback::new(move |v| edit(|d, v| d.ifsc_code = v, v))
                placeholder="e.g. HDFC0001234"
            />
        </fieldset>
    }
}
