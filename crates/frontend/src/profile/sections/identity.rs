use contracts::profile::verification::{DocumentType, VerificationStatus};
use leptos::prelude::*;

use crate::profile::view_model::ProfileWizardViewModel;
use crate::shared::components::ui::{Select, TextInput};

/// Identity document details plus the proof upload.
///
/// The upload triggers verification; a rejected document keeps the section
/// editable and only blocks the permanent-registration gate.
#[component]
pub fn IdentitySection(vm: ProfileWizardViewModel) -> impl IntoView {
    let options: Vec<(String, String)> = DocumentType::all()
        .into_iter()
        .map(|d| (d.code().to_string(), d.display_name().to_string()))
        .collect();

    let badge_class = move || match vm.verification.get() {
        VerificationStatus::Verified => "badge badge--success",
        VerificationStatus::Rejected => "badge badge--warning",
        VerificationStatus::Pending => "badge badge--info",
        VerificationStatus::NotStarted => "badge badge--muted",
    };

    view! {
        <div class="wizard-section-form">
            <Select
                label="Document type"
                required=true
                value=Signal::derive(move || vm.record.get().identity_document.doc_type)
                on_change=Callback::new(move |v| {
                    vm.update_record(|r| r.identity_document.doc_type = v)
                })
                options=options
            />
            <TextInput
                label="Document number"
                required=true
                value=Signal::derive(move || vm.record.get().identity_document.number)
                on_input=Callback::new(move |v| {
                    vm.update_record(|r| r.identity_document.number = v)
                })
                placeholder="As printed on the document"
            />

            <div class="form-group">
                <label>"Identity proof (PDF, JPG or PNG, max 5 MB)"</label>
                <input
                    type="file"
                    accept=".pdf,.jpg,.jpeg,.png"
                    on:change=move |ev| {
                        let input: web_sys::HtmlInputElement = event_target(&ev);
                        if let Some(file) = input.files().and_then(|files| files.get(0)) {
                            vm.verify_document(file);
                        }
                    }
                />
                <div class="identity-verification">
                    <span class=badge_class>
                        {move || vm.verification.get().badge_label()}
                    </span>
                    {move || {
                        vm.record
                            .get()
                            .identity_document
                            .uploaded_file
                            .filter(|f| !f.is_empty())
                            .map(|f| view! { <span class="identity-verification__file">{f}</span> })
                    }}
                </div>
            </div>
        </div>
    }
}
