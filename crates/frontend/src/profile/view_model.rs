use contracts::profile::completion::{
    calculate_completion, eligible_for_permanent_id, CompletionStatus,
};
use contracts::profile::record::{BankingDetail, ProfileRecord};
use contracts::profile::verification::VerificationStatus;
use contracts::profile::wizard::{sections_for, SaveOutcome, SkipOutcome, WizardState};
use contracts::system::roles::UserRole;
use leptos::prelude::*;

use super::model;
use crate::shared::notify::NotificationSink;

/// ViewModel of one wizard session.
///
/// Owns the mutable record and the navigation state; the completion status
/// stays a memo over the record so every field edit recomputes it through
/// the pure engine.
#[derive(Clone, Copy)]
pub struct ProfileWizardViewModel {
    pub role: UserRole,
    pub record: RwSignal<ProfileRecord>,
    pub wizard: RwSignal<WizardState>,
    pub completion: Memo<CompletionStatus>,
    pub eligible: Memo<bool>,
    pub verification: RwSignal<VerificationStatus>,
    pub is_loaded: RwSignal<bool>,
    notify: NotificationSink,
}

impl ProfileWizardViewModel {
    pub fn new(role: UserRole, notify: NotificationSink) -> Self {
        let record = RwSignal::new(ProfileRecord::new_for_wizard());
        let completion = Memo::new(move |_| calculate_completion(&record.get(), role));
        let eligible = Memo::new(move |_| {
            let status = completion.get();
            eligible_for_permanent_id(&record.get(), &status)
        });
        Self {
            role,
            record,
            wizard: RwSignal::new(WizardState::new(sections_for(role).len())),
            completion,
            eligible,
            verification: RwSignal::new(VerificationStatus::NotStarted),
            is_loaded: RwSignal::new(false),
            notify,
        }
    }

    /// Load the stored record into the session
    pub fn load(&self) {
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_profile().await {
                Ok(response) => {
                    let mut record = response.record;
                    if record.banking_details.is_empty() {
                        record.banking_details.push(BankingDetail::default());
                    }
                    if record.has_identity_proof_file() {
                        vm.verification.set(VerificationStatus::Verified);
                    }
                    vm.record.set(record);
                    vm.is_loaded.set(true);
                }
                Err(e) => {
                    vm.is_loaded.set(true);
                    vm.notify.error(e);
                }
            }
        });
    }

    /// Apply one field edit; the completion memo recomputes automatically
    pub fn update_record(&self, f: impl FnOnce(&mut ProfileRecord)) {
        self.record.update(f);
    }

    pub fn is_saving(&self) -> bool {
        self.wizard.get().is_saving()
    }

    pub fn previous(&self) {
        self.wizard.update(|w| {
            w.previous();
        });
    }

    pub fn jump_to(&self, index: usize) {
        self.wizard.update(|w| {
            w.jump_to(index);
        });
    }

    /// Skip the current section without validation; skipping the last
    /// section abandons the wizard
    pub fn skip(&self, on_leave: impl Fn() + 'static) {
        let mut outcome = None;
        self.wizard.update(|w| outcome = w.skip());
        if outcome == Some(SkipOutcome::Abandoned) {
            on_leave();
        }
    }

    /// "Save and next" / "Complete Profile": persist the partial record,
    /// advance only on success. The saving flag keeps the buttons disabled
    /// until the call resolves.
    pub fn save_and_next(&self, on_complete: impl Fn() + 'static) {
        let mut started = false;
        self.wizard.update(|w| started = w.begin_save());
        if !started {
            return;
        }

        let vm = *self;
        let record = self.record.get_untracked();
        wasm_bindgen_futures::spawn_local(async move {
            match model::save_profile(&record).await {
                Ok(_) => {
                    let mut outcome = SaveOutcome::Advanced;
                    vm.wizard.update(|w| outcome = w.save_succeeded());
                    match outcome {
                        SaveOutcome::Advanced => vm.notify.success("Progress saved"),
                        SaveOutcome::Submitted => {
                            vm.notify.success("Profile submitted");
                            on_complete();
                        }
                    }
                }
                Err(e) => {
                    // Stay on the current section, leave the retry to the user
                    vm.wizard.update(|w| w.save_failed());
                    vm.notify.error(e);
                }
            }
        });
    }

    /// Run document verification for the identity section. Other fields
    /// stay editable; only the section's save is expected to wait for the
    /// pending state to resolve.
    pub fn verify_document(&self, file: web_sys::File) {
        let vm = *self;
        let doc_type = self.record.get_untracked().identity_document.doc_type;
        let number = self.record.get_untracked().identity_document.number;
        let file_name = file.name();

        self.verification.set(VerificationStatus::Pending);
        wasm_bindgen_futures::spawn_local(async move {
            match model::verify_document(&file, &doc_type, &number).await {
                Ok(outcome) if outcome.is_valid => {
                    vm.record
                        .update(|r| r.identity_document.uploaded_file = Some(file_name));
                    vm.verification.set(VerificationStatus::Verified);
                    vm.notify.success("Document verified");
                }
                Ok(outcome) => {
                    vm.verification.set(VerificationStatus::Rejected);
                    for error in outcome.errors {
                        vm.notify.error(error);
                    }
                }
                Err(e) => {
                    vm.verification.set(VerificationStatus::NotStarted);
                    vm.notify.error(e);
                }
            }
        });
    }
}
