use contracts::profile::wizard::sections_for;
use contracts::system::roles::{profile_form_route, ProfileFormRoute, UserRole};
use leptos::prelude::*;

use super::sections::section_view;
use super::view_model::ProfileWizardViewModel;
use crate::layout::global_context::{use_app_context, AppPage};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Button, ProgressBar};
use crate::shared::notify::use_notify;
use crate::system::auth::context::use_auth;

/// Profile onboarding entry point: one form variant per role, with a
/// defined fallback for sessions without a usable role.
#[component]
pub fn ProfileWizardPage() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        {move || {
            let role = auth_state.get().role();
            match profile_form_route(role) {
                ProfileFormRoute::UnsupportedRole => view! {
                    <div class="dashboard-fallback">
                        <h2>"Unsupported user role"</h2>
                        <p>"Profile onboarding is not available for this account."</p>
                    </div>
                }
                .into_any(),
                // All six variants share the wizard shell; the role decides
                // the section sequence and the mandatory-field table.
                _ => {
                    let role = role.expect("route guarantees a role");
                    view! { <ProfileWizard role=role /> }.into_any()
                }
            }
        }}
    }
}

#[component]
fn ProfileWizard(role: UserRole) -> impl IntoView {
    let ctx = use_app_context();
    let notify = use_notify();
    let vm = ProfileWizardViewModel::new(role, notify);
    vm.load();

    let sections = sections_for(role);
    let completion = vm.completion;

    let go_to_dashboard = move || ctx.navigate(AppPage::Dashboard);

    view! {
        <div class="profile-wizard">
            <PageHeader
                title="Profile Onboarding"
                subtitle=role.display_name().to_string()
            />

            <div class="profile-wizard__progress">
                <ProgressBar percent=Signal::derive(move || completion.get().overall_percentage) />
                {move || {
                    let status = completion.get();
                    if status.is_complete {
                        if vm.eligible.get() {
                            view! {
                                <p class="profile-wizard__hint profile-wizard__hint--ok">
                                    "All set: eligible for permanent registration number"
                                </p>
                            }
                            .into_any()
                        } else {
                            view! {
                                <p class="profile-wizard__hint">
                                    "All mandatory fields filled. Upload your identity proof and make sure bank account numbers match to unlock permanent registration."
                                </p>
                            }
                            .into_any()
                        }
                    } else {
                        view! {
                            <p class="profile-wizard__hint">
                                {format!(
                                    "Missing: {}",
                                    status.missing_mandatory_fields.join(", ")
                                )}
                            </p>
                        }
                        .into_any()
                    }
                }}
            </div>

            // Section tab bar: every section is directly reachable; the
            // checkmarks are display-only.
            <div class="profile-wizard__tabs">
                {sections
                    .iter()
                    .enumerate()
                    .map(|(index, section)| {
                        let title = section.title;
                        view! {
                            <button
                                class=move || {
                                    let wizard = vm.wizard.get();
                                    let mut class = String::from("wizard-tab");
                                    if wizard.current_section_index() == index {
                                        class.push_str(" wizard-tab--active");
                                    }
                                    if wizard.is_visited(index) {
                                        class.push_str(" wizard-tab--visited");
                                    }
                                    class
                                }
                                on:click=move |_| vm.jump_to(index)
                            >
                                {move || {
                                    let mut label = if vm.wizard.get().is_visited(index) {
                                        format!("✓ {}", title)
                                    } else {
                                        title.to_string()
                                    };
                                    if section.required {
                                        label.push_str(" *");
                                    }
                                    label
                                }}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="profile-wizard__section">
                {move || {
                    let index = vm.wizard.get().current_section_index();
                    let section = &sections[index.min(sections.len() - 1)];
                    section_view(section.id, vm)
                }}
            </div>

            <div class="profile-wizard__actions">
                <Button
                    variant="secondary"
                    disabled=Signal::derive(move || {
                        let wizard = vm.wizard.get();
                        wizard.is_first_section() || wizard.is_saving()
                    })
                    on_click=Callback::new(move |_| vm.previous())
                >
                    "Previous"
                </Button>
                <Button
                    variant="ghost"
                    disabled=Signal::derive(move || vm.wizard.get().is_saving())
                    on_click=Callback::new(move |_| vm.skip(go_to_dashboard))
                >
                    {move || {
                        if vm.wizard.get().is_last_section() {
                            "Skip for now"
                        } else {
                            "Skip"
                        }
                    }}
                </Button>
                <Button
                    disabled=Signal::derive(move || vm.wizard.get().is_saving())
                    on_click=Callback::new(move |_| vm.save_and_next(go_to_dashboard))
                >
                    {move || {
                        let wizard = vm.wizard.get();
                        if wizard.is_saving() {
                            "Saving…"
                        } else if wizard.is_last_section() {
                            "Complete Profile"
                        } else {
                            "Save & Next"
                        }
                    }}
                </Button>
            </div>
        </div>
    }
}
