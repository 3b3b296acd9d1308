use chrono::NaiveDate;
use contracts::eoi::aggregate::{CocMember, EoiInvitation, EoiInvitationDto, ProcessType};
use contracts::eoi::email::parse_email_list;
use contracts::eoi::timeline::compute_timeline;
use leptos::prelude::*;

use crate::eoi::model;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Button, TextInput};
use crate::shared::date_utils::format_date;
use crate::shared::notify::{use_notify, NotificationSink};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EoiTab {
    Details,
    Coc,
    Timeline,
    Preview,
}

impl EoiTab {
    fn title(&self) -> &'static str {
        match self {
            EoiTab::Details => "Details",
            EoiTab::Coc => "Committee of Creditors",
            EoiTab::Timeline => "Key Dates",
            EoiTab::Preview => "Preview & Send",
        }
    }

    fn all() -> Vec<EoiTab> {
        vec![EoiTab::Details, EoiTab::Coc, EoiTab::Timeline, EoiTab::Preview]
    }
}

/// ViewModel of the invitation builder
#[derive(Clone, Copy)]
struct EoiDetailsViewModel {
    form: RwSignal<EoiInvitationDto>,
    error: RwSignal<Option<String>>,
    active_tab: RwSignal<EoiTab>,
    is_saving: RwSignal<bool>,
    notify: NotificationSink,
}

impl EoiDetailsViewModel {
    fn new(notify: NotificationSink) -> Self {
        Self {
            form: RwSignal::new(EoiInvitationDto::default()),
            error: RwSignal::new(None),
            active_tab: RwSignal::new(EoiTab::Details),
            is_saving: RwSignal::new(false),
            notify,
        }
    }

    fn load_if_needed(&self, id: Option<String>) {
        if let Some(existing_id) = id {
            let vm = *self;
            wasm_bindgen_futures::spawn_local(async move {
                match model::fetch_by_id(existing_id).await {
                    Ok(aggregate) => vm.form.set(to_dto(&aggregate)),
                    Err(e) => vm.error.set(Some(e)),
                }
            });
        }
    }

    fn save_command(&self, on_saved: impl Fn() + 'static) {
        if self.is_saving.get_untracked() {
            return;
        }
        let current = self.form.get_untracked();

        // Inline validation mirrors the aggregate's own checks
        if current.description.trim().is_empty() {
            self.error.set(Some("Title is required".to_string()));
            return;
        }
        if current.corporate_debtor.trim().is_empty() {
            self.error
                .set(Some("Corporate debtor is required".to_string()));
            return;
        }

        self.is_saving.set(true);
        self.error.set(None);
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match model::save_form(&current).await {
                Ok(()) => {
                    vm.notify.success("Invitation saved");
                    on_saved();
                }
                Err(e) => vm.error.set(Some(e)),
            }
            vm.is_saving.set(false);
        });
    }

    /// Preview aggregate assembled from the current form state
    fn preview_aggregate(&self) -> EoiInvitation {
        let dto = self.form.get();
        let mut aggregate = EoiInvitation::new_for_insert(
            dto.code.clone().unwrap_or_default(),
            dto.description.clone(),
            dto.corporate_debtor.clone(),
            dto.process_type,
            dto.issue_date,
            dto.comment.clone(),
        );
        aggregate.eligibility_criteria = dto.eligibility_criteria.clone();
        aggregate.contact_email = dto.contact_email.clone();
        aggregate.coc_members = dto.coc_members.clone();
        aggregate
    }
}

fn to_dto(aggregate: &EoiInvitation) -> EoiInvitationDto {
    EoiInvitationDto {
        id: Some(aggregate.to_string_id()),
        code: Some(aggregate.base.code.clone()),
        description: aggregate.base.description.clone(),
        corporate_debtor: aggregate.corporate_debtor.clone(),
        process_type: aggregate.process_type,
        issue_date: aggregate.issue_date,
        eligibility_criteria: aggregate.eligibility_criteria.clone(),
        contact_email: aggregate.contact_email.clone(),
        coc_members: aggregate.coc_members.clone(),
        comment: aggregate.base.comment.clone(),
    }
}

#[component]
pub fn EoiDetails(id: Option<String>, on_close: Callback<()>) -> impl IntoView {
    let notify = use_notify();
    let vm = EoiDetailsViewModel::new(notify);
    let is_edit = id.is_some();
    vm.load_if_needed(id);

    view! {
        <div class="eoi-details">
            <PageHeader
                title=if is_edit { "Edit EOI Invitation" } else { "New EOI Invitation" }
                actions=Box::new(move || view! {
                    <Button variant="secondary" on_click=Callback::new(move |_| on_close.run(()))>
                        "Back to list"
                    </Button>
                }
                .into_any())
            />

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="eoi-details__tabs">
                {EoiTab::all()
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <button
                                class=move || {
                                    if vm.active_tab.get() == tab {
                                        "wizard-tab wizard-tab--active"
                                    } else {
                                        "wizard-tab"
                                    }
                                }
                                on:click=move |_| vm.active_tab.set(tab)
                            >
                                {tab.title()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="eoi-details__body">
                {move || match vm.active_tab.get() {
                    EoiTab::Details => view! { <DetailsTab vm=vm /> }.into_any(),
                    EoiTab::Coc => view! { <CocTab vm=vm /> }.into_any(),
                    EoiTab::Timeline => view! { <TimelineTab vm=vm /> }.into_any(),
                    EoiTab::Preview => view! { <PreviewTab vm=vm /> }.into_any(),
                }}
            </div>

            <div class="eoi-details__actions">
                <Button
                    disabled=Signal::derive(move || vm.is_saving.get())
                    on_click=Callback::new(move |_| vm.save_command(move || on_close.run(())))
                >
                    {move || if vm.is_saving.get() { "Saving…" } else { "Save invitation" }}
                </Button>
            </div>
        </div>
    }
}

#[component]
fn DetailsTab(vm: EoiDetailsViewModel) -> impl IntoView {
    view! {
        <div class="wizard-section-form">
            <TextInput
                label="Title"
                required=true
                value=Signal::derive(move || vm.form.get().description)
                on_input=Callback::new(move |v| vm.form.update(|f| f.description = v))
                placeholder="e.g. EOI for resolution of Acme Industries Ltd"
            />
            <TextInput
                label="Corporate debtor"
                required=true
                value=Signal::derive(move || vm.form.get().corporate_debtor)
                on_input=Callback::new(move |v| vm.form.update(|f| f.corporate_debtor = v))
            />
            <div class="form-group">
                <label>"Process type"</label>
                <select on:change=move |ev| {
                    let code = event_target_value(&ev);
                    vm.form.update(|f| {
                        f.process_type = ProcessType::from_code(&code).unwrap_or(ProcessType::Cirp)
                    });
                }>
                    {ProcessType::all()
                        .into_iter()
                        .map(|p| {
                            view! {
                                <option
                                    value=p.code()
                                    selected=move || vm.form.get().process_type == p
                                >
                                    {p.display_name()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
            <TextInput
                label="Contact email"
                input_type="email"
                value=Signal::derive(move || vm.form.get().contact_email)
                on_input=Callback::new(move |v| vm.form.update(|f| f.contact_email = v))
                placeholder="Submissions mailbox"
            />
            <div class="form-group">
                <label>"Eligibility criteria"</label>
                <textarea
                    rows="5"
                    prop:value=move || vm.form.get().eligibility_criteria
                    on:input=move |ev| {
                        vm.form.update(|f| f.eligibility_criteria = event_target_value(&ev))
                    }
                    placeholder="Net-worth thresholds, sector experience, security clearances…"
                />
            </div>
        </div>
    }
}

#[component]
fn CocTab(vm: EoiDetailsViewModel) -> impl IntoView {
    let member_count = move || vm.form.get().coc_members.len();
    let total_share = move || {
        vm.form
            .get()
            .coc_members
            .iter()
            .map(|m| m.voting_share)
            .sum::<f64>()
    };

    let edit = move |index: usize, f: fn(&mut CocMember, String), value: String| {
        vm.form.update(|form| {
            if let Some(member) = form.coc_members.get_mut(index) {
                f(member, value);
            }
        });
    };

    view! {
        <div class="wizard-section-form">
            {move || {
                (0..member_count())
                    .map(|index| {
                        let member = move || {
                            vm.form
                                .get()
                                .coc_members
                                .get(index)
                                .cloned()
                                .unwrap_or_default()
                        };
                        view! {
                            <fieldset class="coc-member">
                                <legend>{format!("Member {}", index + 1)}</legend>
                                <TextInput
                                    label="Name"
                                    required=true
                                    value=Signal::derive(move || member().name)
                                    on_input=Callback::new(move |v| edit(index, |m, v| m.name = v, v))
                                />
                                <TextInput
                                    label="Organisation"
                                    value=Signal::derive(move || member().organisation)
                                    on_input=Callback::new(move |v| {
                                        edit(index, |m, v| m.organisation = v, v)
                                    })
                                />
                                <TextInput
                                    label="Email"
                                    input_type="email"
                                    value=Signal::derive(move || member().email)
                                    on_input=Callback::new(move |v| edit(index, |m, v| m.email = v, v))
                                />
                                <TextInput
                                    label="Voting share (%)"
                                    input_type="number"
                                    value=Signal::derive(move || format!("{}", member().voting_share))
                                    on_input=Callback::new(move |v: String| {
                                        edit(
                                            index,
                                            |m, v| m.voting_share = v.trim().parse().unwrap_or(0.0),
                                            v,
                                        )
                                    })
                                />
                            </fieldset>
                        }
                    })
                    .collect_view()
            }}

            <p class=move || {
                if total_share() > 100.0 {
                    "coc-total coc-total--over"
                } else {
                    "coc-total"
                }
            }>
                {move || format!("Combined voting share: {:.2}%", total_share())}
            </p>

            <div class="banking-actions">
                <Button
                    variant="secondary"
                    size="sm"
                    on_click=Callback::new(move |_| {
                        vm.form.update(|f| f.coc_members.push(CocMember::default()))
                    })
                >
                    "Add member"
                </Button>
                <Show when=move || { member_count() > 0 }>
                    <Button
                        variant="ghost"
                        size="sm"
                        on_click=Callback::new(move |_| {
                            vm.form.update(|f| {
                                f.coc_members.pop();
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
fn TimelineTab(vm: EoiDetailsViewModel) -> impl IntoView {
    let timeline = move || compute_timeline(vm.form.get().issue_date);

    view! {
        <div class="wizard-section-form">
            <div class="form-group">
                <label>"Issue date"</label>
                <input
                    type="date"
                    prop:value=move || vm.form.get().issue_date.to_string()
                    on:change=move |ev| {
                        if let Ok(date) = event_target_value(&ev).parse::<NaiveDate>() {
                            vm.form.update(|f| f.issue_date = date);
                        }
                    }
                />
            </div>

            <table class="data-table timeline-table">
                <tbody>
                    <tr>
                        <td>"Last date for submission"</td>
                        <td>{move || format_date(&timeline().last_submission_date.to_string())}</td>
                    </tr>
                    <tr>
                        <td>"Provisional list of applicants"</td>
                        <td>{move || format_date(&timeline().provisional_list_date.to_string())}</td>
                    </tr>
                    <tr>
                        <td>"Objections close"</td>
                        <td>{move || format_date(&timeline().objection_deadline.to_string())}</td>
                    </tr>
                    <tr>
                        <td>"Final list of applicants"</td>
                        <td>{move || format_date(&timeline().final_list_date.to_string())}</td>
                    </tr>
                </tbody>
            </table>
            <p class="wizard-section-form__hint">
                "All dates derive from the issue date; change it above to shift the schedule."
            </p>
        </div>
    }
}

#[component]
fn PreviewTab(vm: EoiDetailsViewModel) -> impl IntoView {
    let show_email_dialog = RwSignal::new(false);
    let recipients = RwSignal::new(String::new());
    let invalid_entries = RwSignal::new(Vec::<String>::new());
    let notify = vm.notify;

    let send = move || {
        match parse_email_list(&recipients.get_untracked()) {
            Ok(list) if list.is_empty() => {
                invalid_entries.set(vec!["Enter at least one recipient".to_string()]);
            }
            Ok(list) => {
                invalid_entries.set(Vec::new());
                show_email_dialog.set(false);
                recipients.set(String::new());
                notify.success(format!("Invitation queued for {} recipient(s)", list.len()));
            }
            Err(invalid) => invalid_entries.set(invalid),
        }
    };

    view! {
        <div class="eoi-preview">
            <pre class="eoi-preview__text">{move || vm.preview_aggregate().render_invitation_text()}</pre>

            <div class="eoi-preview__actions">
                {move || {
                    vm.form.get().id.map(|id| {
                        view! {
                            <Button
                                variant="secondary"
                                on_click=Callback::new(move |_| {
                                    let id = id.clone();
                                    wasm_bindgen_futures::spawn_local(async move {
                                        let filename = format!("coc-{}.csv", id);
                                        match model::fetch_coc_csv(id).await {
                                            Ok(csv) => {
                                                if let Err(e) =
                                                    crate::shared::export::download_csv(&csv, &filename)
                                                {
                                                    notify.error(e);
                                                }
                                            }
                                            Err(e) => notify.error(e),
                                        }
                                    });
                                })
                            >
                                "Export COC list (CSV)"
                            </Button>
                        }
                    })
                }}
                <Button on_click=Callback::new(move |_| show_email_dialog.set(true))>
                    "Send by email"
                </Button>
            </div>

            <Show when=move || show_email_dialog.get()>
                <div class="modal-backdrop">
                    <div class="modal">
                        <h3>"Send invitation"</h3>
                        <div class="form-group">
                            <label>"Recipients (comma or semicolon separated)"</label>
                            <textarea
                                rows="3"
                                prop:value=move || recipients.get()
                                on:input=move |ev| recipients.set(event_target_value(&ev))
                                placeholder="coc@bank.example, trustee@firm.example"
                            />
                        </div>
                        {move || {
                            let invalid = invalid_entries.get();
                            (!invalid.is_empty()).then(|| view! {
                                <div class="error">
                                    {format!("Invalid recipients: {}", invalid.join(", "))}
                                </div>
                            })
                        }}
                        <div class="modal__actions">
                            <Button variant="secondary" on_click=Callback::new(move |_| {
                                show_email_dialog.set(false);
                                invalid_entries.set(Vec::new());
                            })>
                                "Cancel"
                            </Button>
                            <Button on_click=Callback::new(move |_| send())>
                                "Send"
                            </Button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
