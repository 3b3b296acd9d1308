use contracts::eoi::aggregate::EoiInvitation;
use leptos::prelude::*;

use crate::eoi::model;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Button;
use crate::shared::date_utils::format_date;
use crate::shared::notify::use_notify;

#[component]
pub fn EoiList(on_open: Callback<Option<String>>) -> impl IntoView {
    let notify = use_notify();
    let items = RwSignal::new(Vec::<EoiInvitation>::new());
    let is_loaded = RwSignal::new(false);

    let load = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_list().await {
                Ok(list) => items.set(list),
                Err(e) => notify.error(e),
            }
            is_loaded.set(true);
        });
    };
    load();

    let delete = move |id: String| {
        wasm_bindgen_futures::spawn_local(async move {
            match model::delete(id).await {
                Ok(()) => {
                    notify.success("Invitation deleted");
                    match model::fetch_list().await {
                        Ok(list) => items.set(list),
                        Err(e) => notify.error(e),
                    }
                }
                Err(e) => notify.error(e),
            }
        });
    };

    view! {
        <div class="eoi-list">
            <PageHeader
                title="EOI Invitations"
                subtitle="Expression of Interest invitations issued under resolution processes"
                actions=Box::new(move || view! {
                    <Button on_click=Callback::new(move |_| on_open.run(None))>
                        "New invitation"
                    </Button>
                }
                .into_any())
            />

            {move || {
                if !is_loaded.get() {
                    return view! { <div class="loading-placeholder">"Loading invitations…"</div> }
                        .into_any();
                }
                let list = items.get();
                if list.is_empty() {
                    return view! {
                        <p class="dashboard-section__empty">"No invitations yet. Create the first one."</p>
                    }
                    .into_any();
                }
                view! {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Code"</th>
                                <th>"Title"</th>
                                <th>"Corporate debtor"</th>
                                <th>"Process"</th>
                                <th>"Issued"</th>
                                <th>"Submissions close"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {list
                                .into_iter()
                                .map(|item| {
                                    let id = item.to_string_id();
                                    let id_for_open = id.clone();
                                    let id_for_delete = id.clone();
                                    let timeline = item.timeline();
                                    view! {
                                        <tr>
                                            <td>{item.base.code.clone()}</td>
                                            <td>
                                                <a
                                                    class="data-table__link"
                                                    on:click=move |_| on_open.run(Some(id_for_open.clone()))
                                                >
                                                    {item.base.description.clone()}
                                                </a>
                                            </td>
                                            <td>{item.corporate_debtor.clone()}</td>
                                            <td>{item.process_type.code()}</td>
                                            <td>{format_date(&item.issue_date.to_string())}</td>
                                            <td>{format_date(&timeline.last_submission_date.to_string())}</td>
                                            <td>
                                                <Button
                                                    variant="ghost"
                                                    size="sm"
                                                    on_click=Callback::new(move |_| delete(id_for_delete.clone()))
                                                >
                                                    "Delete"
                                                </Button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                }
                .into_any()
            }}
        </div>
    }
}
