mod details;
mod list;

use leptos::prelude::*;

/// EOI surface: list of invitations, or the builder for one of them
#[component]
pub fn EoiPage() -> impl IntoView {
    // None = list, Some(None) = new invitation, Some(Some(id)) = edit
    let editing = RwSignal::new(Option::<Option<String>>::None);

    view! {
        {move || match editing.get() {
            None => view! {
                <list::EoiList
                    on_open=Callback::new(move |id: Option<String>| editing.set(Some(id)))
                />
            }
            .into_any(),
            Some(id) => view! {
                <details::EoiDetails
                    id=id
                    on_close=Callback::new(move |_: ()| editing.set(None))
                />
            }
            .into_any(),
        }}
    }
}
