use leptos::prelude::*;

/// Page title with an optional subtitle and action slot
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: MaybeProp<String>,
    #[prop(optional)] actions: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__text">
                <h2>{title}</h2>
                {move || {
                    subtitle
                        .get()
                        .filter(|s| !s.is_empty())
                        .map(|s| view! { <p class="page-header__subtitle">{s}</p> })
                }}
            </div>
            <div class="page-header__actions">{actions.map(|a| a())}</div>
        </div>
    }
}
