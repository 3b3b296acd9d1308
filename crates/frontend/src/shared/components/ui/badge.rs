use contracts::dashboard::status::badge_style_for;
use leptos::prelude::*;

/// Status badge: resolves a record-status string to its badge style.
/// Unknown statuses render with the muted style.
#[component]
pub fn StatusBadge(
    /// Status label, e.g. "Active", "In Progress"
    #[prop(into)]
    status: Signal<String>,
) -> impl IntoView {
    let class = move || format!("badge {}", badge_style_for(&status.get()).css_class());

    view! {
        <span class=class>
            {move || status.get()}
        </span>
    }
}
