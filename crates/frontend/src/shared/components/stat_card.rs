use leptos::prelude::*;

/// Single numeric indicator on the dashboard stat grid
#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: String,
    /// Value; None renders the loading placeholder
    #[prop(into)]
    value: Signal<Option<u32>>,
    /// Visual accent: "default", "info", "warning", "success"
    #[prop(optional, into)]
    accent: MaybeProp<String>,
) -> impl IntoView {
    let accent_class = move || match accent.get().as_deref().unwrap_or("default") {
        "info" => "stat-card stat-card--info",
        "warning" => "stat-card stat-card--warning",
        "success" => "stat-card stat-card--success",
        _ => "stat-card",
    };

    let formatted = move || match value.get() {
        Some(v) => v.to_string(),
        None => "—".to_string(),
    };

    view! {
        <div class=accent_class>
            <div class="stat-card__label">{label}</div>
            <div class="stat-card__value">{formatted}</div>
        </div>
    }
}
