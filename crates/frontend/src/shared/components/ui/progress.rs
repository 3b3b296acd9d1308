use leptos::prelude::*;

/// Horizontal progress bar for the completion percentage
#[component]
pub fn ProgressBar(
    /// Percentage in [0, 100]
    #[prop(into)]
    percent: Signal<u8>,
) -> impl IntoView {
    let width_style = move || format!("width: {}%", percent.get().min(100));
    let fill_class = move || {
        if percent.get() >= 100 {
            "progress__fill progress__fill--complete"
        } else {
            "progress__fill"
        }
    };

    view! {
        <div class="progress">
            <div class=fill_class style=width_style></div>
            <span class="progress__label">{move || format!("{}%", percent.get())}</span>
        </div>
    }
}
