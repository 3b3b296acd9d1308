use leptos::prelude::*;

/// Labeled select over (value, label) options
#[component]
pub fn Select(
    /// Field label
    #[prop(into)]
    label: String,
    /// Current value (reactive)
    #[prop(into)]
    value: Signal<String>,
    /// Called with the selected value
    on_change: Callback<String>,
    /// Options as (value, label) pairs
    options: Vec<(String, String)>,
    /// Marks the label with a required asterisk
    #[prop(optional, into)]
    required: MaybeProp<bool>,
) -> impl IntoView {
    let is_required = move || required.get().unwrap_or(false);

    view! {
        <div class="form-group">
            <label>
                {label}
                <Show when=is_required>
                    <span class="form-group__required">"*"</span>
                </Show>
            </label>
            <select on:change=move |ev| on_change.run(event_target_value(&ev))>
                <option value="" selected=move || value.get().is_empty()>
                    "— select —"
                </option>
                {options
                    .into_iter()
                    .map(|(opt_value, opt_label)| {
                        let v = opt_value.clone();
                        view! {
                            <option value=opt_value selected=move || value.get() == v>
                                {opt_label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
