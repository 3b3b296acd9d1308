use leptos::prelude::*;

/// Labeled text input bound to a value signal through an input callback
#[component]
pub fn TextInput(
    /// Field label
    #[prop(into)]
    label: String,
    /// Current value (reactive)
    #[prop(into)]
    value: Signal<String>,
    /// Called with the new value on every keystroke
    on_input: Callback<String>,
    /// Input type attribute: "text" (default), "email", "tel", "number"
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Marks the label with a required asterisk
    #[prop(optional, into)]
    required: MaybeProp<bool>,
    /// Inline error/warning shown under the field
    #[prop(optional, into)]
    warning: MaybeProp<String>,
) -> impl IntoView {
    let input_type = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let placeholder = move || placeholder.get().unwrap_or_default();
    let is_required = move || required.get().unwrap_or(false);

    view! {
        <div class="form-group">
            <label>
                {label}
                <Show when=is_required>
                    <span class="form-group__required">"*"</span>
                </Show>
            </label>
            <input
                type=input_type
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                placeholder=placeholder
            />
            {move || {
                warning
                    .get()
                    .filter(|w| !w.is_empty())
                    .map(|w| view! { <div class="form-group__warning">{w}</div> })
            }}
        </div>
    }
}
