use leptos::prelude::*;

fn variant_class(variant: Option<&str>) -> &'static str {
    match variant.unwrap_or("primary") {
        "secondary" => "button button--secondary",
        "ghost" => "button button--ghost",
        "danger" => "button button--danger",
        _ => "button button--primary",
    }
}

/// Action button of the UI kit.
///
/// Variants: "primary" (default), "secondary", "ghost", "danger".
/// Sizes: "md" (default), "sm".
#[component]
pub fn Button(
    #[prop(optional, into)] variant: MaybeProp<String>,
    #[prop(optional, into)] size: MaybeProp<String>,
    #[prop(optional, into)] class: MaybeProp<String>,
    /// Disabled state (reactive); saving flows use this as their double-click guard
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    #[prop(optional)] on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let css = move || {
        let mut css = variant_class(variant.get().as_deref()).to_string();
        if size.get().as_deref() == Some("sm") {
            css.push_str(" button--small");
        }
        if let Some(extra) = class.get() {
            if !extra.is_empty() {
                css.push(' ');
                css.push_str(&extra);
            }
        }
        css
    };

    view! {
        <button
            type="button"
            class=css
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
