use leptos::prelude::*;

use super::context::use_auth;

/// Component that requires a marketplace role on the session.
/// Back-office accounts and unrecognized role codes land on the fallback,
/// a defined terminal state, not an error.
#[component]
pub fn RequireMarketplaceRole(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().role().is_some()
            fallback=|| view! {
                <div class="auth-fallback">
                    <h2>"Access Restricted"</h2>
                    <p>"Your account has no marketplace role assigned."</p>
                </div>
            }
        >
            {children()}
        </Show>
    }
}
