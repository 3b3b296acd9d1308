use leptos::prelude::*;
use leptos::task::spawn_local;

use super::global_context::{use_app_context, AppPage};
use crate::system::auth::context::{do_logout, use_auth};

/// Application header: page navigation, the signed-in user and logout
#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();
    let (auth_state, _) = use_auth();

    let user_label = move || {
        auth_state
            .get()
            .user_info
            .map(|u| u.full_name.unwrap_or(u.username))
            .unwrap_or_default()
    };

    let role_label = move || {
        auth_state
            .get()
            .user_info
            .and_then(|u| u.role)
            .map(|r| r.display_name())
            .unwrap_or("")
    };

    view! {
        <header class="app-header">
            <div class="app-header__brand">"Resolution Services Marketplace"</div>
            <nav class="app-header__nav">
                {AppPage::all()
                    .into_iter()
                    .map(|page| {
                        let is_active = move || ctx.active_page.get() == page;
                        view! {
                            <button
                                class=move || {
                                    if is_active() {
                                        "app-header__nav-item app-header__nav-item--active"
                                    } else {
                                        "app-header__nav-item"
                                    }
                                }
                                on:click=move |_| ctx.navigate(page)
                            >
                                {page.title()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
            <div class="app-header__user">
                <span class="app-header__user-name">{user_label}</span>
                <span class="app-header__user-role">{role_label}</span>
                <button
                    class="app-header__logout"
                    on:click=move |_| {
                        spawn_local(async move {
                            let _ = do_logout().await;
                        });
                    }
                >
                    "Sign out"
                </button>
            </div>
        </header>
    }
}
