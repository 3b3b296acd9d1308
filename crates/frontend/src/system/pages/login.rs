use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::auth::context::do_login;

#[component]
pub fn LoginPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let is_submitting = RwSignal::new(false);

    let submit = move || {
        if is_submitting.get_untracked() {
            return;
        }
        let user = username.get_untracked();
        let pass = password.get_untracked();
        if user.trim().is_empty() || pass.is_empty() {
            error.set(Some("Enter your username and password".to_string()));
            return;
        }
        is_submitting.set(true);
        error.set(None);
        spawn_local(async move {
            match do_login(user, pass).await {
                Ok(()) => {}
                Err(e) => error.set(Some(e)),
            }
            is_submitting.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Resolution Services Marketplace"</h1>
                <p class="login-card__subtitle">"Sign in to continue"</p>

                {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

                <div class="form-group">
                    <label for="username">"Username"</label>
                    <input
                        type="text"
                        id="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                        placeholder="Enter username"
                    />
                </div>

                <div class="form-group">
                    <label for="password">"Password"</label>
                    <input
                        type="password"
                        id="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                submit();
                            }
                        }
                        placeholder="Enter password"
                    />
                </div>

                <button
                    class="btn btn-primary login-card__submit"
                    disabled=move || is_submitting.get()
                    on:click=move |_| submit()
                >
                    {move || if is_submitting.get() { "Signing in…" } else { "Sign in" }}
                </button>
            </div>
        </div>
    }
}
