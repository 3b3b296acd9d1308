use contracts::system::auth::UserInfo;
use contracts::system::roles::UserRole;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
}

impl AuthState {
    pub fn role(&self) -> Option<UserRole> {
        self.user_info.as_ref().and_then(|u| u.role)
    }

    fn signed_in(access_token: String, user_info: UserInfo) -> Self {
        Self {
            access_token: Some(access_token),
            user_info: Some(user_info),
        }
    }
}

/// Restore a session from the tokens in localStorage, refreshing the access
/// token if the stored one no longer validates. Clears the stored tokens
/// when neither path works.
async fn restore_session() -> Option<AuthState> {
    let access_token = storage::get_access_token()?;

    if let Ok(user_info) = api::get_current_user(&access_token).await {
        return Some(AuthState::signed_in(access_token, user_info));
    }

    let refresh_token = match storage::get_refresh_token() {
        Some(token) => token,
        None => {
            storage::clear_tokens();
            return None;
        }
    };

    match api::refresh_token(refresh_token).await {
        Ok(response) => {
            storage::save_access_token(&response.access_token);
            match api::get_current_user(&response.access_token).await {
                Ok(user_info) => Some(AuthState::signed_in(response.access_token, user_info)),
                Err(_) => None,
            }
        }
        Err(_) => {
            storage::clear_tokens();
            None
        }
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = create_signal(AuthState::default());

    // Try to restore the session from localStorage on mount
    create_effect(move |_| {
        spawn_local(async move {
            if let Some(state) = restore_session().await {
                set_auth_state.set(state);
            }
        });
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Helper: perform login
pub async fn do_login(username: String, password: String) -> Result<(), String> {
    let response = api::login(username, password).await?;

    storage::save_access_token(&response.access_token);
    storage::save_refresh_token(&response.refresh_token);

    let (_, set_auth_state) = use_auth();
    set_auth_state.set(AuthState::signed_in(response.access_token, response.user));

    Ok(())
}

/// Helper: perform logout
pub async fn do_logout() -> Result<(), String> {
    if let Some(refresh_token) = storage::get_refresh_token() {
        let _ = api::logout(refresh_token).await;
    }

    storage::clear_tokens();

    let (_, set_auth_state) = use_auth();
    set_auth_state.set(AuthState::default());

    Ok(())
}
