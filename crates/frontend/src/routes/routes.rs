use crate::dashboards::page::DashboardPage;
use crate::eoi::ui::EoiPage;
use crate::layout::global_context::{use_app_context, AppPage};
use crate::layout::header::Header;
use crate::profile::view::ProfileWizardPage;
use crate::shared::notify::ToastStack;
use crate::system::auth::context::use_auth;
use crate::system::auth::guard::RequireMarketplaceRole;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="app-shell">
            <Header />
            <main class="app-content">
                {move || match ctx.active_page.get() {
                    AppPage::Dashboard => view! { <DashboardPage /> }.into_any(),
                    AppPage::Profile => view! { <ProfileWizardPage /> }.into_any(),
                    AppPage::EoiList => view! {
                        <RequireMarketplaceRole>
                            <EoiPage />
                        </RequireMarketplaceRole>
                    }
                    .into_any(),
                }}
            </main>
            <ToastStack />
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().access_token.is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
