use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::notify::NotificationSink;
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Navigation state shared by the header and the page container
    provide_context(AppGlobalContext::new());

    // Toast stack available to every view
    provide_context(NotificationSink::new());

    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
    }
}
