use leptos::prelude::*;

/// Top-level pages of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppPage {
    Dashboard,
    Profile,
    EoiList,
}

impl AppPage {
    pub fn title(&self) -> &'static str {
        match self {
            AppPage::Dashboard => "Dashboard",
            AppPage::Profile => "My Profile",
            AppPage::EoiList => "EOI Invitations",
        }
    }

    pub fn all() -> Vec<AppPage> {
        vec![AppPage::Dashboard, AppPage::Profile, AppPage::EoiList]
    }
}

/// Application-wide navigation state, provided once at the root
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active_page: RwSignal<AppPage>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active_page: RwSignal::new(AppPage::Dashboard),
        }
    }

    pub fn navigate(&self, page: AppPage) {
        self.active_page.set(page);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the global navigation context
pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found in component tree")
}
