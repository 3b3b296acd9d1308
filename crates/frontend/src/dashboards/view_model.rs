use contracts::dashboard::dto::DashboardData;
use leptos::prelude::*;

use super::model;

/// ViewModel of a dashboard load.
///
/// A request sequence number guards against stale responses: if the view
/// reloads (or unmounts and remounts) while a fetch is in flight, the late
/// result is discarded instead of overwriting newer state.
#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub data: RwSignal<Option<DashboardData>>,
    pub error: RwSignal<Option<String>>,
    pub is_loading: RwSignal<bool>,
    request_seq: RwSignal<u64>,
}

impl DashboardViewModel {
    pub fn new() -> Self {
        Self {
            data: RwSignal::new(None),
            error: RwSignal::new(None),
            is_loading: RwSignal::new(false),
            request_seq: RwSignal::new(0),
        }
    }

    pub fn load(&self) {
        let seq = self.request_seq.get_untracked() + 1;
        self.request_seq.set(seq);
        self.is_loading.set(true);
        self.error.set(None);

        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let result = model::fetch_dashboard_data().await;
            // A newer request took over while this one was in flight
            if vm.request_seq.get_untracked() != seq {
                return;
            }
            match result {
                Ok(data) => vm.data.set(Some(data)),
                Err(_) => vm.error.set(Some(
                    "Failed to load dashboard data. Please try again.".to_string(),
                )),
            }
            vm.is_loading.set(false);
        });
    }
}

impl Default for DashboardViewModel {
    fn default() -> Self {
        Self::new()
    }
}
