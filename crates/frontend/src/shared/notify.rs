//! Transient toast notifications.
//!
//! Provided once at the root; any view can push a message. Errors from
//! async boundaries surface here and leave the triggering action retryable.

use leptos::prelude::*;
use leptos::task::spawn_local;

const AUTO_DISMISS_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct NotificationSink {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl NotificationSink {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    pub fn toasts(&self) -> RwSignal<Vec<Toast>> {
        self.toasts
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    fn push(&self, kind: ToastKind, message: String) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.toasts.update(|list| list.push(Toast { id, kind, message }));

        let toasts = self.toasts;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(AUTO_DISMISS_MS).await;
            toasts.update(|list| list.retain(|t| t.id != id));
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }
}

impl Default for NotificationSink {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the toast sink
pub fn use_notify() -> NotificationSink {
    use_context::<NotificationSink>().expect("NotificationSink not found in component tree")
}

/// Toast stack rendered once inside the shell
#[component]
pub fn ToastStack() -> impl IntoView {
    let sink = use_notify();
    let toasts = sink.toasts();

    view! {
        <div class="toast-stack">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let class = match toast.kind {
                        ToastKind::Success => "toast toast--success",
                        ToastKind::Error => "toast toast--error",
                    };
                    let id = toast.id;
                    view! {
                        <div class=class on:click=move |_| sink.dismiss(id)>
                            {toast.message.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
