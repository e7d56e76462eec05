//! Toast notifications.
//!
//! Provides transient toast messages for errors, warnings, success
//! messages, and info. All API failures and validation notices surface
//! here; nothing in the app is fatal.

use leptos::prelude::*;
use std::collections::VecDeque;

/// Maximum number of toasts to show at once
const MAX_TOASTS: usize = 5;

/// How long a toast stays up before dismissing itself
#[allow(dead_code)]
const AUTO_DISMISS_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

/// A single toast with a unique ID for tracking
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Context handle for pushing toasts from anywhere in the tree.
#[derive(Clone, Copy)]
pub struct Notifications {
    toasts: RwSignal<VecDeque<Toast>>,
    next_id: RwSignal<u64>,
}

impl Notifications {
    fn new() -> Self {
        Self {
            toasts: RwSignal::new(VecDeque::new()),
            next_id: RwSignal::new(0),
        }
    }

    /// Add a toast, dropping the oldest when over capacity.
    pub fn push(&self, kind: ToastKind, message: impl Into<String>) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.toasts.update(|t| {
            t.push_back(Toast {
                id,
                kind,
                message: message.into(),
            });
            while t.len() > MAX_TOASTS {
                t.pop_front();
            }
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.push(ToastKind::Warning, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastKind::Info, message);
    }

    fn dismiss(&self, id: u64) {
        self.toasts.update(|t| {
            t.retain(|toast| toast.id != id);
        });
    }
}

/// Provide the notifications context to the component tree
pub fn provide_notifications() -> Notifications {
    let notifications = Notifications::new();
    provide_context(notifications);
    notifications
}

/// Get the notifications context from the component tree
pub fn use_notifications() -> Notifications {
    expect_context::<Notifications>()
}

/// Toast container component; place once at the app root.
#[component]
pub fn ToastContainer() -> impl IntoView {
    let notifications = use_notifications();

    view! {
        <div class="fixed top-4 right-4 z-50 flex flex-col gap-2 max-w-sm">
            {move || {
                notifications.toasts.get().into_iter().map(|toast| {
                    view! { <ToastItem toast=toast/> }
                }).collect_view()
            }}
        </div>
    }
}

/// Single toast component
#[component]
fn ToastItem(toast: Toast) -> impl IntoView {
    let notifications = use_notifications();
    let id = toast.id;

    // Auto-dismiss
    #[cfg(not(feature = "ssr"))]
    {
        use gloo_timers::future::TimeoutFuture;
        use wasm_bindgen_futures::spawn_local;

        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            notifications.dismiss(id);
        });
    }

    let (bg_class, border_class, icon_class) = match toast.kind {
        ToastKind::Success => ("bg-green-500/10", "border-green-500/30", "text-green-400"),
        ToastKind::Error => ("bg-red-500/10", "border-red-500/30", "text-red-400"),
        ToastKind::Warning => (
            "bg-yellow-500/10",
            "border-yellow-500/30",
            "text-yellow-400",
        ),
        ToastKind::Info => ("bg-blue-500/10", "border-blue-500/30", "text-blue-400"),
    };

    let icon_path = match toast.kind {
        ToastKind::Success => "M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z",
        ToastKind::Error => "M12 8v4m0 4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
        ToastKind::Warning => {
            "M12 9v2m0 4h.01m-6.938 4h13.856c1.54 0 2.502-1.667 1.732-3L13.732 4c-.77-1.333-2.694-1.333-3.464 0L3.34 16c-.77 1.333.192 3 1.732 3z"
        }
        ToastKind::Info => "M13 16h-1v-4h-1m1-4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
    };

    let container_class = format!(
        "flex items-start gap-3 p-4 rounded-lg border backdrop-blur-sm shadow-lg transition-all duration-300 {} {}",
        bg_class, border_class
    );

    view! {
        <div class=container_class>
            <div class=icon_class>
                <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=icon_path />
                </svg>
            </div>
            <p class="flex-1 min-w-0 text-sm text-theme-primary">{toast.message.clone()}</p>
            <button
                class="text-theme-muted hover:text-theme-primary transition-colors"
                on:click=move |_| notifications.dismiss(id)
            >
                <svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12" />
                </svg>
            </button>
        </div>
    }
}
