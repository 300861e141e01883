//! Transient notifications.
//!
//! [`ToastProvider`] owns the queue and renders it; [`use_toast`] hands out a
//! cheap handle for raising toasts from event handlers.

use std::time::Duration;

use dioxus::core::spawn_forever;
use dioxus::prelude::*;

use crate::icons::{FaCircleCheck, FaCircleExclamation, FaCircleInfo, FaXmark};
use crate::viewport::use_is_desktop;
use crate::Icon;

const DEFAULT_DURATION: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
            ToastKind::Info => "toast toast-info",
        }
    }
}

/// Per-toast settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToastOptions {
    pub duration: Duration,
}

impl ToastOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self {
            duration: DEFAULT_DURATION,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Visible toasts, oldest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u64,
    items: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, message: String) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast { id, kind, message });
        id
    }

    /// Remove a toast. Dismissing one that is already gone is a no-op.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Handle for raising toasts.
#[derive(Clone, Copy, PartialEq)]
pub struct Toasts {
    queue: Signal<ToastQueue>,
}

impl Toasts {
    pub fn success(&self, message: String, options: ToastOptions) {
        self.show(ToastKind::Success, message, options);
    }

    pub fn error(&self, message: String, options: ToastOptions) {
        self.show(ToastKind::Error, message, options);
    }

    pub fn info(&self, message: String, options: ToastOptions) {
        self.show(ToastKind::Info, message, options);
    }

    pub fn dismiss(&self, id: u64) {
        let mut queue = self.queue;
        queue.write().dismiss(id);
    }

    fn show(&self, kind: ToastKind, message: String, options: ToastOptions) {
        let mut queue = self.queue;
        let id = queue.write().push(kind, message);
        // Outlive the calling component, which may be navigating away
        spawn_forever(async move {
            sleep(options.duration).await;
            queue.write().dismiss(id);
        });
    }
}

pub fn use_toast() -> Toasts {
    Toasts {
        queue: use_context::<Signal<ToastQueue>>(),
    }
}

fn toast_icon(kind: ToastKind) -> Element {
    match kind {
        ToastKind::Success => rsx! { Icon { icon: FaCircleCheck, width: 16, height: 16 } },
        ToastKind::Error => rsx! { Icon { icon: FaCircleExclamation, width: 16, height: 16 } },
        ToastKind::Info => rsx! { Icon { icon: FaCircleInfo, width: 16, height: 16 } },
    }
}

/// Owns the toast queue and renders it above the page.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let queue = use_context_provider(|| Signal::new(ToastQueue::default()));
    let toasts = Toasts { queue };
    let desktop = use_is_desktop();

    rsx! {
        {children}
        div {
            class: "toast-region",
            role: "status",
            for toast in queue.read().items().iter().cloned() {
                div {
                    key: "{toast.id}",
                    class: toast.kind.class(),
                    {toast_icon(toast.kind)}
                    span { class: "toast-message", "{toast.message}" }
                    if desktop {
                        button {
                            class: "toast-close",
                            aria_label: "Close",
                            onclick: move |_| toasts.dismiss(toast.id),
                            Icon { icon: FaXmark, width: 12, height: 12 }
                        }
                    }
                }
            }
        }
    }
}
