//! Transient notifications.
//!
//! `ToastContext` is provided once by `App` and implements [`Notifier`], so the
//! lead workflow can raise notices without knowing how they are shown.

use std::time::Duration;

use leptos::prelude::*;
use tracing::debug;

use crate::lead::{Notice, Notifier, Severity};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

#[derive(Clone, Copy)]
pub struct ToastContext {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
    lifetime: Duration,
}

impl ToastContext {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
            lifetime,
        }
    }

    /// Show a notice and schedule its removal.
    pub fn push(&self, notice: Notice) -> u64 {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        debug!("Toast {}: {}", id, notice.title);
        self.toasts.update(|list| list.push(Toast { id, notice }));

        let ctx = *self;
        set_timeout(move || ctx.dismiss(id), self.lifetime);
        id
    }

    /// Remove a toast. A no-op when it is already gone or the context was torn down.
    pub fn dismiss(&self, id: u64) {
        self.toasts.try_update(|list| list.retain(|t| t.id != id));
    }

    pub fn toasts(&self) -> Signal<Vec<Toast>> {
        self.toasts.into()
    }
}

impl Notifier for ToastContext {
    fn notify(&self, notice: Notice) {
        self.push(notice);
    }
}

#[component]
pub fn Toaster() -> impl IntoView {
    let ctx = expect_context::<ToastContext>();
    let toasts = ctx.toasts();

    view! {
        <div class="toaster" role="region" aria-live="polite">
            <style>{include_str!("toaster.css")}</style>
            {move || toasts.get().into_iter().map(|toast| {
                let id = toast.id;
                let class = match toast.notice.severity {
                    Severity::Normal => "toast",
                    Severity::Destructive => "toast toast-destructive",
                };
                view! {
                    <div class=class role="status">
                        <div class="toast-body">
                            <p class="toast-title">{toast.notice.title}</p>
                            <p class="toast-description">{toast.notice.description}</p>
                        </div>
                        <button
                            type="button"
                            class="toast-close"
                            aria-label="Dismiss"
                            on:click=move |_| ctx.dismiss(id)
                        >
                            "×"
                        </button>
                    </div>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}
