//! Dialog shell shared by the demo and free-trial forms.
//!
//! The shell never owns its visibility: the page passes `open` down and is
//! asked to change it through `on_dismiss`. Whether a dismissal is honoured
//! is up to the form's workflow.

use leptos::prelude::*;

use crate::lead::{Workflow, WorkflowStore};

/// Reactive store for a form workflow. Updates against a disposed signal
/// (dialog unmounted while a timer was pending) come back as `None`.
impl<D> WorkflowStore<D> for RwSignal<Workflow<D>>
where
    D: Send + Sync + 'static,
{
    fn with_mut<R>(&self, f: impl FnOnce(&mut Workflow<D>) -> R) -> Option<R> {
        self.try_update(f)
    }
}

#[component]
pub fn LeadModal(
    #[prop(into)] open: Signal<bool>,
    on_dismiss: Callback<()>,
    title: &'static str,
    description: &'static str,
    #[prop(optional)] wide: bool,
    children: ChildrenFn,
) -> impl IntoView {
    let keydown = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" && open.get_untracked() {
            on_dismiss.run(());
        }
    });
    on_cleanup(move || keydown.remove());

    view! {
        <Show when=move || open.get()>
            <style>{include_str!("lead_modal.css")}</style>
            <div class="modal-overlay" on:click=move |_| on_dismiss.run(())>
                <div
                    class="modal"
                    class:modal-wide=wide
                    role="dialog"
                    aria-modal="true"
                    on:click=|ev| ev.stop_propagation()
                >
                    <button
                        type="button"
                        class="modal-close"
                        aria-label="Close"
                        on:click=move |_| on_dismiss.run(())
                    >
                        "×"
                    </button>
                    <header class="modal-header">
                        <h2 class="modal-title">{title}</h2>
                        <p class="modal-description">{description}</p>
                    </header>
                    {children()}
                </div>
            </div>
        </Show>
    }
}

/// Confirmation shown for the success hold, before the dialog closes itself.
#[component]
pub fn SuccessPanel(
    title: &'static str,
    #[prop(into)] message: Signal<String>,
    #[prop(into)] detail: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="success-panel">
            <div class="success-icon">"✓"</div>
            <h3 class="success-title">{title}</h3>
            <p class="success-message">{move || message.get()}</p>
            {move || detail.get().map(|d| view! { <p class="success-detail">{d}</p> })}
        </div>
    }
}
