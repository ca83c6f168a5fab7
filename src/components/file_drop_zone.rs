//! Drag-and-drop target with a hidden multi-file picker.

use leptos::prelude::*;

use crate::browser::attachments_from;
use crate::lead::intake::format_file_size;
use crate::lead::FileAttachment;

/// Every picked or dropped batch is handed to `on_files` as metadata. Intake
/// rules are applied by the caller.
#[component]
pub fn FileDropZone(
    on_files: Callback<Vec<FileAttachment>>,
    max_bytes: u64,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let (is_over, set_is_over) = signal(false);
    let file_input_id = "trial-file-input";
    let hint = format!("PDF, DOC or DOCX, up to {} each", format_file_size(max_bytes));

    let on_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        set_is_over.set(false);
        if disabled.get_untracked() {
            return;
        }
        if let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) {
            on_files.run(attachments_from(&files));
        }
    };

    let on_input_change = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        if let Some(files) = input.files() {
            on_files.run(attachments_from(&files));
        }
        // Allow the same file to be picked again after removal
        input.set_value("");
    };

    view! {
        <div
            class="drop-zone"
            class:drop-zone-active=move || is_over.get()
            class:drop-zone-disabled=move || disabled.get()
            on:dragover=move |ev: web_sys::DragEvent| {
                ev.prevent_default();
                if !disabled.get_untracked() {
                    set_is_over.set(true);
                }
            }
            on:dragleave=move |_| set_is_over.set(false)
            on:drop=on_drop
        >
            <div class="drop-icon">"⇪"</div>
            <p class="drop-main">"Drop your documents here"</p>
            <p class="drop-hint">{hint}</p>
            <label for=file_input_id class="btn btn-secondary">
                "Browse Files"
            </label>
            <input
                type="file"
                id=file_input_id
                multiple=true
                accept=".pdf,.doc,.docx"
                style="display: none"
                disabled=move || disabled.get()
                on:change=on_input_change
            />
        </div>
    }
}
