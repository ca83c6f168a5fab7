//! "Start free trial" dialog with optional document upload.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::SimulatedSubmitter;
use crate::browser::BrowserSleep;
use crate::components::file_drop_zone::FileDropZone;
use crate::components::form_field::TextField;
use crate::components::lead_modal::{LeadModal, SuccessPanel};
use crate::components::toaster::ToastContext;
use crate::config::SiteConfig;
use crate::lead::{
    submit_lead, FileAttachment, Field, Notifier, SubmissionOutcome, SubmitReport, TrialDraft, Workflow,
};

fn uploaded_summary(count: usize) -> Option<String> {
    match count {
        0 => None,
        1 => Some("📎 1 document uploaded successfully".to_string()),
        n => Some(format!("📎 {} documents uploaded successfully", n)),
    }
}

#[component]
pub fn FreeTrialModal(#[prop(into)] open: Signal<bool>, on_open_change: Callback<bool>) -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let toasts = expect_context::<ToastContext>();
    let latency = config.submit_latency();
    let hold = config.success_hold();
    let policy = config.intake.clone();
    let max_bytes = policy.max_bytes;

    let workflow = RwSignal::new(Workflow::<TrialDraft>::new());
    let submitting = Memo::new(move |_| workflow.with(|wf| wf.is_submitting()));
    let shows_success = Memo::new(move |_| workflow.with(|wf| wf.shows_success()));
    let error_for = move |field: Field| Signal::derive(move || workflow.with(|wf| wf.errors().message(field)));

    let on_dismiss = Callback::new(move |_: ()| {
        if workflow.try_update(|wf| wf.request_close()).unwrap_or(false) {
            on_open_change.run(false);
        }
    });

    let on_files = Callback::new(move |batch: Vec<FileAttachment>| {
        let rejected = workflow
            .try_update(|wf| wf.edit(|d| d.add_files(batch, &policy)))
            .flatten()
            .flatten();
        if let Some(notice) = rejected {
            toasts.notify(notice);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let submitter = SimulatedSubmitter::new(latency);
        spawn_local(async move {
            let report = submit_lead(&workflow, &submitter, &BrowserSleep, &toasts, hold).await;
            if report == SubmitReport::Completed {
                on_open_change.run(false);
            }
        });
    };

    let attachments = move || {
        workflow.with(|wf| wf.draft().attachments.iter().cloned().enumerate().collect::<Vec<_>>())
    };

    view! {
        <LeadModal
            open=open
            on_dismiss=on_dismiss
            title="Start Your Free Trial"
            description="Get 14 days of full access. Upload sample job descriptions or resumes to see AI matching on your own data."
            wide=true
        >
            <Show
                when=move || shows_success.get()
                fallback=move || view! {
                    <form class="lead-form" novalidate=true on:submit=on_submit>
                        <TextField
                            id="trial-full-name"
                            label="Full Name"
                            placeholder="John Smith"
                            value=Signal::derive(move || workflow.with(|wf| wf.draft().contact.full_name.clone()))
                            error=error_for(Field::FullName)
                            disabled=submitting
                            on_input=Callback::new(move |v: String| workflow.update(|wf| {
                                wf.edit(|d| d.contact.full_name = v);
                            }))
                        />
                        <TextField
                            id="trial-email"
                            label="Work Email"
                            input_type="email"
                            placeholder="john@company.com"
                            value=Signal::derive(move || workflow.with(|wf| wf.draft().contact.email.clone()))
                            error=error_for(Field::Email)
                            disabled=submitting
                            on_input=Callback::new(move |v: String| workflow.update(|wf| {
                                wf.edit(|d| d.contact.email = v);
                            }))
                        />
                        <TextField
                            id="trial-company"
                            label="Company Name"
                            placeholder="Acme Inc."
                            value=Signal::derive(move || workflow.with(|wf| wf.draft().contact.company.clone()))
                            error=error_for(Field::Company)
                            disabled=submitting
                            on_input=Callback::new(move |v: String| workflow.update(|wf| {
                                wf.edit(|d| d.contact.company = v);
                            }))
                        />

                        <div class="form-field">
                            <span class="form-label">"Supporting Documents (optional)"</span>
                            <FileDropZone on_files=on_files max_bytes=max_bytes disabled=submitting />
                            {move || {
                                let files = attachments();
                                (!files.is_empty()).then(|| view! {
                                    <ul class="file-list">
                                        {files.into_iter().map(|(index, file)| view! {
                                            <li class="file-item">
                                                <span class="file-icon">{file.kind().icon()}</span>
                                                <span class="file-name" title=file.name.clone()>{file.name.clone()}</span>
                                                <span class="file-size">{file.display_size()}</span>
                                                <button
                                                    type="button"
                                                    class="file-remove"
                                                    aria-label="Remove file"
                                                    disabled=move || submitting.get()
                                                    on:click=move |_| workflow.update(|wf| {
                                                        wf.edit(|d| d.remove_attachment(index));
                                                    })
                                                >
                                                    "×"
                                                </button>
                                            </li>
                                        }).collect::<Vec<_>>()}
                                    </ul>
                                })
                            }}
                        </div>

                        {move || workflow.with(|wf| match wf.outcome() {
                            SubmissionOutcome::Failed(reason) => Some(reason.clone()),
                            _ => None,
                        }).map(|reason| view! { <p class="form-failure">{reason}</p> })}

                        <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Starting Trial..." } else { "Start Free Trial" }}
                        </button>
                    </form>
                }
            >
                <SuccessPanel
                    title="Welcome to RecruitPro AI!"
                    message=Signal::derive(|| "Your free trial is ready. Check your inbox for login details.".to_string())
                    detail=Signal::derive(move || workflow.with(|wf| uploaded_summary(wf.draft().attachments.len())))
                />
            </Show>
        </LeadModal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uploaded_summary_pluralizes() {
        assert_eq!(uploaded_summary(0), None);
        assert_eq!(uploaded_summary(1).as_deref(), Some("📎 1 document uploaded successfully"));
        assert_eq!(uploaded_summary(3).as_deref(), Some("📎 3 documents uploaded successfully"));
    }
}
