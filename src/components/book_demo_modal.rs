//! "Book a demo" dialog.

use leptos::prelude::*;
use tracing::warn;
use wasm_bindgen_futures::spawn_local;

use crate::api::SimulatedSubmitter;
use crate::browser::{self, BrowserSleep};
use crate::components::date_picker::DatePicker;
use crate::components::form_field::TextField;
use crate::components::lead_modal::{LeadModal, SuccessPanel};
use crate::components::toaster::ToastContext;
use crate::config::SiteConfig;
use crate::lead::schedule::format_long_date;
use crate::lead::{
    submit_lead, DemoDraft, Field, SubmissionOutcome, SubmitReport, TimeSlot, Workflow,
};

#[component]
pub fn BookDemoModal(#[prop(into)] open: Signal<bool>, on_open_change: Callback<bool>) -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let toasts = expect_context::<ToastContext>();
    let latency = config.submit_latency();
    let hold = config.success_hold();

    let workflow = RwSignal::new(Workflow::<DemoDraft>::new());
    let submitting = Memo::new(move |_| workflow.with(|wf| wf.is_submitting()));
    let shows_success = Memo::new(move |_| workflow.with(|wf| wf.shows_success()));
    let error_for = move |field: Field| Signal::derive(move || workflow.with(|wf| wf.errors().message(field)));

    let on_dismiss = Callback::new(move |_: ()| {
        if workflow.try_update(|wf| wf.request_close()).unwrap_or(false) {
            on_open_change.run(false);
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

    let confirmation = Signal::derive(move || {
        workflow.with(|wf| match (wf.draft().date(), wf.draft().time) {
            (Some(date), Some(time)) => format!("See you on {} at {}.", format_long_date(date), time),
            _ => "Your demo is booked.".to_string(),
        })
    });

    view! {
        <LeadModal
            open=open
            on_dismiss=on_dismiss
            title="Book Your Demo"
            description="Schedule a personalized demo to see how RecruitPro AI can transform your hiring process."
        >
            <Show
                when=move || shows_success.get()
                fallback=move || view! {
                    <form class="lead-form" novalidate=true on:submit=on_submit>
                        <TextField
                            id="demo-full-name"
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
                            id="demo-email"
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
                            id="demo-company"
                            label="Company Name"
                            placeholder="Acme Inc."
                            value=Signal::derive(move || workflow.with(|wf| wf.draft().contact.company.clone()))
                            error=error_for(Field::Company)
                            disabled=submitting
                            on_input=Callback::new(move |v: String| workflow.update(|wf| {
                                wf.edit(|d| d.contact.company = v);
                            }))
                        />

                        <div class="form-row">
                            <div class="form-field">
                                <label for="demo-date" class="form-label">"Preferred Date"</label>
                                <DatePicker
                                    selected=Signal::derive(move || workflow.with(|wf| wf.draft().date()))
                                    invalid=Signal::derive(move || workflow.with(|wf| wf.errors().get(Field::Date).is_some()))
                                    disabled=submitting
                                    on_pick=Callback::new(move |date| workflow.update(|wf| {
                                        if let Some(Err(e)) = wf.edit(|d| d.pick_date(date, browser::today())) {
                                            warn!("Date pick refused: {}", e);
                                        }
                                    }))
                                />
                                {move || error_for(Field::Date).get().map(|msg| view! { <p class="form-error">{msg}</p> })}
                            </div>
                            <div class="form-field">
                                <label for="demo-time" class="form-label">"Preferred Time"</label>
                                <select
                                    id="demo-time"
                                    class="form-input"
                                    class:form-input-invalid=move || workflow.with(|wf| wf.errors().get(Field::Time).is_some())
                                    disabled=move || submitting.get()
                                    prop:value=move || workflow.with(|wf| {
                                        wf.draft().time.map(|t| t.index().to_string()).unwrap_or_default()
                                    })
                                    on:change=move |ev| {
                                        let slot = event_target_value(&ev)
                                            .parse::<usize>()
                                            .ok()
                                            .and_then(TimeSlot::from_index);
                                        workflow.update(|wf| {
                                            wf.edit(|d| d.time = slot);
                                        });
                                    }
                                >
                                    <option value="" disabled=true>"Select a time"</option>
                                    {TimeSlot::all().map(|slot| view! {
                                        <option value=slot.index().to_string()>{slot.label()}</option>
                                    }).collect::<Vec<_>>()}
                                </select>
                                {move || error_for(Field::Time).get().map(|msg| view! { <p class="form-error">{msg}</p> })}
                            </div>
                        </div>

                        {move || workflow.with(|wf| match wf.outcome() {
                            SubmissionOutcome::Failed(reason) => Some(reason.clone()),
                            _ => None,
                        }).map(|reason| view! { <p class="form-failure">{reason}</p> })}

                        <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Scheduling..." } else { "Schedule Demo" }}
                        </button>
                    </form>
                }
            >
                <SuccessPanel
                    title="Demo Scheduled!"
                    message=confirmation
                    detail=Signal::derive(|| Some("A calendar invite is on its way to your inbox.".to_string()))
                />
            </Show>
        </LeadModal>
    }
}
