//! Owned dialog state and the async routine that carries one submission from
//! validation through to the automatic close.
//!
//! The routine never holds a borrow of the dialog state across an `.await`.
//! Every step goes back through [`WorkflowStore::with_mut`], which reports
//! `None` once the dialog has been torn down; together with the sequencer's
//! tickets this makes late timer callbacks harmless.

use std::cell::RefCell;
use std::future::Future;
use std::rc::{Rc, Weak};
use std::time::Duration;

use tracing::{debug, info, warn};

use super::draft::{LeadForm, LeadSubmission};
use super::notice::{Notice, Notifier};
use super::sequencer::{Sequencer, SubmissionOutcome, SubmissionPhase, Ticket};
use super::validation::ValidationResult;
use crate::error::SubmitError;

/// Sends a lead somewhere. Implementations decide how long that takes.
pub trait LeadSubmitter {
    fn submit(&self, lead: LeadSubmission) -> impl Future<Output = Result<(), SubmitError>>;
}

/// Single-shot async delay.
pub trait Sleep {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

/// Shared handle to a dialog's [`Workflow`].
pub trait WorkflowStore<D> {
    /// Run `f` against the workflow, or return `None` if it no longer exists.
    fn with_mut<R>(&self, f: impl FnOnce(&mut Workflow<D>) -> R) -> Option<R>;
}

impl<D> WorkflowStore<D> for Rc<RefCell<Workflow<D>>> {
    fn with_mut<R>(&self, f: impl FnOnce(&mut Workflow<D>) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl<D> WorkflowStore<D> for Weak<RefCell<Workflow<D>>> {
    fn with_mut<R>(&self, f: impl FnOnce(&mut Workflow<D>) -> R) -> Option<R> {
        self.upgrade().map(|cell| f(&mut cell.borrow_mut()))
    }
}

/// Result of asking the workflow to start a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStep {
    Proceed(Ticket, LeadSubmission),
    Rejected(usize),
    Busy,
}

/// What the workflow made of the submitter's answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Succeeded(Notice),
    Failed(String),
    /// The dialog was reset while the submission was in flight.
    Stale,
}

/// How a call to [`submit_lead`] ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitReport {
    /// Validation failed; the errors are on the workflow.
    Rejected { errors: usize },
    /// A submission was already in flight.
    Busy,
    /// The submitter returned an error; the form is editable again.
    Failed(String),
    /// Success shown, hold elapsed, draft cleared. The host should close the dialog.
    Completed,
    /// The dialog went away or was reset before the sequence finished.
    Abandoned,
}

/// Draft, inline errors and submission state for one dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Workflow<D> {
    draft: D,
    errors: ValidationResult,
    sequencer: Sequencer,
    attempted: bool,
}

impl<D: LeadForm> Workflow<D> {
    pub fn new() -> Self {
        Self {
            draft: D::default(),
            errors: ValidationResult::new(),
            sequencer: Sequencer::new(),
            attempted: false,
        }
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn errors(&self) -> &ValidationResult {
        &self.errors
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.sequencer.phase()
    }

    pub fn outcome(&self) -> &SubmissionOutcome {
        self.sequencer.outcome()
    }

    pub fn is_submitting(&self) -> bool {
        self.sequencer.is_submitting()
    }

    pub fn shows_success(&self) -> bool {
        self.sequencer.shows_success()
    }

    /// Apply a user edit. Edits are refused (`None`) once the draft has been sent.
    /// After the first submit attempt the errors are refreshed on every edit.
    pub fn edit<R>(&mut self, f: impl FnOnce(&mut D) -> R) -> Option<R> {
        if !self.sequencer.can_close() {
            return None;
        }
        let out = f(&mut self.draft);
        if self.attempted {
            self.errors = self.draft.validate();
        }
        Some(out)
    }

    /// Validate and, if clean, move to Submitting.
    pub fn begin_submit(&mut self) -> SubmitStep {
        if !self.sequencer.begin() {
            return SubmitStep::Busy;
        }
        self.attempted = true;
        self.errors = self.draft.validate();
        match self.sequencer.finish_validation(&self.errors) {
            Some(ticket) => SubmitStep::Proceed(ticket, self.draft.submission()),
            None => SubmitStep::Rejected(self.errors.len()),
        }
    }

    /// Record the submitter's answer.
    pub fn resolve(&mut self, ticket: Ticket, result: Result<(), SubmitError>) -> Resolution {
        let failure = result.as_ref().err().map(|e| e.to_string());
        if !self.sequencer.resolve(ticket, result) {
            return Resolution::Stale;
        }
        match failure {
            Some(reason) => Resolution::Failed(reason),
            None => Resolution::Succeeded(self.draft.success_notice()),
        }
    }

    /// Leave the success view and clear everything the dialog held.
    pub fn auto_close(&mut self, ticket: Ticket) -> bool {
        if !self.sequencer.start_auto_close(ticket) || !self.sequencer.complete(ticket) {
            return false;
        }
        self.draft = D::default();
        self.errors = ValidationResult::new();
        self.attempted = false;
        true
    }

    /// User asked to dismiss the dialog. Honoured only before the draft was sent;
    /// the draft is discarded without confirmation.
    pub fn request_close(&mut self) -> bool {
        if !self.sequencer.can_close() {
            return false;
        }
        self.reset();
        true
    }

    /// Discard the draft and invalidate any in-flight submission.
    pub fn reset(&mut self) {
        self.draft = D::default();
        self.errors = ValidationResult::new();
        self.sequencer.reset();
        self.attempted = false;
    }
}

/// Drive one submission end to end.
///
/// validate -> submit -> notify success -> hold for `success_hold` -> clear.
/// The host closes the dialog when this returns [`SubmitReport::Completed`].
pub async fn submit_lead<D, W, S, T, N>(
    store: &W,
    submitter: &S,
    sleeper: &T,
    notifier: &N,
    success_hold: Duration,
) -> SubmitReport
where
    D: LeadForm,
    W: WorkflowStore<D>,
    S: LeadSubmitter,
    T: Sleep,
    N: Notifier,
{
    let Some(step) = store.with_mut(|wf| wf.begin_submit()) else {
        return SubmitReport::Abandoned;
    };
    let (ticket, lead) = match step {
        SubmitStep::Proceed(ticket, lead) => (ticket, lead),
        SubmitStep::Rejected(errors) => {
            debug!("Submission blocked by {} field error(s)", errors);
            return SubmitReport::Rejected { errors };
        }
        SubmitStep::Busy => return SubmitReport::Busy,
    };

    info!("Submitting {:?} lead for {}", lead.kind, lead.company);
    let result = submitter.submit(lead).await;

    let notice = match store.with_mut(|wf| wf.resolve(ticket, result)) {
        Some(Resolution::Succeeded(notice)) => notice,
        Some(Resolution::Failed(reason)) => {
            warn!("Lead submission failed: {}", reason);
            return SubmitReport::Failed(reason);
        }
        Some(Resolution::Stale) | None => return SubmitReport::Abandoned,
    };
    notifier.notify(notice);

    sleeper.sleep(success_hold).await;

    match store.with_mut(|wf| wf.auto_close(ticket)) {
        Some(true) => {
            debug!("Lead dialog cleared after success hold");
            SubmitReport::Completed
        }
        _ => SubmitReport::Abandoned,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lead::draft::{ContactDetails, TrialDraft};
    use crate::lead::intake::{FileAttachment, IntakePolicy, PDF_MIME};

    fn make_trial() -> Workflow<TrialDraft> {
        let mut wf = Workflow::<TrialDraft>::new();
        wf.edit(|d| d.contact = ContactDetails::new("Jo", "a@b.com", "Acme"));
        wf
    }

    #[test]
    fn test_errors_refresh_after_first_attempt() {
        let mut wf = Workflow::<TrialDraft>::new();
        wf.edit(|d| d.contact.full_name = "J".into());
        assert!(wf.errors().is_empty(), "no errors before the first submit");

        assert_eq!(wf.begin_submit(), SubmitStep::Rejected(3));
        wf.edit(|d| d.contact.full_name = "Jo".into());
        assert_eq!(wf.errors().len(), 2);
    }

    #[test]
    fn test_edits_locked_while_submitting() {
        let mut wf = make_trial();
        assert!(matches!(wf.begin_submit(), SubmitStep::Proceed(..)));
        assert!(wf.edit(|d| d.contact.company = "Other".into()).is_none());
        assert_eq!(wf.draft().contact.company, "Acme");
        assert!(!wf.request_close());
    }

    #[test]
    fn test_close_discards_draft() {
        let mut wf = make_trial();
        assert!(wf.request_close());
        assert_eq!(wf.draft(), &TrialDraft::default());
    }

    #[test]
    fn test_resolve_with_stale_ticket_gives_no_notice() {
        let mut wf = make_trial();
        let SubmitStep::Proceed(ticket, _) = wf.begin_submit() else {
            panic!("expected to proceed");
        };
        wf.reset();
        assert_eq!(wf.resolve(ticket, Ok(())), Resolution::Stale);
        assert_eq!(wf.phase(), SubmissionPhase::Idle);
    }

    #[test]
    fn test_auto_close_clears_draft_and_attachments() {
        let mut wf = make_trial();
        wf.edit(|d| {
            d.add_files(
                [FileAttachment::new("cv.pdf", 10, PDF_MIME)],
                &IntakePolicy::default(),
            )
        });
        let SubmitStep::Proceed(ticket, lead) = wf.begin_submit() else {
            panic!("expected to proceed");
        };
        assert_eq!(lead.documents.len(), 1);
        assert!(matches!(wf.resolve(ticket, Ok(())), Resolution::Succeeded(_)));
        assert_eq!(wf.draft().attachments.len(), 1, "kept while success is shown");

        assert!(wf.auto_close(ticket));
        assert!(wf.draft().attachments.is_empty());
        assert_eq!(wf.phase(), SubmissionPhase::Idle);
    }
}
