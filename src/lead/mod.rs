//! Lead-capture core shared by the demo and free-trial dialogs.
//!
//! Nothing in here touches the DOM. The dialogs in `components` bind these
//! types to signals and supply browser implementations of the injected
//! collaborators (submitter, sleeper, notifier).

pub mod draft;
pub mod intake;
pub mod notice;
pub mod schedule;
pub mod sequencer;
pub mod validation;
pub mod workflow;

pub use draft::{ContactDetails, DemoDraft, LeadForm, LeadKind, LeadSubmission, TrialDraft};
pub use intake::{AttachmentKind, AttachmentList, FileAttachment, IntakePolicy};
pub use notice::{Notice, Notifier, Severity};
pub use schedule::{MonthView, TimeSlot};
pub use sequencer::{SubmissionOutcome, SubmissionPhase};
pub use validation::{Field, ValidationResult};
pub use workflow::{submit_lead, LeadSubmitter, Sleep, SubmitReport, Workflow, WorkflowStore};
