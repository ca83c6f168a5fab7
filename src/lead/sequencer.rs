//! Submission state machine for a single lead dialog.
//!
//! ```text
//! Idle -> Validating -> Submitting -> Succeeded -> AutoClosing -> Idle
//!              |             |
//!              +--> Idle     +--> Idle (Failed)
//! ```
//!
//! Every submission is stamped with a [`Ticket`]. Late callbacks holding a
//! ticket from an earlier generation are ignored, so a timer that fires after
//! the dialog was reset cannot touch the new draft.

use crate::error::SubmitError;

use super::validation::ValidationResult;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    AutoClosing,
}

/// Which view the dialog shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionOutcome {
    #[default]
    Pending,
    Succeeded,
    Failed(String),
}

/// Identifies one submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequencer {
    phase: SubmissionPhase,
    outcome: SubmissionOutcome,
    generation: u64,
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn outcome(&self) -> &SubmissionOutcome {
        &self.outcome
    }

    /// Idle -> Validating. Returns false if a submission is already under way.
    pub fn begin(&mut self) -> bool {
        if self.phase != SubmissionPhase::Idle {
            return false;
        }
        self.generation += 1;
        self.phase = SubmissionPhase::Validating;
        self.outcome = SubmissionOutcome::Pending;
        true
    }

    /// Validating -> Submitting when `result` is empty, otherwise back to Idle.
    pub fn finish_validation(&mut self, result: &ValidationResult) -> Option<Ticket> {
        if self.phase != SubmissionPhase::Validating {
            return None;
        }
        if !result.is_empty() {
            self.phase = SubmissionPhase::Idle;
            return None;
        }
        self.phase = SubmissionPhase::Submitting;
        Some(Ticket(self.generation))
    }

    /// Submitting -> Succeeded, or back to Idle with a `Failed` outcome.
    /// Returns false when the ticket is stale.
    pub fn resolve(&mut self, ticket: Ticket, result: Result<(), SubmitError>) -> bool {
        if !self.holds(ticket, SubmissionPhase::Submitting) {
            return false;
        }
        match result {
            Ok(()) => {
                self.phase = SubmissionPhase::Succeeded;
                self.outcome = SubmissionOutcome::Succeeded;
            }
            Err(e) => {
                self.phase = SubmissionPhase::Idle;
                self.outcome = SubmissionOutcome::Failed(e.to_string());
            }
        }
        true
    }

    /// Succeeded -> AutoClosing, once the confirmation has been on screen long enough.
    pub fn start_auto_close(&mut self, ticket: Ticket) -> bool {
        if !self.holds(ticket, SubmissionPhase::Succeeded) {
            return false;
        }
        self.phase = SubmissionPhase::AutoClosing;
        true
    }

    /// AutoClosing -> Idle.
    pub fn complete(&mut self, ticket: Ticket) -> bool {
        if !self.holds(ticket, SubmissionPhase::AutoClosing) {
            return false;
        }
        self.phase = SubmissionPhase::Idle;
        self.outcome = SubmissionOutcome::Pending;
        true
    }

    /// Drop back to Idle and invalidate every outstanding ticket.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.phase = SubmissionPhase::Idle;
        self.outcome = SubmissionOutcome::Pending;
    }

    /// The user may dismiss the dialog only before anything has been sent.
    pub fn can_close(&self) -> bool {
        matches!(self.phase, SubmissionPhase::Idle | SubmissionPhase::Validating)
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }

    pub fn shows_success(&self) -> bool {
        matches!(self.phase, SubmissionPhase::Succeeded | SubmissionPhase::AutoClosing)
    }

    fn holds(&self, ticket: Ticket, phase: SubmissionPhase) -> bool {
        ticket.0 == self.generation && self.phase == phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FieldError;
    use crate::lead::validation::Field;

    fn failing() -> ValidationResult {
        let mut result = ValidationResult::new();
        result.insert(Field::FullName, FieldError::TooShort { label: "Full name", min: 2 });
        result
    }

    fn submitting() -> (Sequencer, Ticket) {
        let mut seq = Sequencer::new();
        assert!(seq.begin());
        let ticket = seq.finish_validation(&ValidationResult::new()).unwrap();
        (seq, ticket)
    }

    #[test]
    fn test_invalid_draft_returns_to_idle() {
        let mut seq = Sequencer::new();
        assert!(seq.begin());
        assert_eq!(seq.phase(), SubmissionPhase::Validating);
        assert!(seq.finish_validation(&failing()).is_none());
        assert_eq!(seq.phase(), SubmissionPhase::Idle);
        assert_eq!(seq.outcome(), &SubmissionOutcome::Pending);
    }

    #[test]
    fn test_full_happy_path() {
        let (mut seq, ticket) = submitting();
        assert!(seq.is_submitting());
        assert!(!seq.can_close());

        assert!(seq.resolve(ticket, Ok(())));
        assert_eq!(seq.phase(), SubmissionPhase::Succeeded);
        assert!(seq.shows_success());

        assert!(seq.start_auto_close(ticket));
        assert_eq!(seq.phase(), SubmissionPhase::AutoClosing);
        assert!(seq.shows_success());
        assert!(!seq.can_close());

        assert!(seq.complete(ticket));
        assert_eq!(seq.phase(), SubmissionPhase::Idle);
        assert_eq!(seq.outcome(), &SubmissionOutcome::Pending);
        assert!(seq.can_close());
    }

    #[test]
    fn test_begin_ignored_while_busy() {
        let (mut seq, _) = submitting();
        assert!(!seq.begin());
        assert_eq!(seq.phase(), SubmissionPhase::Submitting);
    }

    #[test]
    fn test_failure_surfaces_reason_and_allows_retry() {
        let (mut seq, ticket) = submitting();
        assert!(seq.resolve(ticket, Err(SubmitError::Rejected("busy".into()))));
        assert_eq!(seq.phase(), SubmissionPhase::Idle);
        assert_eq!(
            seq.outcome(),
            &SubmissionOutcome::Failed("Submission rejected: busy".into())
        );
        assert!(seq.begin());
        assert_eq!(seq.outcome(), &SubmissionOutcome::Pending);
    }

    #[test]
    fn test_stale_ticket_is_ignored_after_reset() {
        let (mut seq, ticket) = submitting();
        seq.reset();
        assert!(!seq.resolve(ticket, Ok(())));
        assert_eq!(seq.phase(), SubmissionPhase::Idle);

        let (mut seq, ticket) = submitting();
        seq.resolve(ticket, Ok(()));
        seq.reset();
        assert!(seq.begin());
        assert!(!seq.start_auto_close(ticket));
        assert!(!seq.complete(ticket));
        assert_eq!(seq.phase(), SubmissionPhase::Validating);
    }

    #[test]
    fn test_out_of_order_steps_rejected() {
        let (mut seq, ticket) = submitting();
        assert!(!seq.start_auto_close(ticket));
        assert!(!seq.complete(ticket));
        assert_eq!(seq.phase(), SubmissionPhase::Submitting);
    }
}
