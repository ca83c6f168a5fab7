use std::time::Duration;

use tracing::{debug, info};

use crate::browser::BrowserSleep;
use crate::error::SubmitError;
use crate::lead::{LeadSubmission, LeadSubmitter, Sleep};

// -- Lead submission --

/// Stand-in for a lead-intake endpoint. Waits `latency`, logs the payload and
/// always accepts. No request leaves the browser.
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter<T = BrowserSleep> {
    latency: Duration,
    sleeper: T,
}

impl SimulatedSubmitter<BrowserSleep> {
    pub fn new(latency: Duration) -> Self {
        Self::with_sleeper(latency, BrowserSleep)
    }
}

impl<T: Sleep> SimulatedSubmitter<T> {
    pub fn with_sleeper(latency: Duration, sleeper: T) -> Self {
        Self { latency, sleeper }
    }
}

impl<T: Sleep> LeadSubmitter for SimulatedSubmitter<T> {
    async fn submit(&self, lead: LeadSubmission) -> Result<(), SubmitError> {
        let payload = serde_json::to_string(&lead).map_err(|e| SubmitError::Encode(e.to_string()))?;
        debug!("Lead payload: {}", payload);

        self.sleeper.sleep(self.latency).await;

        info!(
            "Accepted {:?} lead ({} document(s))",
            lead.kind,
            lead.documents.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use futures::executor::block_on;

    use crate::lead::{ContactDetails, LeadForm, TrialDraft};

    #[derive(Default)]
    struct RecordingSleep {
        waits: RefCell<Vec<Duration>>,
    }

    impl Sleep for RecordingSleep {
        async fn sleep(&self, duration: Duration) {
            self.waits.borrow_mut().push(duration);
        }
    }

    #[test]
    fn test_simulated_submitter_waits_latency_and_accepts() {
        let submitter = SimulatedSubmitter::with_sleeper(Duration::from_millis(1000), RecordingSleep::default());
        let draft = TrialDraft {
            contact: ContactDetails::new("Jo", "a@b.com", "Acme"),
            ..Default::default()
        };

        let result = block_on(submitter.submit(draft.submission()));

        assert_eq!(result, Ok(()));
        assert_eq!(*submitter.sleeper.waits.borrow(), vec![Duration::from_millis(1000)]);
    }
}
