//! Site-wide tunables.
//!
//! Defaults match the production page. The host HTML may override any of them
//! with a JSON block:
//!
//! ```html
//! <script id="site-config" type="application/json">{ "successHoldMs": 1500 }</script>
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::lead::IntakePolicy;

/// Element id of the optional JSON override block.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// Simulated round-trip for a lead submission.
    pub submit_latency_ms: u64,
    /// How long the success panel stays up before the dialog closes itself.
    pub success_hold_ms: u64,
    pub toast_duration_ms: u64,
    pub carousel_interval_ms: u64,
    pub intake: IntakePolicy,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            submit_latency_ms: 1000,
            success_hold_ms: 3000,
            toast_duration_ms: 5000,
            carousel_interval_ms: 5000,
            intake: IntakePolicy::default(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn submit_latency(&self) -> Duration {
        Duration::from_millis(self.submit_latency_ms)
    }

    pub fn success_hold(&self) -> Duration {
        Duration::from_millis(self.success_hold_ms)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    pub fn carousel_interval(&self) -> Duration {
        Duration::from_millis(self.carousel_interval_ms)
    }
}
