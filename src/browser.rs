//! Small wrappers over browser APIs used by the components.

use std::time::Duration;

use chrono::NaiveDate;
use gloo_timers::future::TimeoutFuture;
use tracing::warn;

use crate::config::{SiteConfig, CONFIG_ELEMENT_ID};
use crate::lead::{FileAttachment, Sleep};

/// Today's date in the visitor's local time zone.
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or_default()
}

/// Metadata for every file in a picker or drop-event file list.
pub fn attachments_from(files: &web_sys::FileList) -> Vec<FileAttachment> {
    (0..files.length())
        .filter_map(|i| files.get(i))
        .map(|file| FileAttachment::new(file.name(), file.size().max(0.0) as u64, file.type_()))
        .collect()
}

/// Read the page's config override block, falling back to defaults.
pub fn load_site_config() -> SiteConfig {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match raw {
        Some(raw) if !raw.trim().is_empty() => SiteConfig::from_json(&raw).unwrap_or_else(|e| {
            warn!("Ignoring #{}: {}", CONFIG_ELEMENT_ID, e);
            SiteConfig::default()
        }),
        _ => SiteConfig::default(),
    }
}

/// Timer-backed sleeper for the submission workflow.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSleep;

impl Sleep for BrowserSleep {
    async fn sleep(&self, duration: Duration) {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        TimeoutFuture::new(millis).await;
    }
}
