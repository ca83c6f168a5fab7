use chrono::NaiveDate;
use thiserror::Error;

/// Why a single form field failed validation.
/// The `Display` text is shown inline under the field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{label} must be at least {min} characters")]
    TooShort { label: &'static str, min: usize },

    #[error("Please enter a valid email address")]
    InvalidFormat,

    #[error("{prompt}")]
    Required { prompt: &'static str },
}

/// Why a candidate attachment was left out of the upload list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileRejection {
    #[error("{name} (too large - max {limit_mb}MB)")]
    TooLarge { name: String, limit_mb: u64 },

    #[error("{name} (invalid format - only PDF, DOC, DOCX allowed)")]
    InvalidFormat { name: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{date} is not available for a demo")]
pub struct DateUnavailable {
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Could not encode submission: {0}")]
    Encode(String),

    #[error("Submission rejected: {0}")]
    Rejected(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config error: {0}")]
    Parse(#[from] serde_json::Error),
}
