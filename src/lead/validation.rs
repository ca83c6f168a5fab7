//! Field rules shared by the demo and trial forms.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::FieldError;

/// Minimum number of characters (after trimming) for name-like fields.
pub const MIN_NAME_CHARS: usize = 2;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern compiles")
});

/// A validated input on one of the lead forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FullName,
    Email,
    Company,
    Date,
    Time,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::Email => "email",
            Field::Company => "company",
            Field::Date => "date",
            Field::Time => "time",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-field errors from one validation pass. Empty means the draft may be submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: BTreeMap<Field, FieldError>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, error: FieldError) {
        self.errors.insert(field, error);
    }

    /// Record the outcome of a single check, keeping only failures.
    pub fn record(&mut self, field: Field, check: Result<(), FieldError>) {
        if let Err(error) = check {
            self.insert(field, error);
        }
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    /// Inline message for a field, if it failed.
    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(|e| e.to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.keys().copied()
    }
}

/// Fails when `value` has fewer than `min` characters once surrounding whitespace is removed.
pub fn check_min_chars(value: &str, label: &'static str, min: usize) -> Result<(), FieldError> {
    if value.trim().chars().count() < min {
        return Err(FieldError::TooShort { label, min });
    }
    Ok(())
}

pub fn check_full_name(value: &str) -> Result<(), FieldError> {
    check_min_chars(value, "Full name", MIN_NAME_CHARS)
}

pub fn check_company(value: &str) -> Result<(), FieldError> {
    check_min_chars(value, "Company name", MIN_NAME_CHARS)
}

pub fn check_email(value: &str) -> Result<(), FieldError> {
    if is_valid_email(value) {
        Ok(())
    } else {
        Err(FieldError::InvalidFormat)
    }
}

/// Plain `local@domain.tld` check. The local part may not start with a dot
/// and neither side may contain consecutive dots.
pub fn is_valid_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_PATTERN.is_match(value)
}

pub fn check_present<T>(value: Option<&T>, prompt: &'static str) -> Result<(), FieldError> {
    match value {
        Some(_) => Ok(()),
        None => Err(FieldError::Required { prompt }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_names_rejected() {
        for value in ["", "J", " J ", "   "] {
            let err = check_full_name(value).unwrap_err();
            assert_eq!(err.to_string(), "Full name must be at least 2 characters");
        }
        assert!(check_full_name("Jo").is_ok());
    }

    #[test]
    fn test_min_chars_counts_characters_not_bytes() {
        assert!(check_company("Öz").is_ok());
        assert!(check_company("Ö").is_err());
    }

    #[test]
    fn test_company_message() {
        let err = check_company("A").unwrap_err();
        assert_eq!(err, FieldError::TooShort { label: "Company name", min: 2 });
        assert_eq!(err.to_string(), "Company name must be at least 2 characters");
    }

    #[test]
    fn test_valid_emails() {
        for email in ["a@b.com", "jane.doe+hr@acme.co.uk", "o'neil@example.org", "x_y@sub-domain.io"] {
            assert!(is_valid_email(email), "{} should be valid", email);
        }
    }

    #[test]
    fn test_invalid_emails() {
        for email in [
            "",
            "plainaddress",
            "missing-domain@",
            "@no-local.com",
            "no-tld@example",
            "dot.@example.com",
            ".lead@example.com",
            "double..dot@example.com",
            "user@example..com",
            "user@-example.com",
            "user@example.c",
            "spaces in@example.com",
        ] {
            assert_eq!(
                check_email(email),
                Err(FieldError::InvalidFormat),
                "{:?} should be rejected",
                email
            );
        }
    }

    #[test]
    fn test_required_prompt_is_message() {
        let err = check_present::<u8>(None, "Please select a time slot").unwrap_err();
        assert_eq!(err.to_string(), "Please select a time slot");
        assert!(check_present(Some(&1u8), "unused").is_ok());
    }

    #[test]
    fn test_result_keeps_only_failures() {
        let mut result = ValidationResult::new();
        result.record(Field::FullName, check_full_name("Jo"));
        result.record(Field::Company, check_company("A"));
        result.record(Field::Email, check_email("nope"));

        assert_eq!(result.len(), 2);
        assert!(result.get(Field::FullName).is_none());
        assert_eq!(
            result.fields().collect::<Vec<_>>(),
            vec![Field::Email, Field::Company]
        );
        assert_eq!(
            result.message(Field::Email).as_deref(),
            Some("Please enter a valid email address")
        );
    }
}
