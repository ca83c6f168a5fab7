//! In-progress form data for the two lead-capture dialogs.

use chrono::NaiveDate;
use serde::Serialize;

use super::intake::{rejection_notice, AttachmentList, FileAttachment, IntakePolicy};
use super::notice::Notice;
use super::schedule::{format_long_date, is_bookable, TimeSlot};
use super::validation::{check_company, check_email, check_full_name, check_present, Field, ValidationResult};
use crate::error::DateUnavailable;

/// Behaviour the submission workflow needs from a draft.
pub trait LeadForm: Default {
    /// Check every field. Pure; the draft is not changed.
    fn validate(&self) -> ValidationResult;

    /// Payload sent to the lead submitter once validation passes.
    fn submission(&self) -> LeadSubmission;

    /// Toast shown once the submission has been accepted.
    fn success_notice(&self) -> Notice;
}

/// Contact fields present on both forms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDetails {
    pub full_name: String,
    pub email: String,
    pub company: String,
}

impl ContactDetails {
    pub fn new(full_name: impl Into<String>, email: impl Into<String>, company: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            email: email.into(),
            company: company.into(),
        }
    }

    fn validate_into(&self, result: &mut ValidationResult) {
        result.record(Field::FullName, check_full_name(&self.full_name));
        result.record(Field::Email, check_email(&self.email));
        result.record(Field::Company, check_company(&self.company));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadKind {
    Demo,
    Trial,
}

/// What a successful submit hands to the submitter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadSubmission {
    pub kind: LeadKind,
    pub full_name: String,
    pub email: String,
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo_time: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub documents: Vec<FileAttachment>,
}

impl LeadSubmission {
    fn from_contact(kind: LeadKind, contact: &ContactDetails) -> Self {
        Self {
            kind,
            full_name: contact.full_name.trim().to_string(),
            email: contact.email.clone(),
            company: contact.company.trim().to_string(),
            demo_date: None,
            demo_time: None,
            documents: Vec::new(),
        }
    }
}

/// Demo booking form. Every field is required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemoDraft {
    pub contact: ContactDetails,
    date: Option<NaiveDate>,
    pub time: Option<TimeSlot>,
}

impl DemoDraft {
    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    /// Select a demo date. Past dates and weekends are refused and leave the draft as it was.
    pub fn pick_date(&mut self, date: NaiveDate, today: NaiveDate) -> Result<(), DateUnavailable> {
        if !is_bookable(date, today) {
            return Err(DateUnavailable { date });
        }
        self.date = Some(date);
        Ok(())
    }
}

impl LeadForm for DemoDraft {
    fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::new();
        self.contact.validate_into(&mut result);
        result.record(
            Field::Date,
            check_present(self.date.as_ref(), "Please select a date for your demo"),
        );
        result.record(
            Field::Time,
            check_present(self.time.as_ref(), "Please select a time slot"),
        );
        result
    }

    fn submission(&self) -> LeadSubmission {
        LeadSubmission {
            demo_date: self.date,
            demo_time: self.time.map(|t| t.label()),
            ..LeadSubmission::from_contact(LeadKind::Demo, &self.contact)
        }
    }

    fn success_notice(&self) -> Notice {
        let when = match (self.date, self.time) {
            (Some(date), Some(time)) => format!("{} at {}", format_long_date(date), time),
            (Some(date), None) => format_long_date(date),
            _ => "your selected time".to_string(),
        };
        Notice::normal("Demo Scheduled Successfully!", format!("We'll see you on {}", when))
    }
}

/// Free-trial signup form with optional supporting documents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrialDraft {
    pub contact: ContactDetails,
    pub attachments: AttachmentList,
}

impl TrialDraft {
    /// Run a batch of picked or dropped files through intake.
    /// Returns the aggregated rejection notice when any file was refused.
    pub fn add_files(
        &mut self,
        batch: impl IntoIterator<Item = FileAttachment>,
        policy: &IntakePolicy,
    ) -> Option<Notice> {
        let rejections = self.attachments.intake(batch, policy);
        rejection_notice(&rejections)
    }

    pub fn remove_attachment(&mut self, index: usize) -> Option<FileAttachment> {
        self.attachments.remove(index)
    }
}

impl LeadForm for TrialDraft {
    fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::new();
        self.contact.validate_into(&mut result);
        result
    }

    fn submission(&self) -> LeadSubmission {
        LeadSubmission {
            documents: self.attachments.as_slice().to_vec(),
            ..LeadSubmission::from_contact(LeadKind::Trial, &self.contact)
        }
    }

    fn success_notice(&self) -> Notice {
        Notice::normal(
            "Free Trial Started!",
            "Your documents have been received. We'll contact you soon.",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lead::intake::{DOCX_MIME, PDF_MIME};

    // Friday
    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn make_demo() -> DemoDraft {
        let mut draft = DemoDraft {
            contact: ContactDetails::new("Jo", "a@b.com", "Acme"),
            ..Default::default()
        };
        draft
            .pick_date(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(), today())
            .unwrap();
        draft.time = TimeSlot::from_label("10:00 AM");
        draft
    }

    #[test]
    fn test_complete_demo_is_valid() {
        let draft = make_demo();
        let result = draft.validate();
        assert!(result.is_empty(), "Expected no errors, got: {:?}", result);
    }

    #[test]
    fn test_empty_demo_reports_every_field() {
        let result = DemoDraft::default().validate();
        assert_eq!(result.len(), 5);
        assert_eq!(
            result.message(Field::Date).as_deref(),
            Some("Please select a date for your demo")
        );
        assert_eq!(result.message(Field::Time).as_deref(), Some("Please select a time slot"));
    }

    #[test]
    fn test_pick_date_refuses_weekend_and_past() {
        let mut draft = make_demo();
        let before = draft.date();

        let sunday = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        assert_eq!(draft.pick_date(sunday, today()), Err(DateUnavailable { date: sunday }));
        let yesterday = NaiveDate::from_ymd_opt(2026, 10, 15).unwrap();
        assert!(draft.pick_date(yesterday, today()).is_err());

        assert_eq!(draft.date(), before);
    }

    #[test]
    fn test_pick_date_refuses_day_that_has_passed() {
        let mut draft = DemoDraft::default();
        let friday = today();
        let monday = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();

        assert!(draft.pick_date(friday, friday).is_ok());
        assert_eq!(draft.pick_date(friday, monday), Err(DateUnavailable { date: friday }));
        assert_eq!(draft.date(), Some(friday));
    }

    #[test]
    fn test_demo_success_notice_mentions_slot() {
        let notice = make_demo().success_notice();
        assert_eq!(notice.title, "Demo Scheduled Successfully!");
        assert_eq!(notice.description, "We'll see you on October 19th, 2026 at 10:00 AM");
    }

    #[test]
    fn test_demo_submission_payload() {
        let lead = make_demo().submission();
        assert_eq!(lead.kind, LeadKind::Demo);
        assert_eq!(lead.demo_time.as_deref(), Some("10:00 AM"));

        let json = serde_json::to_value(&lead).unwrap();
        assert_eq!(json["kind"], "demo");
        assert_eq!(json["fullName"], "Jo");
        assert_eq!(json["demoDate"], "2026-10-19");
        assert!(json.get("documents").is_none());
    }

    #[test]
    fn test_trial_attachments_are_optional() {
        let draft = TrialDraft {
            contact: ContactDetails::new("Jo", "a@b.com", "Acme"),
            ..Default::default()
        };
        assert!(draft.validate().is_empty());
    }

    #[test]
    fn test_trial_mixed_batch() {
        let mut draft = TrialDraft {
            contact: ContactDetails::new("Jo", "a@b.com", "Acme"),
            ..Default::default()
        };
        let notice = draft.add_files(
            [
                FileAttachment::new("big.pdf", 25 * 1024 * 1024, PDF_MIME),
                FileAttachment::new("cv.docx", 2 * 1024 * 1024, DOCX_MIME),
            ],
            &IntakePolicy::default(),
        );

        let notice = notice.expect("one file was rejected");
        assert_eq!(notice.description, "big.pdf (too large - max 20MB)");
        assert_eq!(draft.attachments.len(), 1);
        assert!(draft.validate().is_empty());

        let lead = draft.submission();
        assert_eq!(lead.documents.len(), 1);
        assert_eq!(lead.documents[0].name, "cv.docx");
    }

    #[test]
    fn test_trial_short_company_blocks() {
        let draft = TrialDraft {
            contact: ContactDetails::new("Jo", "a@b.com", " A "),
            ..Default::default()
        };
        let result = draft.validate();
        assert_eq!(result.fields().collect::<Vec<_>>(), vec![Field::Company]);
    }
}
