//! Attachment intake for the free-trial form.
//!
//! Each file in a batch is checked on its own against the size limit and the
//! accepted document types. Accepted files are appended to the running list
//! in their original order; rejected ones are reported back so the caller can
//! raise a single aggregated notice for the whole batch.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::notice::Notice;
use crate::error::FileRejection;

const MIB: u64 = 1024 * 1024;

/// Largest accepted attachment, 20 MiB.
pub const MAX_ATTACHMENT_BYTES: u64 = 20 * MIB;

pub const PDF_MIME: &str = "application/pdf";
pub const DOC_MIME: &str = "application/msword";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Title of the notice raised when part of a batch is refused.
pub const REJECTION_TITLE: &str = "Some files couldn't be uploaded";

/// A file the user picked or dropped. Only metadata is kept; contents never leave the browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileAttachment {
    pub name: String,
    pub byte_size: u64,
    pub mime_type: String,
}

impl FileAttachment {
    pub fn new(name: impl Into<String>, byte_size: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            byte_size,
            mime_type: mime_type.into(),
        }
    }

    pub fn kind(&self) -> AttachmentKind {
        AttachmentKind::from_mime(&self.mime_type)
    }

    pub fn display_size(&self) -> String {
        format_file_size(self.byte_size)
    }
}

/// Coarse document family, used to pick the icon in the file list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentKind {
    Pdf,
    WordDocument,
    Other,
}

impl AttachmentKind {
    pub fn from_mime(mime: &str) -> Self {
        if mime.contains("pdf") {
            AttachmentKind::Pdf
        } else if mime.contains("word") || mime.contains("document") {
            AttachmentKind::WordDocument
        } else {
            AttachmentKind::Other
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            AttachmentKind::Pdf => "📄",
            AttachmentKind::WordDocument => "📝",
            AttachmentKind::Other => "📎",
        }
    }
}

/// Size and type limits for uploaded documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IntakePolicy {
    pub max_bytes: u64,
    pub accepted_mime_types: Vec<String>,
}

impl Default for IntakePolicy {
    fn default() -> Self {
        Self {
            max_bytes: MAX_ATTACHMENT_BYTES,
            accepted_mime_types: vec![
                PDF_MIME.to_string(),
                DOC_MIME.to_string(),
                DOCX_MIME.to_string(),
            ],
        }
    }
}

impl IntakePolicy {
    /// Size is checked before type, so an oversized file of any type reports "too large".
    pub fn check(&self, file: &FileAttachment) -> Result<(), FileRejection> {
        if file.byte_size > self.max_bytes {
            return Err(FileRejection::TooLarge {
                name: file.name.clone(),
                limit_mb: self.max_bytes / MIB,
            });
        }
        if !self.accepted_mime_types.iter().any(|m| m == &file.mime_type) {
            return Err(FileRejection::InvalidFormat {
                name: file.name.clone(),
            });
        }
        Ok(())
    }
}

/// Ordered, append-only list of accepted attachments.
///
/// Files with the same name are kept as separate entries; entries are
/// identified only by position, and removing one shifts the rest down.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttachmentList {
    items: Vec<FileAttachment>,
}

impl AttachmentList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append every file that passes `policy`, returning the rejections in batch order.
    pub fn intake(
        &mut self,
        batch: impl IntoIterator<Item = FileAttachment>,
        policy: &IntakePolicy,
    ) -> Vec<FileRejection> {
        let mut rejections = Vec::new();
        for file in batch {
            match policy.check(&file) {
                Ok(()) => self.items.push(file),
                Err(rejection) => {
                    debug!("Rejected attachment: {}", rejection);
                    rejections.push(rejection);
                }
            }
        }
        rejections
    }

    /// Remove the entry at `index`. Later entries move down by one.
    pub fn remove(&mut self, index: usize) -> Option<FileAttachment> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FileAttachment> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[FileAttachment] {
        &self.items
    }
}

/// One notice summarising every rejection from a batch, or `None` if nothing was refused.
pub fn rejection_notice(rejections: &[FileRejection]) -> Option<Notice> {
    if rejections.is_empty() {
        return None;
    }
    let description = rejections
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    Some(Notice::destructive(REJECTION_TITLE, description))
}

/// Human-readable size such as "0 Bytes", "512 Bytes", "1.5 KB" or "2 MB".
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 3] = ["Bytes", "KB", "MB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = format!("{:.2}", (value * 100.0).round() / 100.0);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lead::notice::Severity;

    fn pdf(name: &str, bytes: u64) -> FileAttachment {
        FileAttachment::new(name, bytes, PDF_MIME)
    }

    fn docx(name: &str, bytes: u64) -> FileAttachment {
        FileAttachment::new(name, bytes, DOCX_MIME)
    }

    #[test]
    fn test_oversized_rejected_regardless_of_type() {
        let policy = IntakePolicy::default();
        for mime in [PDF_MIME, DOC_MIME, DOCX_MIME, "image/png"] {
            let file = FileAttachment::new("big", MAX_ATTACHMENT_BYTES + 1, mime);
            assert_eq!(
                policy.check(&file),
                Err(FileRejection::TooLarge { name: "big".into(), limit_mb: 20 })
            );
        }
    }

    #[test]
    fn test_exact_limit_accepted() {
        let policy = IntakePolicy::default();
        assert!(policy.check(&pdf("edge.pdf", MAX_ATTACHMENT_BYTES)).is_ok());
    }

    #[test]
    fn test_rejection_wording() {
        let policy = IntakePolicy::default();
        let big = policy.check(&pdf("cv.pdf", 25 * MIB)).unwrap_err();
        assert_eq!(big.to_string(), "cv.pdf (too large - max 20MB)");

        let png = policy
            .check(&FileAttachment::new("photo.png", 1024, "image/png"))
            .unwrap_err();
        assert_eq!(
            png.to_string(),
            "photo.png (invalid format - only PDF, DOC, DOCX allowed)"
        );
    }

    #[test]
    fn test_accepted_files_keep_batch_order_after_existing() {
        let policy = IntakePolicy::default();
        let mut list = AttachmentList::new();
        list.intake([pdf("a.pdf", 10)], &policy);

        let rejections = list.intake(
            [
                docx("b.docx", 20),
                FileAttachment::new("c.txt", 5, "text/plain"),
                FileAttachment::new("d.doc", 30, DOC_MIME),
            ],
            &policy,
        );

        assert_eq!(rejections.len(), 1);
        let names: Vec<&str> = list.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a.pdf", "b.docx", "d.doc"]);
    }

    #[test]
    fn test_duplicate_names_are_kept() {
        let policy = IntakePolicy::default();
        let mut list = AttachmentList::new();
        list.intake([pdf("resume.pdf", 100), pdf("resume.pdf", 100)], &policy);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_remove_shifts_later_entries() {
        let policy = IntakePolicy::default();
        let mut list = AttachmentList::new();
        list.intake(
            [pdf("0.pdf", 1), pdf("1.pdf", 1), pdf("2.pdf", 1), pdf("3.pdf", 1)],
            &policy,
        );

        let removed = list.remove(1).unwrap();
        assert_eq!(removed.name, "1.pdf");
        let names: Vec<&str> = list.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["0.pdf", "2.pdf", "3.pdf"]);

        assert!(list.remove(3).is_none());
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_single_aggregated_notice() {
        let policy = IntakePolicy::default();
        let mut list = AttachmentList::new();
        let rejections = list.intake(
            [
                pdf("huge.pdf", 25 * MIB),
                FileAttachment::new("notes.txt", 10, "text/plain"),
            ],
            &policy,
        );

        let notice = rejection_notice(&rejections).unwrap();
        assert_eq!(notice.title, REJECTION_TITLE);
        assert_eq!(notice.severity, Severity::Destructive);
        assert_eq!(
            notice.description,
            "huge.pdf (too large - max 20MB), notes.txt (invalid format - only PDF, DOC, DOCX allowed)"
        );
        assert!(rejection_notice(&[]).is_none());
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(1500), "1.46 KB");
        assert_eq!(format_file_size(2 * MIB), "2 MB");
        assert_eq!(format_file_size(3 * 1024 * MIB), "3072 MB");
    }

    #[test]
    fn test_attachment_kind_icons() {
        assert_eq!(pdf("a", 1).kind(), AttachmentKind::Pdf);
        assert_eq!(docx("a", 1).kind(), AttachmentKind::WordDocument);
        assert_eq!(FileAttachment::new("a", 1, DOC_MIME).kind(), AttachmentKind::WordDocument);
        assert_eq!(AttachmentKind::from_mime("text/plain").icon(), "📎");
    }
}
