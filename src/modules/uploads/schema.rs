use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An accepted file as the console lists it. Lives only in memory for the
/// lifetime of the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadRecord {
    pub id: Uuid,
    pub name: String,
    pub size: u64,
    pub mime_type: String,
    /// Human-readable capture time.
    pub uploaded_at: String,
    /// Email of the session that uploaded the file, if any.
    pub uploader: Option<String>,
    /// `data:` URI, present only for image files.
    pub preview: Option<String>,
}

/// Result of one validated batch. Accepted records are also appended to the
/// service's collection; rejections never block the rest of the batch.
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    pub accepted: Vec<UploadRecord>,
    pub rejections: Vec<String>,
}

impl BatchOutcome {
    /// Space-joined rejection text for inline display, `None` when every
    /// file was accepted.
    pub fn rejection_summary(&self) -> Option<String> {
        if self.rejections.is_empty() {
            None
        } else {
            Some(self.rejections.join(" "))
        }
    }
}
