use std::time::Duration;

/// A file handed over by the view layer for validation. Consumed by the
/// batch; not retained afterwards.
#[derive(Debug, Clone)]
pub struct CandidateFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl CandidateFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self { name: name.into(), mime_type: mime_type.into(), bytes }
    }

    /// Infers the mime type from the file name when the caller has none.
    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let name = name.into();
        let mime_type =
            mime_guess::from_path(&name).first_or_octet_stream().essence_str().to_string();
        Self { name, mime_type, bytes }
    }
}

/// Upload acceptance policy.
#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub max_file_size: usize,
    pub accepted_mime_types: Vec<String>,
    /// Simulated transfer time applied to every batch before commit.
    pub simulated_latency: Duration,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_file_size: 5 * 1024 * 1024, // 5 MiB
            accepted_mime_types: vec![
                "image/jpeg".to_string(),
                "image/png".to_string(),
                "image/gif".to_string(),
                "application/pdf".to_string(),
            ],
            simulated_latency: Duration::from_millis(crate::ENV.upload_latency_ms),
        }
    }
}
