use futures_util::future::join_all;
use log::{info, warn};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::api::error;
use crate::modules::session::schema::Session;
use crate::modules::uploads::model::{CandidateFile, UploadPolicy};
use crate::modules::uploads::schema::{BatchOutcome, UploadRecord};
use crate::utils::{is_image, preview_data_uri};

/// Validates candidate files against the upload policy and keeps the
/// in-memory collection of accepted records.
pub struct UploadService {
    policy: UploadPolicy,
    files: Vec<UploadRecord>,
}

impl UploadService {
    pub fn new(policy: UploadPolicy) -> Self {
        Self { policy, files: Vec::new() }
    }

    pub fn with_defaults() -> Self {
        Self::new(UploadPolicy::default())
    }

    /// Size is checked before type; a file failing the size rule is never
    /// also checked for type.
    fn validate(&self, file: &CandidateFile) -> Result<(), String> {
        if file.bytes.len() > self.policy.max_file_size {
            return Err(format!("{} : File size should not exceed 5 MB.", file.name));
        }
        if !self.policy.accepted_mime_types.contains(&file.mime_type) {
            return Err(format!("{} : The file type is not allowed.", file.name));
        }
        Ok(())
    }

    fn capture_record(&self, file: &CandidateFile, session: Option<&Session>) -> UploadRecord {
        UploadRecord {
            id: Uuid::now_v7(),
            name: file.name.clone(),
            size: file.bytes.len() as u64,
            mime_type: file.mime_type.clone(),
            uploaded_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            uploader: session.map(|s| s.email.clone()),
            preview: None,
        }
    }

    /// Validates the batch in input order, generates previews for accepted
    /// images on independent tasks, then commits every accepted record at
    /// once after the simulated transfer latency. Records land in the
    /// collection in input order no matter how the preview tasks interleave.
    /// Cancelling the token before commit leaves the collection untouched.
    pub async fn process_batch(
        &mut self,
        session: Option<&Session>,
        candidates: Vec<CandidateFile>,
        cancel: &CancellationToken,
    ) -> Result<BatchOutcome, error::Error> {
        let mut rejections = Vec::new();
        let mut records = Vec::new();
        let mut previews = Vec::new();

        for file in candidates {
            match self.validate(&file) {
                Ok(()) => {
                    records.push(self.capture_record(&file, session));
                    previews.push(tokio::spawn(async move {
                        is_image(&file.mime_type)
                            .then(|| preview_data_uri(&file.mime_type, &file.bytes))
                    }));
                }
                Err(reason) => rejections.push(reason),
            }
        }

        let latency = self.policy.simulated_latency;
        let transfer = async {
            let previews = join_all(previews).await;
            tokio::time::sleep(latency).await;
            previews
        };

        let previews = tokio::select! {
            previews = transfer => previews,
            _ = cancel.cancelled() => {
                warn!("Upload batch cancelled before commit, dropping {} record(s)", records.len());
                return Err(error::Error::cancelled("Upload cancelled."));
            }
        };

        for (record, preview) in records.iter_mut().zip(previews) {
            record.preview = preview.map_err(error::SystemError::from)?;
        }

        info!("Upload batch committed: {} accepted, {} rejected", records.len(), rejections.len());
        self.files.extend(records.iter().cloned());
        Ok(BatchOutcome { accepted: records, rejections })
    }

    /// Accepted records in insertion order.
    pub fn uploads(&self) -> &[UploadRecord] {
        &self.files
    }

    /// Removes the record with that id if present; absent ids are not an
    /// error.
    pub fn delete_upload(&mut self, id: Uuid) {
        self.files.retain(|f| f.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::session::schema::Role;
    use std::time::Duration;

    fn zero_latency_policy() -> UploadPolicy {
        UploadPolicy { simulated_latency: Duration::ZERO, ..UploadPolicy::default() }
    }

    fn admin_session() -> Session {
        Session { email: "oussema_admin@gmail.com".to_string(), role: Role::Admin }
    }

    fn pdf(name: &str) -> CandidateFile {
        CandidateFile::new(name, "application/pdf", vec![0u8; 64])
    }

    fn png(name: &str) -> CandidateFile {
        CandidateFile::new(name, "image/png", b"not-a-real-png".to_vec())
    }

    #[tokio::test]
    async fn oversize_file_is_rejected_for_size_only() {
        let mut uploads = UploadService::new(zero_latency_policy());
        // Oversize and a disallowed type at once: only the size rule fires.
        let big = CandidateFile::new("big.bin", "application/zip", vec![0u8; 6 * 1024 * 1024]);

        let outcome = uploads
            .process_batch(None, vec![big], &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(outcome.rejections, vec!["big.bin : File size should not exceed 5 MB."]);
        assert!(outcome.accepted.is_empty());
        assert!(uploads.uploads().is_empty());
    }

    #[tokio::test]
    async fn disallowed_type_is_rejected_when_size_is_fine() {
        let mut uploads = UploadService::new(zero_latency_policy());
        let exe = CandidateFile::new("setup.exe", "application/x-msdownload", vec![0u8; 16]);

        let outcome = uploads
            .process_batch(None, vec![exe], &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(outcome.rejections, vec!["setup.exe : The file type is not allowed."]);
        assert!(uploads.uploads().is_empty());
    }

    #[tokio::test]
    async fn a_file_of_exactly_the_limit_is_accepted() {
        let mut uploads = UploadService::new(zero_latency_policy());
        let edge = CandidateFile::new("edge.pdf", "application/pdf", vec![0u8; 5 * 1024 * 1024]);

        let outcome = uploads
            .process_batch(None, vec![edge], &CancellationToken::new())
            .await
            .unwrap();

        assert!(outcome.rejections.is_empty());
        assert_eq!(uploads.uploads().len(), 1);
    }

    #[tokio::test]
    async fn valid_batch_commits_every_record_with_the_session_email() {
        let mut uploads = UploadService::new(zero_latency_policy());
        let session = admin_session();

        let outcome = uploads
            .process_batch(
                Some(&session),
                vec![pdf("a.pdf"), pdf("b.pdf"), pdf("c.pdf")],
                &CancellationToken::new(),
            )
            .await
            .unwrap();

        assert!(outcome.rejections.is_empty());
        assert_eq!(uploads.uploads().len(), 3);
        for record in uploads.uploads() {
            assert_eq!(record.uploader.as_deref(), Some("oussema_admin@gmail.com"));
            assert!(record.preview.is_none());
        }
    }

    #[tokio::test]
    async fn unauthenticated_uploads_have_no_uploader() {
        let mut uploads = UploadService::new(zero_latency_policy());

        uploads
            .process_batch(None, vec![pdf("anon.pdf")], &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(uploads.uploads()[0].uploader, None);
    }

    #[tokio::test]
    async fn mixed_batch_commits_in_input_order_with_previews_on_images() {
        let mut uploads = UploadService::new(zero_latency_policy());

        uploads
            .process_batch(
                None,
                vec![pdf("first.pdf"), png("second.png"), pdf("third.pdf")],
                &CancellationToken::new(),
            )
            .await
            .unwrap();

        let names: Vec<&str> = uploads.uploads().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["first.pdf", "second.png", "third.pdf"]);

        let image = &uploads.uploads()[1];
        assert!(image.preview.as_deref().unwrap().starts_with("data:image/png;base64,"));
        assert!(uploads.uploads()[0].preview.is_none());
        assert!(uploads.uploads()[2].preview.is_none());
    }

    #[tokio::test]
    async fn rejections_do_not_block_valid_files_in_the_same_batch() {
        let mut uploads = UploadService::new(zero_latency_policy());
        let big = CandidateFile::new("big.pdf", "application/pdf", vec![0u8; 6 * 1024 * 1024]);

        let outcome = uploads
            .process_batch(None, vec![big, pdf("ok.pdf")], &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(outcome.rejections.len(), 1);
        assert_eq!(
            outcome.rejection_summary().unwrap(),
            "big.pdf : File size should not exceed 5 MB."
        );
        assert_eq!(uploads.uploads().len(), 1);
        assert_eq!(uploads.uploads()[0].name, "ok.pdf");
    }

    #[tokio::test]
    async fn record_ids_are_unique_across_batches() {
        let mut uploads = UploadService::new(zero_latency_policy());
        let cancel = CancellationToken::new();

        uploads.process_batch(None, vec![pdf("a.pdf"), pdf("b.pdf")], &cancel).await.unwrap();
        uploads.process_batch(None, vec![pdf("c.pdf")], &cancel).await.unwrap();

        let mut ids: Vec<_> = uploads.uploads().iter().map(|f| f.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[tokio::test]
    async fn delete_removes_the_record_and_ignores_absent_ids() {
        let mut uploads = UploadService::new(zero_latency_policy());
        uploads
            .process_batch(None, vec![pdf("a.pdf"), pdf("b.pdf")], &CancellationToken::new())
            .await
            .unwrap();

        let id = uploads.uploads()[0].id;
        uploads.delete_upload(id);
        assert_eq!(uploads.uploads().len(), 1);
        assert_eq!(uploads.uploads()[0].name, "b.pdf");

        uploads.delete_upload(id);
        assert_eq!(uploads.uploads().len(), 1);
    }

    #[tokio::test]
    async fn cancelled_batch_commits_nothing() {
        let mut uploads = UploadService::new(UploadPolicy {
            simulated_latency: Duration::from_secs(30),
            ..UploadPolicy::default()
        });
        let cancel = CancellationToken::new();
        cancel.cancel();

        let result = uploads.process_batch(None, vec![pdf("a.pdf")], &cancel).await;

        assert!(matches!(result, Err(error::Error::Cancelled(_))));
        assert!(uploads.uploads().is_empty());
    }
}
