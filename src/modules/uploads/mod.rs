pub mod model;
pub mod schema;
pub mod service;

pub use model::{CandidateFile, UploadPolicy};
pub use schema::{BatchOutcome, UploadRecord};
pub use service::UploadService;
