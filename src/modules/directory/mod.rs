pub mod model;
pub mod repository;
pub mod repository_http;
pub mod schema;
pub mod service;

pub use model::NewDirectoryRecord;
pub use repository::DirectoryRepository;
pub use repository_http::HttpDirectoryRepository;
pub use schema::{DirectoryRecord, RemoteUser};
pub use service::DirectoryService;
