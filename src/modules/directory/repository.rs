use crate::api::error;
use crate::modules::directory::schema::RemoteUser;

#[async_trait::async_trait]
pub trait DirectoryRepository {
    /// One-shot fetch of the full remote user listing.
    async fn fetch_all(&self) -> Result<Vec<RemoteUser>, error::SystemError>;
}
