use log::error;

use crate::api::error;
use crate::configs;
use crate::modules::directory::repository::DirectoryRepository;
use crate::modules::directory::schema::RemoteUser;
use crate::ENV;

/// Read-only client for the remote user listing. GET is the only request
/// ever made against this boundary.
pub struct HttpDirectoryRepository {
    client: reqwest::Client,
    url: String,
}

impl HttpDirectoryRepository {
    pub fn new() -> Result<Self, error::SystemError> {
        Self::with_url(ENV.users_api_url.clone())
    }

    pub fn with_url(url: impl Into<String>) -> Result<Self, error::SystemError> {
        Ok(Self { client: configs::http_client()?, url: url.into() })
    }
}

#[async_trait::async_trait]
impl DirectoryRepository for HttpDirectoryRepository {
    async fn fetch_all(&self) -> Result<Vec<RemoteUser>, error::SystemError> {
        let response = self.client.get(&self.url).send().await?;
        if !response.status().is_success() {
            error!("User listing request to {} returned {}", self.url, response.status());
            return Err(error::SystemError::fetch("User listing returned a non-success status"));
        }
        let users = response.json::<Vec<RemoteUser>>().await?;
        Ok(users)
    }
}
