use std::time::Duration;

use crate::api::error;

/// Shared HTTP client for the remote user listing. Connect timeout only: the
/// listing fetch itself has no deadline.
pub fn http_client() -> Result<reqwest::Client, error::SystemError> {
    let client = reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .build()?;
    Ok(client)
}
