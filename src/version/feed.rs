//! Update feed: where the latest published version comes from

#[cfg(test)]
use mockall::automock;

use std::time::Duration;

use reqwest::Url;
use tracing::warn;

use crate::config::{FETCH_TIMEOUT_MS, USER_AGENT};
use crate::version::error::CheckError;
use crate::version::types::RemoteVersionInfo;

/// Trait for fetching the latest published version metadata
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait UpdateFeed: Send + Sync {
    /// Fetches the latest version metadata from the given endpoint
    ///
    /// # Returns
    /// * `Ok(RemoteVersionInfo)` - Parsed metadata
    /// * `Err(CheckError)` - Network or decode failure; never retried here,
    ///   retry policy belongs to the caller
    async fn fetch_latest(&self, endpoint: Url) -> Result<RemoteVersionInfo, CheckError>;
}

/// Feed implementation backed by a plain HTTPS GET
pub struct HttpUpdateFeed {
    client: reqwest::Client,
}

impl HttpUpdateFeed {
    /// Creates a new feed. Builds the HTTP client only; no request is made
    /// until a check runs.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(USER_AGENT)
                .timeout(Duration::from_millis(FETCH_TIMEOUT_MS))
                .build()
                .expect("Failed to create HTTP client"),
        }
    }
}

impl Default for HttpUpdateFeed {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl UpdateFeed for HttpUpdateFeed {
    async fn fetch_latest(&self, endpoint: Url) -> Result<RemoteVersionInfo, CheckError> {
        let response = self.client.get(endpoint.clone()).send().await?;

        let status = response.status();

        if !status.is_success() {
            warn!("update endpoint returned status {}: {}", status, endpoint);
            return Err(CheckError::Network(format!("unexpected status: {status}")));
        }

        let info: RemoteVersionInfo = response.json().await.map_err(|e| {
            warn!("failed to parse update endpoint response: {}", e);
            CheckError::Parse(e.to_string())
        })?;

        Ok(info)
    }
}
