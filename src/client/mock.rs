//! Mock platform API client for testing
//!
//! Provides a mock implementation of the API traits for unit testing
//! without making real API calls.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::api::{SecretsApi, SiteApi};
use super::models::{Secret, Site};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Configure expected responses via builder methods, then use in tests.
///
/// # Example
/// ```ignore
/// let mock = MockPlatformClient::new()
///     .with_site("my-site")
///     .await
///     .with_secrets(vec![Secret { name: "API_KEY".into(), value: "abc123".into() }])
///     .await;
///
/// let secrets = mock.list_secrets("my-site", false).await?;
/// assert_eq!(secrets.len(), 1);
/// ```
#[derive(Default)]
pub struct MockPlatformClient {
    /// Sites that resolve successfully
    sites: Arc<Mutex<Vec<Site>>>,
    /// Secrets to return from list_secrets
    secrets: Arc<Mutex<Vec<Secret>>>,
    /// Error to return from list_secrets (if any) - consumed on first use
    list_error: Arc<Mutex<Option<ApiError>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Captured list_secrets requests for test assertions
    captured_requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub resolve_site: usize,
    pub list_secrets: usize,
}

impl CallCounts {
    /// Get total number of API calls made.
    pub fn total(&self) -> usize {
        self.resolve_site + self.list_secrets
    }
}

/// A captured list_secrets request for test assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedRequest {
    /// Site identifier as passed by the caller
    pub site_id: String,
    /// Debug flag as passed by the caller
    pub debug: bool,
}

impl MockPlatformClient {
    /// Create a new mock client with no known sites and no secrets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a site that resolves by this name.
    pub async fn with_site(self, name: &str) -> Self {
        self.sites.lock().await.push(Site {
            id: format!("{}-uuid", name),
            name: name.to_string(),
        });
        self
    }

    /// Configure secrets to return from list_secrets.
    pub async fn with_secrets(self, secrets: Vec<Secret>) -> Self {
        *self.secrets.lock().await = secrets;
        self
    }

    /// Configure an error to return from the next list_secrets call.
    pub async fn with_list_error(self, error: ApiError) -> Self {
        *self.list_error.lock().await = Some(error);
        self
    }

    /// Get the current call counts.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Get the captured list_secrets requests.
    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.captured_requests.lock().await.clone()
    }
}

#[async_trait]
impl SiteApi for MockPlatformClient {
    async fn resolve_site(&self, site_id: &str) -> Result<Site> {
        self.call_count.lock().await.resolve_site += 1;

        let sites = self.sites.lock().await;
        sites
            .iter()
            .find(|s| s.name == site_id || s.id == site_id)
            .cloned()
            .ok_or_else(|| ApiError::SiteNotFound(site_id.to_string()).into())
    }
}

#[async_trait]
impl SecretsApi for MockPlatformClient {
    async fn list_secrets(&self, site_id: &str, debug: bool) -> Result<Vec<Secret>> {
        self.call_count.lock().await.list_secrets += 1;
        self.captured_requests.lock().await.push(CapturedRequest {
            site_id: site_id.to_string(),
            debug,
        });

        if let Some(err) = self.list_error.lock().await.take() {
            return Err(err.into());
        }

        Ok(self.secrets.lock().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_resolves_by_name_or_id() {
        let mock = MockPlatformClient::new().with_site("my-site").await;

        assert_eq!(mock.resolve_site("my-site").await.unwrap().id, "my-site-uuid");
        assert_eq!(mock.resolve_site("my-site-uuid").await.unwrap().name, "my-site");
        assert!(mock.resolve_site("other").await.is_err());
        assert_eq!(mock.call_counts().await.resolve_site, 3);
    }

    #[tokio::test]
    async fn test_mock_list_error_consumed_once() {
        let mock = MockPlatformClient::new()
            .with_list_error(ApiError::Forbidden)
            .await;

        assert!(mock.list_secrets("s", false).await.is_err());
        assert!(mock.list_secrets("s", true).await.is_ok());

        let captured = mock.captured_requests().await;
        assert_eq!(captured.len(), 2);
        assert!(!captured[0].debug);
        assert!(captured[1].debug);
        assert_eq!(mock.call_counts().await.total(), 2);
    }
}
