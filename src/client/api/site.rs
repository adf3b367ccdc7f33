//! Site lookup API trait

use async_trait::async_trait;

use crate::client::models::Site;
use crate::error::Result;

/// Site lookup operations
#[async_trait]
pub trait SiteApi: Send + Sync {
    /// Resolve a site name or UUID.
    ///
    /// Fails with `ApiError::SiteNotFound` when no such site exists.
    async fn resolve_site(&self, site_id: &str) -> Result<Site>;
}
