//! Customer secrets API trait

use async_trait::async_trait;

use crate::client::models::Secret;
use crate::error::Result;

/// Customer secrets operations
#[async_trait]
pub trait SecretsApi: Send + Sync {
    /// List the secrets of a site, in the order the API returns them.
    ///
    /// `debug` is forwarded to the API untouched.
    async fn list_secrets(&self, site_id: &str, debug: bool) -> Result<Vec<Secret>>;
}
