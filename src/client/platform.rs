//! Platform API client implementation

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as HttpClient, StatusCode, Url};
use serde::de::DeserializeOwned;

use super::api::{SecretsApi, SiteApi};
use super::models::{Secret, Site};
use crate::error::{ApiError, ConfigError, Result};

/// Default platform API base URL
pub const DEFAULT_API_BASE_URL: &str = "https://api.sitesecrets.dev/v1";

/// Platform API client
pub struct PlatformClient {
    http: HttpClient,
    base_url: Url,
    token: String,
}

impl PlatformClient {
    /// Create a client with an optional API host override and request timeout
    pub fn with_host(
        token: impl Into<String>,
        api_host: Option<&str>,
        timeout: Duration,
    ) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .user_agent(concat!("sitesecrets/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let host = api_host.unwrap_or(DEFAULT_API_BASE_URL);
        let base_url = Url::parse(host)
            .map_err(|e| ConfigError::Invalid(format!("Invalid API host '{}': {}", host, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::Invalid(format!("Invalid API host '{}'", host)).into());
        }

        Ok(Self {
            http,
            base_url,
            token: token.into(),
        })
    }

    /// Base URL requests are built from
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Build an endpoint URL, percent-encoding each path segment
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidResponse("API host cannot be a base URL".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Path segment for a site identifier.
    ///
    /// URL normalisation removes `.` and `..` segments, which would send the
    /// request to a different resource, so those never name a site.
    fn site_segment(site_id: &str) -> Result<&str> {
        match site_id {
            "." | ".." => Err(ApiError::SiteNotFound(site_id.to_string()).into()),
            _ => Ok(site_id),
        }
    }

    /// Issue an authenticated GET and decode the JSON body.
    ///
    /// A 404 is reported through `not_found` so each caller decides what a
    /// missing resource means.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        not_found: impl FnOnce(String) -> ApiError,
    ) -> Result<T> {
        let response = self
            .http
            .get(url.clone())
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        debug!("GET {} -> {}", url, status);

        match status {
            StatusCode::OK => {
                let data = response.json::<T>().await.map_err(|e| {
                    ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
                })?;
                Ok(data)
            }
            StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized.into()),
            StatusCode::FORBIDDEN => Err(ApiError::Forbidden.into()),
            StatusCode::NOT_FOUND => {
                let body = response.text().await.unwrap_or_default();
                debug!("404 body: {}", body);
                Err(not_found(body).into())
            }
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Bad request".to_string());
                Err(ApiError::BadRequest(error_msg).into())
            }
            status if status.is_server_error() => {
                let error_msg = response
                    .text()
                    .await
                    .ok()
                    .filter(|body| !body.trim().is_empty())
                    .unwrap_or_else(|| status.to_string());
                Err(ApiError::ServerError(error_msg).into())
            }
            _ => {
                let error_msg = format!("Unexpected status code: {}", status);
                Err(ApiError::InvalidResponse(error_msg).into())
            }
        }
    }
}

#[async_trait]
impl SiteApi for PlatformClient {
    async fn resolve_site(&self, site_id: &str) -> Result<Site> {
        let url = self.endpoint(&["sites", Self::site_segment(site_id)?])?;
        let site_id = site_id.to_string();
        self.get_json(url, move |_| ApiError::SiteNotFound(site_id))
            .await
    }
}

#[async_trait]
impl SecretsApi for PlatformClient {
    async fn list_secrets(&self, site_id: &str, debug: bool) -> Result<Vec<Secret>> {
        let mut url = self.endpoint(&["sites", Self::site_segment(site_id)?, "secrets"])?;
        url.query_pairs_mut()
            .append_pair("debug", if debug { "true" } else { "false" });

        if debug {
            debug!("Listing secrets in debug mode: {}", url);
        }

        let path = url.path().to_string();
        self.get_json(url, move |body| {
            if body.trim().is_empty() {
                ApiError::NotFound(path)
            } else {
                ApiError::NotFound(body)
            }
        })
        .await
    }
}
