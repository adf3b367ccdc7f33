//! Platform API client
//!
//! The lister depends only on the [`SiteApi`] and [`SecretsApi`] traits;
//! [`PlatformClient`] is the HTTP implementation of both.

pub mod api;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod platform;

pub use api::{SecretsApi, SiteApi};
#[cfg(test)]
pub use mock::MockPlatformClient;
pub use platform::PlatformClient;
