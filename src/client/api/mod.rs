//! API trait definitions split by responsibility
//!
//! - [`SiteApi`] - Site lookup
//! - [`SecretsApi`] - Customer secrets listing
//!
//! Command handlers take these as separate bounds so each collaborator can
//! be swapped independently.

mod secrets;
mod site;

pub use secrets::SecretsApi;
pub use site::SiteApi;
