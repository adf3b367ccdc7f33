//! Platform API data models

mod secret;
mod site;

pub use secret::Secret;
pub use site::Site;
