//! Site models

use serde::{Deserialize, Serialize};

/// Hosted site returned by the site lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Site {
    /// Site UUID
    pub id: String,

    /// Site machine name
    #[serde(default)]
    pub name: String,
}
