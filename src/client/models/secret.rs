//! Secret models

use serde::{Deserialize, Serialize};

/// Customer secret attached to a site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Secret {
    /// Secret name
    pub name: String,

    /// Secret value
    #[serde(default)]
    pub value: String,
}
