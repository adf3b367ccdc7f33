//! Secret display models

use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::client::models::Secret;
use crate::error::Result;
use crate::output::Formattable;

/// Secret display model for table/JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Tabled, Serialize)]
pub struct SecretDisplay {
    /// Secret name
    #[tabled(rename = "Secret name")]
    pub name: String,

    /// Secret value
    #[tabled(rename = "Secret value")]
    pub value: String,
}

impl From<Secret> for SecretDisplay {
    fn from(secret: Secret) -> Self {
        Self {
            name: secret.name,
            value: secret.value,
        }
    }
}

/// Labeled rows of secrets, ready for any output format.
///
/// The field labels are fixed by [`SecretDisplay`] and are present whether
/// or not there are rows.
#[derive(Debug, Clone, Default)]
pub struct SecretTable {
    rows: Vec<SecretDisplay>,
}

impl SecretTable {
    /// Build a table preserving the order of `secrets`.
    pub fn new(secrets: Vec<Secret>) -> Self {
        Self {
            rows: secrets.into_iter().map(SecretDisplay::from).collect(),
        }
    }

    /// Column labels, in display order.
    #[cfg(test)]
    pub fn field_labels() -> Vec<String> {
        SecretDisplay::headers()
            .into_iter()
            .map(|h| h.into_owned())
            .collect()
    }

    pub fn rows(&self) -> &[SecretDisplay] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Formattable for SecretTable {
    fn format(&self, format: OutputFormat) -> Result<String> {
        self.rows().format(format)
    }
}
