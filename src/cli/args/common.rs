//! Common CLI types shared across commands

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Table format - human-readable, one row per secret (default)
    #[default]
    Table,
    /// JSON format - records wrapped with metadata, for scripts/APIs
    Json,
    /// YAML format - plain list of records
    Yaml,
}

impl OutputFormat {
    /// Parse a format name from the config file (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        <Self as clap::ValueEnum>::from_str(name.trim(), true).ok()
    }
}
