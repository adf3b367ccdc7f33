//! YAML output formatting

use serde::Serialize;

/// Format data as a YAML document without the JSON metadata envelope
pub fn format_yaml<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_yaml::Error> {
    let output = serde_yaml::to_string(data)?;
    Ok(output.trim_end().to_string())
}
