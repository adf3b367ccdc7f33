//! JSON output formatting

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Envelope for JSON output: the records plus run metadata
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput<T> {
    /// The records, in display order
    pub data: T,

    /// Metadata about the response
    pub meta: Metadata,
}

/// Metadata included in JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct Metadata {
    /// Number of records in `data`
    pub count: usize,

    /// RFC 3339 timestamp of the response
    pub timestamp: String,

    /// CLI version
    pub version: String,
}

impl<T> JsonOutput<T> {
    /// Wrap `data` holding `count` records
    pub fn new(data: T, count: usize) -> Self {
        Self {
            data,
            meta: Metadata {
                count,
                timestamp: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }
}

/// Format records as pretty-printed JSON inside the envelope
pub fn format_json<T: Serialize>(records: &[T]) -> Result<String, serde_json::Error> {
    let output = JsonOutput::new(records, records.len());
    serde_json::to_string_pretty(&output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Serialize, Clone)]
    struct TestItem {
        name: String,
        value: String,
    }

    fn item(name: &str, value: &str) -> TestItem {
        TestItem {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_json_output_new() {
        let output = JsonOutput::new(vec!["a", "b"], 2);

        assert_eq!(output.data, vec!["a", "b"]);
        assert_eq!(output.meta.count, 2);
        assert_eq!(output.meta.version, env!("CARGO_PKG_VERSION"));
        assert!(!output.meta.timestamp.is_empty());
    }

    #[test]
    fn test_format_json_envelope() {
        let result = format_json(&[item("API_KEY", "abc123")]).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();

        assert_eq!(parsed["data"][0]["name"], "API_KEY");
        assert_eq!(parsed["data"][0]["value"], "abc123");
        assert_eq!(parsed["meta"]["count"], 1);
        assert!(parsed["meta"]["timestamp"].is_string());
        assert!(parsed["meta"]["version"].is_string());
    }

    #[test]
    fn test_format_json_empty() {
        let items: Vec<TestItem> = vec![];
        let result = format_json(&items).unwrap();

        assert!(result.contains("\"data\": []"));
        assert!(result.contains("\"count\": 0"));
    }

    #[test]
    fn test_format_json_keeps_order() {
        let result = format_json(&[item("SECOND", "2"), item("FIRST", "1")]).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();

        assert_eq!(parsed["data"][0]["name"], "SECOND");
        assert_eq!(parsed["data"][1]["name"], "FIRST");
    }
}
