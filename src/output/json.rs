//! JSON output: every command prints `{ "data": ..., "meta": {...} }`

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Envelope around the records a command prints
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput<T> {
    /// Profiles, medicines, schedules or catalog entries as returned by the API
    pub data: T,

    pub meta: Metadata,
}

/// When and by which `medtrack` build the output was produced
#[derive(Debug, Serialize, Deserialize)]
pub struct Metadata {
    /// RFC 3339 render time
    pub timestamp: String,

    /// `medtrack` package version
    pub version: String,
}

impl<T> JsonOutput<T> {
    /// Wrap `data`, stamped with the current time
    pub fn new(data: T) -> Self {
        Self {
            data,
            meta: Metadata {
                timestamp: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }
}

/// Render records inside the envelope, pretty-printed for the terminal
pub fn format_json<T: Serialize + ?Sized>(records: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput::new(records))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Serialize)]
    struct Dose {
        medicine: String,
        remaining: u32,
    }

    #[test]
    fn test_json_output_carries_meta() {
        let output = JsonOutput::new(vec!["a", "b"]);

        assert_eq!(output.data, vec!["a", "b"]);
        assert_eq!(output.meta.version, env!("CARGO_PKG_VERSION"));
        assert!(!output.meta.timestamp.is_empty());
    }

    #[test]
    fn test_format_json_envelope() {
        let doses = vec![Dose {
            medicine: "Ibuprofen".to_string(),
            remaining: 4,
        }];

        let value: serde_json::Value = serde_json::from_str(&format_json(&doses).unwrap()).unwrap();

        assert_eq!(value["data"][0]["medicine"], "Ibuprofen");
        assert_eq!(value["data"][0]["remaining"], 4);
        assert!(value["meta"]["timestamp"].is_string());
    }

    #[test]
    fn test_format_json_empty_list() {
        let doses: Vec<Dose> = vec![];
        assert!(format_json(&doses).unwrap().contains("\"data\": []"));
    }
}
