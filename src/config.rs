use crate::error::{Result, TransferError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    /// Origin the consent redirect URL is built from.
    pub origin: String,
    pub log_level: String,
    pub use_json: bool,
    pub messages: ConsentMessages,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            origin: "http://localhost:8080".to_string(),
            log_level: "info".to_string(),
            use_json: false,
            messages: ConsentMessages::default(),
        }
    }
}

/// User-facing strings of the transfer flow.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ConsentMessages {
    pub success_title: String,
    pub success_description: String,
    pub rejected_title: String,
    pub rejected_description: String,
    /// Error labels keyed by `ErrorKind::code`.
    pub error_labels: HashMap<String, String>,
    pub fallback_error: String,
}

impl Default for ConsentMessages {
    fn default() -> Self {
        let error_labels = [
            ("NETWORK_TIMEOUT", "The request timed out"),
            ("NETWORK", "A network error occurred"),
            ("BAD_STATUS", "The server returned an unexpected response"),
            ("GRAPHQL", "The request could not be processed"),
            ("INVALID_RESPONSE", "The server returned an invalid response"),
            ("REJECTION", "The transfer was refused"),
            ("INTERNAL", "An unexpected error occurred"),
        ]
        .into_iter()
        .map(|(code, label)| (code.to_string(), label.to_string()))
        .collect();

        Self {
            success_title: "Transfer initiated".to_string(),
            success_description: "Your transfer is on its way.".to_string(),
            rejected_title: "Transfer rejected".to_string(),
            rejected_description: "The bank declined this transfer.".to_string(),
            error_labels,
            fallback_error: "An error occurred".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads a JSON configuration file. Missing fields keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.origin.starts_with("https://") || self.origin.starts_with("http://")) {
            return Err(TransferError::ConfigError(format!(
                "origin must be an absolute http(s) URL, got '{}'",
                self.origin
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"{{ "origin": "https://bank.example", "use_json": true }}"#).unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.origin, "https://bank.example");
        assert!(config.use_json);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.messages, ConsentMessages::default());
    }

    #[test]
    fn test_relative_origin_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"{{ "origin": "bank.example" }}"#).unwrap();

        let result = AppConfig::load(file.path());
        assert!(matches!(result, Err(TransferError::ConfigError(_))));
    }

    #[test]
    fn test_every_error_code_has_a_label() {
        let messages = ConsentMessages::default();
        for code in [
            "NETWORK_TIMEOUT",
            "NETWORK",
            "BAD_STATUS",
            "GRAPHQL",
            "INVALID_RESPONSE",
            "REJECTION",
            "INTERNAL",
        ] {
            assert!(messages.error_labels.contains_key(code), "missing {code}");
        }
    }
}
