//! Remote inference (Hugging Face) configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default Hugging Face inference endpoint.
fn default_base_url() -> String {
    String::from("https://api-inference.huggingface.co/models")
}

fn default_generic_model() -> String {
    String::from("distilbert-base-uncased-finetuned-sst-2-english")
}

fn default_finance_model() -> String {
    String::from("ProsusAI/finbert")
}

const fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RemoteConfig {
    /// Whether manual analysis should use the remote models.
    #[serde(default)]
    pub enabled: bool,

    /// Bearer token for the inference API (`hf_...`).
    #[serde(default)]
    pub api_key: String,

    /// Base URL; the model id is appended as a path.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Binary POSITIVE/NEGATIVE model used outside finance.
    #[serde(default = "default_generic_model")]
    pub generic_model: String,

    /// Three-label model used for the finance industry.
    #[serde(default = "default_finance_model")]
    pub finance_model: String,

    /// Transport timeout for one inference request.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            api_key: String::new(),
            base_url: default_base_url(),
            generic_model: default_generic_model(),
            finance_model: default_finance_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl RemoteConfig {
    /// Remote analysis is used only when enabled and a key is present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.enabled && !self.api_key.trim().is_empty()
    }

    /// Reject values that would make every request fail.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a zero timeout, an empty base
    /// URL, or an empty model id.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_secs == 0 {
            return Err(invalid("remote.timeout_secs", "must be greater than zero"));
        }
        if self.base_url.trim().is_empty() {
            return Err(invalid("remote.base_url", "must not be empty"));
        }
        if self.generic_model.trim().is_empty() {
            return Err(invalid("remote.generic_model", "must not be empty"));
        }
        if self.finance_model.trim().is_empty() {
            return Err(invalid("remote.finance_model", "must not be empty"));
        }
        Ok(())
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        let config = RemoteConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.base_url, "https://api-inference.huggingface.co/models");
        assert_eq!(config.finance_model, "ProsusAI/finbert");
    }

    #[test]
    fn configured_when_enabled_with_key() {
        let config = RemoteConfig {
            enabled: true,
            api_key: "hf_abc123".into(),
            ..Default::default()
        };
        assert!(config.is_configured());
    }

    #[test]
    fn key_without_enabled_is_not_configured() {
        let config = RemoteConfig {
            api_key: "hf_abc123".into(),
            ..Default::default()
        };
        assert!(!config.is_configured());
    }

    #[test]
    fn blank_key_is_not_configured() {
        let config = RemoteConfig {
            enabled: true,
            api_key: "   ".into(),
            ..Default::default()
        };
        assert!(!config.is_configured());
    }

    #[test]
    fn zero_timeout_rejected() {
        let config = RemoteConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("remote.timeout_secs"));
    }
}
