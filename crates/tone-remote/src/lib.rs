//! # tone-remote
//!
//! HTTP clients for hosted sentiment models (Hugging Face inference API).
//!
//! Two models are supported, both reached with `POST {base_url}/{model_id}`,
//! a `{"inputs": text}` body, and a bearer token:
//! - the generic model (`huggingface` provider), which only ever answers
//!   POSITIVE or NEGATIVE;
//! - the finance model (`finbert` provider), which also answers NEUTRAL.
//!
//! Every failure is surfaced as a [`RemoteError`]; callers decide how to
//! recover.

pub mod finbert;
pub mod generic;

mod error;
mod http;

pub use error::RemoteError;

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tone_config::RemoteConfig;
use tone_core::{Classification, Industry};

// ── Types ──────────────────────────────────────────────────────────

/// One label/score pair from an inference response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelScore {
    pub label: String,
    pub score: f64,
}

/// Score reported for `label` (case-insensitive), or 0 when absent.
#[must_use]
pub fn score_of(scores: &[LabelScore], label: &str) -> f64 {
    scores
        .iter()
        .find(|entry| entry.label.eq_ignore_ascii_case(label))
        .map_or(0.0, |entry| entry.score)
}

/// Hosted model variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemoteModel {
    /// Binary POSITIVE/NEGATIVE model.
    Generic,
    /// Three-label finance model.
    Finance,
}

impl RemoteModel {
    /// The finance industry uses the finance model; everything else the
    /// generic one.
    #[must_use]
    pub const fn for_industry(industry: Industry) -> Self {
        match industry {
            Industry::Finance => Self::Finance,
            Industry::Government => Self::Generic,
        }
    }

    /// Provider name recorded on results from this model.
    #[must_use]
    pub const fn provider_name(self) -> &'static str {
        match self {
            Self::Generic => generic::PROVIDER,
            Self::Finance => finbert::PROVIDER,
        }
    }
}

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for the hosted sentiment models.
#[derive(Debug, Clone)]
pub struct RemoteClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    generic_model: String,
    finance_model: String,
}

impl RemoteClient {
    /// Create a client from the `[remote]` configuration section.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::MissingApiKey`] when no key is configured and
    /// [`RemoteError::Http`] if the underlying `reqwest::Client` fails to
    /// build.
    pub fn from_config(config: &RemoteConfig) -> Result<Self, RemoteError> {
        let api_key = config.api_key.trim();
        if api_key.is_empty() {
            return Err(RemoteError::MissingApiKey);
        }

        let http = reqwest::Client::builder()
            .user_agent(concat!("tone/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            generic_model: config.generic_model.clone(),
            finance_model: config.finance_model.clone(),
        })
    }

    /// Model id used for `model`.
    #[must_use]
    pub fn model_id(&self, model: RemoteModel) -> &str {
        match model {
            RemoteModel::Generic => &self.generic_model,
            RemoteModel::Finance => &self.finance_model,
        }
    }

    /// Endpoint URL for `model`.
    #[must_use]
    pub fn endpoint(&self, model: RemoteModel) -> String {
        format!("{}/{}", self.base_url, self.model_id(model))
    }

    /// Classify `text` with the given model.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError`] if the HTTP request fails, the endpoint
    /// returns a non-success status or a loading notice, or the response
    /// cannot be parsed.
    pub async fn classify(
        &self,
        model: RemoteModel,
        text: &str,
    ) -> Result<Classification, RemoteError> {
        match model {
            RemoteModel::Generic => self.classify_generic(text).await,
            RemoteModel::Finance => self.classify_finance(text).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> RemoteConfig {
        RemoteConfig {
            enabled: true,
            api_key: "hf_test".into(),
            base_url: "http://localhost:9999/models/".into(),
            ..RemoteConfig::default()
        }
    }

    #[test]
    fn label_score_deserializes() {
        let scores: Vec<LabelScore> =
            serde_json::from_str(r#"[{"label":"POSITIVE","score":0.9}]"#).unwrap();
        assert_eq!(scores[0].label, "POSITIVE");
        assert!((scores[0].score - 0.9).abs() < f64::EPSILON);
    }

    #[test]
    fn score_of_is_case_insensitive_and_defaults_to_zero() {
        let scores = vec![LabelScore {
            label: "positive".into(),
            score: 0.7,
        }];
        assert!((score_of(&scores, "POSITIVE") - 0.7).abs() < f64::EPSILON);
        assert!(score_of(&scores, "NEGATIVE").abs() < f64::EPSILON);
    }

    #[test]
    fn model_follows_industry() {
        assert_eq!(RemoteModel::for_industry(Industry::Finance), RemoteModel::Finance);
        assert_eq!(RemoteModel::for_industry(Industry::Government), RemoteModel::Generic);
        assert_eq!(RemoteModel::Finance.provider_name(), "finbert");
        assert_eq!(RemoteModel::Generic.provider_name(), "huggingface");
    }

    #[test]
    fn endpoint_joins_base_and_model() {
        let client = RemoteClient::from_config(&config()).unwrap();
        assert_eq!(
            client.endpoint(RemoteModel::Finance),
            "http://localhost:9999/models/ProsusAI/finbert"
        );
        assert_eq!(
            client.endpoint(RemoteModel::Generic),
            "http://localhost:9999/models/distilbert-base-uncased-finetuned-sst-2-english"
        );
    }

    #[test]
    fn missing_key_is_rejected() {
        let config = RemoteConfig {
            api_key: " ".into(),
            ..config()
        };
        assert!(matches!(
            RemoteClient::from_config(&config),
            Err(RemoteError::MissingApiKey)
        ));
    }

    #[tokio::test]
    #[ignore] // requires network and TONE_REMOTE__API_KEY
    async fn live_classify_both_models() {
        let Ok(api_key) = std::env::var("TONE_REMOTE__API_KEY") else {
            return;
        };
        let client = RemoteClient::from_config(&RemoteConfig {
            enabled: true,
            api_key,
            ..RemoteConfig::default()
        })
        .unwrap();

        for model in [RemoteModel::Generic, RemoteModel::Finance] {
            match client.classify(model, "Revenue grew strongly this quarter").await {
                Ok(result) => println!(
                    "{} -> {} ({:.3})",
                    model.provider_name(),
                    result.label(),
                    result.confidence()
                ),
                Err(e) => println!("{} -> ERROR: {e}", model.provider_name()),
            }
        }
    }
}
