use serde::Serialize;

use crate::enums::Sentiment;
use crate::errors::CoreError;

/// Label, confidence, and engine name produced by a classifier.
///
/// Confidence is validated on construction to be finite and within `[0, 1]`,
/// so every ledger entry built from a `Classification` upholds that range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    label: Sentiment,
    confidence: f64,
    provider: Option<String>,
}

impl Classification {
    /// Build a classification, rejecting confidences outside `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::ConfidenceOutOfRange`] for NaN, infinite, negative,
    /// or greater-than-one confidences.
    pub fn new(
        label: Sentiment,
        confidence: f64,
        provider: Option<String>,
    ) -> Result<Self, CoreError> {
        if !confidence.is_finite() || !(0.0..=1.0).contains(&confidence) {
            return Err(CoreError::ConfidenceOutOfRange { value: confidence });
        }
        Ok(Self {
            label,
            confidence,
            provider,
        })
    }

    /// Build a classification whose confidence is known to be in range.
    pub(crate) fn in_range(label: Sentiment, confidence: f64, provider: &str) -> Self {
        debug_assert!((0.0..=1.0).contains(&confidence));
        Self {
            label,
            confidence,
            provider: Some(provider.to_string()),
        }
    }

    #[must_use]
    pub const fn label(&self) -> Sentiment {
        self.label
    }

    #[must_use]
    pub const fn confidence(&self) -> f64 {
        self.confidence
    }

    #[must_use]
    pub fn provider(&self) -> Option<&str> {
        self.provider.as_deref()
    }

    /// Drop the provider name. File imports and samples record no provider.
    #[must_use]
    pub fn without_provider(mut self) -> Self {
        self.provider = None;
        self
    }
}
