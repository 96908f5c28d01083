//! Finance-specialized three-label model client.

use tone_core::{Classification, Sentiment};

use crate::{LabelScore, RemoteClient, RemoteModel, error::RemoteError, score_of};

/// Provider name recorded on finance-model results.
pub const PROVIDER: &str = "finbert";

/// A label wins only by strictly beating both others; otherwise NEUTRAL.
/// Confidence is the highest of the three scores.
#[must_use]
pub fn map_scores(scores: &[LabelScore]) -> (Sentiment, f64) {
    let positive = score_of(scores, "positive");
    let negative = score_of(scores, "negative");
    let neutral = score_of(scores, "neutral");

    let label = if positive > negative && positive > neutral {
        Sentiment::Positive
    } else if negative > positive && negative > neutral {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    };
    (label, positive.max(negative).max(neutral))
}

impl RemoteClient {
    /// Classify `text` with the finance model.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError`] if the HTTP request fails, the endpoint
    /// returns a non-success status or a loading notice, or the response
    /// cannot be parsed or carries a score outside `[0, 1]`.
    pub async fn classify_finance(&self, text: &str) -> Result<Classification, RemoteError> {
        let scores = self.post_inference(RemoteModel::Finance, text).await?;
        let (label, confidence) = map_scores(&scores);
        Classification::new(label, confidence, Some(PROVIDER.to_string()))
            .map_err(|e| RemoteError::Parse(e.to_string()))
    }
}
