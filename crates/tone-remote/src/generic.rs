//! Generic binary sentiment model client.
//!
//! The model only reports POSITIVE and NEGATIVE. Its answers are passed
//! through as given: this client never invents a NEUTRAL label.

use tone_core::{Classification, Sentiment};

use crate::{LabelScore, RemoteClient, RemoteModel, error::RemoteError, score_of};

/// Provider name recorded on generic-model results.
pub const PROVIDER: &str = "huggingface";

/// Pick the higher of the POSITIVE/NEGATIVE scores; ties go to NEGATIVE.
#[must_use]
pub fn map_scores(scores: &[LabelScore]) -> (Sentiment, f64) {
    let positive = score_of(scores, "POSITIVE");
    let negative = score_of(scores, "NEGATIVE");
    let label = if positive > negative {
        Sentiment::Positive
    } else {
        Sentiment::Negative
    };
    (label, positive.max(negative))
}

impl RemoteClient {
    /// Classify `text` with the generic model.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError`] if the HTTP request fails, the endpoint
    /// returns a non-success status or a loading notice, or the response
    /// cannot be parsed or carries a score outside `[0, 1]`.
    pub async fn classify_generic(&self, text: &str) -> Result<Classification, RemoteError> {
        let scores = self.post_inference(RemoteModel::Generic, text).await?;
        let (label, confidence) = map_scores(&scores);
        Classification::new(label, confidence, Some(PROVIDER.to_string()))
            .map_err(|e| RemoteError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"[[
        {"label": "POSITIVE", "score": 0.9998},
        {"label": "NEGATIVE", "score": 0.0002}
    ]]"#;

    fn scores(json: &str) -> Vec<LabelScore> {
        crate::http::parse_scores(json).unwrap()
    }

    #[test]
    fn maps_positive_fixture() {
        let (label, confidence) = map_scores(&scores(FIXTURE));
        assert_eq!(label, Sentiment::Positive);
        assert!((confidence - 0.9998).abs() < 1e-12);
    }

    #[test]
    fn maps_negative() {
        let (label, confidence) = map_scores(&scores(
            r#"[{"label":"NEGATIVE","score":0.97},{"label":"POSITIVE","score":0.03}]"#,
        ));
        assert_eq!(label, Sentiment::Negative);
        assert!((confidence - 0.97).abs() < 1e-12);
    }

    #[test]
    fn never_produces_neutral() {
        let (label, _) = map_scores(&scores(r#"[{"label":"NEUTRAL","score":0.99}]"#));
        assert_eq!(label, Sentiment::Negative);

        let (label, confidence) = map_scores(&scores(
            r#"[{"label":"POSITIVE","score":0.5},{"label":"NEGATIVE","score":0.5}]"#,
        ));
        assert_eq!(label, Sentiment::Negative);
        assert!((confidence - 0.5).abs() < 1e-12);
    }
}
