//! Deterministic keyword-count sentiment classifier.
//!
//! The lexicon classifier needs no network access, so the system always has a
//! usable classifier. Its confidence is a heuristic proportion of keyword hits,
//! not a calibrated probability:
//!
//! ```text
//! no hits            -> NEUTRAL  0.5
//! positive majority  -> POSITIVE 0.6 + ratio * 0.35   (0.6, 0.95]
//! negative majority  -> NEGATIVE 0.6 + ratio * 0.35   (0.6, 0.95]
//! tie                -> NEUTRAL  0.5
//! ```

use crate::entities::Classification;
use crate::enums::Sentiment;

/// Provider name recorded for lexicon classifications.
pub const LOCAL_PROVIDER: &str = "local";

/// Words counted as positive hits.
pub const POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "excellent",
    "amazing",
    "wonderful",
    "fantastic",
    "love",
    "best",
    "awesome",
    "happy",
    "perfect",
];

/// Words counted as negative hits.
pub const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "terrible",
    "awful",
    "horrible",
    "worst",
    "hate",
    "poor",
    "disappointed",
    "sad",
    "angry",
];

const NEUTRAL_CONFIDENCE: f64 = 0.5;
const BASE_CONFIDENCE: f64 = 0.6;
const RATIO_WEIGHT: f64 = 0.35;

/// Positive and negative keyword hit counts for one text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LexiconHits {
    pub positive: usize,
    pub negative: usize,
}

impl LexiconHits {
    #[must_use]
    pub const fn total(self) -> usize {
        self.positive + self.negative
    }
}

/// Split lowercased text into word tokens.
///
/// Word characters are ASCII letters, digits, and `_`; any run of other
/// characters separates tokens. Empty tokens are never yielded.
pub fn tokenize(lowercased: &str) -> impl Iterator<Item = &str> {
    lowercased
        .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .filter(|token| !token.is_empty())
}

/// Count lexicon hits in `text` (case-insensitive, exact token match).
#[must_use]
pub fn count_hits(text: &str) -> LexiconHits {
    let lowered = text.to_lowercase();
    tokenize(&lowered).fold(LexiconHits::default(), |mut hits, token| {
        if POSITIVE_WORDS.contains(&token) {
            hits.positive += 1;
        }
        if NEGATIVE_WORDS.contains(&token) {
            hits.negative += 1;
        }
        hits
    })
}

/// Classify `text` with the fixed lexicon.
#[must_use]
pub fn classify(text: &str) -> Classification {
    let hits = count_hits(text);
    let (label, confidence) = score(hits);
    tracing::debug!(
        positive = hits.positive,
        negative = hits.negative,
        %label,
        confidence,
        "lexicon classification"
    );
    Classification::in_range(label, confidence, LOCAL_PROVIDER)
}

#[allow(clippy::cast_precision_loss)]
fn score(hits: LexiconHits) -> (Sentiment, f64) {
    let total = hits.total();
    if total == 0 {
        return (Sentiment::Neutral, NEUTRAL_CONFIDENCE);
    }

    let positive_ratio = hits.positive as f64 / total as f64;
    let negative_ratio = hits.negative as f64 / total as f64;

    if positive_ratio > negative_ratio {
        (
            Sentiment::Positive,
            RATIO_WEIGHT.mul_add(positive_ratio, BASE_CONFIDENCE),
        )
    } else if negative_ratio > positive_ratio {
        (
            Sentiment::Negative,
            RATIO_WEIGHT.mul_add(negative_ratio, BASE_CONFIDENCE),
        )
    } else {
        (Sentiment::Neutral, NEUTRAL_CONFIDENCE)
    }
}
