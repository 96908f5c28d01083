use serde::Serialize;
use tone_core::{ClassificationResult, Industry, LedgerSummary, Origin, Sentiment};

/// One ledger entry as shown to the user.
#[derive(Debug, Serialize)]
pub struct EntryView<'a> {
    pub sentiment: Sentiment,
    pub confidence: f64,
    pub source: Origin,
    pub provider: &'a str,
    pub time: String,
    pub text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<&'a str>,
}

impl<'a> From<&'a ClassificationResult> for EntryView<'a> {
    fn from(entry: &'a ClassificationResult) -> Self {
        Self {
            sentiment: entry.label(),
            confidence: round3(entry.confidence()),
            source: entry.origin(),
            provider: entry.provider().unwrap_or(tone_core::lexicon::LOCAL_PROVIDER),
            time: entry.timestamp_display(),
            text: entry.preview(),
            category: entry.category(),
        }
    }
}

/// Distribution, average confidence, and recent trend of the ledger.
#[derive(Debug, Serialize)]
pub struct StatsView {
    pub total: usize,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    pub positive_pct: f64,
    pub negative_pct: f64,
    pub neutral_pct: f64,
    pub average_confidence: f64,
    pub trend: Vec<f64>,
}

impl From<&LedgerSummary> for StatsView {
    fn from(summary: &LedgerSummary) -> Self {
        Self {
            total: summary.total,
            positive: summary.positive,
            negative: summary.negative,
            neutral: summary.neutral,
            positive_pct: round1(summary.percentage(Sentiment::Positive)),
            negative_pct: round1(summary.percentage(Sentiment::Negative)),
            neutral_pct: round1(summary.percentage(Sentiment::Neutral)),
            average_confidence: round3(summary.average_confidence),
            trend: summary.trend.iter().copied().map(round3).collect(),
        }
    }
}

impl StatsView {
    /// Count and rounded percentage for one label.
    #[must_use]
    pub const fn share(&self, label: Sentiment) -> (usize, f64) {
        match label {
            Sentiment::Positive => (self.positive, self.positive_pct),
            Sentiment::Negative => (self.negative, self.negative_pct),
            Sentiment::Neutral => (self.neutral, self.neutral_pct),
        }
    }
}

/// Active session settings.
#[derive(Debug, Serialize)]
pub struct StatusView {
    pub industry: Industry,
    pub engine: String,
    pub entries: usize,
    pub export_dir: String,
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
