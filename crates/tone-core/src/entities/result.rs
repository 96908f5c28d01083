use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::entities::Classification;
use crate::enums::{Origin, Sentiment};

/// Number of characters kept in a result's preview.
pub const PREVIEW_CHARS: usize = 150;

/// Human-readable timestamp layout used for display and CSV export.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// One analyzed text, as held by the history ledger.
///
/// The source text is fixed at construction and has no mutator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationResult {
    label: Sentiment,
    confidence: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    provider: Option<String>,
    source_text: String,
    preview: String,
    timestamp: DateTime<Utc>,
    origin: Origin,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<String>,
}

impl ClassificationResult {
    /// Build a ledger entry stamped with the current time.
    #[must_use]
    pub fn new(
        source_text: impl Into<String>,
        classification: Classification,
        origin: Origin,
    ) -> Self {
        let source_text = source_text.into();
        let preview = preview(&source_text);
        Self {
            label: classification.label(),
            confidence: classification.confidence(),
            provider: classification.provider().map(str::to_string),
            source_text,
            preview,
            timestamp: Utc::now(),
            origin,
            category: None,
        }
    }

    /// Attach a sample-dataset category tag.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Override the creation time.
    #[must_use]
    pub const fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
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

    #[must_use]
    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    #[must_use]
    pub fn preview(&self) -> &str {
        &self.preview
    }

    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Timestamp rendered with [`TIMESTAMP_FORMAT`].
    #[must_use]
    pub fn timestamp_display(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    #[must_use]
    pub const fn origin(&self) -> Origin {
        self.origin
    }

    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

fn preview(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}
