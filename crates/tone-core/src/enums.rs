//! Sentiment labels, input origins, and industry focus for Tone.
//!
//! `Sentiment` serializes in upper case because that is the form used in CSV
//! exports and remote model responses. `Origin` and `Industry` use
//! `snake_case` via `#[serde(rename_all = "snake_case")]`.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Sentiment
// ---------------------------------------------------------------------------

/// Unified sentiment label shared by every classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// All labels, in the order summaries report them.
    pub const ALL: [Self; 3] = [Self::Positive, Self::Neutral, Self::Negative];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "POSITIVE",
            Self::Negative => "NEGATIVE",
            Self::Neutral => "NEUTRAL",
        }
    }

    /// Parse a label case-insensitively (`positive`, `POSITIVE`, `Positive`).
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "positive" => Some(Self::Positive),
            "negative" => Some(Self::Negative),
            "neutral" => Some(Self::Neutral),
            _ => None,
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Origin
// ---------------------------------------------------------------------------

/// How an analyzed text entered the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    /// Typed by the user and classified locally (including remote fallbacks).
    Manual,
    /// A row of an imported CSV file.
    FileImport,
    /// One of the curated sample datasets.
    Sample,
    /// Typed by the user and classified by a remote model.
    RemoteApi,
}

impl Origin {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::FileImport => "file_import",
            Self::Sample => "sample",
            Self::RemoteApi => "remote_api",
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Industry
// ---------------------------------------------------------------------------

/// Industry focus. Selects the sample dataset and the remote model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Industry {
    #[default]
    Finance,
    Government,
}

impl Industry {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Finance => "finance",
            Self::Government => "government",
        }
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentiment_serializes_upper_case() {
        let json = serde_json::to_string(&Sentiment::Positive).unwrap();
        assert_eq!(json, "\"POSITIVE\"");
        let back: Sentiment = serde_json::from_str("\"NEUTRAL\"").unwrap();
        assert_eq!(back, Sentiment::Neutral);
    }

    #[test]
    fn sentiment_from_label_ignores_case() {
        assert_eq!(Sentiment::from_label("positive"), Some(Sentiment::Positive));
        assert_eq!(Sentiment::from_label("NEGATIVE"), Some(Sentiment::Negative));
        assert_eq!(Sentiment::from_label(" Neutral "), Some(Sentiment::Neutral));
        assert_eq!(Sentiment::from_label("LABEL_1"), None);
    }

    #[test]
    fn origin_display_matches_serde() {
        for origin in [
            Origin::Manual,
            Origin::FileImport,
            Origin::Sample,
            Origin::RemoteApi,
        ] {
            let json = serde_json::to_string(&origin).unwrap();
            assert_eq!(json, format!("\"{origin}\""));
        }
    }

    #[test]
    fn industry_defaults_to_finance() {
        assert_eq!(Industry::default(), Industry::Finance);
        let parsed: Industry = serde_json::from_str("\"government\"").unwrap();
        assert_eq!(parsed, Industry::Government);
    }
}
