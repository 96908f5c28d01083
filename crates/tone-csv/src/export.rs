//! Ledger serialization to CSV.

use chrono::{DateTime, Utc};
use tone_core::HistoryLedger;
use tone_core::lexicon::LOCAL_PROVIDER;

/// MIME type of exported files.
pub const CSV_MIME_TYPE: &str = "text/csv";

/// Header row of an exported ledger.
pub const EXPORT_HEADER: &str = "Text,Sentiment,Confidence,Timestamp,Source,Provider";

/// Serialize the ledger in its own (newest-first) order.
///
/// The text column is always double-quoted with embedded quotes doubled.
/// Results without a provider are written as `local`. Lines are joined with
/// `\n` and there is no trailing newline.
#[must_use]
pub fn export_ledger(ledger: &HistoryLedger) -> String {
    let mut lines = Vec::with_capacity(ledger.len() + 1);
    lines.push(EXPORT_HEADER.to_string());
    lines.extend(ledger.iter().map(|entry| {
        [
            quote_field(entry.source_text()),
            entry.label().to_string(),
            format!("{:.3}", entry.confidence()),
            entry.timestamp_display(),
            entry.origin().to_string(),
            entry.provider().unwrap_or(LOCAL_PROVIDER).to_string(),
        ]
        .join(",")
    }));
    lines.join("\n")
}

/// Wrap `value` in double quotes, doubling any quotes inside it.
#[must_use]
pub fn quote_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Download name for an export created at `at`.
#[must_use]
pub fn export_file_name(at: DateTime<Utc>) -> String {
    format!("sentiment-analysis-{}.csv", at.timestamp_millis())
}
