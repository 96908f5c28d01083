//! In-memory, newest-first history of classification results.
//!
//! The ledger only ever grows at its head. A batch (file import, sample load)
//! lands as one unit: its internal order is preserved and the whole batch sits
//! above every older entry.

use std::collections::VecDeque;

use serde::Serialize;

use crate::entities::ClassificationResult;
use crate::enums::Sentiment;

/// Number of most-recent entries reported in [`LedgerSummary::trend`].
pub const TREND_WINDOW: usize = 20;

/// Append-at-head sequence of results for the current session.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct HistoryLedger {
    entries: VecDeque<ClassificationResult>,
}

impl HistoryLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a single result at the head of the ledger.
    pub fn prepend(&mut self, entry: ClassificationResult) {
        self.entries.push_front(entry);
    }

    /// Put a batch at the head of the ledger, keeping the batch's own order.
    ///
    /// After `prepend_batch([a, b])` on `[x]` the ledger reads `[a, b, x]`.
    pub fn prepend_batch<I>(&mut self, batch: I)
    where
        I: IntoIterator<Item = ClassificationResult>,
        I::IntoIter: DoubleEndedIterator,
    {
        for entry in batch.into_iter().rev() {
            self.entries.push_front(entry);
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent entry.
    #[must_use]
    pub fn latest(&self) -> Option<&ClassificationResult> {
        self.entries.front()
    }

    /// Entries newest-first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &ClassificationResult> + ExactSizeIterator {
        self.entries.iter()
    }

    /// Label counts, average confidence, and recent confidence trend.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn summary(&self) -> LedgerSummary {
        let mut summary = LedgerSummary {
            total: self.entries.len(),
            ..LedgerSummary::default()
        };

        let mut confidence_sum = 0.0;
        for entry in &self.entries {
            match entry.label() {
                Sentiment::Positive => summary.positive += 1,
                Sentiment::Negative => summary.negative += 1,
                Sentiment::Neutral => summary.neutral += 1,
            }
            confidence_sum += entry.confidence();
        }

        if summary.total > 0 {
            summary.average_confidence = confidence_sum / summary.total as f64;
        }

        summary.trend = self
            .entries
            .iter()
            .take(TREND_WINDOW)
            .rev()
            .map(ClassificationResult::confidence)
            .collect();

        summary
    }
}

impl<'a> IntoIterator for &'a HistoryLedger {
    type Item = &'a ClassificationResult;
    type IntoIter = std::collections::vec_deque::Iter<'a, ClassificationResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Distribution of labels and confidences across the ledger.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LedgerSummary {
    pub total: usize,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    /// Mean confidence, 0 when the ledger is empty.
    pub average_confidence: f64,
    /// Confidences of the most recent [`TREND_WINDOW`] entries, oldest first.
    pub trend: Vec<f64>,
}

impl LedgerSummary {
    /// Count for one label.
    #[must_use]
    pub const fn count(&self, label: Sentiment) -> usize {
        match label {
            Sentiment::Positive => self.positive,
            Sentiment::Negative => self.negative,
            Sentiment::Neutral => self.neutral,
        }
    }

    /// Share of one label in percent, 0 when the ledger is empty.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percentage(&self, label: Sentiment) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(label) as f64 * 100.0 / self.total as f64
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::entities::Classification;
    use crate::enums::Origin;
    use crate::lexicon;

    fn entry(text: &str) -> ClassificationResult {
        ClassificationResult::new(text, lexicon::classify(text), Origin::Manual)
    }

    fn texts(ledger: &HistoryLedger) -> Vec<&str> {
        ledger.iter().map(ClassificationResult::source_text).collect()
    }

    #[test]
    fn starts_empty() {
        let ledger = HistoryLedger::new();
        assert!(ledger.is_empty());
        assert!(ledger.latest().is_none());
        assert_eq!(ledger.summary(), LedgerSummary::default());
    }

    #[test]
    fn prepend_puts_newest_first() {
        let mut ledger = HistoryLedger::new();
        ledger.prepend(entry("A"));
        ledger.prepend(entry("B"));
        assert_eq!(texts(&ledger), vec!["B", "A"]);
        assert_eq!(ledger.latest().map(ClassificationResult::source_text), Some("B"));
    }

    #[test]
    fn batch_lands_above_older_entries_in_file_order() {
        let mut ledger = HistoryLedger::new();
        ledger.prepend(entry("old"));
        ledger.prepend_batch(vec![entry("row 1"), entry("row 2"), entry("row 3")]);
        assert_eq!(texts(&ledger), vec!["row 1", "row 2", "row 3", "old"]);

        ledger.prepend(entry("newest"));
        assert_eq!(
            texts(&ledger),
            vec!["newest", "row 1", "row 2", "row 3", "old"]
        );
    }

    #[test]
    fn empty_batch_is_a_no_op() {
        let mut ledger = HistoryLedger::new();
        ledger.prepend(entry("A"));
        ledger.prepend_batch(Vec::new());
        assert_eq!(texts(&ledger), vec!["A"]);
    }

    #[test]
    fn clear_empties_ledger() {
        let mut ledger = HistoryLedger::new();
        ledger.prepend(entry("A"));
        ledger.clear();
        assert!(ledger.is_empty());
    }

    #[test]
    fn summary_counts_labels_and_averages() {
        let mut ledger = HistoryLedger::new();
        ledger.prepend(entry("great"));
        ledger.prepend(entry("awful"));
        ledger.prepend(entry("nothing here"));
        ledger.prepend(entry("the best"));

        let summary = ledger.summary();
        assert_eq!(summary.total, 4);
        assert_eq!(summary.positive, 2);
        assert_eq!(summary.negative, 1);
        assert_eq!(summary.neutral, 1);
        assert!((summary.average_confidence - (0.95 * 3.0 + 0.5) / 4.0).abs() < 1e-9);
        assert!((summary.percentage(Sentiment::Positive) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn trend_is_last_twenty_oldest_first() {
        let mut ledger = HistoryLedger::new();
        for index in 0..25 {
            let confidence = f64::from(index) / 100.0;
            let classification =
                Classification::new(Sentiment::Neutral, confidence, None).unwrap();
            ledger.prepend(ClassificationResult::new(
                format!("entry {index}"),
                classification,
                Origin::Manual,
            ));
        }

        let trend = ledger.summary().trend;
        assert_eq!(trend.len(), TREND_WINDOW);
        assert!((trend[0] - 0.05).abs() < 1e-9);
        assert!((trend[TREND_WINDOW - 1] - 0.24).abs() < 1e-9);
    }
}
