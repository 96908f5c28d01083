use tone_core::{ClassificationResult, HistoryLedger, Industry};

use crate::strategy::Strategy;

/// Everything a session knows: the ledger plus the settings that steer
/// classification.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub(crate) ledger: HistoryLedger,
    pub(crate) industry: Industry,
    pub(crate) strategy: Strategy,
    pub(crate) analyzing: bool,
    pub(crate) last_result: Option<ClassificationResult>,
}

impl AppState {
    /// Fresh session with an empty ledger.
    #[must_use]
    pub fn new(industry: Industry, strategy: Strategy) -> Self {
        Self {
            industry,
            strategy,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn ledger(&self) -> &HistoryLedger {
        &self.ledger
    }

    #[must_use]
    pub const fn industry(&self) -> Industry {
        self.industry
    }

    #[must_use]
    pub const fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    /// True while a manual analysis is awaiting its classifier.
    ///
    /// [`handle`](crate::handle) owns the state for the whole await, so
    /// callers never observe `true` on a state they hold. Exclusive
    /// ownership of the session is what stops a second submission; the flag
    /// only marks the state as mid-analysis inside the handler.
    #[must_use]
    pub const fn is_analyzing(&self) -> bool {
        self.analyzing
    }

    /// Result of the most recent manual analysis.
    #[must_use]
    pub const fn last_result(&self) -> Option<&ClassificationResult> {
        self.last_result.as_ref()
    }

    /// Switch industry focus; affects later samples and remote model choice.
    #[must_use]
    pub fn with_industry(mut self, industry: Industry) -> Self {
        self.industry = industry;
        self
    }
}
