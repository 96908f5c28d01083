use serde::Serialize;
use tone_core::{ClassificationResult, Industry, Origin, lexicon, samples};

use crate::state::AppState;

/// A user action against the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Classify one manually entered text with the active strategy.
    Analyze(String),
    /// Classify the text column of raw CSV contents with the lexicon.
    ImportCsv(String),
    /// Classify the active industry's sample dataset with the lexicon.
    LoadSamples,
    /// Drop every ledger entry.
    Clear,
}

/// What a handled event did, for the front-end to report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "notice", rename_all = "snake_case")]
pub enum Notice {
    /// One result was added using the active strategy.
    Analyzed,
    /// The remote strategy failed; one local result was added instead.
    FellBack { reason: String },
    /// The input was empty or whitespace; nothing was added.
    EmptyInput,
    /// The state was handed in mid-analysis; nothing was added.
    ///
    /// Only reachable for a state whose `analyzing` flag is still set. The
    /// by-value [`handle`] signature already serializes submissions.
    Busy,
    /// A CSV batch was added.
    Imported {
        analyzed: usize,
        skipped: usize,
        truncated: bool,
    },
    /// The CSV had no usable text column; the ledger is unchanged.
    ImportAborted { reason: String },
    /// A sample batch was added.
    SamplesLoaded { industry: Industry, count: usize },
    /// The ledger was emptied.
    Cleared { removed: usize },
}

impl Notice {
    /// One-line message for the user.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Analyzed => String::from("Analyzed 1 entry"),
            Self::FellBack { reason } => {
                format!("Remote analysis failed ({reason}); fell back to local analysis")
            }
            Self::EmptyInput => String::from("Nothing to analyze"),
            Self::Busy => String::from("An analysis is already in progress"),
            Self::Imported {
                analyzed,
                truncated,
                ..
            } => {
                if *truncated {
                    format!(
                        "Analyzed {analyzed} entries (only the first {} rows were read)",
                        tone_csv::MAX_DATA_ROWS
                    )
                } else {
                    format!("Analyzed {analyzed} entries")
                }
            }
            Self::ImportAborted { reason } => format!("Import aborted: {reason}"),
            Self::SamplesLoaded { industry, count } => {
                format!("Loaded {count} sample {industry} entries")
            }
            Self::Cleared { removed } => format!("Cleared {removed} entries"),
        }
    }

    /// True for notices the user should be warned about.
    #[must_use]
    pub const fn is_advisory(&self) -> bool {
        matches!(
            self,
            Self::FellBack { .. } | Self::ImportAborted { .. } | Self::Busy
        )
    }
}

/// Next state plus what happened.
#[derive(Debug, Clone)]
pub struct Transition {
    pub state: AppState,
    pub notice: Notice,
}

impl Transition {
    const fn new(state: AppState, notice: Notice) -> Self {
        Self { state, notice }
    }
}

/// Apply `event` to `state`. Never fails.
///
/// The state is moved in and handed back in the [`Transition`], so a caller
/// cannot start a second event until the pending one resolves.
pub async fn handle(state: AppState, event: Event) -> Transition {
    match event {
        Event::Analyze(text) => analyze(state, text).await,
        Event::ImportCsv(contents) => import_csv(state, &contents),
        Event::LoadSamples => load_samples(state),
        Event::Clear => clear(state),
    }
}

async fn analyze(mut state: AppState, text: String) -> Transition {
    if state.analyzing {
        return Transition::new(state, Notice::Busy);
    }
    if text.trim().is_empty() {
        return Transition::new(state, Notice::EmptyInput);
    }

    state.analyzing = true;
    let outcome = state.strategy.classify(state.industry, &text).await;
    state.analyzing = false;

    let (classification, origin, notice) = match outcome {
        Ok(classification) => {
            let origin = if state.strategy.is_remote() {
                Origin::RemoteApi
            } else {
                Origin::Manual
            };
            (classification, origin, Notice::Analyzed)
        }
        Err(error) => {
            tracing::warn!(%error, "remote classification failed; falling back to local lexicon");
            (
                lexicon::classify(&text),
                Origin::Manual,
                Notice::FellBack {
                    reason: error.to_string(),
                },
            )
        }
    };

    let entry = ClassificationResult::new(text, classification, origin);
    state.last_result = Some(entry.clone());
    state.ledger.prepend(entry);
    Transition::new(state, notice)
}

fn import_csv(mut state: AppState, contents: &str) -> Transition {
    let parsed = match tone_csv::parse_rows(contents) {
        Ok(parsed) => parsed,
        Err(error) => {
            tracing::warn!(%error, "csv import aborted");
            return Transition::new(
                state,
                Notice::ImportAborted {
                    reason: error.to_string(),
                },
            );
        }
    };

    let batch: Vec<ClassificationResult> = parsed
        .texts
        .into_iter()
        .map(|text| {
            let classification = lexicon::classify(&text).without_provider();
            ClassificationResult::new(text, classification, Origin::FileImport)
        })
        .collect();
    let analyzed = batch.len();
    state.ledger.prepend_batch(batch);

    tracing::info!(
        column = %parsed.column,
        analyzed,
        skipped = parsed.skipped,
        truncated = parsed.truncated,
        "imported csv rows"
    );

    Transition::new(
        state,
        Notice::Imported {
            analyzed,
            skipped: parsed.skipped,
            truncated: parsed.truncated,
        },
    )
}

fn load_samples(mut state: AppState) -> Transition {
    let industry = state.industry;
    let batch: Vec<ClassificationResult> = samples::for_industry(industry)
        .iter()
        .map(|sample| {
            let classification = lexicon::classify(sample.text).without_provider();
            ClassificationResult::new(sample.text, classification, Origin::Sample)
                .with_category(sample.category)
        })
        .collect();
    let count = batch.len();
    state.ledger.prepend_batch(batch);

    tracing::info!(%industry, count, "loaded sample entries");
    Transition::new(state, Notice::SamplesLoaded { industry, count })
}

fn clear(mut state: AppState) -> Transition {
    let removed = state.ledger.len();
    state.ledger.clear();
    state.last_result = None;
    Transition::new(state, Notice::Cleared { removed })
}
