//! # tone-core
//!
//! Core types, the lexicon classifier, and the history ledger for Tone.
//!
//! This crate provides the foundational types shared across all Tone crates:
//! - Sentiment, origin, and industry enums
//! - The `Classification` fragment and the full `ClassificationResult`
//! - The dependency-free lexicon classifier
//! - The newest-first in-memory history ledger and its distribution summary
//! - The curated finance and government sample datasets
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ledger;
pub mod lexicon;
pub mod samples;

pub use entities::{Classification, ClassificationResult};
pub use enums::{Industry, Origin, Sentiment};
pub use errors::CoreError;
pub use ledger::{HistoryLedger, LedgerSummary};
