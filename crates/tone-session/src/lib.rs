//! # tone-session
//!
//! Application state and the ingestion orchestrator.
//!
//! All session state lives in one [`AppState`] value. Every user action is an
//! [`Event`], and [`handle`] turns `(state, event)` into a [`Transition`]: the
//! next state plus a [`Notice`] describing what happened. Handlers never fail;
//! a remote error during analysis is converted into a local classification
//! before the ledger is touched.

mod orchestrator;
mod state;
mod strategy;

pub use orchestrator::{Event, Notice, Transition, handle};
pub use state::AppState;
pub use strategy::Strategy;
