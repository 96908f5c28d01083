//! Cross-cutting error types for Tone.
//!
//! Domain-specific errors (`CsvError`, `RemoteError`, `ConfigError`) are
//! defined in their respective crates. They converge into `anyhow` in
//! `tone-cli`.

use thiserror::Error;

/// Errors that can be raised by any Tone crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A confidence score was outside `[0, 1]` or not a finite number.
    #[error("confidence {value} is outside [0, 1]")]
    ConfidenceOutOfRange { value: f64 },
}
