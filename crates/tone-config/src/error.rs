//! Errors raised while loading `.tone/config.toml` and `TONE_*` variables.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A layer could not be read or did not match the config shape.
    #[error("failed to load tone config: {0}")]
    Figment(#[from] figment::Error),

    /// `field` is a dotted path such as `remote.timeout_secs`.
    #[error("bad value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
