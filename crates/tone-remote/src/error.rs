//! Remote provider error types.

use thiserror::Error;

/// Errors that can occur when calling a hosted sentiment model.
///
/// None of these are fatal to the application: the orchestrator recovers from
/// every variant by falling back to the lexicon classifier.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// No API key was configured.
    #[error("no API key configured for remote inference")]
    MissingApiKey,

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Inference API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the endpoint.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The hosted model is still being loaded; retrying later may succeed.
    #[error("model is loading{}", estimated_time_secs.map(|secs| format!(" (estimated {secs:.0}s)")).unwrap_or_default())]
    ModelLoading {
        /// Estimated seconds until the model is ready, when reported.
        estimated_time_secs: Option<f64>,
    },

    /// The endpoint returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// Failed to parse or validate an inference response.
    #[error("parse error: {0}")]
    Parse(String),
}
