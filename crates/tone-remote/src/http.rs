//! Shared HTTP request and response handling for the model clients.
//!
//! Centralizes status-code checks (429 rate limiting with `Retry-After`
//! parsing, "model loading" notices, non-success → [`RemoteError::Api`]) and
//! response decoding so the per-model modules only map scores to labels.

use serde::Deserialize;

use crate::{LabelScore, RemoteClient, RemoteModel, error::RemoteError};

/// Error body returned by the inference API.
#[derive(Debug, Deserialize)]
struct ErrorPayload {
    error: String,
    #[serde(default)]
    estimated_time: Option<f64>,
}

/// Accepted response shapes.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InferenceResponse {
    Nested(Vec<Vec<LabelScore>>),
    Flat(Vec<LabelScore>),
    Error(ErrorPayload),
}

impl RemoteClient {
    /// Send `text` to `model` and return the label scores it reports.
    pub(crate) async fn post_inference(
        &self,
        model: RemoteModel,
        text: &str,
    ) -> Result<Vec<LabelScore>, RemoteError> {
        let url = self.endpoint(model);
        tracing::debug!(%url, chars = text.chars().count(), "sending inference request");

        let resp = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&serde_json::json!({ "inputs": text }))
            .send()
            .await?;
        let resp = check_response(resp).await?;
        let body = resp.text().await?;
        parse_scores(&body)
    }
}

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success. Handles:
/// - **429 Too Many Requests** → [`RemoteError::RateLimited`] with
///   `Retry-After` header parsing (falls back to 60 s if absent or
///   unparseable).
/// - **Loading notice in an error body** → [`RemoteError::ModelLoading`].
/// - **Non-success status** → [`RemoteError::Api`] with status code and
///   response body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, RemoteError> {
    if resp.status() == 429 {
        let retry_after = parse_retry_after(&resp);
        return Err(RemoteError::RateLimited {
            retry_after_secs: retry_after,
        });
    }
    if !resp.status().is_success() {
        let status = resp.status().as_u16();
        let message = resp.text().await.unwrap_or_default();
        if let Some(loading) = loading_error(&message) {
            return Err(loading);
        }
        return Err(RemoteError::Api { status, message });
    }
    Ok(resp)
}

/// Decode a success body into the first list of label scores.
pub fn parse_scores(body: &str) -> Result<Vec<LabelScore>, RemoteError> {
    let response: InferenceResponse =
        serde_json::from_str(body).map_err(|e| RemoteError::Parse(e.to_string()))?;

    let scores = match response {
        InferenceResponse::Nested(mut lists) => {
            if lists.is_empty() {
                Vec::new()
            } else {
                lists.swap_remove(0)
            }
        }
        InferenceResponse::Flat(scores) => scores,
        InferenceResponse::Error(payload) => return Err(error_payload(payload)),
    };

    if scores.is_empty() {
        return Err(RemoteError::Parse("response contained no label scores".into()));
    }
    Ok(scores)
}

fn loading_error(body: &str) -> Option<RemoteError> {
    let payload: ErrorPayload = serde_json::from_str(body).ok()?;
    match error_payload(payload) {
        loading @ RemoteError::ModelLoading { .. } => Some(loading),
        _ => None,
    }
}

fn error_payload(payload: ErrorPayload) -> RemoteError {
    if payload.error.to_ascii_lowercase().contains("loading") {
        RemoteError::ModelLoading {
            estimated_time_secs: payload.estimated_time,
        }
    } else {
        RemoteError::Parse(format!("inference error: {}", payload.error))
    }
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    fn mock_response_with_retry_after(status: u16, value: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .header("Retry-After", value)
                .body("")
                .unwrap(),
        )
    }

    #[test]
    fn parse_retry_after_from_header() {
        let resp = mock_response_with_retry_after(429, "120");
        assert_eq!(parse_retry_after(&resp), 120);
    }

    #[test]
    fn parse_retry_after_missing_header() {
        let resp = mock_response(429, "");
        assert_eq!(parse_retry_after(&resp), 60);
    }

    #[test]
    fn parse_retry_after_non_numeric() {
        let resp = mock_response_with_retry_after(429, "not-a-number");
        assert_eq!(parse_retry_after(&resp), 60);
    }

    #[tokio::test]
    async fn check_response_rate_limited_with_header() {
        let resp = mock_response_with_retry_after(429, "30");
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(
            err,
            RemoteError::RateLimited {
                retry_after_secs: 30
            }
        ));
    }

    #[tokio::test]
    async fn check_response_api_error() {
        let resp = mock_response(500, "internal");
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(err, RemoteError::Api { status: 500, ref message } if message == "internal"));
    }

    #[tokio::test]
    async fn check_response_loading_on_503() {
        let resp = mock_response(
            503,
            r#"{"error":"Model ProsusAI/finbert is currently loading","estimated_time":20.5}"#,
        );
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(
            err,
            RemoteError::ModelLoading {
                estimated_time_secs: Some(t)
            } if (t - 20.5).abs() < f64::EPSILON
        ));
    }

    #[tokio::test]
    async fn check_response_success() {
        let resp = mock_response(200, "[]");
        assert!(check_response(resp).await.is_ok());
    }

    #[test]
    fn parses_nested_scores() {
        let scores =
            parse_scores(r#"[[{"label":"NEGATIVE","score":0.1},{"label":"POSITIVE","score":0.9}]]"#)
                .unwrap();
        assert_eq!(scores.len(), 2);
        assert_eq!(scores[1].label, "POSITIVE");
    }

    #[test]
    fn parses_flat_scores() {
        let scores = parse_scores(r#"[{"label":"neutral","score":0.8}]"#).unwrap();
        assert_eq!(scores[0].label, "neutral");
    }

    #[test]
    fn loading_payload_on_success_status() {
        let err = parse_scores(r#"{"error":"Model is currently loading"}"#).unwrap_err();
        assert!(matches!(
            err,
            RemoteError::ModelLoading {
                estimated_time_secs: None
            }
        ));
    }

    #[test]
    fn other_error_payload_is_parse_error() {
        let err = parse_scores(r#"{"error":"Authorization header is invalid"}"#).unwrap_err();
        assert!(matches!(err, RemoteError::Parse(ref m) if m.contains("Authorization")));
    }

    #[test]
    fn empty_and_garbage_bodies_are_parse_errors() {
        assert!(matches!(parse_scores("[]"), Err(RemoteError::Parse(_))));
        assert!(matches!(parse_scores("[[]]"), Err(RemoteError::Parse(_))));
        assert!(matches!(parse_scores("<html>"), Err(RemoteError::Parse(_))));
    }
}
