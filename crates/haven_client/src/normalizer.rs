//! Request normalizer.
//!
//! Every backend call funnels through [`normalize`], which turns whatever the
//! transport produced into `Ok(Outcome::Success)`, `Ok(Outcome::Cancelled)`
//! or `Err(ApiError)`. Failure messages are taken from the body's `error`
//! field, then its `message` field, then the transport's own text.

use haven_shared::envelope::{ErrorBody, SuccessBody};
use haven_shared::{ApiError, ApiResponse, Outcome};
use serde::de::DeserializeOwned;
use std::future::Future;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Status and body of a response that made it back to us.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// The round-trip did not produce a complete response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportError {
    /// Set when headers arrived but the body could not be read.
    pub status: Option<u16>,
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        Self {
            status: e.status().map(|s| s.as_u16()),
            message: e.to_string(),
        }
    }
}

/// Run one call and normalize its outcome.
///
/// `call` performs the round-trip. A token that has already fired skips the
/// call entirely; one that fires while it is outstanding drops the future.
/// A transport error observed after the token fired is also reported as
/// cancelled, since the abort is what caused it.
pub async fn normalize<T, F, Fut>(
    cancel: Option<&CancellationToken>,
    fallback_message: &str,
    call: F,
) -> Result<Outcome<T>, ApiError>
where
    T: DeserializeOwned,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<RawResponse, TransportError>>,
{
    let settled = match cancel {
        Some(token) => {
            if token.is_cancelled() {
                debug!("Token already fired, call skipped");
                return Ok(Outcome::Cancelled);
            }
            tokio::select! {
                biased;
                _ = token.cancelled() => {
                    debug!("Call cancelled while in flight");
                    return Ok(Outcome::Cancelled);
                }
                settled = call() => settled,
            }
        }
        None => call().await,
    };

    match settled {
        Ok(raw) => classify_response(raw, fallback_message).map(Outcome::Success),
        Err(_) if cancel.is_some_and(CancellationToken::is_cancelled) => Ok(Outcome::Cancelled),
        Err(e) => Err(classify_transport_error(e)),
    }
}

/// Classify a response that arrived in full.
pub fn classify_response<T: DeserializeOwned>(
    raw: RawResponse,
    fallback_message: &str,
) -> Result<ApiResponse<T>, ApiError> {
    if !(200..300).contains(&raw.status) {
        return Err(classify_failure(raw.status, &raw.body));
    }

    let body: SuccessBody = if raw.body.iter().all(u8::is_ascii_whitespace) {
        SuccessBody::default()
    } else {
        let value: serde_json::Value = serde_json::from_slice(&raw.body).map_err(|e| {
            ApiError::server(raw.status, None, format!("Invalid response body: {}", e))
        })?;
        SuccessBody::from_object(value).ok_or_else(|| {
            ApiError::server(
                raw.status,
                None,
                "Invalid response body: expected a JSON object",
            )
        })?
    };

    let message = body
        .reported_message()
        .unwrap_or(fallback_message)
        .to_string();

    let data: T = serde_json::from_value(body.data).map_err(|e| {
        ApiError::server(raw.status, None, format!("Unexpected response data: {}", e))
    })?;

    Ok(ApiResponse::new(raw.status, message, data))
}

/// Build the rejection for a non-2xx response.
pub fn classify_failure(status: u16, body: &[u8]) -> ApiError {
    let parsed = serde_json::from_slice::<serde_json::Value>(body)
        .ok()
        .and_then(ErrorBody::from_object)
        .unwrap_or_default();

    let message = parsed
        .reported_message()
        .map(str::to_string)
        .unwrap_or_else(|| generic_status_message(status));

    ApiError::server(status, parsed.reported_status(), message)
}

/// Build the rejection when no complete response was received.
pub fn classify_transport_error(e: TransportError) -> ApiError {
    match e.status {
        Some(status) => ApiError::server(status, None, e.message),
        None => ApiError::transport(e.message),
    }
}

fn generic_status_message(status: u16) -> String {
    format!("Request failed with status code {}", status)
}
