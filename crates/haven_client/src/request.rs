//! Description of one outbound call.

use haven_shared::ApiError;
use reqwest::Method;
use serde::Serialize;
use tokio_util::sync::CancellationToken;

/// Fallback success message when the server sends none
pub const DEFAULT_FALLBACK_MESSAGE: &str = "Request completed";

/// Method, path, body, query and cancellation for one call.
///
/// Path parameters are interpolated by the caller before building the spec.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    pub method: Method,
    pub path: String,
    pub body: Option<serde_json::Value>,
    pub query: Vec<(String, String)>,
    pub cancel: Option<CancellationToken>,
    pub fallback_message: String,
}

impl RequestSpec {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            query: Vec::new(),
            cancel: None,
            fallback_message: DEFAULT_FALLBACK_MESSAGE.to_string(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Attach a JSON body. Encoding failures surface before any I/O.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body)
            .map_err(|e| ApiError::transport(format!("Failed to encode request body: {}", e)))?;
        self.body = Some(value);
        Ok(self)
    }

    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    pub fn query_opt(self, key: impl Into<String>, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    pub fn cancel_on(mut self, token: &CancellationToken) -> Self {
        self.cancel = Some(token.clone());
        self
    }

    pub fn fallback(mut self, message: impl Into<String>) -> Self {
        self.fallback_message = message.into();
        self
    }
}

/// Escape an id so it stays exactly one path segment.
///
/// Empty, `.` and `..` ids cannot be addressed as a segment and are rejected
/// before any I/O.
pub fn path_segment(id: &str) -> Result<String, ApiError> {
    if id.is_empty() || id == "." || id == ".." {
        return Err(ApiError::transport(format!(
            "Invalid path segment '{}'",
            id
        )));
    }
    Ok(urlencoding::encode(id).into_owned())
}
