//! Response envelopes and the normalized outcome of one remote call.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Status string carried by every successful outcome.
pub const STATUS_SUCCESS: &str = "success";

/// Status string used when the backend did not report one.
pub const STATUS_ERROR: &str = "error";

/// Normalized success of a remote call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub code: u16,
    pub status: String,
    pub message: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(code: u16, message: impl Into<String>, data: T) -> Self {
        Self {
            code,
            status: STATUS_SUCCESS.to_string(),
            message: message.into(),
            data,
        }
    }

    /// Transform the payload, keeping code/status/message.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        ApiResponse {
            code: self.code,
            status: self.status,
            message: self.message,
            data: f(self.data),
        }
    }
}

/// What a call resolved to when it did not fail.
///
/// Failures travel separately as `Err(ApiError)`, so a completed call is
/// exactly one of success, failure, or cancelled.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Success(ApiResponse<T>),
    /// The caller's token fired before the call settled.
    Cancelled,
}

impl<T> Outcome<T> {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Outcome::Cancelled)
    }

    pub fn success(self) -> Option<ApiResponse<T>> {
        match self {
            Outcome::Success(response) => Some(response),
            Outcome::Cancelled => None,
        }
    }

    pub fn data(self) -> Option<T> {
        self.success().map(|r| r.data)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Success(response) => Outcome::Success(response.map(f)),
            Outcome::Cancelled => Outcome::Cancelled,
        }
    }
}

/// Failure body shape. Backends disagree on which field carries the text,
/// so both are optional and kept as raw JSON.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorBody {
    pub error: Option<Value>,
    pub message: Option<Value>,
    pub status: Option<Value>,
}

impl ErrorBody {
    /// Read the known fields of a JSON object; anything else is not an
    /// error body.
    pub fn from_object(value: Value) -> Option<Self> {
        let Value::Object(mut fields) = value else {
            return None;
        };
        Some(Self {
            error: fields.remove("error"),
            message: fields.remove("message"),
            status: fields.remove("status"),
        })
    }

    /// First usable message: `error`, then `message`.
    pub fn reported_message(&self) -> Option<&str> {
        non_empty_str(self.error.as_ref()).or_else(|| non_empty_str(self.message.as_ref()))
    }

    pub fn reported_status(&self) -> Option<&str> {
        non_empty_str(self.status.as_ref())
    }
}

/// Success body shape: `{status, message, data}`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuccessBody {
    pub status: Option<Value>,
    pub message: Option<Value>,
    /// `null` when the body carries no `data` field.
    pub data: Value,
}

impl SuccessBody {
    /// Read the envelope fields of a JSON object; `None` for any other JSON.
    pub fn from_object(value: Value) -> Option<Self> {
        let Value::Object(mut fields) = value else {
            return None;
        };
        Some(Self {
            status: fields.remove("status"),
            message: fields.remove("message"),
            data: fields.remove("data").unwrap_or(Value::Null),
        })
    }

    pub fn reported_message(&self) -> Option<&str> {
        non_empty_str(self.message.as_ref())
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value
        .and_then(|v| v.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
}
