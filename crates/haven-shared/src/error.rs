//! Error type for a rejected remote call.

use crate::envelope::STATUS_ERROR;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected outcome of a remote call.
///
/// `code` is the HTTP status, or 0 when no response was received.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{message}")]
pub struct ApiError {
    pub code: u16,
    pub status: String,
    pub message: String,
}

impl ApiError {
    /// No response at all (DNS, refused connection, timeout).
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            code: 0,
            status: STATUS_ERROR.to_string(),
            message: message.into(),
        }
    }

    pub fn server(code: u16, status: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            code,
            status: status.unwrap_or(STATUS_ERROR).to_string(),
            message: message.into(),
        }
    }

    pub fn is_transport(&self) -> bool {
        self.code == 0
    }

    pub fn is_not_found(&self) -> bool {
        self.code == 404
    }

    pub fn is_unauthorized(&self) -> bool {
        self.code == 401 || self.code == 403
    }
}
