//! Typed backend calls used by the dashboard views.
//!
//! Each call takes the caller's cancellation token and goes through
//! [`ApiClient::execute`](crate::ApiClient::execute).

pub mod chat;
pub mod library;
pub mod schedule;

use haven_shared::{ApiError, Outcome};
use serde::de::IgnoredAny;

/// Drop whatever payload an acknowledgement carried.
pub(crate) fn ack(outcome: Result<Outcome<IgnoredAny>, ApiError>) -> Result<Outcome<()>, ApiError> {
    outcome.map(|o| o.map(|_| ()))
}
