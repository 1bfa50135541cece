//! Shared types for the Haven dashboard client.
//!
//! Wire envelopes, the normalized call outcome, and the payloads exchanged
//! with the dashboard backend (library, anonymous chat, therapist schedules).

pub mod chat;
pub mod envelope;
pub mod error;
pub mod library;
pub mod schedule;

pub use envelope::{ApiResponse, Outcome, STATUS_ERROR, STATUS_SUCCESS};
pub use error::ApiError;
