//! Haven client - typed access to the dashboard backend.
//!
//! All calls resolve to one of three outcomes: `Ok(Outcome::Success)`,
//! `Ok(Outcome::Cancelled)` when the caller's token fired, or
//! `Err(ApiError)`. See [`normalizer`] for how responses are classified.

pub mod client;
pub mod config;
pub mod endpoints;
pub mod normalizer;
pub mod request;

pub use client::{ApiClient, REQUEST_ID_HEADER};
pub use config::{ClientConfig, ConfigError};
pub use normalizer::{normalize, RawResponse, TransportError};
pub use request::RequestSpec;

pub use haven_shared::{ApiError, ApiResponse, Outcome};
pub use tokio_util::sync::CancellationToken;
