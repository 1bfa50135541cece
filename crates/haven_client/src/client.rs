//! HTTP client for the dashboard backend.

use crate::config::{ClientConfig, ConfigError};
use crate::normalizer::{normalize, RawResponse, TransportError};
use crate::request::RequestSpec;
use haven_shared::{ApiError, Outcome};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};
use uuid::Uuid;

/// Correlation header attached to every request
pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// Explicitly constructed backend client.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ClientConfig,
    base: reqwest::Url,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let base = config.base()?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self { config, base, http })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Absolute URL for a backend path, joined with exactly one slash.
    pub fn url_for(&self, path: &str) -> Result<reqwest::Url, ApiError> {
        let joined = format!(
            "{}/{}",
            self.base.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        reqwest::Url::parse(&joined)
            .map_err(|e| ApiError::transport(format!("Invalid request path '{}': {}", path, e)))
    }

    /// Run one call through the normalizer.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        spec: RequestSpec,
    ) -> Result<Outcome<T>, ApiError> {
        let url = self.url_for(&spec.path)?;
        let request_id = Uuid::new_v4().to_string();

        let mut builder = self
            .http
            .request(spec.method.clone(), url.clone())
            .header(REQUEST_ID_HEADER, request_id.as_str());
        if !spec.query.is_empty() {
            builder = builder.query(&spec.query);
        }
        if let Some(body) = &spec.body {
            builder = builder.json(body);
        }
        if let Some(token) = &self.config.auth_token {
            builder = builder.bearer_auth(token);
        }

        debug!("[{}] {} {}", request_id, spec.method, url);

        let outcome = normalize(spec.cancel.as_ref(), &spec.fallback_message, || async move {
            let response = builder.send().await?;
            let status = response.status().as_u16();
            let body = response.bytes().await.map_err(|e| TransportError {
                status: Some(status),
                message: e.to_string(),
            })?;
            Ok::<RawResponse, TransportError>(RawResponse {
                status,
                body: body.to_vec(),
            })
        })
        .await;

        match &outcome {
            Ok(Outcome::Success(response)) => {
                debug!("[{}] {} {}", request_id, response.code, response.message)
            }
            Ok(Outcome::Cancelled) => debug!("[{}] cancelled", request_id),
            Err(e) => warn!(
                "[{}] {} {} failed: {} ({})",
                request_id, spec.method, url, e.message, e.code
            ),
        }

        outcome
    }
}
