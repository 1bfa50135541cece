//! Client configuration.
//!
//! Loads settings from `~/.config/haven/config.toml` (or an explicit path)
//! and applies `HAVEN_API_URL` / `HAVEN_API_TOKEN` overrides on top.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Overrides `base_url`
pub const API_URL_ENV: &str = "HAVEN_API_URL";

/// Overrides `auth_token`
pub const API_TOKEN_ENV: &str = "HAVEN_API_TOKEN";

/// Connection settings for the dashboard backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Backend root, e.g. `https://api.example.org/v1`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Bearer token sent with every request when set
    #[serde(default)]
    pub auth_token: Option<String>,

    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "http://localhost:5000/api".to_string()
}

fn default_timeout_secs() -> u64 {
    15
}

fn default_user_agent() -> String {
    format!("haven-client/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            auth_token: None,
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Timeout must be at least one second")]
    ZeroTimeout,

    #[error("Failed to create HTTP client: {0}")]
    HttpClient(String),
}

impl ClientConfig {
    /// Per-user config file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("haven").join("config.toml"))
    }

    /// Load config from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: ClientConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load from an explicit path, which must exist and parse, or else
    /// from the per-user file, falling back to defaults when that one is
    /// missing or broken. Env overrides are applied last.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::load_from_path(path)?,
            None => Self::load_default(),
        };

        Ok(config.with_overrides(
            std::env::var(API_URL_ENV).ok(),
            std::env::var(API_TOKEN_ENV).ok(),
        ))
    }

    fn load_default() -> Self {
        let Some(path) = Self::default_path() else {
            return ClientConfig::default();
        };
        if !path.exists() {
            return ClientConfig::default();
        }
        Self::load_from_path(&path).unwrap_or_else(|e| {
            warn!("Config not loaded, using defaults: {:#}", e);
            ClientConfig::default()
        })
    }

    /// Apply override values; blank strings are ignored.
    pub fn with_overrides(mut self, base_url: Option<String>, auth_token: Option<String>) -> Self {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            self.base_url = url.trim().to_string();
        }
        if let Some(token) = auth_token.filter(|t| !t.trim().is_empty()) {
            self.auth_token = Some(token.trim().to_string());
        }
        self
    }

    /// Parsed base URL, rejecting anything that is not http(s).
    pub fn base(&self) -> Result<reqwest::Url, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason,
        };

        let url = reqwest::Url::parse(self.base_url.trim()).map_err(|e| invalid(e.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(invalid(format!("unsupported scheme '{}'", other))),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.base()?;
        if self.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }

    /// Write this config as TOML, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        info!("Saved config to {}", path.display());
        Ok(())
    }
}
