//! API configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::error::ApiError;

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Connection settings for the remote admin API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the remote API, without a trailing slash.
    pub base_url: String,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl ApiConfig {
    /// Build typed API config from environment variables.
    ///
    /// Required:
    /// - `SURGADMIN_API_BASE_URL`
    ///
    /// Optional:
    /// - `SURGADMIN_REQUEST_TIMEOUT_SECS`: default 30
    /// - `SURGADMIN_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingConfig`] when the base URL is not set.
    pub fn from_env() -> Result<Self, ApiError> {
        let base_url = std::env::var("SURGADMIN_API_BASE_URL")
            .map_err(|_| ApiError::MissingConfig { var: "SURGADMIN_API_BASE_URL".into() })?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            request_timeout_secs: env_parse_u64("SURGADMIN_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_timeout_secs: env_parse_u64("SURGADMIN_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        })
    }

    /// Config with default timeouts for a known base URL.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }

    /// Versioned API root, e.g. `https://host/api/v1`.
    #[must_use]
    pub fn v1(&self) -> String {
        format!("{}/api/v1", self.base_url)
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}
