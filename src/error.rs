//! API error taxonomy.
//!
//! ERROR HANDLING
//! ==============
//! Every transport failure is normalized into one of these variants before
//! it reaches a state slice; components only ever see the rendered string
//! payload, never a raw `reqwest` error.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors produced by remote API operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    /// A required configuration environment variable is not set.
    #[error("missing configuration: env var {var} not set")]
    MissingConfig { var: String },

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    ClientBuild(String),

    /// The request never produced a response (connect error, timeout, ...).
    #[error("API request failed: {0}")]
    Request(String),

    /// The remote API answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Response { status: u16, message: String },

    /// The response body could not be deserialized.
    #[error("API response parse failed: {0}")]
    Parse(String),
}

/// Build a [`ApiError::Response`], preferring the remote `message` field
/// when the body is a JSON object carrying one.
#[must_use]
pub fn response_error(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
        .unwrap_or_else(|| body.trim().to_string());
    ApiError::Response { status, message }
}
