//! Error types for remora operations.
//!
//! The adapter's boundary contract is a flat, message-only error object, so
//! the internal taxonomy stays small: every failure a tool call can produce
//! collapses to a human-readable message at the MCP boundary.

use thiserror::Error;

/// Result type alias for remora operations.
pub type RemoraResult<T> = Result<T, RemoraError>;

/// Main error type for all remora operations.
#[derive(Error, Debug)]
pub enum RemoraError {
    /// Configuration error (bad environment variable, unparseable port).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The API key is not configured; no network call was attempted.
    #[error("MEM0_API_KEY is not configured. {0}")]
    MissingApiKey(String),

    /// Remote API call failed (network error or non-2xx status).
    #[error("{0}")]
    Api(String),
}

impl RemoraError {
    /// Create an API error with operation context.
    pub fn api(message: impl Into<String>) -> Self {
        Self::Api(message.into())
    }

    /// Create a missing-key error describing the operation that was refused.
    pub fn missing_api_key(action: impl Into<String>) -> Self {
        Self::MissingApiKey(action.into())
    }
}
