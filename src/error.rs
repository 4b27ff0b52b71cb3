//! Error types for Guardr
//!
//! Centralized error handling using thiserror.
//!
//! Per-attempt validation failures are not errors: they surface as
//! `ValidationOutcome::Rejected` values. The variants here cover programmer
//! errors (bad schema or moderation setup), upstream producer failures, and
//! an exhausted retry budget.

use thiserror::Error;

/// All error types that can occur in Guardr
#[derive(Debug, Error)]
pub enum GuardrError {
    /// Schema definition is invalid (programmer error)
    #[error("Invalid schema: {0}")]
    Schema(String),

    /// Moderation setup is invalid (programmer error)
    #[error("Moderation error: {0}")]
    Moderation(String),

    /// The upstream producer (the model call) failed
    #[error("Producer error: {0}")]
    Produce(String),

    /// Retry budget exhausted without an accepted result
    #[error("Retry exhausted after {attempts} attempts: {reason}")]
    RetryExhausted { attempts: u32, reason: String },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Guardr operations
pub type Result<T> = std::result::Result<T, GuardrError>;
