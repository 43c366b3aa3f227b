//! # Gateway Error Types
//!
//! Typed error handling for the payment pipeline. All fallible gateway
//! operations return `Result<T, GatewayError>`.

use thiserror::Error;

use crate::validation::Violation;

/// Core error type for gateway operations
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Configuration errors (missing env vars, invalid addresses)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Request rejected by the validator; carries every field violation
    #[error("Invalid payment request: {} violation(s)", .0.len())]
    Validation(Vec<Violation>),

    /// Acquiring bank unreachable or returned a non-success status.
    /// Transport failures and non-2xx responses collapse into this one
    /// variant; the detail string is for diagnostics only and is never
    /// shown to external callers.
    #[error("Acquiring bank failure: {0}")]
    Downstream(String),

    /// No payment stored under the requested identifier. Carries the
    /// identifier as the caller supplied it; an id that never parses
    /// was never issued and lands here too.
    #[error("Payment not found: {0}")]
    NotFound(String),
}

impl GatewayError {
    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            GatewayError::Configuration(_) => 500,
            GatewayError::Validation(_) => 400,
            GatewayError::Downstream(_) => 502,
            GatewayError::NotFound(_) => 404,
        }
    }
}

/// Result type alias for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;
