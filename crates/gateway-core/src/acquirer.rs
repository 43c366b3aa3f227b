//! # Acquirer Trait
//!
//! Seam between the payment pipeline and an acquiring bank. The HTTP
//! implementation lives in `gateway-acquirer`; tests swap in scripted
//! doubles.

use async_trait::async_trait;
use std::sync::Arc;

use crate::error::GatewayResult;
use crate::payment::{PaymentStatus, ValidatedPayment};

/// Decision returned by an acquiring bank for one charge attempt.
///
/// A decline is a definitive answer, not an error. Only the inability
/// to obtain an answer at all surfaces as `GatewayError::Downstream`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Authorization {
    /// Bank approved the charge
    Authorized {
        /// Bank-issued authorization code
        authorization_code: String,
    },
    /// Bank refused the charge
    Declined,
}

impl Authorization {
    /// Map the bank decision onto the persisted status value
    pub fn status(&self) -> PaymentStatus {
        match self {
            Authorization::Authorized { .. } => PaymentStatus::Authorized,
            Authorization::Declined => PaymentStatus::Declined,
        }
    }
}

/// Core trait for acquiring-bank implementations.
#[async_trait]
pub trait Acquirer: Send + Sync {
    /// Submit a validated payment for authorization.
    ///
    /// Exactly one outbound call per invocation; no retries, no
    /// caching. Any transport failure or non-success status maps to
    /// `GatewayError::Downstream`.
    async fn authorize(&self, payment: &ValidatedPayment) -> GatewayResult<Authorization>;

    /// Get the acquirer name (for logging).
    fn name(&self) -> &'static str;
}

/// Type alias for a shared acquirer (dynamic dispatch)
pub type BoxedAcquirer = Arc<dyn Acquirer>;
