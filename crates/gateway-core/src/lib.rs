//! # gateway-core
//!
//! Core types and pipeline for the card payment gateway.
//!
//! This crate provides:
//! - `validation` rules for raw payment requests
//! - `Acquirer` trait for acquiring-bank implementations
//! - `PaymentProcessor` orchestrating validate -> authorize -> store
//! - `PaymentStore` trait with a concurrent in-memory implementation
//! - `GatewayError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use gateway_core::{InMemoryPaymentStore, PaymentProcessor, PaymentStore};
//!
//! let store = Arc::new(InMemoryPaymentStore::new());
//! let processor = PaymentProcessor::new(acquirer, store.clone());
//!
//! // Validate, authorize against the bank, store the redacted record
//! let payment = processor.process(&request).await?;
//!
//! // Later retrieval by identifier
//! let fetched = store.get(payment.id).await;
//! ```

pub mod acquirer;
pub mod card;
pub mod error;
pub mod payment;
pub mod processor;
pub mod store;
pub mod validation;

// Re-exports for convenience
pub use acquirer::{Acquirer, Authorization, BoxedAcquirer};
pub use error::{GatewayError, GatewayResult};
pub use payment::{Currency, Payment, PaymentRequest, PaymentStatus, ValidatedPayment};
pub use processor::PaymentProcessor;
pub use store::{BoxedPaymentStore, InMemoryPaymentStore, PaymentStore};
pub use validation::{validate, validate_at, Violation};
