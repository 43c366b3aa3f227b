//! # gateway-acquirer
//!
//! Acquiring-bank client for card-gateway-rs.
//!
//! Implements the `gateway_core::Acquirer` trait over the bank's HTTP
//! create-payment endpoint:
//!
//! - Outbound payload carries the card number as-is plus an "MM/YYYY"
//!   expiry string; redaction happens later in the pipeline, never on
//!   the bank call.
//! - The bank answers `{authorized, authorization_code}`; both answers
//!   are definitive decisions.
//! - Transport failures and non-2xx statuses collapse into
//!   `GatewayError::Downstream`.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use gateway_acquirer::HttpAcquirer;
//! use gateway_core::Acquirer;
//!
//! // Reads ACQUIRING_BANK_URL
//! let acquirer = HttpAcquirer::from_env()?;
//!
//! let decision = acquirer.authorize(&validated).await?;
//! ```

pub mod client;
pub mod config;

// Re-exports
pub use client::HttpAcquirer;
pub use config::{AcquirerConfig, BASE_URL_ENV};
