//! # Acquirer Configuration
//!
//! Configuration for the acquiring-bank endpoint. The base address is
//! loaded from environment variables.

use gateway_core::GatewayError;
use std::env;

/// Environment variable naming the acquiring-bank base address
pub const BASE_URL_ENV: &str = "ACQUIRING_BANK_URL";

/// Acquiring bank endpoint configuration
#[derive(Debug, Clone)]
pub struct AcquirerConfig {
    /// Base address of the bank API (e.g., "http://localhost:8080")
    pub base_url: String,
}

impl AcquirerConfig {
    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `ACQUIRING_BANK_URL`
    pub fn from_env() -> Result<Self, GatewayError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let base_url = env::var(BASE_URL_ENV)
            .map_err(|_| GatewayError::Configuration(format!("{BASE_URL_ENV} not set")))?;

        if base_url.trim().is_empty() {
            return Err(GatewayError::Configuration(format!(
                "{BASE_URL_ENV} is empty"
            )));
        }

        Ok(Self::new(base_url))
    }

    /// Create config with an explicit base address (for testing)
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Full URL of the bank's create-payment endpoint
    pub fn payments_url(&self) -> String {
        format!("{}/payments", self.base_url)
    }
}
