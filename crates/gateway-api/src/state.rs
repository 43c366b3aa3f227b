//! # Application State
//!
//! Shared state for the Axum application.
//! Wires the payment processor, store, and configuration together.

use gateway_acquirer::HttpAcquirer;
use gateway_core::{BoxedAcquirer, BoxedPaymentStore, InMemoryPaymentStore, PaymentProcessor};
use std::sync::Arc;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Environment (development, staging, production)
    pub environment: String,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid socket address")
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Payment processing pipeline
    pub processor: Arc<PaymentProcessor>,
    /// Payment store, shared with the processor
    pub store: BoxedPaymentStore,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create a new AppState with the HTTP acquiring-bank client
    pub fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env();

        let acquirer = HttpAcquirer::from_env()
            .map_err(|e| anyhow::anyhow!("Failed to initialize acquiring-bank client: {}", e))?;

        Ok(Self::with_acquirer(config, Arc::new(acquirer)))
    }

    /// Create state over an explicit acquirer (for testing)
    pub fn with_acquirer(config: AppConfig, acquirer: BoxedAcquirer) -> Self {
        let store: BoxedPaymentStore = Arc::new(InMemoryPaymentStore::new());
        let processor = Arc::new(PaymentProcessor::new(acquirer, store.clone()));

        Self {
            processor,
            store,
            config,
        }
    }
}
