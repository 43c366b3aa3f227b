//! # gateway-api
//!
//! HTTP API layer for card-gateway-rs.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - REST endpoints for processing and fetching payments
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | POST | `/api/v1/payments` | Process a payment |
//! | GET | `/api/v1/payments/{id}` | Fetch a processed payment |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
