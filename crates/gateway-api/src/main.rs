//! # Card-Gateway RS
//!
//! Payment gateway bridging card payments to an acquiring bank.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export ACQUIRING_BANK_URL=http://localhost:8080
//!
//! # Run the server
//! card-gateway
//! ```

use gateway_api::{routes, state::AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    // Print banner
    print_banner();

    // Initialize application state
    let state = AppState::new()?;

    let addr = state.config.socket_addr();
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);

    // Create router
    let app = routes::create_router(state);

    // Start server
    info!("🚀 Card-Gateway starting on http://{}", addr);

    if !is_prod {
        info!("📝 Health: GET http://{}/health", addr);
        info!("💳 Payments: POST http://{}/api/v1/payments", addr);
        info!("🔎 Retrieval: GET http://{}/api/v1/payments/{{id}}", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn print_banner() {
    println!(
        r#"
  💳 Card-Gateway RS 💳
  ━━━━━━━━━━━━━━━━━━━━━
  Card payments to acquiring bank
  Version: {}

"#,
        env!("CARGO_PKG_VERSION")
    );
}
