//! # Request Handlers
//!
//! Axum request handlers for the payment gateway API.

use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use gateway_core::{GatewayError, Payment, PaymentRequest, Violation};
use serde::Serialize;
use tracing::{error, info, instrument};
use uuid::Uuid;

// =============================================================================
// Response Types
// =============================================================================

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violations: Option<Vec<Violation>>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: u16) -> Self {
        Self {
            error: error.into(),
            code,
            violations: None,
        }
    }

    pub fn with_violations(mut self, violations: Vec<Violation>) -> Self {
        self.violations = Some(violations);
        self
    }
}

fn gateway_error_to_response(err: GatewayError) -> (StatusCode, Json<ErrorResponse>) {
    let code = err.status_code();
    let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let response = match err {
        GatewayError::Validation(violations) => {
            ErrorResponse::new("Payment request rejected", code).with_violations(violations)
        }
        // Downstream detail is internal diagnostics only; callers get an
        // opaque failure
        GatewayError::Downstream(_) => ErrorResponse::new(
            "Unable to obtain an authorization decision from the acquiring bank",
            code,
        ),
        other => ErrorResponse::new(other.to_string(), code),
    };
    (status, Json(response))
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "card-gateway",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Process a payment
#[instrument(skip(state, request), fields(currency = %request.currency))]
pub async fn create_payment(
    State(state): State<AppState>,
    Json(request): Json<PaymentRequest>,
) -> Result<Json<Payment>, (StatusCode, Json<ErrorResponse>)> {
    let payment = match state.processor.process(&request).await {
        Ok(payment) => payment,
        // A rejected request is the caller's fault, not a system fault
        Err(err @ GatewayError::Validation(_)) => return Err(gateway_error_to_response(err)),
        Err(err) => {
            error!("Failed to process payment: {}", err);
            return Err(gateway_error_to_response(err));
        }
    };

    info!("Processed payment: {}", payment.id);

    Ok(Json(payment))
}

/// Fetch a previously processed payment
#[instrument(skip(state))]
pub async fn get_payment(
    State(state): State<AppState>,
    Path(payment_id): Path<String>,
) -> Result<Json<Payment>, (StatusCode, Json<ErrorResponse>)> {
    // An id that never parses was never issued; same outcome as unknown
    let payment = match payment_id.parse::<Uuid>() {
        Ok(id) => state.store.get(id).await,
        Err(_) => None,
    };

    match payment {
        Some(payment) => Ok(Json(payment)),
        None => Err(gateway_error_to_response(GatewayError::NotFound(payment_id))),
    }
}
