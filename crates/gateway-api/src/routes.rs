//! # Routes
//!
//! Axum router configuration for the payment gateway API.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
/// - POST /api/v1/payments - Process a payment
/// - GET  /api/v1/payments/{payment_id} - Fetch a processed payment
/// - GET  /health - Health check
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - allow all origins for now
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/payments", post(handlers::create_payment))
        .route("/payments/{payment_id}", get(handlers::get_payment));

    Router::new()
        // Health check at root
        .route("/health", get(handlers::health))
        .route("/", get(handlers::health))
        // API v1
        .nest("/api/v1", api_routes)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        // State
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppConfig;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use gateway_acquirer::{AcquirerConfig, HttpAcquirer};
    use gateway_core::{Payment, PaymentStatus};
    use std::sync::Arc;
    use uuid::Uuid;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config() -> AppConfig {
        AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            environment: "test".to_string(),
        }
    }

    fn server_with_bank(bank: &MockServer) -> TestServer {
        let acquirer = HttpAcquirer::new(AcquirerConfig::new(bank.uri()));
        let state = AppState::with_acquirer(test_config(), Arc::new(acquirer));
        TestServer::new(create_router(state)).unwrap()
    }

    async fn mount_bank_decision(bank: &MockServer, authorized: bool) {
        Mock::given(method("POST"))
            .and(path("/payments"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "authorized": authorized,
                "authorization_code": "auth-0001",
            })))
            .mount(bank)
            .await;
    }

    fn payment_body(
        card_number: &str,
        currency: &str,
        amount: i64,
        cvv: &str,
    ) -> serde_json::Value {
        serde_json::json!({
            "card_number": card_number,
            "expiry_month": 4,
            "expiry_year": 2031,
            "currency": currency,
            "amount": amount,
            "cvv": cvv,
        })
    }

    #[tokio::test]
    async fn test_authorized_payment_round_trip() {
        let bank = MockServer::start().await;
        mount_bank_decision(&bank, true).await;
        let server = server_with_bank(&bank);

        let created = server
            .post("/api/v1/payments")
            .json(&payment_body("2222405343248877", "GBP", 100, "123"))
            .await;
        created.assert_status_ok();

        let payment: Payment = created.json();
        assert_eq!(payment.status, PaymentStatus::Authorized);
        assert_eq!(payment.last_four_card_digits, "8877");
        assert_eq!(payment.amount, 100);

        let fetched = server
            .get(&format!("/api/v1/payments/{}", payment.id))
            .await;
        fetched.assert_status_ok();
        assert_eq!(fetched.json::<Payment>(), payment);
    }

    #[tokio::test]
    async fn test_declined_payment_round_trip() {
        let bank = MockServer::start().await;
        mount_bank_decision(&bank, false).await;
        let server = server_with_bank(&bank);

        let created = server
            .post("/api/v1/payments")
            .json(&payment_body("2222405343248112", "USD", 60000, "456"))
            .await;
        created.assert_status_ok();

        // A decline is a definitive answer; the payment is still stored
        let payment: Payment = created.json();
        assert_eq!(payment.status, PaymentStatus::Declined);
        assert_eq!(payment.last_four_card_digits, "8112");

        let fetched = server
            .get(&format!("/api/v1/payments/{}", payment.id))
            .await;
        fetched.assert_status_ok();
    }

    #[tokio::test]
    async fn test_invalid_request_returns_violations() {
        let bank = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/payments"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&bank)
            .await;
        let server = server_with_bank(&bank);

        let response = server
            .post("/api/v1/payments")
            .json(&payment_body("1234", "AUD", 0, "xx"))
            .await;
        response.assert_status_bad_request();

        let body: serde_json::Value = response.json();
        let violations = body["violations"].as_array().unwrap();
        assert!(!violations.is_empty());
        assert!(violations.iter().all(|v| v.get("field").is_some()));
    }

    #[tokio::test]
    async fn test_missing_fields_become_violations() {
        let bank = MockServer::start().await;
        let server = server_with_bank(&bank);

        let response = server
            .post("/api/v1/payments")
            .json(&serde_json::json!({}))
            .await;
        response.assert_status_bad_request();

        let body: serde_json::Value = response.json();
        let fields: Vec<&str> = body["violations"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|v| v["field"].as_str())
            .collect();
        for field in ["card_number", "currency", "amount", "cvv"] {
            assert!(fields.contains(&field), "missing violation for {field}");
        }
    }

    #[tokio::test]
    async fn test_bank_failure_returns_502_and_stores_nothing() {
        let bank = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/payments"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&bank)
            .await;
        let server = server_with_bank(&bank);

        let response = server
            .post("/api/v1/payments")
            .json(&payment_body("2222405343248877", "GBP", 100, "123"))
            .await;
        response.assert_status(StatusCode::BAD_GATEWAY);

        let body: serde_json::Value = response.json();
        assert_eq!(
            body["error"],
            "Unable to obtain an authorization decision from the acquiring bank"
        );
        assert!(body.get("violations").is_none());
    }

    #[tokio::test]
    async fn test_get_unknown_payment_returns_404() {
        let bank = MockServer::start().await;
        let server = server_with_bank(&bank);

        let response = server
            .get(&format!("/api/v1/payments/{}", Uuid::new_v4()))
            .await;
        response.assert_status_not_found();
    }

    #[tokio::test]
    async fn test_get_malformed_id_returns_404() {
        let bank = MockServer::start().await;
        let server = server_with_bank(&bank);

        let response = server.get("/api/v1/payments/not-a-uuid").await;
        response.assert_status_not_found();

        // Indistinguishable from an unknown id: same envelope, same code
        let body: serde_json::Value = response.json();
        assert_eq!(body["code"], 404);
        assert!(body["error"].as_str().unwrap().contains("Payment not found"));
    }

    #[tokio::test]
    async fn test_health() {
        let bank = MockServer::start().await;
        let server = server_with_bank(&bank);

        let response = server.get("/health").await;
        response.assert_status_ok();

        let body: serde_json::Value = response.json();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "card-gateway");
    }
}
