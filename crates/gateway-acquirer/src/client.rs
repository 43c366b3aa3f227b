//! # Acquiring Bank Client
//!
//! HTTP implementation of the `Acquirer` trait against the bank's
//! create-payment endpoint. One call per authorization attempt; any
//! transport failure or non-success status collapses into
//! `GatewayError::Downstream`.

use crate::config::AcquirerConfig;
use async_trait::async_trait;
use gateway_core::{Acquirer, Authorization, GatewayError, GatewayResult, ValidatedPayment};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

/// Acquiring bank client over HTTP
pub struct HttpAcquirer {
    config: AcquirerConfig,
    client: Client,
}

impl HttpAcquirer {
    /// Create a new client for the configured bank endpoint
    pub fn new(config: AcquirerConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Create from environment variables
    pub fn from_env() -> GatewayResult<Self> {
        let config = AcquirerConfig::from_env()?;
        Ok(Self::new(config))
    }

    /// Format an expiry as the bank's "MM/YYYY" wire string
    fn expiry_date(payment: &ValidatedPayment) -> String {
        format!("{:02}/{}", payment.expiry_month, payment.expiry_year)
    }
}

#[async_trait]
impl Acquirer for HttpAcquirer {
    #[instrument(
        skip(self, payment),
        fields(currency = %payment.currency, amount = payment.amount)
    )]
    async fn authorize(&self, payment: &ValidatedPayment) -> GatewayResult<Authorization> {
        let body = BankPaymentRequest {
            card_number: &payment.card_number,
            expiry_date: Self::expiry_date(payment),
            currency: payment.currency.as_str(),
            amount: payment.amount,
            cvv: &payment.cvv,
        };

        let response = self
            .client
            .post(self.config.payments_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::Downstream(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            error!("Bank API error: status={}", status);
            return Err(GatewayError::Downstream(format!(
                "bank returned HTTP {status}"
            )));
        }

        let decision: BankPaymentResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::Downstream(format!("invalid bank response: {e}")))?;

        debug!(authorized = decision.authorized, "bank decision received");

        if decision.authorized {
            Ok(Authorization::Authorized {
                authorization_code: decision.authorization_code,
            })
        } else {
            Ok(Authorization::Declined)
        }
    }

    fn name(&self) -> &'static str {
        "acquiring-bank"
    }
}

// =============================================================================
// Bank API Types
// =============================================================================

/// Outbound payload. Carries the full PAN, so no `Debug` derive.
#[derive(Serialize)]
struct BankPaymentRequest<'a> {
    card_number: &'a str,
    expiry_date: String,
    currency: &'a str,
    amount: i64,
    cvv: &'a str,
}

#[derive(Debug, Deserialize)]
struct BankPaymentResponse {
    authorized: bool,
    #[serde(default)]
    authorization_code: String,
}
