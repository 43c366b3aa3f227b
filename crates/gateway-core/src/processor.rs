//! # Payment Processor
//!
//! Orchestrates one payment attempt: validate, authorize against the
//! acquiring bank, redact, store. The single entry point for
//! processing; retrieval goes straight to the store.

use tracing::{debug, info, instrument, warn};

use crate::acquirer::BoxedAcquirer;
use crate::card;
use crate::error::{GatewayError, GatewayResult};
use crate::payment::{Payment, PaymentRequest};
use crate::store::BoxedPaymentStore;
use crate::validation;

/// Drives a raw payment request through the full pipeline.
pub struct PaymentProcessor {
    acquirer: BoxedAcquirer,
    store: BoxedPaymentStore,
}

impl PaymentProcessor {
    /// Create a processor over an acquirer and a store
    pub fn new(acquirer: BoxedAcquirer, store: BoxedPaymentStore) -> Self {
        Self { acquirer, store }
    }

    /// Process a payment end to end.
    ///
    /// A declined authorization still produces a stored `Payment`;
    /// only validation and downstream failures leave nothing behind.
    #[instrument(
        skip(self, request),
        fields(currency = %request.currency, amount = request.amount)
    )]
    pub async fn process(&self, request: &PaymentRequest) -> GatewayResult<Payment> {
        let validated = validation::validate(request).map_err(GatewayError::Validation)?;
        debug!(card = %card::mask(&validated.card_number), "request validated");

        let authorization = match self.acquirer.authorize(&validated).await {
            Ok(authorization) => authorization,
            Err(err) => {
                warn!(
                    acquirer = self.acquirer.name(),
                    error = %err,
                    "authorization call failed"
                );
                return Err(err);
            }
        };

        let payment = Payment::new(authorization.status(), &validated);
        self.store.insert(payment.clone()).await;
        info!(payment_id = %payment.id, status = %payment.status, "payment processed");

        Ok(payment)
    }
}
