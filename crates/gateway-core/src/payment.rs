//! # Payment Types
//!
//! The three shapes a payment moves through: the raw caller-supplied
//! request, the validated request handed to the acquiring bank, and
//! the redacted record that gets stored.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::card;

/// Currencies accepted by the gateway (ISO 4217)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    USD,
    EUR,
    GBP,
}

impl Currency {
    /// Codes the validator accepts, exact match only
    pub const CODES: [&'static str; 3] = ["USD", "EUR", "GBP"];

    /// Parse an ISO 4217 code. Case-sensitive: lowercase or mixed-case
    /// codes are rejected.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            _ => None,
        }
    }

    /// Returns the ISO 4217 currency code
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authorization outcome as persisted on a payment record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    /// Acquiring bank approved the charge
    Authorized,
    /// Acquiring bank refused the charge
    Declined,
}

impl PaymentStatus {
    /// Returns the status as its wire string
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Authorized => "Authorized",
            PaymentStatus::Declined => "Declined",
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A raw, caller-supplied payment request.
///
/// Every field defaults when absent so that missing JSON keys surface
/// as field violations from the validator instead of body rejections.
/// Exists only for the duration of one processing call and is never
/// persisted; `Debug` masks the card number and CVV.
#[derive(Clone, Serialize, Deserialize)]
pub struct PaymentRequest {
    /// Full card number (digit string, unvalidated)
    #[serde(default)]
    pub card_number: String,

    /// Expiry month, 1-12 once validated
    #[serde(default)]
    pub expiry_month: i32,

    /// Expiry year
    #[serde(default)]
    pub expiry_year: i32,

    /// ISO 4217 currency code (unvalidated)
    #[serde(default)]
    pub currency: String,

    /// Amount in the minor unit of the currency
    #[serde(default)]
    pub amount: i64,

    /// Card verification value, 3-4 digits once validated
    #[serde(default)]
    pub cvv: String,
}

impl std::fmt::Debug for PaymentRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaymentRequest")
            .field("card_number", &card::mask(&self.card_number))
            .field("expiry_month", &self.expiry_month)
            .field("expiry_year", &self.expiry_year)
            .field("currency", &self.currency)
            .field("amount", &self.amount)
            .field("cvv", &"***")
            .finish()
    }
}

/// A payment request that passed every validation rule.
///
/// Produced by the validator, so holding one implies the fields are in
/// range. Still carries the full card number and CVV for the
/// acquiring-bank call; `Debug` masks both.
#[derive(Clone)]
pub struct ValidatedPayment {
    /// Full card number, digits only, 14-19 long
    pub card_number: String,

    /// Expiry month, 1-12
    pub expiry_month: u32,

    /// Expiry year, positive
    pub expiry_year: i32,

    /// Accepted currency
    pub currency: Currency,

    /// Amount in the minor unit of the currency, at least 1
    pub amount: i64,

    /// Card verification value, 3-4 digits
    pub cvv: String,
}

impl std::fmt::Debug for ValidatedPayment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatedPayment")
            .field("card_number", &card::mask(&self.card_number))
            .field("expiry_month", &self.expiry_month)
            .field("expiry_year", &self.expiry_year)
            .field("currency", &self.currency)
            .field("amount", &self.amount)
            .field("cvv", &"***")
            .finish()
    }
}

/// A persisted payment record.
///
/// Redacted by construction: only the last four card digits are kept
/// and the CVV is dropped entirely. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    /// Unique payment identifier (generated on creation)
    pub id: Uuid,

    /// Authorization outcome
    pub status: PaymentStatus,

    /// Last four digits of the card number
    pub last_four_card_digits: String,

    /// Expiry month, 1-12
    pub expiry_month: u32,

    /// Expiry year
    pub expiry_year: i32,

    /// Currency of the charge
    pub currency: Currency,

    /// Amount in the minor unit of the currency
    pub amount: i64,
}

impl Payment {
    /// Build a record from a validated request and a bank decision,
    /// generating a fresh identifier.
    pub fn new(status: PaymentStatus, payment: &ValidatedPayment) -> Self {
        Self {
            id: Uuid::new_v4(),
            status,
            last_four_card_digits: card::last_four(&payment.card_number),
            expiry_month: payment.expiry_month,
            expiry_year: payment.expiry_year,
            currency: payment.currency,
            amount: payment.amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validated() -> ValidatedPayment {
        ValidatedPayment {
            card_number: "2222405343248877".to_string(),
            expiry_month: 4,
            expiry_year: 2031,
            currency: Currency::GBP,
            amount: 100,
            cvv: "123".to_string(),
        }
    }

    #[test]
    fn test_currency_from_code_is_case_sensitive() {
        assert_eq!(Currency::from_code("USD"), Some(Currency::USD));
        assert_eq!(Currency::from_code("GBP"), Some(Currency::GBP));
        assert_eq!(Currency::from_code("usd"), None);
        assert_eq!(Currency::from_code("AUD"), None);
    }

    #[test]
    fn test_status_serializes_as_wire_string() {
        let authorized = serde_json::to_value(PaymentStatus::Authorized).unwrap();
        let declined = serde_json::to_value(PaymentStatus::Declined).unwrap();

        assert_eq!(authorized, serde_json::json!("Authorized"));
        assert_eq!(declined, serde_json::json!("Declined"));
    }

    #[test]
    fn test_payment_is_redacted() {
        let payment = Payment::new(PaymentStatus::Authorized, &validated());

        assert_eq!(payment.last_four_card_digits, "8877");
        assert_eq!(payment.currency, Currency::GBP);
        assert_eq!(payment.amount, 100);

        let json = serde_json::to_value(&payment).unwrap();
        assert!(json.get("card_number").is_none());
        assert!(json.get("cvv").is_none());
        assert!(!json.to_string().contains("2222405343248877"));
    }

    #[test]
    fn test_debug_masks_sensitive_fields() {
        let request = PaymentRequest {
            card_number: "2222405343248877".to_string(),
            expiry_month: 4,
            expiry_year: 2031,
            currency: "GBP".to_string(),
            amount: 100,
            cvv: "123".to_string(),
        };

        let rendered = format!("{request:?}");
        assert!(!rendered.contains("2222405343248877"));
        assert!(rendered.contains("************8877"));
        assert!(!rendered.contains("\"123\""));

        let rendered = format!("{:?}", validated());
        assert!(!rendered.contains("2222405343248877"));
    }

    #[test]
    fn test_missing_json_fields_default() {
        let request: PaymentRequest = serde_json::from_str("{}").unwrap();

        assert!(request.card_number.is_empty());
        assert_eq!(request.expiry_month, 0);
        assert_eq!(request.amount, 0);
        assert!(request.cvv.is_empty());
    }
}
