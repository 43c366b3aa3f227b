//! # Request Validation
//!
//! Field-level validation of raw payment requests. Every rule runs and
//! all violations are collected, so callers receive the full list
//! rather than the first failure.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::payment::{Currency, PaymentRequest, ValidatedPayment};

/// A single failed validation rule, tied to the request field it
/// concerns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Request field the rule applies to
    pub field: &'static str,
    /// Human-readable reason
    pub message: String,
}

impl Violation {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Validate a raw request against today's date.
///
/// Returns the validated payment, or every violation found.
pub fn validate(request: &PaymentRequest) -> Result<ValidatedPayment, Vec<Violation>> {
    validate_at(request, Utc::now().date_naive())
}

/// Validate a raw request against an explicit date.
///
/// Expiry validity is date-granular: a card is accepted through the
/// last calendar day of its expiry month. Split out from [`validate`]
/// so expiry rules can be exercised deterministically.
pub fn validate_at(
    request: &PaymentRequest,
    today: NaiveDate,
) -> Result<ValidatedPayment, Vec<Violation>> {
    let mut violations = Vec::new();

    check_card_number(&request.card_number, &mut violations);
    check_expiry(request.expiry_month, request.expiry_year, today, &mut violations);
    let currency = check_currency(&request.currency, &mut violations);
    check_amount(request.amount, &mut violations);
    check_cvv(&request.cvv, &mut violations);

    match currency {
        Some(currency) if violations.is_empty() => Ok(ValidatedPayment {
            card_number: request.card_number.clone(),
            expiry_month: request.expiry_month as u32,
            expiry_year: request.expiry_year,
            currency,
            amount: request.amount,
            cvv: request.cvv.clone(),
        }),
        _ => Err(violations),
    }
}

fn check_card_number(card_number: &str, violations: &mut Vec<Violation>) {
    if card_number.is_empty() {
        violations.push(Violation::new("card_number", "card number is required"));
        return;
    }
    if !card_number.chars().all(|c| c.is_ascii_digit()) {
        violations.push(Violation::new(
            "card_number",
            "card number must only contain numeric characters",
        ));
    }
    let digits = card_number.chars().count();
    if !(14..=19).contains(&digits) {
        violations.push(Violation::new(
            "card_number",
            "card number must be between 14 and 19 digits long",
        ));
    }
}

fn check_expiry(month: i32, year: i32, today: NaiveDate, violations: &mut Vec<Violation>) {
    let month_ok = (1..=12).contains(&month);
    if !month_ok {
        violations.push(Violation::new(
            "expiry_month",
            "expiry month must be between 1 and 12",
        ));
    }
    if year < 1 {
        violations.push(Violation::new(
            "expiry_year",
            "expiry year must be a positive integer",
        ));
        return;
    }
    if !month_ok {
        return;
    }
    match last_day_of_month(year, month as u32) {
        Some(last_day) if last_day >= today => {}
        _ => violations.push(Violation::new(
            "expiry_year",
            "expiry date must not be in the past",
        )),
    }
}

fn check_currency(currency: &str, violations: &mut Vec<Violation>) -> Option<Currency> {
    if currency.is_empty() {
        violations.push(Violation::new("currency", "currency is required"));
        return None;
    }
    if currency.chars().count() != 3 {
        violations.push(Violation::new(
            "currency",
            "currency code must be exactly 3 characters",
        ));
        return None;
    }
    match Currency::from_code(currency) {
        Some(currency) => Some(currency),
        None => {
            violations.push(Violation::new(
                "currency",
                format!("currency must be one of {}", Currency::CODES.join(", ")),
            ));
            None
        }
    }
}

fn check_amount(amount: i64, violations: &mut Vec<Violation>) {
    if amount < 1 {
        violations.push(Violation::new("amount", "amount must be a positive integer"));
    }
}

fn check_cvv(cvv: &str, violations: &mut Vec<Violation>) {
    if cvv.is_empty() {
        violations.push(Violation::new("cvv", "CVV is required"));
        return;
    }
    let digits = cvv.chars().count();
    if !(3..=4).contains(&digits) || !cvv.chars().all(|c| c.is_ascii_digit()) {
        violations.push(Violation::new("cvv", "CVV must be 3 or 4 numeric characters"));
    }
}

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = if month == 12 {
        (year.checked_add(1)?, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()
}
