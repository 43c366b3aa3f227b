//! # Card Redaction
//!
//! Display-safe views of a card number. The full PAN never leaves the
//! processing pipeline; these are the only forms allowed in storage or
//! log output.

/// Returns the last four characters of a card number.
///
/// Validated card numbers are 14-19 digits, so for pipeline input the
/// result is always exactly four characters.
pub fn last_four(card_number: &str) -> String {
    let count = card_number.chars().count();
    card_number.chars().skip(count.saturating_sub(4)).collect()
}

/// Masks all but the last four characters of a card number.
///
/// Accepts unvalidated input so it is safe to call on a raw request
/// when building log fields.
pub fn mask(card_number: &str) -> String {
    let count = card_number.chars().count();
    if count <= 4 {
        return card_number.to_string();
    }
    let mut masked = "*".repeat(count - 4);
    masked.extend(card_number.chars().skip(count - 4));
    masked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_four() {
        assert_eq!(last_four("2222405343248877"), "8877");
        assert_eq!(last_four("22224053432481"), "2481");
    }

    #[test]
    fn test_last_four_short_input() {
        assert_eq!(last_four("123"), "123");
        assert_eq!(last_four(""), "");
    }

    #[test]
    fn test_mask_hides_all_but_last_four() {
        assert_eq!(mask("2222405343248877"), "************8877");
        assert!(!mask("2222405343248877").contains("22224053"));
    }

    #[test]
    fn test_mask_short_input() {
        assert_eq!(mask("8877"), "8877");
        assert_eq!(mask(""), "");
    }
}
