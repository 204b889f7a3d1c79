//! Monetary rounding and formatting helpers

/// Rounds a monetary value to 2 decimal places, half-up.
///
/// Every figure the calculation engine reports goes through this; tests
/// compare against cent-rounded golden values.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Formats a cent-rounded amount with its currency code, e.g. `123.45 EUR`.
pub fn format_amount(value: f64, currency: &str) -> String {
    format!("{:.2} {currency}", round_cents(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_cents() {
        assert_eq!(round_cents(88.84878867834167), 88.85);
        assert_eq!(round_cents(9.216), 9.22);
        assert_eq!(round_cents(10.0), 10.0);
        assert_eq!(round_cents(0.0), 0.0);
        assert_eq!(round_cents(-1.234), -1.23);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(25.0, "EUR"), "25.00 EUR");
        assert_eq!(format_amount(88.84878867834167, "USD"), "88.85 USD");
    }
}
