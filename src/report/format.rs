//! Display formatting for amounts.
//!
//! Calculation results stay unrounded; these helpers are applied only when a
//! value is shown on screen or written to an export.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount as an integer when whole, otherwise to two decimals.
///
/// Trailing zeros are dropped after rounding, so `1.10` shows as `1.1`.
///
/// # Examples
///
/// ```
/// use bean_calculator::report::format_amount;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_amount(Decimal::from_str("600.00").unwrap()), "600");
/// assert_eq!(format_amount(Decimal::from_str("61.725").unwrap()), "61.73");
/// ```
pub fn format_amount(value: Decimal) -> String {
    if value.fract().is_zero() {
        return value.trunc().normalize().to_string();
    }

    value
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
        .to_string()
}

/// Formats a fractional rate as a whole percentage label, e.g. `0.05` as `5%`.
pub fn format_percent(rate: Decimal) -> String {
    format!("{}%", (rate * Decimal::ONE_HUNDRED).normalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_whole_values_have_no_decimals() {
        assert_eq!(format_amount(dec("5430")), "5430");
        assert_eq!(format_amount(dec("600.000")), "600");
        assert_eq!(format_amount(Decimal::ZERO), "0");
    }

    #[test]
    fn test_fractions_round_to_two_places() {
        assert_eq!(format_amount(dec("61.725")), "61.73");
        assert_eq!(format_amount(dec("61.724")), "61.72");
        assert_eq!(format_amount(dec("0.005")), "0.01");
    }

    #[test]
    fn test_trailing_zero_dropped_after_rounding() {
        assert_eq!(format_amount(dec("1.10")), "1.1");
        assert_eq!(format_amount(dec("2.999")), "3");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(dec("0.05")), "5%");
        assert_eq!(format_percent(dec("0.125")), "12.5%");
    }
}
