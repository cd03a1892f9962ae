//! Common utility functions for the assessment calculations.
//!
//! This module provides shared functionality used across the calculation
//! modules, mainly the two rounding rules the Czech filing forms use.

use rust_decimal::Decimal;

/// Rounds a monetary value to whole crowns using half-up rounding.
///
/// Czech tax and insurance filings work in whole CZK; amounts ending in
/// exactly .50 round up (away from zero). The engine keeps full precision
/// internally and applies this once per output field, so intermediate
/// rounding never skews a result.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use osvc_core::calculations::common::round_to_crown;
///
/// assert_eq!(round_to_crown(dec!(57211.49)), dec!(57211));
/// assert_eq!(round_to_crown(dec!(57211.50)), dec!(57212));
/// assert_eq!(round_to_crown(dec!(57211.56)), dec!(57212));
/// assert_eq!(round_to_crown(dec!(-0.50)), dec!(-1)); // Away from zero
/// ```
pub fn round_to_crown(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a percentage to two decimal places using half-up rounding.
///
/// Used only for the effective tax rate; monetary amounts go through
/// [`round_to_crown`] instead.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use osvc_core::calculations::common::round_rate;
///
/// assert_eq!(round_rate(dec!(13.068)), dec!(13.07));
/// assert_eq!(round_rate(dec!(19.0008)), dec!(19.00));
/// assert_eq!(round_rate(dec!(9.125)), dec!(9.13));
/// ```
pub fn round_rate(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the maximum of two decimal values.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use osvc_core::calculations::common::max;
///
/// assert_eq!(max(dec!(110000), dec!(195930)), dec!(195930));
/// assert_eq!(max(dec!(330000), dec!(195930)), dec!(330000));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}
