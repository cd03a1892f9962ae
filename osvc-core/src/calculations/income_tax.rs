//! Personal income tax on the taxable base.
//!
//! A single flat rate applied to the base, minus the annual personal
//! taxpayer credit, floored at zero. The credit is non-refundable: it can
//! erase the tax but never turn it into a payout.

use rust_decimal::Decimal;

use crate::calculations::common::max;

/// Income tax after the personal credit: max(base × rate − credit, 0).
///
/// Returned unrounded; the engine rounds once when assembling the result.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use osvc_core::calculations::income_tax;
///
/// // 600,000 × 0.15 − 30,840 = 59,160
/// let tax = income_tax::calculate(dec!(600000), dec!(0.15), dec!(30840));
/// assert_eq!(tax, dec!(59160));
///
/// // The credit can only bring the tax down to zero.
/// let tax = income_tax::calculate(dec!(200000), dec!(0.15), dec!(30840));
/// assert_eq!(tax, dec!(0));
/// ```
pub fn calculate(
    tax_base: Decimal,
    rate: Decimal,
    personal_credit: Decimal,
) -> Decimal {
    max(tax_base * rate - personal_credit, Decimal::ZERO)
}
