//! VAT helpers used by the invoicing side of the product.
//!
//! Only the arithmetic lives here: extracting the VAT portion contained in a
//! gross amount and checking the registration threshold. VAT returns and
//! their filing periods are handled elsewhere entirely.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Standard Czech VAT rate (21%).
pub const STANDARD_RATE: Decimal = dec!(0.21);

/// Reduced Czech VAT rate (12%, merged from the former two reduced rates in
/// 2024).
pub const REDUCED_RATE: Decimal = dec!(0.12);

/// VAT contained in a gross (VAT-inclusive) amount.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use osvc_core::calculations::vat;
///
/// // A 1,210 CZK invoice at 21% carries 210 CZK of VAT.
/// assert_eq!(vat::vat_portion(dec!(1210), vat::STANDARD_RATE), dec!(210));
/// ```
pub fn vat_portion(
    gross: Decimal,
    vat_rate: Decimal,
) -> Decimal {
    gross * vat_rate / (Decimal::ONE + vat_rate)
}

/// Whether annual income is strictly above the VAT registration limit.
///
/// Income exactly at the limit does not require registration, mirroring the
/// inclusive upper bound of the last flat-tax band.
pub fn exceeds_registration_limit(
    annual_income: Decimal,
    registration_limit: Decimal,
) -> bool {
    annual_income > registration_limit
}
