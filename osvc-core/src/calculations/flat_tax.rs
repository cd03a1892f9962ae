//! Flat-tax ("paušální daň") band resolution.
//!
//! The flat tax replaces income tax and both insurance contributions with a
//! single monthly payment. Which payment applies depends on annual income:
//! the schedule is a short table of bands, and an income belongs to the
//! first band whose upper limit it does not exceed. Band limits are
//! inclusive, so an income sitting exactly on a limit stays in the lower
//! band.
//!
//! Above the last band's limit the regime is not available at all, which the
//! resolver reports as `None` rather than an error.

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::FlatTaxBand;

/// Finds the band an annual income falls into.
///
/// Expects `bands` sorted by ascending `upper_limit`, which
/// [`crate::models::TaxYearConfig::validate`] guarantees for configured
/// tables. Returns `None` when the income is above the highest band.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use osvc_core::calculations::flat_tax;
/// use osvc_core::config::years;
///
/// let config = years::year_2025();
///
/// let band = flat_tax::resolve_band(dec!(1500000), &config.flat_tax_bands).unwrap();
/// assert_eq!(band.monthly_payment, dec!(16745));
///
/// // One crown above the limit falls into the next band.
/// let band = flat_tax::resolve_band(dec!(1500001), &config.flat_tax_bands).unwrap();
/// assert_eq!(band.monthly_payment, dec!(27139));
///
/// // Above the last band the regime is unavailable.
/// assert!(flat_tax::resolve_band(dec!(2000001), &config.flat_tax_bands).is_none());
/// ```
pub fn resolve_band(
    annual_income: Decimal,
    bands: &[FlatTaxBand],
) -> Option<&FlatTaxBand> {
    let band = bands.iter().find(|band| annual_income <= band.upper_limit);

    if band.is_none() {
        debug!(
            annual_income = %annual_income,
            "income above the highest flat-tax band; regime unavailable"
        );
    }

    band
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn test_bands() -> Vec<FlatTaxBand> {
        vec![
            FlatTaxBand {
                upper_limit: dec!(1000000),
                monthly_payment: dec!(7498),
            },
            FlatTaxBand {
                upper_limit: dec!(1500000),
                monthly_payment: dec!(16745),
            },
            FlatTaxBand {
                upper_limit: dec!(2000000),
                monthly_payment: dec!(27139),
            },
        ]
    }

    #[test]
    fn resolve_band_puts_zero_income_in_first_band() {
        let bands = test_bands();

        let band = resolve_band(dec!(0), &bands);

        assert_eq!(band.map(|b| b.monthly_payment), Some(dec!(7498)));
    }

    #[test]
    fn resolve_band_keeps_boundary_income_in_lower_band() {
        let bands = test_bands();

        let band = resolve_band(dec!(1000000), &bands);

        assert_eq!(band.map(|b| b.monthly_payment), Some(dec!(7498)));
    }

    #[test]
    fn resolve_band_moves_to_next_band_one_crown_above_limit() {
        let bands = test_bands();

        let band = resolve_band(dec!(1000001), &bands);

        assert_eq!(band.map(|b| b.monthly_payment), Some(dec!(16745)));
    }

    #[test]
    fn resolve_band_puts_top_limit_in_last_band() {
        let bands = test_bands();

        let band = resolve_band(dec!(2000000), &bands);

        assert_eq!(band.map(|b| b.monthly_payment), Some(dec!(27139)));
    }

    #[test]
    fn resolve_band_returns_none_above_last_band() {
        let bands = test_bands();

        let band = resolve_band(dec!(2000001), &bands);

        assert_eq!(band, None);
    }

    #[test]
    fn resolve_band_returns_none_for_empty_table() {
        let band = resolve_band(dec!(500000), &[]);

        assert_eq!(band, None);
    }

    #[test]
    fn resolve_band_handles_fractional_income_at_boundary() {
        let bands = test_bands();

        let band = resolve_band(dec!(1000000.01), &bands);

        assert_eq!(band.map(|b| b.monthly_payment), Some(dec!(16745)));
    }
}
