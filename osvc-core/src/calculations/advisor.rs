//! Regime recommendation: standard assessment versus the flat tax.
//!
//! The advisor compares annual totals and nothing else. The flat tax wins
//! only when it is strictly cheaper; a tie goes to the standard assessment
//! because staying in it keeps the expense deduction and personal credit in
//! play without any enrolment paperwork. When income is above the highest
//! band the flat tax is not an option and the standard assessment is
//! recommended by default.
//!
//! Rationale strings are deliberately qualitative. Amounts live in the
//! numeric fields of [`RegimeComparison`]; the text only explains the
//! trade-off.

use rust_decimal::Decimal;

use crate::models::{FlatTaxBand, Regime, RegimeComparison};

const RATIONALE_FLAT_TAX: &str = "The flat tax costs less per year than the standard assessment \
     and replaces income tax and both insurance contributions with a single monthly payment, \
     with no annual tax return to file.";

const RATIONALE_STANDARD: &str = "The standard assessment does not cost more per year than the \
     flat tax, and it keeps the flat expense deduction and the personal tax credit in play.";

const RATIONALE_UNAVAILABLE: &str = "Annual income is above the highest flat-tax band, so the \
     flat-tax regime is not available and the standard assessment is the only option.";

/// Builds the regime recommendation from the standard-regime total and the
/// resolved flat-tax band (if any).
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use osvc_core::Regime;
/// use osvc_core::calculations::{advisor, flat_tax};
/// use osvc_core::config::years;
///
/// let config = years::year_2025();
/// let band = flat_tax::resolve_band(dec!(1500000), &config.flat_tax_bands);
///
/// // 196,020 standard beats 16,745 × 12 = 200,940 flat tax.
/// let comparison = advisor::recommend(dec!(196020), band);
///
/// assert_eq!(comparison.recommended_regime, Regime::Standard);
/// assert_eq!(comparison.flat_tax_annual_total, Some(dec!(200940)));
/// ```
pub fn recommend(
    standard_total: Decimal,
    band: Option<&FlatTaxBand>,
) -> RegimeComparison {
    let band = match band {
        Some(band) => band,
        None => {
            return RegimeComparison {
                standard_total,
                flat_tax_annual_total: None,
                recommended_regime: Regime::Standard,
                rationale: RATIONALE_UNAVAILABLE.to_string(),
            };
        }
    };

    let flat_tax_annual_total = band.annual_payment();

    // Strictly cheaper; a tie keeps the standard assessment.
    if flat_tax_annual_total < standard_total {
        RegimeComparison {
            standard_total,
            flat_tax_annual_total: Some(flat_tax_annual_total),
            recommended_regime: Regime::FlatTax,
            rationale: RATIONALE_FLAT_TAX.to_string(),
        }
    } else {
        RegimeComparison {
            standard_total,
            flat_tax_annual_total: Some(flat_tax_annual_total),
            recommended_regime: Regime::Standard,
            rationale: RATIONALE_STANDARD.to_string(),
        }
    }
}
