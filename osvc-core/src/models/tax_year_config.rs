//! Per-year statutory parameters for the OSVČ assessment.
//!
//! Every rate, credit, minimum base and flat-tax band the engine needs is
//! collected into a single [`TaxYearConfig`] value. Nothing in the engine
//! hard-codes a year; callers pick the table (usually through
//! [`crate::config::TaxYearRegistry`]) and pass it in explicitly.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::flat_tax_band::FlatTaxBand;

/// Errors produced by [`TaxYearConfig::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaxYearConfigError {
    /// The income tax rate must be between 0 and 1.
    #[error("income tax rate must be between 0 and 1, got {0}")]
    InvalidIncomeTaxRate(Decimal),

    /// The personal tax credit must be non-negative.
    #[error("personal tax credit must be non-negative, got {0}")]
    InvalidPersonalTaxCredit(Decimal),

    /// The social insurance rate must be between 0 and 1.
    #[error("social insurance rate must be between 0 and 1, got {0}")]
    InvalidSocialRate(Decimal),

    /// The social base coefficient must be between 0 and 1 (exclusive of 0).
    #[error("social base coefficient must be between 0 and 1, got {0}")]
    InvalidSocialBaseCoefficient(Decimal),

    /// The social minimum annual base must be non-negative.
    #[error("social minimum annual base must be non-negative, got {0}")]
    InvalidSocialMinimumBase(Decimal),

    /// The health insurance rate must be between 0 and 1.
    #[error("health insurance rate must be between 0 and 1, got {0}")]
    InvalidHealthRate(Decimal),

    /// The health base coefficient must be between 0 and 1 (exclusive of 0).
    #[error("health base coefficient must be between 0 and 1, got {0}")]
    InvalidHealthBaseCoefficient(Decimal),

    /// The health minimum annual base must be non-negative.
    #[error("health minimum annual base must be non-negative, got {0}")]
    InvalidHealthMinimumBase(Decimal),

    /// The VAT registration limit must be positive.
    #[error("VAT registration limit must be positive, got {0}")]
    InvalidVatRegistrationLimit(Decimal),

    /// At least one flat-tax band must be configured.
    #[error("flat tax band table is empty")]
    EmptyBandTable,

    /// Band upper limits must be positive and strictly ascending.
    #[error("flat tax band upper limits must be strictly ascending, got {current} after {previous}")]
    BandsNotAscending {
        previous: Decimal,
        current: Decimal,
    },

    /// Every band's monthly payment must be positive.
    #[error("flat tax band monthly payment must be positive, got {0}")]
    InvalidBandPayment(Decimal),

    /// The last band must end exactly at the VAT registration limit.
    #[error("flat tax bands must end at the VAT registration limit {limit}, last band ends at {last}")]
    BandCoverageGap { last: Decimal, limit: Decimal },
}

/// Statutory parameters for a single tax year.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use osvc_core::{FlatTaxBand, TaxYearConfig};
///
/// let config = TaxYearConfig {
///     tax_year: 2025,
///     income_tax_rate: dec!(0.15),
///     personal_tax_credit: dec!(30840),
///     social_rate: dec!(0.292),
///     social_base_coefficient: dec!(0.55),
///     social_minimum_base: dec!(195930),
///     health_rate: dec!(0.135),
///     health_base_coefficient: dec!(0.50),
///     health_minimum_base: dec!(279942),
///     vat_registration_limit: dec!(2000000),
///     flat_tax_bands: vec![
///         FlatTaxBand { upper_limit: dec!(1000000), monthly_payment: dec!(7498) },
///         FlatTaxBand { upper_limit: dec!(1500000), monthly_payment: dec!(16745) },
///         FlatTaxBand { upper_limit: dec!(2000000), monthly_payment: dec!(27139) },
///     ],
/// };
///
/// assert_eq!(config.validate(), Ok(()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxYearConfig {
    /// Calendar year these parameters apply to.
    pub tax_year: i32,

    /// Personal income tax rate applied to the taxable base. 15% since the
    /// 2021 reform.
    pub income_tax_rate: Decimal,

    /// Annual personal taxpayer credit ("sleva na poplatníka") subtracted
    /// from the computed tax, floored at zero.
    pub personal_tax_credit: Decimal,

    /// Social insurance rate applied to the (floored) assessment base.
    pub social_rate: Decimal,

    /// Fraction of the taxable base that forms the social assessment base.
    pub social_base_coefficient: Decimal,

    /// Minimum annual social assessment base. The assessment base never
    /// drops below this, regardless of income.
    pub social_minimum_base: Decimal,

    /// Health insurance rate applied to the (floored) assessment base.
    pub health_rate: Decimal,

    /// Fraction of the taxable base that forms the health assessment base.
    pub health_base_coefficient: Decimal,

    /// Minimum annual health assessment base.
    pub health_minimum_base: Decimal,

    /// Annual turnover above which VAT registration becomes mandatory. Also
    /// the ceiling of the last flat-tax band.
    pub vat_registration_limit: Decimal,

    /// Flat-tax bands, sorted by ascending `upper_limit`.
    pub flat_tax_bands: Vec<FlatTaxBand>,
}

impl TaxYearConfig {
    /// Validates the table before it is used for a calculation.
    ///
    /// # Errors
    ///
    /// Returns [`TaxYearConfigError`] if:
    /// - any rate is not in [0, 1]
    /// - either base coefficient is not in (0, 1]
    /// - the personal credit or either minimum base is negative
    /// - the VAT registration limit is not positive
    /// - the band table is empty, not strictly ascending, contains a
    ///   non-positive payment, or does not end at the VAT registration limit
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use osvc_core::{TaxYearConfig, TaxYearConfigError};
    /// use osvc_core::config::years;
    ///
    /// let config = TaxYearConfig {
    ///     income_tax_rate: dec!(1.5),
    ///     ..years::year_2025()
    /// };
    ///
    /// assert_eq!(
    ///     config.validate(),
    ///     Err(TaxYearConfigError::InvalidIncomeTaxRate(dec!(1.5)))
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), TaxYearConfigError> {
        if self.income_tax_rate < Decimal::ZERO || self.income_tax_rate > Decimal::ONE {
            return Err(TaxYearConfigError::InvalidIncomeTaxRate(
                self.income_tax_rate,
            ));
        }
        if self.personal_tax_credit < Decimal::ZERO {
            return Err(TaxYearConfigError::InvalidPersonalTaxCredit(
                self.personal_tax_credit,
            ));
        }
        if self.social_rate < Decimal::ZERO || self.social_rate > Decimal::ONE {
            return Err(TaxYearConfigError::InvalidSocialRate(self.social_rate));
        }
        if self.social_base_coefficient <= Decimal::ZERO
            || self.social_base_coefficient > Decimal::ONE
        {
            return Err(TaxYearConfigError::InvalidSocialBaseCoefficient(
                self.social_base_coefficient,
            ));
        }
        if self.social_minimum_base < Decimal::ZERO {
            return Err(TaxYearConfigError::InvalidSocialMinimumBase(
                self.social_minimum_base,
            ));
        }
        if self.health_rate < Decimal::ZERO || self.health_rate > Decimal::ONE {
            return Err(TaxYearConfigError::InvalidHealthRate(self.health_rate));
        }
        if self.health_base_coefficient <= Decimal::ZERO
            || self.health_base_coefficient > Decimal::ONE
        {
            return Err(TaxYearConfigError::InvalidHealthBaseCoefficient(
                self.health_base_coefficient,
            ));
        }
        if self.health_minimum_base < Decimal::ZERO {
            return Err(TaxYearConfigError::InvalidHealthMinimumBase(
                self.health_minimum_base,
            ));
        }
        if self.vat_registration_limit <= Decimal::ZERO {
            return Err(TaxYearConfigError::InvalidVatRegistrationLimit(
                self.vat_registration_limit,
            ));
        }
        self.validate_bands()
    }

    /// Band table invariants: non-empty, positive payments, strictly
    /// ascending limits, ending exactly at the VAT registration limit.
    fn validate_bands(&self) -> Result<(), TaxYearConfigError> {
        if self.flat_tax_bands.is_empty() {
            return Err(TaxYearConfigError::EmptyBandTable);
        }

        let mut previous = Decimal::ZERO;
        for band in &self.flat_tax_bands {
            if band.upper_limit <= previous {
                return Err(TaxYearConfigError::BandsNotAscending {
                    previous,
                    current: band.upper_limit,
                });
            }
            if band.monthly_payment <= Decimal::ZERO {
                return Err(TaxYearConfigError::InvalidBandPayment(band.monthly_payment));
            }
            previous = band.upper_limit;
        }

        if previous != self.vat_registration_limit {
            return Err(TaxYearConfigError::BandCoverageGap {
                last: previous,
                limit: self.vat_registration_limit,
            });
        }

        Ok(())
    }
}
