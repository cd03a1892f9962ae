//! Insurance contribution calculations with minimum-base flooring.
//!
//! Social and health insurance follow the same three-step shape and differ
//! only in their parameters, so one calculator serves both:
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Assessment base: taxable base × base coefficient (55% social, 50% health) |
//! | 2    | Floor: the base never drops below the statutory annual minimum |
//! | 3    | Contribution: floored base × rate (29.2% social, 13.5% health) |
//!
//! The floor in step 2 always applies. A filer with zero income still owes
//! contributions on the minimum base, which is why the standard regime has a
//! non-zero cost even at zero income.
//!
//! Amounts are returned unrounded; the engine rounds each output field to
//! whole crowns exactly once.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use osvc_core::calculations::{ContributionCalculator, ContributionParams};
//! use osvc_core::config::years;
//!
//! let config = years::year_2025();
//! let calculator = ContributionCalculator::new(ContributionParams::social(&config));
//!
//! // 500,000 CZK free-trade income leaves a 200,000 taxable base.
//! let outcome = calculator.calculate(dec!(200000));
//!
//! // 200,000 × 0.55 = 110,000 is below the 195,930 minimum, so the
//! // minimum becomes the assessment base.
//! assert_eq!(outcome.computed_base, dec!(110000));
//! assert_eq!(outcome.floored_base, dec!(195930));
//! assert!(outcome.uses_minimum_base);
//! assert_eq!(outcome.contribution_amount, dec!(57211.56));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::common::max;
use crate::models::{ContributionOutcome, TaxYearConfig};

/// Which insurance a set of parameters belongs to. Used for diagnostics
/// only; the arithmetic is identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContributionKind {
    Social,
    Health,
}

impl ContributionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Social => "social",
            Self::Health => "health",
        }
    }
}

/// Parameters for one insurance contribution.
///
/// These values come from [`TaxYearConfig`] via [`ContributionParams::social`]
/// or [`ContributionParams::health`] and change from year to year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionParams {
    /// Which insurance these parameters describe.
    pub kind: ContributionKind,

    /// Fraction of the taxable base that forms the assessment base.
    pub base_coefficient: Decimal,

    /// Statutory minimum annual assessment base.
    pub minimum_annual_base: Decimal,

    /// Rate applied to the floored assessment base.
    pub rate: Decimal,
}

impl ContributionParams {
    /// Social insurance parameters for the given year.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use osvc_core::calculations::ContributionParams;
    /// use osvc_core::config::years;
    ///
    /// let params = ContributionParams::social(&years::year_2025());
    ///
    /// assert_eq!(params.base_coefficient, dec!(0.55));
    /// assert_eq!(params.minimum_annual_base, dec!(195930));
    /// assert_eq!(params.rate, dec!(0.292));
    /// ```
    pub fn social(config: &TaxYearConfig) -> Self {
        Self {
            kind: ContributionKind::Social,
            base_coefficient: config.social_base_coefficient,
            minimum_annual_base: config.social_minimum_base,
            rate: config.social_rate,
        }
    }

    /// Health insurance parameters for the given year.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use osvc_core::calculations::ContributionParams;
    /// use osvc_core::config::years;
    ///
    /// let params = ContributionParams::health(&years::year_2025());
    ///
    /// assert_eq!(params.base_coefficient, dec!(0.50));
    /// assert_eq!(params.minimum_annual_base, dec!(279942));
    /// assert_eq!(params.rate, dec!(0.135));
    /// ```
    pub fn health(config: &TaxYearConfig) -> Self {
        Self {
            kind: ContributionKind::Health,
            base_coefficient: config.health_base_coefficient,
            minimum_annual_base: config.health_minimum_base,
            rate: config.health_rate,
        }
    }
}

/// Calculator for one insurance contribution.
///
/// Construct one per insurance with the year's [`ContributionParams`], then
/// feed it a taxable base. The calculation is total: parameters are
/// validated upstream by [`TaxYearConfig::validate`], and every taxable base
/// (including zero) produces an outcome.
#[derive(Debug, Clone)]
pub struct ContributionCalculator {
    params: ContributionParams,
}

impl ContributionCalculator {
    pub fn new(params: ContributionParams) -> Self {
        Self { params }
    }

    /// Computes the contribution for a taxable base.
    ///
    /// Returns the unrounded [`ContributionOutcome`] with both intermediate
    /// bases, the minimum-base flag and the contribution amount.
    pub fn calculate(&self, tax_base: Decimal) -> ContributionOutcome {
        let computed_base = self.assessment_base(tax_base);
        let floored_base = max(computed_base, self.params.minimum_annual_base);
        let uses_minimum_base = floored_base == self.params.minimum_annual_base;

        if uses_minimum_base {
            debug!(
                kind = self.params.kind.as_str(),
                computed_base = %computed_base,
                minimum_annual_base = %self.params.minimum_annual_base,
                "assessment base floored to the statutory minimum"
            );
        }

        let contribution_amount = floored_base * self.params.rate;

        ContributionOutcome {
            computed_base,
            floored_base,
            uses_minimum_base,
            contribution_amount,
        }
    }

    /// Assessment base before flooring: taxable base × base coefficient.
    fn assessment_base(&self, tax_base: Decimal) -> Decimal {
        tax_base * self.params.base_coefficient
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use tracing_subscriber::fmt::format::FmtSpan;

    use super::*;

    /// 2025 social insurance parameters.
    fn social_params() -> ContributionParams {
        ContributionParams {
            kind: ContributionKind::Social,
            base_coefficient: dec!(0.55),
            minimum_annual_base: dec!(195930),
            rate: dec!(0.292),
        }
    }

    /// 2025 health insurance parameters.
    fn health_params() -> ContributionParams {
        ContributionParams {
            kind: ContributionKind::Health,
            base_coefficient: dec!(0.50),
            minimum_annual_base: dec!(279942),
            rate: dec!(0.135),
        }
    }

    /// Initializes tracing subscriber for tests that verify log output.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_span_events(FmtSpan::NONE)
            .with_test_writer()
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    // =========================================================================
    // minimum-base flooring tests
    // =========================================================================

    #[test]
    fn calculate_floors_social_base_below_minimum() {
        let calculator = ContributionCalculator::new(social_params());

        let outcome = calculator.calculate(dec!(200000));

        assert_eq!(outcome.computed_base, dec!(110000));
        assert_eq!(outcome.floored_base, dec!(195930));
        assert!(outcome.uses_minimum_base);
        assert_eq!(outcome.contribution_amount, dec!(57211.56));
    }

    #[test]
    fn calculate_floors_health_base_below_minimum() {
        let calculator = ContributionCalculator::new(health_params());

        let outcome = calculator.calculate(dec!(200000));

        assert_eq!(outcome.computed_base, dec!(100000));
        assert_eq!(outcome.floored_base, dec!(279942));
        assert!(outcome.uses_minimum_base);
        assert_eq!(outcome.contribution_amount, dec!(37792.17));
    }

    #[test]
    fn calculate_charges_minimum_at_zero_base() {
        let _guard = init_test_tracing();
        let calculator = ContributionCalculator::new(social_params());

        let outcome = calculator.calculate(dec!(0));

        assert_eq!(outcome.computed_base, dec!(0));
        assert_eq!(outcome.floored_base, dec!(195930));
        assert!(outcome.uses_minimum_base);
        assert_eq!(outcome.contribution_amount, dec!(57211.56));
    }

    #[test]
    fn calculate_does_not_floor_base_above_minimum() {
        let calculator = ContributionCalculator::new(social_params());

        let outcome = calculator.calculate(dec!(600000));

        assert_eq!(outcome.computed_base, dec!(330000));
        assert_eq!(outcome.floored_base, dec!(330000));
        assert!(!outcome.uses_minimum_base);
        assert_eq!(outcome.contribution_amount, dec!(96360));
    }

    #[test]
    fn calculate_flags_minimum_when_computed_base_equals_it() {
        // 559,884 × 0.50 lands exactly on the 279,942 minimum; the flag
        // reports the floor as engaged.
        let calculator = ContributionCalculator::new(health_params());

        let outcome = calculator.calculate(dec!(559884));

        assert_eq!(outcome.computed_base, dec!(279942));
        assert_eq!(outcome.floored_base, dec!(279942));
        assert!(outcome.uses_minimum_base);
    }

    #[test]
    fn calculate_keeps_sub_crown_precision() {
        // 800,000.40 × 0.55 × 0.292 = 128,480.06424; rounding is the
        // engine's job.
        let calculator = ContributionCalculator::new(social_params());

        let outcome = calculator.calculate(dec!(800000.40));

        assert_eq!(outcome.computed_base, dec!(440000.22));
        assert_eq!(outcome.contribution_amount, dec!(128480.06424));
    }

    // =========================================================================
    // parameter constructor tests
    // =========================================================================

    #[test]
    fn social_params_come_from_config() {
        let config = crate::config::years::year_2025();

        let params = ContributionParams::social(&config);

        assert_eq!(params, social_params());
    }

    #[test]
    fn health_params_come_from_config() {
        let config = crate::config::years::year_2025();

        let params = ContributionParams::health(&config);

        assert_eq!(params, health_params());
    }

    #[test]
    fn social_and_health_share_the_same_shape() {
        // The two insurances differ only in parameters; feeding both the
        // same base exercises the shared flooring logic.
        let social = ContributionCalculator::new(social_params()).calculate(dec!(600000));
        let health = ContributionCalculator::new(health_params()).calculate(dec!(600000));

        assert!(!social.uses_minimum_base);
        assert!(!health.uses_minimum_base);
        assert_eq!(social.computed_base, dec!(330000));
        assert_eq!(health.computed_base, dec!(300000));
    }
}
