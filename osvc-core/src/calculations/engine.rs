//! The assessment engine: one entry point per product question.
//!
//! Everything the calculation modules produce is assembled here, and this is
//! the only place rounding happens:
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Validate the year table and reject negative income |
//! | 2    | Taxable base: income × (1 − flat expense rate) |
//! | 3    | Social and health contributions with minimum-base flooring |
//! | 4    | Income tax after the personal credit, floored at zero |
//! | 5    | Round every monetary field to whole crowns, then total the rounded levies |
//! | 6    | Effective rate: total ÷ income × 100, two decimal places |
//!
//! The total is formed from the already-rounded levies so that it always
//! equals `income_tax + social_insurance + health_insurance` exactly as
//! printed. Summing first and rounding the sum can disagree with the printed
//! parts by a crown.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use osvc_core::{IncomeDeclaration, Regime, TradeType};
//! use osvc_core::calculations::engine;
//! use osvc_core::config::years;
//!
//! let declaration = IncomeDeclaration::new(dec!(500000), Some(TradeType::Free));
//! let assessment = engine::assess(&declaration, &years::year_2025()).unwrap();
//!
//! // 200,000 base: the credit erases the income tax, both insurance
//! // minimums apply.
//! assert_eq!(assessment.result.income_tax, dec!(0));
//! assert_eq!(assessment.result.social_insurance, dec!(57212));
//! assert_eq!(assessment.result.health_insurance, dec!(37792));
//! assert_eq!(assessment.result.total, dec!(95004));
//!
//! // 7,498 × 12 = 89,976 beats 95,004, so the flat tax wins.
//! assert_eq!(assessment.regime.recommended_regime, Regime::FlatTax);
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

use crate::calculations::common::{round_rate, round_to_crown};
use crate::calculations::contributions::{ContributionCalculator, ContributionParams};
use crate::calculations::{advisor, expense, flat_tax, income_tax};
use crate::models::{
    CalculationRequest, ContributionOutcome, IncomeDeclaration, RegimeComparison, TaxAssessment,
    TaxResult, TaxYearConfig, TaxYearConfigError, TradeType,
};

/// Errors that can occur while running an assessment.
#[derive(Debug, Error, PartialEq)]
pub enum CalculationError {
    /// Annual income below zero is rejected before any arithmetic runs.
    /// Loss years are settled through the tax return, not this estimate.
    #[error("annual income must be non-negative, got {0}")]
    NegativeIncome(Decimal),

    /// The raw request carried a NaN or infinite income.
    #[error("annual income must be a finite number, got {0}")]
    NonFiniteIncome(f64),

    /// The raw request carried an income outside the representable money
    /// range.
    #[error("annual income {0} is outside the representable range")]
    UnrepresentableIncome(f64),

    /// The year table failed validation.
    #[error("invalid tax year configuration: {0}")]
    Config(#[from] TaxYearConfigError),
}

/// Runs the standard-regime assessment for one declaration.
///
/// # Errors
///
/// Returns [`CalculationError`] if the year table fails validation or the
/// declared income is negative.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use osvc_core::{IncomeDeclaration, TradeType};
/// use osvc_core::calculations::engine;
/// use osvc_core::config::years;
///
/// let declaration = IncomeDeclaration::new(dec!(1500000), Some(TradeType::Free));
/// let result = engine::calculate(&declaration, &years::year_2025()).unwrap();
///
/// assert_eq!(result.tax_base, dec!(600000));
/// assert_eq!(result.income_tax, dec!(59160));
/// assert_eq!(result.total, dec!(196020));
/// assert_eq!(result.effective_tax_rate_percent, dec!(13.07));
/// ```
pub fn calculate(
    declaration: &IncomeDeclaration,
    config: &TaxYearConfig,
) -> Result<TaxResult, CalculationError> {
    config.validate()?;

    let income = declaration.annual_income;
    if income < Decimal::ZERO {
        return Err(CalculationError::NegativeIncome(income));
    }

    let expense_rate = expense::rate_for(declaration.trade_type);
    let tax_base = expense::taxable_base(income, expense_rate);

    let social =
        ContributionCalculator::new(ContributionParams::social(config)).calculate(tax_base);
    let health =
        ContributionCalculator::new(ContributionParams::health(config)).calculate(tax_base);
    let income_tax = income_tax::calculate(
        tax_base,
        config.income_tax_rate,
        config.personal_tax_credit,
    );

    Ok(assemble(income, tax_base, income_tax, social, health))
}

/// Compares the standard assessment against the flat tax for one declaration.
///
/// Runs the full standard calculation, resolves the flat-tax band for the
/// declared income and hands both to the advisor.
///
/// # Errors
///
/// Same failure modes as [`calculate`].
pub fn compare_regimes(
    declaration: &IncomeDeclaration,
    config: &TaxYearConfig,
) -> Result<RegimeComparison, CalculationError> {
    let result = calculate(declaration, config)?;
    let band = flat_tax::resolve_band(declaration.annual_income, &config.flat_tax_bands);

    Ok(advisor::recommend(result.total, band))
}

/// Runs the standard assessment and the regime comparison in one call.
///
/// This is what the API layer serializes back to the client: the full
/// numeric breakdown plus the recommendation.
///
/// # Errors
///
/// Same failure modes as [`calculate`].
pub fn assess(
    declaration: &IncomeDeclaration,
    config: &TaxYearConfig,
) -> Result<TaxAssessment, CalculationError> {
    let result = calculate(declaration, config)?;
    let band = flat_tax::resolve_band(declaration.annual_income, &config.flat_tax_bands);
    let regime = advisor::recommend(result.total, band);

    Ok(TaxAssessment { result, regime })
}

/// Converts a raw API request into a typed declaration.
///
/// The income must be finite and representable as a money amount. The trade
/// classification is parsed leniently: an unknown string becomes `None`,
/// which downstream means the free-trade expense rate. `user_type` is the
/// API layer's concern and is ignored here.
///
/// # Errors
///
/// Returns [`CalculationError::NonFiniteIncome`] or
/// [`CalculationError::UnrepresentableIncome`] when the income survives JSON
/// parsing but cannot be turned into a `Decimal`.
pub fn declaration_from_request(
    request: &CalculationRequest,
) -> Result<IncomeDeclaration, CalculationError> {
    let raw = request.annual_income;
    if !raw.is_finite() {
        return Err(CalculationError::NonFiniteIncome(raw));
    }

    let annual_income =
        Decimal::try_from(raw).map_err(|_| CalculationError::UnrepresentableIncome(raw))?;

    let trade_type = request.trade_type.as_deref().and_then(TradeType::parse);

    Ok(IncomeDeclaration::new(annual_income, trade_type))
}

/// Convenience entry point for the API layer: request in, assessment out.
///
/// # Errors
///
/// Any failure mode of [`declaration_from_request`] or [`assess`].
pub fn assess_request(
    request: &CalculationRequest,
    config: &TaxYearConfig,
) -> Result<TaxAssessment, CalculationError> {
    let declaration = declaration_from_request(request)?;
    assess(&declaration, config)
}

/// Rounds every monetary field and assembles the final result.
///
/// Each leaf is rounded independently and the total is the sum of the three
/// rounded levies. `uses_minimum_base` was decided on unrounded values and
/// is carried through untouched.
fn assemble(
    income: Decimal,
    tax_base: Decimal,
    income_tax: Decimal,
    social: ContributionOutcome,
    health: ContributionOutcome,
) -> TaxResult {
    let social = round_outcome(social);
    let health = round_outcome(health);
    let income_tax = round_to_crown(income_tax);

    let social_insurance = social.contribution_amount;
    let health_insurance = health.contribution_amount;
    let total = income_tax + social_insurance + health_insurance;

    let effective_tax_rate_percent = if income.is_zero() {
        Decimal::ZERO
    } else {
        round_rate(total / income * Decimal::ONE_HUNDRED)
    };

    TaxResult {
        tax_base: round_to_crown(tax_base),
        income_tax,
        social_insurance,
        health_insurance,
        total,
        effective_tax_rate_percent,
        social,
        health,
    }
}

fn round_outcome(outcome: ContributionOutcome) -> ContributionOutcome {
    ContributionOutcome {
        computed_base: round_to_crown(outcome.computed_base),
        floored_base: round_to_crown(outcome.floored_base),
        uses_minimum_base: outcome.uses_minimum_base,
        contribution_amount: round_to_crown(outcome.contribution_amount),
    }
}
