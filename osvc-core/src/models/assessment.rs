use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One insurance contribution with its intermediate bases.
///
/// The intermediates are part of the public result on purpose: the invoicing
/// UI explains *why* a contribution came out the way it did, and support
/// requests almost always hinge on whether the minimum base kicked in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionOutcome {
    /// Assessment base before flooring: taxable base × base coefficient.
    pub computed_base: Decimal,

    /// Assessment base actually charged: the computed base, floored at the
    /// statutory minimum.
    pub floored_base: Decimal,

    /// Whether the statutory minimum determined the floored base.
    pub uses_minimum_base: bool,

    /// The contribution owed: floored base × rate.
    pub contribution_amount: Decimal,
}

/// Full standard-regime assessment for one declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxResult {
    /// Taxable base after the flat expense deduction.
    pub tax_base: Decimal,

    /// Income tax after the personal credit, floored at zero.
    pub income_tax: Decimal,

    /// Social insurance contribution.
    pub social_insurance: Decimal,

    /// Health insurance contribution.
    pub health_insurance: Decimal,

    /// Sum of the three levies above.
    pub total: Decimal,

    /// Total as a percentage of gross annual income, two decimal places.
    /// Zero when income is zero.
    pub effective_tax_rate_percent: Decimal,

    /// Social contribution breakdown.
    pub social: ContributionOutcome,

    /// Health contribution breakdown.
    pub health: ContributionOutcome,
}

/// Taxation regime the advisor can recommend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Regime {
    Standard,
    FlatTax,
}

/// Outcome of comparing the standard assessment against the flat tax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegimeComparison {
    /// Annual cost of the standard regime.
    pub standard_total: Decimal,

    /// Annual cost of the flat tax, or `None` when income is above the
    /// highest band.
    pub flat_tax_annual_total: Option<Decimal>,

    /// The cheaper regime; ties go to the standard assessment.
    pub recommended_regime: Regime,

    /// Human-readable explanation. Qualitative only; any amounts belong in
    /// the numeric fields.
    pub rationale: String,
}

/// Everything the API returns for one calculation: the standard-regime
/// numbers plus the regime recommendation, flattened into one JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxAssessment {
    #[serde(flatten)]
    pub result: TaxResult,

    #[serde(flatten)]
    pub regime: RegimeComparison,
}
