mod assessment;
mod declaration;
mod flat_tax_band;
mod tax_year_config;
mod trade_type;

pub use assessment::{ContributionOutcome, Regime, RegimeComparison, TaxAssessment, TaxResult};
pub use declaration::{CalculationRequest, IncomeDeclaration};
pub use flat_tax_band::FlatTaxBand;
pub use tax_year_config::{TaxYearConfig, TaxYearConfigError};
pub use trade_type::TradeType;
