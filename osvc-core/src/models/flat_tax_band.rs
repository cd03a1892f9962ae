use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One band of the flat-tax ("paušální daň") schedule.
///
/// A band covers all annual incomes up to and including `upper_limit`. Bands
/// are kept sorted by ascending `upper_limit`; [`crate::models::TaxYearConfig::validate`]
/// enforces the ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatTaxBand {
    /// Highest annual income (CZK, inclusive) this band applies to.
    pub upper_limit: Decimal,
    /// Fixed monthly payment (CZK) replacing income tax and both insurance
    /// contributions.
    pub monthly_payment: Decimal,
}

impl FlatTaxBand {
    /// Total paid over a full year in this band.
    ///
    /// The flat tax is twelve equal monthly instalments with no annual
    /// settlement, so this is simply `monthly_payment × 12`.
    pub fn annual_payment(&self) -> Decimal {
        self.monthly_payment * Decimal::from(12)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn annual_payment_is_twelve_monthly_instalments() {
        let band = FlatTaxBand {
            upper_limit: dec!(1500000),
            monthly_payment: dec!(16745),
        };

        assert_eq!(band.annual_payment(), dec!(200940));
    }
}
