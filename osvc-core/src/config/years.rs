//! Built-in Czech statutory tables.
//!
//! These mirror the published figures for the years the product supports.
//! Nothing in the engine reads them implicitly; they exist so callers (and
//! the CLI) can run without shipping their own data files. Callers with
//! their own tables register those through
//! [`crate::config::TaxYearRegistry::register`] instead.

use rust_decimal_macros::dec;

use crate::models::{FlatTaxBand, TaxYearConfig};

/// Statutory table for tax year 2024.
pub fn year_2024() -> TaxYearConfig {
    TaxYearConfig {
        tax_year: 2024,
        income_tax_rate: dec!(0.15),
        personal_tax_credit: dec!(30840),
        social_rate: dec!(0.292),
        social_base_coefficient: dec!(0.55),
        // 13,191 CZK monthly minimum assessment base × 12.
        social_minimum_base: dec!(158292),
        health_rate: dec!(0.135),
        health_base_coefficient: dec!(0.50),
        // 21,983.50 CZK monthly minimum assessment base × 12.
        health_minimum_base: dec!(263802),
        vat_registration_limit: dec!(2000000),
        flat_tax_bands: flat_tax_bands(),
    }
}

/// Statutory table for tax year 2025. The insurance minimums rose sharply
/// against 2024; everything else carried over.
pub fn year_2025() -> TaxYearConfig {
    TaxYearConfig {
        tax_year: 2025,
        income_tax_rate: dec!(0.15),
        personal_tax_credit: dec!(30840),
        social_rate: dec!(0.292),
        social_base_coefficient: dec!(0.55),
        social_minimum_base: dec!(195930),
        health_rate: dec!(0.135),
        health_base_coefficient: dec!(0.50),
        health_minimum_base: dec!(279942),
        vat_registration_limit: dec!(2000000),
        flat_tax_bands: flat_tax_bands(),
    }
}

/// Every built-in table, oldest first.
pub fn builtin() -> Vec<TaxYearConfig> {
    vec![year_2024(), year_2025()]
}

/// Flat-tax bands; identical for both supported years.
fn flat_tax_bands() -> Vec<FlatTaxBand> {
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

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn every_builtin_table_validates() {
        for config in builtin() {
            assert_eq!(
                config.validate(),
                Ok(()),
                "table for {} failed validation",
                config.tax_year
            );
        }
    }

    #[test]
    fn builtin_tables_are_ordered_and_distinct() {
        let years: Vec<i32> = builtin().iter().map(|c| c.tax_year).collect();

        assert_eq!(years, vec![2024, 2025]);
    }

    #[test]
    fn year_2025_carries_the_published_minimums() {
        let config = year_2025();

        assert_eq!(config.social_minimum_base, dec!(195930));
        assert_eq!(config.health_minimum_base, dec!(279942));
    }

    #[test]
    fn year_2024_minimums_are_twelve_monthly_bases() {
        let config = year_2024();

        assert_eq!(config.social_minimum_base, dec!(13191) * dec!(12));
        assert_eq!(config.health_minimum_base, dec!(21983.50) * dec!(12));
    }

    #[test]
    fn both_years_share_the_band_schedule() {
        assert_eq!(year_2024().flat_tax_bands, year_2025().flat_tax_bands);
        assert_eq!(year_2025().flat_tax_bands.len(), 3);
    }
}
