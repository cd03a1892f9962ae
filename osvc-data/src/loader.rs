use std::collections::HashMap;
use std::io::Read;

use osvc_core::{FlatTaxBand, TaxYearConfig, TaxYearConfigError, TaxYearRegistry};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading the statutory tables.
#[derive(Debug, Error, PartialEq)]
pub enum TaxTableError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("tax year {0} appears more than once in the year table")]
    DuplicateYear(i32),

    #[error("tax year {0} has no flat-tax band rows")]
    NoBandsForYear(i32),

    #[error("flat-tax band rows reference tax year {0}, which has no year row")]
    BandsForUnknownYear(i32),

    #[error("invalid table for tax year {year}: {source}")]
    InvalidTable {
        year: i32,
        #[source]
        source: TaxYearConfigError,
    },
}

impl From<csv::Error> for TaxTableError {
    fn from(err: csv::Error) -> Self {
        TaxTableError::CsvParse(err.to_string())
    }
}

/// A single row of the year table CSV.
///
/// Columns map one-to-one onto the scalar fields of [`TaxYearConfig`]; the
/// flat-tax bands live in their own file keyed by `tax_year`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TaxYearRecord {
    pub tax_year: i32,
    pub income_tax_rate: Decimal,
    pub personal_tax_credit: Decimal,
    pub social_rate: Decimal,
    pub social_base_coefficient: Decimal,
    pub social_minimum_base: Decimal,
    pub health_rate: Decimal,
    pub health_base_coefficient: Decimal,
    pub health_minimum_base: Decimal,
    pub vat_registration_limit: Decimal,
}

/// A single row of the flat-tax band CSV.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FlatTaxBandRecord {
    pub tax_year: i32,
    pub upper_limit: Decimal,
    pub monthly_payment: Decimal,
}

/// Loader for the statutory tables shipped as CSV files.
///
/// Parsing and assembly are separate steps so the table-check binary can
/// report row counts before cross-validation runs. [`build_registry`]
/// applies the same validation as [`TaxYearConfig::validate`], so a table
/// that loads here is a table the engine accepts.
///
/// [`build_registry`]: TaxTableLoader::build_registry
pub struct TaxTableLoader;

impl TaxTableLoader {
    /// Parse year rows from a CSV reader.
    pub fn parse_years<R: Read>(reader: R) -> Result<Vec<TaxYearRecord>, TaxTableError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: TaxYearRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Parse flat-tax band rows from a CSV reader.
    ///
    /// Rows may appear in any order; [`build_registry`] sorts each year's
    /// bands by ascending upper limit.
    ///
    /// [`build_registry`]: TaxTableLoader::build_registry
    pub fn parse_bands<R: Read>(reader: R) -> Result<Vec<FlatTaxBandRecord>, TaxTableError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: FlatTaxBandRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Cross-checks the two tables and assembles a ready-to-use registry.
    ///
    /// Every year row must have at least one band row and vice versa, a
    /// year may appear only once, and each assembled [`TaxYearConfig`] must
    /// pass validation.
    pub fn build_registry(
        years: &[TaxYearRecord],
        bands: &[FlatTaxBandRecord],
    ) -> Result<TaxYearRegistry, TaxTableError> {
        let mut bands_by_year: HashMap<i32, Vec<FlatTaxBand>> = HashMap::new();
        for record in bands {
            bands_by_year
                .entry(record.tax_year)
                .or_default()
                .push(FlatTaxBand {
                    upper_limit: record.upper_limit,
                    monthly_payment: record.monthly_payment,
                });
        }

        let mut registry = TaxYearRegistry::new();
        for record in years {
            if registry.contains(record.tax_year) {
                return Err(TaxTableError::DuplicateYear(record.tax_year));
            }

            let mut year_bands = bands_by_year
                .remove(&record.tax_year)
                .ok_or(TaxTableError::NoBandsForYear(record.tax_year))?;
            year_bands.sort_by(|a, b| a.upper_limit.cmp(&b.upper_limit));

            let config = TaxYearConfig {
                tax_year: record.tax_year,
                income_tax_rate: record.income_tax_rate,
                personal_tax_credit: record.personal_tax_credit,
                social_rate: record.social_rate,
                social_base_coefficient: record.social_base_coefficient,
                social_minimum_base: record.social_minimum_base,
                health_rate: record.health_rate,
                health_base_coefficient: record.health_base_coefficient,
                health_minimum_base: record.health_minimum_base,
                vat_registration_limit: record.vat_registration_limit,
                flat_tax_bands: year_bands,
            };

            registry.register(config).map_err(|source| TaxTableError::InvalidTable {
                year: record.tax_year,
                source,
            })?;
        }

        // Whatever is left in the map never matched a year row.
        if let Some(year) = bands_by_year.keys().copied().min() {
            return Err(TaxTableError::BandsForUnknownYear(year));
        }

        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    const YEARS_HEADER: &str = "tax_year,income_tax_rate,personal_tax_credit,social_rate,\
social_base_coefficient,social_minimum_base,health_rate,health_base_coefficient,\
health_minimum_base,vat_registration_limit";

    const BANDS_HEADER: &str = "tax_year,upper_limit,monthly_payment";

    fn years_csv(rows: &[&str]) -> String {
        let mut csv = String::from(YEARS_HEADER);
        for row in rows {
            csv.push('\n');
            csv.push_str(row);
        }
        csv
    }

    fn bands_csv(rows: &[&str]) -> String {
        let mut csv = String::from(BANDS_HEADER);
        for row in rows {
            csv.push('\n');
            csv.push_str(row);
        }
        csv
    }

    const YEAR_2025_ROW: &str = "2025,0.15,30840,0.292,0.55,195930,0.135,0.50,279942,2000000";

    const BAND_2025_ROWS: [&str; 3] = [
        "2025,1000000,7498",
        "2025,1500000,16745",
        "2025,2000000,27139",
    ];

    #[test]
    fn test_parse_years_single_row() {
        let csv = years_csv(&[YEAR_2025_ROW]);

        let records = TaxTableLoader::parse_years(csv.as_bytes()).expect("Failed to parse CSV");

        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0],
            TaxYearRecord {
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
            }
        );
    }

    #[test]
    fn test_parse_bands_keeps_row_order() {
        let csv = bands_csv(&["2025,1500000,16745", "2025,1000000,7498"]);

        let records = TaxTableLoader::parse_bands(csv.as_bytes()).expect("Failed to parse CSV");

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].upper_limit, dec!(1500000));
        assert_eq!(records[1].upper_limit, dec!(1000000));
    }

    #[test]
    fn test_parse_years_rejects_missing_column() {
        let csv = "tax_year,income_tax_rate\n2025,0.15";

        let result = TaxTableLoader::parse_years(csv.as_bytes());

        assert!(matches!(result, Err(TaxTableError::CsvParse(_))));
    }

    #[test]
    fn test_parse_bands_rejects_bad_decimal() {
        let csv = bands_csv(&["2025,one million,7498"]);

        let result = TaxTableLoader::parse_bands(csv.as_bytes());

        assert!(matches!(result, Err(TaxTableError::CsvParse(_))));
    }

    #[test]
    fn test_build_registry_single_year() {
        let years = TaxTableLoader::parse_years(years_csv(&[YEAR_2025_ROW]).as_bytes()).unwrap();
        let bands = TaxTableLoader::parse_bands(bands_csv(&BAND_2025_ROWS).as_bytes()).unwrap();

        let registry = TaxTableLoader::build_registry(&years, &bands).unwrap();

        assert_eq!(registry.available_years(), vec![2025]);
        let config = registry.get(2025).unwrap();
        assert_eq!(config.social_minimum_base, dec!(195930));
        assert_eq!(config.flat_tax_bands.len(), 3);
    }

    #[test]
    fn test_build_registry_sorts_band_rows() {
        let years = TaxTableLoader::parse_years(years_csv(&[YEAR_2025_ROW]).as_bytes()).unwrap();
        let shuffled = bands_csv(&[
            "2025,2000000,27139",
            "2025,1000000,7498",
            "2025,1500000,16745",
        ]);
        let bands = TaxTableLoader::parse_bands(shuffled.as_bytes()).unwrap();

        let registry = TaxTableLoader::build_registry(&years, &bands).unwrap();

        let limits: Vec<_> = registry
            .get(2025)
            .unwrap()
            .flat_tax_bands
            .iter()
            .map(|b| b.upper_limit)
            .collect();
        assert_eq!(limits, vec![dec!(1000000), dec!(1500000), dec!(2000000)]);
    }

    #[test]
    fn test_build_registry_rejects_year_without_bands() {
        let years = TaxTableLoader::parse_years(years_csv(&[YEAR_2025_ROW]).as_bytes()).unwrap();

        let result = TaxTableLoader::build_registry(&years, &[]);

        assert_eq!(result.unwrap_err(), TaxTableError::NoBandsForYear(2025));
    }

    #[test]
    fn test_build_registry_rejects_bands_without_year() {
        let years = TaxTableLoader::parse_years(years_csv(&[YEAR_2025_ROW]).as_bytes()).unwrap();
        let mut rows = BAND_2025_ROWS.to_vec();
        rows.push("2023,1000000,5994");
        let bands = TaxTableLoader::parse_bands(bands_csv(&rows).as_bytes()).unwrap();

        let result = TaxTableLoader::build_registry(&years, &bands);

        assert_eq!(result.unwrap_err(), TaxTableError::BandsForUnknownYear(2023));
    }

    #[test]
    fn test_build_registry_rejects_duplicate_year() {
        let years =
            TaxTableLoader::parse_years(years_csv(&[YEAR_2025_ROW, YEAR_2025_ROW]).as_bytes())
                .unwrap();
        let bands = TaxTableLoader::parse_bands(bands_csv(&BAND_2025_ROWS).as_bytes()).unwrap();

        let result = TaxTableLoader::build_registry(&years, &bands);

        assert_eq!(result.unwrap_err(), TaxTableError::DuplicateYear(2025));
    }

    #[test]
    fn test_build_registry_rejects_invalid_table() {
        // Social rate of 29.2 is a percentage typo for 0.292.
        let bad_row = "2025,0.15,30840,29.2,0.55,195930,0.135,0.50,279942,2000000";
        let years = TaxTableLoader::parse_years(years_csv(&[bad_row]).as_bytes()).unwrap();
        let bands = TaxTableLoader::parse_bands(bands_csv(&BAND_2025_ROWS).as_bytes()).unwrap();

        let result = TaxTableLoader::build_registry(&years, &bands);

        assert_eq!(
            result.unwrap_err(),
            TaxTableError::InvalidTable {
                year: 2025,
                source: TaxYearConfigError::InvalidSocialRate(dec!(29.2)),
            }
        );
    }

    #[test]
    fn test_build_registry_rejects_band_gap_below_vat_limit() {
        let years = TaxTableLoader::parse_years(years_csv(&[YEAR_2025_ROW]).as_bytes()).unwrap();
        let bands =
            TaxTableLoader::parse_bands(bands_csv(&["2025,1000000,7498"]).as_bytes()).unwrap();

        let result = TaxTableLoader::build_registry(&years, &bands);

        assert_eq!(
            result.unwrap_err(),
            TaxTableError::InvalidTable {
                year: 2025,
                source: TaxYearConfigError::BandCoverageGap {
                    last: dec!(1000000),
                    limit: dec!(2000000),
                },
            }
        );
    }
}
