use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use osvc_data::TaxTableLoader;

/// Validate the statutory tax tables shipped as CSV files.
///
/// The year table should have the following columns:
/// - tax_year: The tax year (e.g., 2025)
/// - income_tax_rate: Personal income tax rate as a decimal (e.g., 0.15)
/// - personal_tax_credit: Annual personal tax credit in CZK
/// - social_rate, social_base_coefficient, social_minimum_base
/// - health_rate, health_base_coefficient, health_minimum_base
/// - vat_registration_limit: Turnover threshold for VAT registration in CZK
///
/// The band table should have: tax_year, upper_limit, monthly_payment.
#[derive(Parser, Debug)]
#[command(name = "osvc-table-check")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the CSV file with one row of statutory parameters per year
    #[arg(short, long, default_value = "data/tax_years.csv")]
    years_file: PathBuf,

    /// Path to the CSV file with flat-tax band rows
    #[arg(short, long, default_value = "data/flat_tax_bands.csv")]
    bands_file: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("Loading year table from: {}", args.years_file.display());

    let years_file = File::open(&args.years_file)
        .with_context(|| format!("Failed to open: {}", args.years_file.display()))?;
    let years = TaxTableLoader::parse_years(years_file)
        .with_context(|| format!("Failed to parse CSV: {}", args.years_file.display()))?;

    println!("Parsed {} year rows", years.len());

    println!("Loading band table from: {}", args.bands_file.display());

    let bands_file = File::open(&args.bands_file)
        .with_context(|| format!("Failed to open: {}", args.bands_file.display()))?;
    let bands = TaxTableLoader::parse_bands(bands_file)
        .with_context(|| format!("Failed to parse CSV: {}", args.bands_file.display()))?;

    println!("Parsed {} band rows", bands.len());

    let registry = TaxTableLoader::build_registry(&years, &bands)
        .context("Failed to assemble the tax year registry")?;

    for year in registry.available_years() {
        let config = registry.get(year)?;
        println!(
            "{}: {} flat-tax bands, social minimum base {}, health minimum base {}",
            year,
            config.flat_tax_bands.len(),
            config.social_minimum_base,
            config.health_minimum_base
        );
    }

    println!("All tables valid.");

    Ok(())
}
