use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use osvc_core::calculations::vat;
use osvc_core::{IncomeDeclaration, TaxAssessment, TaxYearRegistry, TradeType};
use osvc_data::TaxTableLoader;
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Tax and insurance assessment for Czech self-employed traders (OSVČ).
///
/// Computes the standard assessment (income tax plus social and health
/// insurance contributions) for the requested year, compares it against
/// the flat-tax regime, and prints the result as JSON on stdout.
#[derive(Debug, Parser)]
#[command(name = "osvc")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Gross annual income in CZK.
    /// Accepts comma as thousands separator (e.g. `1,500,000`).
    #[arg(long)]
    income: String,

    /// Trade type: `craft`, `agricultural`, `free`, or `other`.
    /// Unknown values fall back to the default expense rate.
    #[arg(long)]
    trade_type: Option<String>,

    /// Tax year to assess.
    #[arg(long, default_value = "2025")]
    year: i32,

    /// Directory containing `tax_years.csv` and `flat_tax_bands.csv`.
    /// When omitted, the built-in tables are used.
    #[arg(long)]
    tables_dir: Option<PathBuf>,

    /// Pretty-print the JSON output.
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `warn` so normal runs are quiet.
/// * Writes to stderr; stdout carries only the JSON document.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

// ─── input parsing ───────────────────────────────────────────────────────────

/// Error returned when the income argument cannot be parsed as a [`Decimal`].
#[derive(Debug, Error)]
#[error("invalid income '{input}': {source}")]
struct ParseIncomeError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

/// Parses the income argument into a [`Decimal`].
///
/// Handles comma as thousands separator (e.g. `"1,500,000"`).
fn parse_income(s: &str) -> Result<Decimal, ParseIncomeError> {
    let normalized = s.trim().replace(',', "");
    normalized.parse().map_err(|e| ParseIncomeError {
        input: s.to_string(),
        source: e,
    })
}

/// Maps the trade-type argument onto a [`TradeType`].
///
/// Unknown values log a warning and fall back to `None`, which the engine
/// assesses with the default expense rate.
fn parse_trade_type(s: Option<&str>) -> Option<TradeType> {
    let raw = s?;
    match TradeType::parse(raw) {
        Some(trade) => Some(trade),
        None => {
            warn!(input = %raw, "unrecognised trade type, using the default expense rate");
            None
        }
    }
}

// ─── table loading ───────────────────────────────────────────────────────────

/// Builds the registry from a tables directory, or from the built-in years
/// when no directory is given.
fn load_registry(tables_dir: Option<&Path>) -> Result<TaxYearRegistry> {
    let dir = match tables_dir {
        Some(dir) => dir,
        None => {
            debug!("using built-in tax year tables");
            return Ok(TaxYearRegistry::with_builtin_years());
        }
    };

    let years_path = dir.join("tax_years.csv");
    let bands_path = dir.join("flat_tax_bands.csv");

    let years_file = File::open(&years_path)
        .with_context(|| format!("Failed to open: {}", years_path.display()))?;
    let years = TaxTableLoader::parse_years(years_file)
        .with_context(|| format!("Failed to parse CSV: {}", years_path.display()))?;

    let bands_file = File::open(&bands_path)
        .with_context(|| format!("Failed to open: {}", bands_path.display()))?;
    let bands = TaxTableLoader::parse_bands(bands_file)
        .with_context(|| format!("Failed to parse CSV: {}", bands_path.display()))?;

    TaxTableLoader::build_registry(&years, &bands)
        .with_context(|| format!("Failed to assemble tables from: {}", dir.display()))
}

// ─── output ──────────────────────────────────────────────────────────────────

/// The JSON document printed to stdout.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Envelope {
    tax_year: i32,
    computed_at: DateTime<Utc>,
    #[serde(flatten)]
    assessment: TaxAssessment,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let income = parse_income(&cli.income)?;
    let trade_type = parse_trade_type(cli.trade_type.as_deref());

    let registry = load_registry(cli.tables_dir.as_deref())?;
    let config = registry.get(cli.year)?;

    let declaration = IncomeDeclaration::new(income, trade_type);
    let assessment = osvc_core::assess(&declaration, config)?;

    if vat::exceeds_registration_limit(declaration.annual_income, config.vat_registration_limit) {
        warn!(
            income = %declaration.annual_income,
            limit = %config.vat_registration_limit,
            "turnover exceeds the VAT registration limit"
        );
    }

    let envelope = Envelope {
        tax_year: config.tax_year,
        computed_at: Utc::now(),
        assessment,
    };

    let json = if cli.pretty {
        serde_json::to_string_pretty(&envelope)?
    } else {
        serde_json::to_string(&envelope)?
    };
    println!("{}", json);

    Ok(())
}
