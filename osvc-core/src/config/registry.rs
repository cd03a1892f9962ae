//! Year-keyed registry of statutory tax tables.
//!
//! The engine never assumes a current year. Callers register the
//! [`TaxYearConfig`] tables they support (built-in or loaded from data
//! files) and select a year explicitly on every request, so an API rollout
//! in January keeps serving last year's assessments untouched.

use std::collections::HashMap;

use thiserror::Error;

use crate::models::{TaxYearConfig, TaxYearConfigError};

/// Errors produced by [`TaxYearRegistry`] lookups and registration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// No table is registered for the requested year.
    #[error("no tax tables registered for year {year}; available: {available:?}")]
    MissingYear { year: i32, available: Vec<i32> },
}

/// Registry of [`TaxYearConfig`] tables, keyed by tax year.
///
/// Typical lifetime:
/// 1. Create with [`TaxYearRegistry::with_builtin_years`] (or `new` for an
///    empty one).
/// 2. Call [`TaxYearRegistry::register`] for any additional tables.
/// 3. Call [`TaxYearRegistry::get`] whenever an assessment needs a year.
#[derive(Debug, Clone)]
pub struct TaxYearRegistry {
    configs: HashMap<i32, TaxYearConfig>,
}

impl TaxYearRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            configs: HashMap::new(),
        }
    }

    /// Registry preloaded with every built-in year table from
    /// [`crate::config::years`].
    pub fn with_builtin_years() -> Self {
        let mut registry = Self::new();
        for config in super::years::builtin() {
            registry
                .register(config)
                .expect("built-in tax year tables must validate");
        }
        registry
    }

    /// Register a year table.
    ///
    /// The table is validated before it is accepted. If a table for the same
    /// year is already present it is silently replaced.
    ///
    /// # Errors
    ///
    /// Returns [`TaxYearConfigError`] when the table fails validation;
    /// the registry is left unchanged in that case.
    pub fn register(&mut self, config: TaxYearConfig) -> Result<(), TaxYearConfigError> {
        config.validate()?;
        self.configs.insert(config.tax_year, config);
        Ok(())
    }

    /// Every registered year, sorted ascending.
    pub fn available_years(&self) -> Vec<i32> {
        let mut years: Vec<_> = self.configs.keys().copied().collect();
        years.sort_unstable();
        years
    }

    /// Look up the table for a year.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::MissingYear`] naming the available years
    /// when no table is registered for `year`.
    pub fn get(&self, year: i32) -> Result<&TaxYearConfig, RegistryError> {
        self.configs.get(&year).ok_or_else(|| RegistryError::MissingYear {
            year,
            available: self.available_years(),
        })
    }

    pub fn contains(&self, year: i32) -> bool {
        self.configs.contains_key(&year)
    }
}

impl Default for TaxYearRegistry {
    fn default() -> Self {
        Self::new()
    }
}
