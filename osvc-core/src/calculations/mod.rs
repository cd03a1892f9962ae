//! Calculation modules for the OSVČ assessment.
//!
//! Each module covers one slice of the computation; [`engine`] composes them
//! and is the only module that rounds.

pub mod advisor;
pub mod common;
pub mod contributions;
pub mod engine;
pub mod expense;
pub mod flat_tax;
pub mod income_tax;
pub mod vat;

pub use contributions::{ContributionCalculator, ContributionKind, ContributionParams};
pub use engine::CalculationError;
