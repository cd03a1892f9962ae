pub mod calculations;
pub mod config;
pub mod models;

pub use calculations::engine::{
    CalculationError, assess, assess_request, calculate, compare_regimes,
};
pub use config::{RegistryError, TaxYearRegistry};
pub use models::*;
