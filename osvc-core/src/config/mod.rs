//! Year table selection: the registry plus the built-in statutory tables.

pub mod registry;
pub mod years;

pub use registry::{RegistryError, TaxYearRegistry};
