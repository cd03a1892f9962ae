pub mod loader;

pub use loader::{FlatTaxBandRecord, TaxTableError, TaxTableLoader, TaxYearRecord};
