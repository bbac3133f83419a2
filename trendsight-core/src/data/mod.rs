//! Data boundary: provider trait, concrete sources, ingest validation.
//!
//! The analytics layer never fetches anything itself; it consumes an
//! already-materialized PriceSeries produced here.

pub mod csv_import;
pub mod ingest;
pub mod provider;
pub mod synthetic;
pub mod yahoo;

pub use csv_import::CsvProvider;
pub use ingest::ingest;
pub use provider::{DataError, DataProvider, DataSource, FetchResult, RawBar};
pub use synthetic::SyntheticProvider;
pub use yahoo::YahooProvider;
