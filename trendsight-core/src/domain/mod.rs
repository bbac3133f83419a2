//! Domain types for TrendSight.

pub mod bar;
pub mod derived;
pub mod series;
pub mod transaction;

pub use bar::PriceBar;
pub use derived::DerivedSeries;
pub use series::{PriceSeries, SeriesError};
pub use transaction::Transaction;

/// Symbol type alias
pub type Symbol = String;
