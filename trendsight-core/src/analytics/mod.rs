//! Analytics over a single price series.
//!
//! Four independent passes, each borrowing the series and returning a fresh
//! derived structure:
//! - SMA (sliding-window mean of closes)
//! - daily returns (simple or log)
//! - directional run segmentation
//! - optimal single-transaction profit + multi-transaction decomposition
//!
//! The display filter post-processes profit output for presentation; it is
//! the only component here that consumes another component's result.

pub mod display;
pub mod profit;
pub mod returns;
pub mod runs;
pub mod sma;

pub use display::{select_for_display, DisplayOptions};
pub use profit::{analyze_profit, DataQuality, ProfitResult, MULTI_TXN_FALLBACK_MIN};
pub use returns::{compute_returns, ReturnKind};
pub use runs::{count_price_runs, RunStats, RunSummary};
pub use sma::compute_sma;

use thiserror::Error;

/// Structural misuse of an analyzer entry point.
///
/// Degenerate data (too-short series, non-finite closes) never raises;
/// it produces an all-undefined series or an error-flagged result instead.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("SMA window must be >= 1, got {window}")]
    InvalidWindow { window: usize },
}

/// Create a series from close prices for testing.
///
/// Generates plausible OHLV around each close: open = prev close (or the
/// close itself for the first bar), high/low bracket open and close.
#[cfg(test)]
pub fn make_series(closes: &[f64]) -> crate::domain::PriceSeries {
    use crate::domain::{PriceBar, PriceSeries};
    let base_date = chrono::NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    let bars = closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let open = if i == 0 { close } else { closes[i - 1] };
            let high = open.max(close) + 1.0;
            let low = open.min(close) - 1.0;
            PriceBar {
                date: base_date + chrono::Duration::days(i as i64),
                open,
                high,
                low,
                close,
                volume: Some(1000),
            }
        })
        .collect();
    PriceSeries::new(bars).expect("make_series dates are ascending")
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for analytics tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;
