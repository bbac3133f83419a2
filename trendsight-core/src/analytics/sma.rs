//! Simple Moving Average (SMA).
//!
//! Rolling mean of close prices over a trailing window.
//! First defined value at index window - 1.

use super::AnalyticsError;
use crate::domain::{DerivedSeries, PriceSeries};

/// Compute the SMA of the close column.
///
/// Maintains a running sum over the last `window` closes, updated by adding
/// the entering close and subtracting the leaving one. O(n) total, not a
/// per-position recomputation.
///
/// - `window == 0` is a structural error.
/// - A series shorter than `window` yields an all-undefined result.
/// - Positions `0..window-1` are undefined.
/// - A non-finite close makes every window containing it undefined; the
///   running sum is rebuilt from the first clean window after it.
pub fn compute_sma(series: &PriceSeries, window: usize) -> Result<DerivedSeries, AnalyticsError> {
    if window == 0 {
        return Err(AnalyticsError::InvalidWindow { window });
    }

    let closes = series.closes();
    let n = closes.len();
    if n < window {
        return Ok(DerivedSeries::undefined(n));
    }

    let mut values: Vec<Option<f64>> = vec![None; n];

    let window_sum = |slice: &[f64]| -> Option<f64> {
        if slice.iter().all(|c| c.is_finite()) {
            Some(slice.iter().sum())
        } else {
            None
        }
    };

    let mut sum = window_sum(&closes[..window]);
    if let Some(s) = sum {
        values[window - 1] = Some(s / window as f64);
    }

    for i in window..n {
        let leaving = closes[i - window];
        let entering = closes[i];
        sum = match sum {
            // Clean running sum and clean edges: O(1) roll.
            Some(s) if leaving.is_finite() && entering.is_finite() => Some(s - leaving + entering),
            // A non-finite value is inside or entering the window: rescan.
            _ => window_sum(&closes[(i + 1 - window)..=i]),
        };
        if let Some(s) = sum {
            values[i] = Some(s / window as f64);
        }
    }

    Ok(DerivedSeries::new(values))
}
