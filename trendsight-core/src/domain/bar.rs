//! PriceBar — one day's OHLCV record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Daily OHLCV bar for a single symbol.
///
/// `close` is the column every analyzer consumes; a bar whose close is
/// non-finite is still representable here and is rejected (or flagged) by
/// the analytics layer, never silently skipped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: Option<u64>,
}

impl PriceBar {
    /// Returns true if the close is present and finite, the invariant
    /// every analytic pass relies on.
    pub fn has_finite_close(&self) -> bool {
        self.close.is_finite()
    }

    /// Basic OHLC sanity check: high >= low, open/close inside [low, high],
    /// strictly positive prices.
    pub fn is_sane(&self) -> bool {
        if !self.open.is_finite()
            || !self.high.is_finite()
            || !self.low.is_finite()
            || !self.close.is_finite()
        {
            return false;
        }
        self.high >= self.low
            && self.open >= self.low
            && self.open <= self.high
            && self.close >= self.low
            && self.close <= self.high
            && self.open > 0.0
            && self.close > 0.0
    }
}
