//! PriceSeries — immutable date-ascending sequence of daily bars.
//!
//! All analyzers borrow a PriceSeries and allocate fresh output; nothing
//! ever writes a derived column back into the series.

use super::bar::PriceBar;
use serde::Serialize;
use thiserror::Error;

/// Structural errors raised at series construction time.
#[derive(Debug, Error)]
pub enum SeriesError {
    #[error("bars out of order: {prev} is not before {next} (position {position})")]
    OutOfOrder {
        prev: chrono::NaiveDate,
        next: chrono::NaiveDate,
        position: usize,
    },

    #[error("duplicate date {date} (position {position})")]
    DuplicateDate {
        date: chrono::NaiveDate,
        position: usize,
    },
}

/// Ordered sequence of daily price bars.
///
/// Invariants enforced by [`PriceSeries::new`]:
/// - dates strictly ascending, no duplicates.
///
/// A series may be empty or contain non-finite closes; those conditions are
/// the analytics layer's concern (degenerate input handling), not a
/// construction failure.
///
/// Serialize-only: deserializing would bypass the date-order validation,
/// so a series is always rebuilt through [`PriceSeries::new`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct PriceSeries {
    bars: Vec<PriceBar>,
}

impl PriceSeries {
    /// Build a series from bars, validating date order.
    pub fn new(bars: Vec<PriceBar>) -> Result<Self, SeriesError> {
        for (i, pair) in bars.windows(2).enumerate() {
            let (prev, next) = (pair[0].date, pair[1].date);
            if prev == next {
                return Err(SeriesError::DuplicateDate {
                    date: next,
                    position: i + 1,
                });
            }
            if prev > next {
                return Err(SeriesError::OutOfOrder {
                    prev,
                    next,
                    position: i + 1,
                });
            }
        }
        Ok(Self { bars })
    }

    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    pub fn get(&self, index: usize) -> Option<&PriceBar> {
        self.bars.get(index)
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Close column, in series order.
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    pub fn first_date(&self) -> Option<chrono::NaiveDate> {
        self.bars.first().map(|b| b.date)
    }

    pub fn last_date(&self) -> Option<chrono::NaiveDate> {
        self.bars.last().map(|b| b.date)
    }

    /// True if every bar carries a finite close.
    pub fn all_closes_finite(&self) -> bool {
        self.bars.iter().all(|b| b.has_finite_close())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn bar(date: NaiveDate, close: f64) -> PriceBar {
        PriceBar {
            date,
            open: close,
            high: close + 1.0,
            low: close - 1.0,
            close,
            volume: Some(1000),
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn series_accepts_ascending_dates() {
        let series = PriceSeries::new(vec![bar(day(2), 10.0), bar(day(3), 11.0)]).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.closes(), vec![10.0, 11.0]);
        assert_eq!(series.first_date(), Some(day(2)));
        assert_eq!(series.last_date(), Some(day(3)));
    }

    #[test]
    fn series_rejects_duplicate_date() {
        let err = PriceSeries::new(vec![bar(day(2), 10.0), bar(day(2), 11.0)]).unwrap_err();
        assert!(matches!(err, SeriesError::DuplicateDate { position: 1, .. }));
    }

    #[test]
    fn series_rejects_out_of_order() {
        let err = PriceSeries::new(vec![bar(day(5), 10.0), bar(day(2), 11.0)]).unwrap_err();
        assert!(matches!(err, SeriesError::OutOfOrder { position: 1, .. }));
    }

    #[test]
    fn empty_series_is_valid() {
        let series = PriceSeries::new(Vec::new()).unwrap();
        assert!(series.is_empty());
        assert!(series.all_closes_finite());
    }

    #[test]
    fn nonfinite_close_is_constructible_but_detected() {
        let series = PriceSeries::new(vec![bar(day(2), 10.0), bar(day(3), f64::NAN)]).unwrap();
        assert!(!series.all_closes_finite());
    }
}
