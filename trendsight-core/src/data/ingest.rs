//! Ingest — raw provider output to a validated PriceSeries.
//!
//! Sort ascending, dedupe dates keep-first, build the series. Ingest does
//! not repair non-finite closes; those flow through so the analytics layer
//! can flag them per its own contract.

use super::provider::{DataError, RawBar};
use crate::domain::{PriceBar, PriceSeries};

/// Convert raw bars into a PriceSeries.
///
/// Returns a validation error if nothing usable remains.
pub fn ingest(mut raw: Vec<RawBar>) -> Result<PriceSeries, DataError> {
    if raw.is_empty() {
        return Err(DataError::Validation("provider returned no bars".into()));
    }

    raw.sort_by_key(|b| b.date);
    raw.dedup_by_key(|b| b.date); // keep-first

    let bars: Vec<PriceBar> = raw
        .into_iter()
        .map(|b| PriceBar {
            date: b.date,
            open: b.open,
            high: b.high,
            low: b.low,
            close: b.close,
            volume: b.volume,
        })
        .collect();

    PriceSeries::new(bars).map_err(|e| DataError::Validation(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn raw(day: u32, close: f64) -> RawBar {
        RawBar {
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            open: close,
            high: close + 1.0,
            low: close - 1.0,
            close,
            volume: Some(1000),
        }
    }

    #[test]
    fn sorts_out_of_order_bars() {
        let series = ingest(vec![raw(5, 3.0), raw(2, 1.0), raw(3, 2.0)]).unwrap();
        assert_eq!(series.closes(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn dedupes_keeping_first() {
        let mut second = raw(2, 99.0);
        second.open = 99.0;
        let series = ingest(vec![raw(2, 1.0), second, raw(3, 2.0)]).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.closes()[0], 1.0);
    }

    #[test]
    fn empty_input_is_validation_error() {
        assert!(matches!(
            ingest(Vec::new()),
            Err(DataError::Validation(_))
        ));
    }

    #[test]
    fn nonfinite_close_passes_through() {
        let mut bad = raw(3, f64::NAN);
        bad.high = f64::NAN;
        bad.low = f64::NAN;
        let series = ingest(vec![raw(2, 1.0), bad]).unwrap();
        assert!(!series.all_closes_finite());
    }
}
