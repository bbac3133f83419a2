//! Daily returns — simple (percent) or logarithmic.
//!
//! simple[i] = (close[i] - close[i-1]) / close[i-1] * 100
//! log[i]    = ln(close[i] / close[i-1])
//! Position 0 is always undefined.

use crate::domain::{DerivedSeries, PriceSeries};
use serde::{Deserialize, Serialize};

/// Which return definition to compute. There is no default: the caller
/// must name one, never guess between the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnKind {
    Simple,
    Log,
}

/// Compute per-bar returns of the close column.
///
/// Any non-finite result (a zero previous close for simple returns, a
/// zero or negative ratio for log returns, or a non-finite input close)
/// is sanitized to undefined at the point of computation, never propagated
/// as infinity or NaN.
pub fn compute_returns(series: &PriceSeries, kind: ReturnKind) -> DerivedSeries {
    let closes = series.closes();
    let n = closes.len();
    let mut values: Vec<Option<f64>> = vec![None; n];

    for i in 1..n {
        let prev = closes[i - 1];
        let curr = closes[i];
        if !prev.is_finite() || !curr.is_finite() {
            continue;
        }
        let raw = match kind {
            ReturnKind::Simple => (curr - prev) / prev * 100.0,
            ReturnKind::Log => (curr / prev).ln(),
        };
        if raw.is_finite() {
            values[i] = Some(raw);
        }
    }

    DerivedSeries::new(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::{assert_approx, make_series, DEFAULT_EPSILON};

    #[test]
    fn simple_returns_basic() {
        // 100 -> 110: +10%, 110 -> 99: -10%
        let series = make_series(&[100.0, 110.0, 99.0]);
        let result = compute_returns(&series, ReturnKind::Simple);

        assert_eq!(result.len(), 3);
        assert_eq!(result.get(0), None);
        assert_approx(result.get(1).unwrap(), 10.0, DEFAULT_EPSILON);
        assert_approx(result.get(2).unwrap(), -10.0, DEFAULT_EPSILON);
    }

    #[test]
    fn log_returns_basic() {
        let series = make_series(&[100.0, 110.0]);
        let result = compute_returns(&series, ReturnKind::Log);
        assert_eq!(result.get(0), None);
        assert_approx(result.get(1).unwrap(), (110.0f64 / 100.0).ln(), DEFAULT_EPSILON);
    }

    #[test]
    fn zero_close_sanitized_to_undefined() {
        // close[1] == 0.0: simple return at 2 divides by zero, log return
        // at 1 is ln(0) and at 2 is ln(inf). All must come back undefined.
        let series = make_series(&[100.0, 0.0, 50.0]);

        let simple = compute_returns(&series, ReturnKind::Simple);
        assert_approx(simple.get(1).unwrap(), -100.0, DEFAULT_EPSILON);
        assert_eq!(simple.get(2), None);

        let log = compute_returns(&series, ReturnKind::Log);
        assert_eq!(log.get(1), None);
        assert_eq!(log.get(2), None);
    }

    #[test]
    fn negative_close_log_sanitized() {
        let series = make_series(&[100.0, -5.0]);
        let log = compute_returns(&series, ReturnKind::Log);
        assert_eq!(log.get(1), None, "log of a negative ratio must be undefined");
    }

    #[test]
    fn nonfinite_close_sanitized() {
        let series = make_series(&[100.0, f64::NAN, 110.0]);
        let simple = compute_returns(&series, ReturnKind::Simple);
        assert_eq!(simple.get(1), None);
        assert_eq!(simple.get(2), None);
    }

    #[test]
    fn both_kinds_side_by_side() {
        let series = make_series(&[100.0, 105.0, 110.25]);
        let simple = compute_returns(&series, ReturnKind::Simple);
        let log = compute_returns(&series, ReturnKind::Log);
        assert_eq!(simple.len(), log.len());
        assert_approx(simple.get(1).unwrap(), 5.0, DEFAULT_EPSILON);
        assert_approx(log.get(1).unwrap(), 1.05f64.ln(), DEFAULT_EPSILON);
    }

    #[test]
    fn single_bar_series_is_all_undefined() {
        let series = make_series(&[100.0]);
        let result = compute_returns(&series, ReturnKind::Simple);
        assert_eq!(result.len(), 1);
        assert_eq!(result.defined_count(), 0);
    }
}
