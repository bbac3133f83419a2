//! End-to-end checks of the analytics contracts on hand-built series.

use chrono::NaiveDate;
use trendsight_core::analytics::{
    analyze_profit, compute_returns, compute_sma, count_price_runs, select_for_display,
    DataQuality, DisplayOptions, ReturnKind,
};
use trendsight_core::domain::{PriceBar, PriceSeries};

fn make_series(closes: &[f64]) -> PriceSeries {
    let base_date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    let bars = closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let open = if i == 0 { close } else { closes[i - 1] };
            PriceBar {
                date: base_date + chrono::Duration::days(i as i64),
                open,
                high: open.max(close) + 1.0,
                low: open.min(close) - 1.0,
                close,
                volume: Some(1000),
            }
        })
        .collect();
    PriceSeries::new(bars).expect("ascending dates")
}

// ── SMA ──────────────────────────────────────────────────────────────

#[test]
fn sma_equals_arithmetic_mean_of_window() {
    let closes = [10.0, 20.0, 30.0, 25.0, 15.0, 35.0];
    let series = make_series(&closes);
    let window = 3;
    let sma = compute_sma(&series, window).unwrap();

    for i in 0..closes.len() {
        if i + 1 < window {
            assert_eq!(sma.get(i), None, "position {i} should be undefined");
        } else {
            let mean: f64 =
                closes[(i + 1 - window)..=i].iter().sum::<f64>() / window as f64;
            assert!((sma.get(i).unwrap() - mean).abs() < 1e-10, "position {i}");
        }
    }
}

#[test]
fn sma_insufficient_history_is_all_undefined() {
    let series = make_series(&[1.0, 2.0, 3.0]);
    let sma = compute_sma(&series, 10).unwrap();
    assert_eq!(sma.len(), 3);
    assert_eq!(sma.defined_count(), 0);
}

// ── Returns ──────────────────────────────────────────────────────────

#[test]
fn log_return_after_zero_close_is_undefined() {
    // Zero close at position 2: log_return[3] would be ln(inf).
    let series = make_series(&[100.0, 101.0, 0.0, 50.0]);
    let log = compute_returns(&series, ReturnKind::Log);
    assert_eq!(log.get(2), None, "ln(0/101) must be sanitized");
    assert_eq!(log.get(3), None, "ln(50/0) must be sanitized");
    // The untouched position is still defined.
    assert!(log.get(1).is_some());
}

// ── Runs ─────────────────────────────────────────────────────────────

#[test]
fn run_counts_on_literal_scenario() {
    // Steps: up up | down down | up up up
    let series = make_series(&[1.0, 2.0, 3.0, 2.0, 1.0, 5.0, 6.0, 7.0]);
    let summary = count_price_runs(&series);

    assert_eq!(summary.upward.count, 2);
    assert_eq!(summary.upward.total_days, 5);
    assert_eq!(summary.upward.highest, 3);
    assert_eq!(summary.downward.count, 1);
    assert_eq!(summary.downward.total_days, 2);
    assert_eq!(summary.downward.highest, 2);

    assert!(summary.upward.total_days + summary.downward.total_days <= series.len() - 1);
    assert!(summary.upward.total_days >= 2 * summary.upward.count);
    assert!(summary.downward.total_days >= 2 * summary.downward.count);
}

// ── Profit ───────────────────────────────────────────────────────────

#[test]
fn single_transaction_beats_brute_force_on_fixed_series() {
    let closes = [
        310.0, 315.0, 275.0, 295.0, 260.0, 270.0, 290.0, 230.0, 255.0, 250.0,
    ];
    let series = make_series(&closes);
    let result = analyze_profit(&series);

    let mut brute_best = 0.0f64;
    for b in 0..closes.len() {
        for s in (b + 1)..closes.len() {
            brute_best = brute_best.max(closes[s] - closes[b]);
        }
    }
    assert!((result.max_profit_single - brute_best).abs() < 1e-10);
    assert!(result.sell_index_single > result.buy_index_single);
}

#[test]
fn fallback_trigger_on_monotone_series() {
    let closes: Vec<f64> = (0..20).map(|i| 50.0 + i as f64).collect();
    let series = make_series(&closes);
    let result = analyze_profit(&series);

    // Peak-valley yields 1 transaction (the whole run); the fallback adds
    // the 19 single-day gains.
    assert_eq!(result.num_transactions, 20);
    assert_eq!(result.data_quality, DataQuality::Good);
    assert!(result.transactions.iter().all(|t| t.profit > 0.0));

    // Sorted by buy index.
    assert!(result
        .transactions
        .windows(2)
        .all(|w| w[0].buy_index <= w[1].buy_index));
}

#[test]
fn empty_series_yields_error_result_not_panic() {
    let result = analyze_profit(&make_series(&[]));
    assert_eq!(result.data_quality, DataQuality::Error);
    assert_eq!(result.num_transactions, 0);
    assert!(result.error_message.is_some());
}

#[test]
fn nonfinite_close_yields_error_result() {
    let result = analyze_profit(&make_series(&[100.0, f64::INFINITY, 90.0]));
    assert_eq!(result.data_quality, DataQuality::Error);
    assert_eq!(result.num_transactions, 0);
}

#[test]
fn all_nonpositive_closes_processed_with_marker() {
    let result = analyze_profit(&make_series(&[0.0, -1.0, -0.5, -2.0]));
    assert_eq!(result.data_quality, DataQuality::Degraded);
    assert!(result.error_message.is_none());
    // buy at -1 (index 1), sell at -0.5 (index 2)
    assert_eq!(result.buy_index_single, 1);
    assert_eq!(result.sell_index_single, 2);
}

// ── Display filter ───────────────────────────────────────────────────

#[test]
fn display_selection_is_bounded_and_non_overlapping() {
    // Dense multi-day swings so the raw list is well above max_count and
    // holds survive the min-hold filter.
    let mut closes = Vec::new();
    for k in 0..30 {
        let base = 100.0 + (k % 7) as f64;
        closes.push(base);
        closes.push(base + 3.0);
        closes.push(base + 6.0);
        closes.push(base - 1.0);
    }
    let series = make_series(&closes);
    let result = analyze_profit(&series);
    assert!(result.num_transactions > 15);

    let options = DisplayOptions::default();
    let selected = select_for_display(&result, &options);

    assert!(!selected.is_empty());
    assert!(selected.len() <= options.max_count);
    let mut bars = std::collections::HashSet::new();
    for txn in &selected {
        assert!(bars.insert(txn.buy_index));
        assert!(bars.insert(txn.sell_index));
    }
    assert!(selected.windows(2).all(|w| w[0].buy_index < w[1].buy_index));
}

#[test]
fn display_selection_of_error_result_is_empty() {
    let result = analyze_profit(&make_series(&[]));
    assert!(select_for_display(&result, &DisplayOptions::default()).is_empty());
}
