//! Profit analysis: optimal single transaction + multi-transaction
//! decomposition.
//!
//! The single-transaction pass finds the one globally optimal buy/sell
//! pair in O(n). The multi-transaction pass is a greedy peak-valley scan
//! (a display heuristic, deliberately not the classical
//! unlimited-transaction optimum) supplemented by a consecutive-day
//! fallback when it finds too few transactions to be worth showing.

use crate::domain::{PriceSeries, Transaction};
use serde::{Deserialize, Serialize};

/// If the peak-valley scan finds fewer transactions than this, every rising
/// consecutive-day pair is added as its own transaction. Empirical
/// threshold; kept as observed behavior.
pub const MULTI_TXN_FALLBACK_MIN: usize = 10;

/// Quality marker on a [`ProfitResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataQuality {
    /// Normal input.
    Good,
    /// Processed, but the series contains non-positive closes.
    Degraded,
    /// Input failed validation; the result carries no analysis.
    Error,
}

/// Aggregate result of [`analyze_profit`].
///
/// Constructed fresh per analysis; a degenerate input produces a well-formed
/// empty result with `data_quality == Error` and a reason, never a panic or
/// partial data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfitResult {
    pub data_quality: DataQuality,
    pub error_message: Option<String>,

    pub buy_index_single: usize,
    pub sell_index_single: usize,
    pub max_profit_single: f64,

    /// Multi-transaction decomposition, sorted by buy index ascending.
    /// Every entry has strictly positive profit.
    pub transactions: Vec<Transaction>,
    pub total_profit_multiple: f64,
    pub num_transactions: usize,
    pub average_profit_per_trade: f64,
    pub best_transaction: Option<Transaction>,
}

impl ProfitResult {
    fn empty(data_quality: DataQuality, error_message: Option<String>) -> Self {
        Self {
            data_quality,
            error_message,
            buy_index_single: 0,
            sell_index_single: 0,
            max_profit_single: 0.0,
            transactions: Vec::new(),
            total_profit_multiple: 0.0,
            num_transactions: 0,
            average_profit_per_trade: 0.0,
            best_transaction: None,
        }
    }

    pub fn is_error(&self) -> bool {
        self.data_quality == DataQuality::Error
    }
}

/// Run both profit computations over a series.
///
/// Validation short-circuits: an empty series, fewer than two bars, or any
/// non-finite close yields an error-flagged empty result. A series of
/// non-positive (but finite) closes is anomalous, not invalid: it is
/// processed and flagged `Degraded`.
pub fn analyze_profit(series: &PriceSeries) -> ProfitResult {
    if series.is_empty() {
        return ProfitResult::empty(DataQuality::Error, Some("series is empty".into()));
    }
    if series.len() < 2 {
        return ProfitResult::empty(
            DataQuality::Error,
            Some(format!(
                "need at least 2 bars, got {}",
                series.len()
            )),
        );
    }
    let closes = series.closes();
    if let Some(pos) = closes.iter().position(|c| !c.is_finite()) {
        return ProfitResult::empty(
            DataQuality::Error,
            Some(format!("non-finite close at position {pos}")),
        );
    }

    let data_quality = if closes.iter().any(|&c| c <= 0.0) {
        DataQuality::Degraded
    } else {
        DataQuality::Good
    };

    let (buy_index_single, sell_index_single, max_profit_single) = single_transaction(&closes);

    let mut transactions = peak_valley_transactions(series, &closes);
    if transactions.len() < MULTI_TXN_FALLBACK_MIN {
        append_daily_gains(series, &closes, &mut transactions);
    }
    transactions.sort_by(|a, b| {
        a.buy_index
            .cmp(&b.buy_index)
            .then(a.sell_index.cmp(&b.sell_index))
    });

    let total_profit_multiple: f64 = transactions.iter().map(|t| t.profit).sum();
    let num_transactions = transactions.len();
    let average_profit_per_trade = if num_transactions > 0 {
        total_profit_multiple / num_transactions as f64
    } else {
        0.0
    };
    let best_transaction = transactions
        .iter()
        .max_by(|a, b| a.profit.total_cmp(&b.profit))
        .cloned();

    ProfitResult {
        data_quality,
        error_message: None,
        buy_index_single,
        sell_index_single,
        max_profit_single,
        transactions,
        total_profit_multiple,
        num_transactions,
        average_profit_per_trade,
        best_transaction,
    }
}

/// One-pass optimal single buy/sell pair.
///
/// Tracks the minimum close so far and the index where it occurred; the
/// best positive spread against that minimum is the optimum. On a
/// non-increasing series the profit stays 0.0 with both indices at 0.
fn single_transaction(closes: &[f64]) -> (usize, usize, f64) {
    let mut min_price = f64::INFINITY;
    let mut min_index = 0usize;
    let mut best_profit = 0.0f64;
    let mut buy_index = 0usize;
    let mut sell_index = 0usize;

    for (i, &price) in closes.iter().enumerate() {
        if price < min_price {
            min_price = price;
            min_index = i;
        }
        let profit = price - min_price;
        if profit > best_profit {
            best_profit = profit;
            buy_index = min_index;
            sell_index = i;
        }
    }

    (buy_index, sell_index, best_profit)
}

/// Greedy peak-valley scan: advance to a local minimum, then to the
/// subsequent local maximum, record the pair, resume after the peak.
fn peak_valley_transactions(series: &PriceSeries, closes: &[f64]) -> Vec<Transaction> {
    let n = closes.len();
    let mut transactions = Vec::new();
    let mut i = 0usize;

    while i < n - 1 {
        // Valley: wait for the price to stop decreasing.
        while i < n - 1 && closes[i] >= closes[i + 1] {
            i += 1;
        }
        if i >= n - 1 {
            break;
        }
        let valley = i;

        // Peak: wait for the price to stop increasing.
        i += 1;
        while i < n - 1 && closes[i] <= closes[i + 1] {
            i += 1;
        }
        let peak = i;

        if closes[peak] > closes[valley] {
            if let Some(txn) = Transaction::between(series, valley, peak) {
                transactions.push(txn);
            }
        }
        i += 1;
    }

    transactions
}

/// Low-count fallback: every rising consecutive-day pair becomes its own
/// transaction. Pairs that duplicate an already-recorded transaction's
/// exact buy/sell indices are skipped.
fn append_daily_gains(series: &PriceSeries, closes: &[f64], transactions: &mut Vec<Transaction>) {
    let existing: Vec<(usize, usize)> = transactions
        .iter()
        .map(|t| (t.buy_index, t.sell_index))
        .collect();

    for i in 1..closes.len() {
        if closes[i] > closes[i - 1] && !existing.contains(&(i - 1, i)) {
            if let Some(txn) = Transaction::between(series, i - 1, i) {
                transactions.push(txn);
            }
        }
    }
}
