//! Transaction — a buy/sell pair over a price series.

use super::series::PriceSeries;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One buy-low/sell-high round trip, positioned by bar index into the
/// source series.
///
/// Invariants: `sell_index > buy_index`; any transaction stored in a
/// multi-transaction result has `profit > 0` (non-profitable candidates
/// are discarded, never stored at zero).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub buy_index: usize,
    pub sell_index: usize,
    pub buy_date: NaiveDate,
    pub sell_date: NaiveDate,
    pub buy_price: f64,
    pub sell_price: f64,
    pub profit: f64,
    pub return_percent: f64,
}

impl Transaction {
    /// Build a transaction for the given buy/sell bar positions.
    ///
    /// Returns `None` if either index is out of bounds or the pair is not
    /// strictly ordered. Profit and percentage return are derived from the
    /// closes; a non-positive buy price yields a zero `return_percent`
    /// rather than a division blow-up.
    pub fn between(series: &PriceSeries, buy_index: usize, sell_index: usize) -> Option<Self> {
        if sell_index <= buy_index {
            return None;
        }
        let buy = series.get(buy_index)?;
        let sell = series.get(sell_index)?;
        let profit = sell.close - buy.close;
        let return_percent = if buy.close > 0.0 {
            profit / buy.close * 100.0
        } else {
            0.0
        };
        Some(Self {
            buy_index,
            sell_index,
            buy_date: buy.date,
            sell_date: sell.date,
            buy_price: buy.close,
            sell_price: sell.close,
            profit,
            return_percent,
        })
    }

    /// Number of bars the position is held.
    pub fn hold_days(&self) -> usize {
        self.sell_index - self.buy_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::bar::PriceBar;

    fn series(closes: &[f64]) -> PriceSeries {
        let base = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let bars = closes
            .iter()
            .enumerate()
            .map(|(i, &close)| PriceBar {
                date: base + chrono::Duration::days(i as i64),
                open: close,
                high: close + 1.0,
                low: close - 1.0,
                close,
                volume: Some(1000),
            })
            .collect();
        PriceSeries::new(bars).unwrap()
    }

    #[test]
    fn transaction_between_computes_profit() {
        let s = series(&[100.0, 90.0, 120.0]);
        let txn = Transaction::between(&s, 1, 2).unwrap();
        assert_eq!(txn.buy_price, 90.0);
        assert_eq!(txn.sell_price, 120.0);
        assert!((txn.profit - 30.0).abs() < 1e-10);
        assert!((txn.return_percent - 30.0 / 90.0 * 100.0).abs() < 1e-10);
        assert_eq!(txn.hold_days(), 1);
    }

    #[test]
    fn transaction_rejects_unordered_pair() {
        let s = series(&[100.0, 110.0]);
        assert!(Transaction::between(&s, 1, 1).is_none());
        assert!(Transaction::between(&s, 1, 0).is_none());
    }

    #[test]
    fn transaction_rejects_out_of_bounds() {
        let s = series(&[100.0, 110.0]);
        assert!(Transaction::between(&s, 0, 2).is_none());
    }

    #[test]
    fn nonpositive_buy_price_has_zero_return_percent() {
        let s = series(&[0.0, 5.0]);
        let txn = Transaction::between(&s, 0, 1).unwrap();
        assert_eq!(txn.return_percent, 0.0);
        assert_eq!(txn.profit, 5.0);
    }
}
