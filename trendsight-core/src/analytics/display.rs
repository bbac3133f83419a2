//! Display selection for the multi-transaction list.
//!
//! The raw decomposition can be dense (the fallback can emit one
//! transaction per rising day). This pass picks a bounded subset suitable
//! for chart annotation: nothing on top of the single-transaction optimum
//! markers, no ultra-short holds, no two annotations sharing a bar.

use super::profit::ProfitResult;
use crate::domain::Transaction;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Tunables for [`select_for_display`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DisplayOptions {
    /// Maximum number of transactions returned.
    pub max_count: usize,
    /// Minimum distance, in bars, between a candidate's endpoints and the
    /// single-transaction optimum's buy/sell bars.
    pub min_gap: usize,
    /// Minimum hold period, in bars.
    pub min_hold_days: usize,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            max_count: 15,
            min_gap: 3,
            min_hold_days: 2,
        }
    }
}

/// Select a bounded, non-overlapping subset of the multi-transaction list
/// for presentation, ordered by buy index ascending.
///
/// Policy:
/// - drop candidates whose buy or sell bar lies within `min_gap` bars of
///   the single-transaction optimum's buy or sell bar (the optimum is
///   annotated separately; duplicates next to it are noise);
/// - drop candidates held for fewer than `min_hold_days` bars;
/// - keep the highest-profit candidates, never letting two kept
///   transactions share a buy or sell bar, up to `max_count`.
///
/// The input result is not mutated; an error-flagged result yields an
/// empty list.
pub fn select_for_display(result: &ProfitResult, options: &DisplayOptions) -> Vec<Transaction> {
    if result.is_error() {
        return Vec::new();
    }

    let near_optimum = |index: usize| -> bool {
        index.abs_diff(result.buy_index_single) <= options.min_gap
            || index.abs_diff(result.sell_index_single) <= options.min_gap
    };

    let mut candidates: Vec<&Transaction> = result
        .transactions
        .iter()
        .filter(|t| !near_optimum(t.buy_index) && !near_optimum(t.sell_index))
        .filter(|t| t.hold_days() >= options.min_hold_days)
        .collect();

    // Highest profit first; ties go to the earlier transaction so the
    // selection is deterministic.
    candidates.sort_by(|a, b| {
        b.profit
            .total_cmp(&a.profit)
            .then(a.buy_index.cmp(&b.buy_index))
            .then(a.sell_index.cmp(&b.sell_index))
    });

    let mut used_bars: HashSet<usize> = HashSet::new();
    let mut kept: Vec<Transaction> = Vec::new();
    for txn in candidates {
        if kept.len() >= options.max_count {
            break;
        }
        if used_bars.contains(&txn.buy_index) || used_bars.contains(&txn.sell_index) {
            continue;
        }
        used_bars.insert(txn.buy_index);
        used_bars.insert(txn.sell_index);
        kept.push(txn.clone());
    }

    kept.sort_by_key(|t| t.buy_index);
    kept
}
