//! Transaction list export (CSV).

use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use trendsight_core::domain::Transaction;

pub fn write_transactions_csv(path: &Path, symbol: &str, transactions: &[Transaction]) -> Result<()> {
    let mut file = File::create(path)
        .with_context(|| format!("Failed to create transactions CSV {}", path.display()))?;

    writeln!(
        file,
        "symbol,buy_date,sell_date,buy_price,sell_price,profit,return_pct,hold_days"
    )?;

    for txn in transactions {
        writeln!(
            file,
            "{},{},{},{:.4},{:.4},{:.4},{:.4},{}",
            symbol,
            txn.buy_date,
            txn.sell_date,
            txn.buy_price,
            txn.sell_price,
            txn.profit,
            txn.return_percent,
            txn.hold_days()
        )?;
    }

    Ok(())
}
