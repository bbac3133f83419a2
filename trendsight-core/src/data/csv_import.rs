//! CSV data provider.
//!
//! Offline fallback to Yahoo Finance: reads `<dir>/<SYMBOL>.csv` with a
//! `Date,Open,High,Low,Close,Volume` header. Dates are `YYYY-MM-DD`;
//! Volume may be blank.

use super::provider::{DataError, DataProvider, DataSource, FetchResult, RawBar};
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Date")]
    date: NaiveDate,
    #[serde(rename = "Open")]
    open: f64,
    #[serde(rename = "High")]
    high: f64,
    #[serde(rename = "Low")]
    low: f64,
    #[serde(rename = "Close")]
    close: f64,
    #[serde(rename = "Volume")]
    volume: Option<u64>,
}

/// Per-symbol CSV file provider.
pub struct CsvProvider {
    dir: PathBuf,
}

impl CsvProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn symbol_path(&self, symbol: &str) -> PathBuf {
        self.dir.join(format!("{symbol}.csv"))
    }

    fn read_file(path: &Path, symbol: &str) -> Result<Vec<RawBar>, DataError> {
        let mut reader = csv::Reader::from_path(path).map_err(|e| {
            if e.is_io_error() {
                DataError::SymbolNotFound {
                    symbol: symbol.to_string(),
                }
            } else {
                DataError::Import(e.to_string())
            }
        })?;

        let mut bars = Vec::new();
        for record in reader.deserialize::<CsvRow>() {
            let row = record.map_err(|e| DataError::Import(format!("{}: {e}", path.display())))?;
            bars.push(RawBar {
                date: row.date,
                open: row.open,
                high: row.high,
                low: row.low,
                close: row.close,
                volume: row.volume,
            });
        }
        Ok(bars)
    }
}

impl DataProvider for CsvProvider {
    fn name(&self) -> &str {
        "csv_import"
    }

    fn fetch(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<FetchResult, DataError> {
        let path = self.symbol_path(symbol);
        let mut bars = Self::read_file(&path, symbol)?;
        bars.retain(|b| b.date >= start && b.date <= end);
        if bars.is_empty() {
            return Err(DataError::Validation(format!(
                "{symbol}: no rows in range {start}..={end}"
            )));
        }
        Ok(FetchResult {
            symbol: symbol.to_string(),
            bars,
            source: DataSource::CsvImport,
        })
    }
}
