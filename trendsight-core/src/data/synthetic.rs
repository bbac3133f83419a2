//! Synthetic data provider.
//!
//! Seeded random walk over daily bars: close[t] = close[t-1] * (1 + drift
//! + volatility * noise). Deterministic for a given seed, so demos, tests
//! and benchmarks see the same series every run.

use super::provider::{DataError, DataProvider, DataSource, FetchResult, RawBar};
use chrono::{Datelike, NaiveDate, Weekday};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random-walk bar generator.
pub struct SyntheticProvider {
    seed: u64,
    start_price: f64,
    drift: f64,
    volatility: f64,
}

impl SyntheticProvider {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            start_price: 100.0,
            drift: 0.0005,     // ~12% annual
            volatility: 0.012, // ~19% annual
        }
    }

    pub fn with_params(seed: u64, start_price: f64, drift: f64, volatility: f64) -> Self {
        Self {
            seed,
            start_price,
            drift,
            volatility,
        }
    }

    /// Generate `count` consecutive weekday bars starting at `start`.
    pub fn generate_bars(&self, symbol: &str, start: NaiveDate, count: usize) -> Vec<RawBar> {
        // Derive the stream from both seed and symbol so distinct symbols
        // get distinct but reproducible walks.
        let symbol_salt = symbol.bytes().fold(0u64, |acc, b| {
            acc.wrapping_mul(31).wrapping_add(b as u64)
        });
        let mut rng = StdRng::seed_from_u64(self.seed ^ symbol_salt);

        let mut bars = Vec::with_capacity(count);
        let mut close = self.start_price;
        let mut date = start;

        while bars.len() < count {
            if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
                date = date.succ_opt().expect("date overflow");
                continue;
            }

            let noise: f64 = rng.gen_range(-1.0..1.0);
            let open = close;
            close = (close * (1.0 + self.drift + self.volatility * noise)).max(0.01);
            let high = open.max(close) * (1.0 + rng.gen_range(0.0..0.005));
            let low = open.min(close) * (1.0 - rng.gen_range(0.0..0.005));
            let volume = rng.gen_range(100_000..5_000_000);

            bars.push(RawBar {
                date,
                open,
                high,
                low,
                close,
                volume: Some(volume),
            });
            date = date.succ_opt().expect("date overflow");
        }

        bars
    }
}

impl DataProvider for SyntheticProvider {
    fn name(&self) -> &str {
        "synthetic"
    }

    fn fetch(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<FetchResult, DataError> {
        if end < start {
            return Err(DataError::Validation(format!(
                "end {end} is before start {start}"
            )));
        }
        let mut bars = self.generate_bars(symbol, start, 1 + (end - start).num_days() as usize);
        bars.retain(|b| b.date <= end);
        Ok(FetchResult {
            symbol: symbol.to_string(),
            bars,
            source: DataSource::Synthetic,
        })
    }
}
