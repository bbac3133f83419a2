//! Directional run segmentation.
//!
//! A run is a maximal streak of same-direction daily close moves. Runs
//! shorter than two steps are not counted; a flat day (equal closes) ends
//! the current run and starts nothing, so a run never spans a flat step.

use crate::domain::PriceSeries;
use serde::{Deserialize, Serialize};

/// Minimum number of qualifying steps for a streak to count as a run.
pub const MIN_RUN_LEN: usize = 2;

/// Per-direction run statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    /// Number of qualifying runs.
    pub count: usize,
    /// Sum of qualifying run lengths, in steps.
    pub total_days: usize,
    /// Longest qualifying run seen.
    pub highest: usize,
}

impl RunStats {
    fn record(&mut self, length: usize) {
        if length >= MIN_RUN_LEN {
            self.count += 1;
            self.total_days += length;
            if length > self.highest {
                self.highest = length;
            }
        }
    }
}

/// Up/down run summary for a whole series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub upward: RunStats,
    pub downward: RunStats,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Direction {
    Up,
    Down,
}

/// Segment consecutive close-price steps into directional runs.
///
/// A non-finite close makes both comparisons false, so it behaves like a
/// flat step: it terminates the current run and joins none.
pub fn count_price_runs(series: &PriceSeries) -> RunSummary {
    fn flush(summary: &mut RunSummary, direction: Option<Direction>, length: usize) {
        match direction {
            Some(Direction::Up) => summary.upward.record(length),
            Some(Direction::Down) => summary.downward.record(length),
            None => {}
        }
    }

    let closes = series.closes();
    let mut summary = RunSummary::default();

    let mut direction: Option<Direction> = None;
    let mut length = 0usize;

    for pair in closes.windows(2) {
        let (prev, curr) = (pair[0], pair[1]);
        let step = if curr > prev {
            Some(Direction::Up)
        } else if curr < prev {
            Some(Direction::Down)
        } else {
            None
        };

        match step {
            Some(dir) if direction == Some(dir) => length += 1,
            Some(dir) => {
                flush(&mut summary, direction, length);
                direction = Some(dir);
                length = 1;
            }
            None => {
                flush(&mut summary, direction, length);
                direction = None;
                length = 0;
            }
        }
    }

    // The run still open at the end of the series.
    flush(&mut summary, direction, length);

    summary
}
