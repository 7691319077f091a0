//! Unregularized input as it comes off a reader.

use chrono::{DateTime, FixedOffset, TimeDelta};

use crate::table::TimeSeriesTable;
use crate::timeseries::infer::distinct_intervals;

/// Offset-aware `(start, end)` of one interval-shaped reading.
pub type IntervalBounds = (DateTime<FixedOffset>, DateTime<FixedOffset>);

/// A raw series: the table keyed on naive local time, plus the original
/// interval bounds when the source carried an end column.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSeries {
    /// Rows keyed on the interval start (or the only timestamp).
    pub table: TimeSeriesTable,
    /// One entry per row for interval-shaped sources.
    pub intervals: Option<Vec<IntervalBounds>>,
}

impl RawSeries {
    /// A point-in-time series with no interval bounds.
    #[must_use]
    pub const fn points(table: TimeSeriesTable) -> Self {
        Self {
            table,
            intervals: None,
        }
    }

    /// An interval-shaped series.
    #[must_use]
    pub const fn with_intervals(table: TimeSeriesTable, intervals: Vec<IntervalBounds>) -> Self {
        Self {
            table,
            intervals: Some(intervals),
        }
    }

    /// Distinct `end - start` durations in first-seen order; empty for point series.
    #[must_use]
    pub fn distinct_intervals(&self) -> Vec<TimeDelta> {
        self.intervals
            .as_deref()
            .map(|iv| distinct_intervals(iv.iter().copied()))
            .unwrap_or_default()
    }

    /// Drop the interval bounds and keep the start-keyed table.
    #[must_use]
    pub fn into_table(self) -> TimeSeriesTable {
        self.table
    }
}

impl From<TimeSeriesTable> for RawSeries {
    fn from(table: TimeSeriesTable) -> Self {
        Self::points(table)
    }
}
