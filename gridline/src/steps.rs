//! The individual regularization steps.
//!
//! [`crate::Regularizer`] runs these in order; each is public so a caller
//! can run or test one stage alone.

use chrono::{NaiveDateTime, TimeDelta};
use gridline_core::{Frequency, RawSeries, RegularizeConfig, TimeSeriesTable, estimate_step};

/// Collapse an interval-shaped source onto its start instants.
///
/// Returns the start-keyed table and the distinct observed durations. More
/// than one duration is a data-quality finding, not an error.
#[must_use]
pub fn collapse_intervals(raw: RawSeries) -> (TimeSeriesTable, Vec<TimeDelta>) {
    let intervals = raw.distinct_intervals();
    #[cfg(feature = "tracing")]
    {
        if intervals.len() > 1 {
            tracing::warn!(
                target: "gridline::regularize",
                distinct = intervals.len(),
                "source intervals are not uniform"
            );
        }
    }
    (raw.into_table(), intervals)
}

/// Scan for missing grid points at the source spacing.
///
/// With no configured interval the spacing is estimated from the data; if
/// that is impossible (fewer than two distinct timestamps, or a spacing that
/// is no whole number of minutes) the scan is skipped.
#[must_use]
pub fn scan_gaps(
    table: &TimeSeriesTable,
    source_interval: Option<Frequency>,
) -> (Option<Frequency>, Vec<NaiveDateTime>) {
    let step = source_interval
        .or_else(|| estimate_step(table.timestamps()).and_then(Frequency::from_step));
    let Some(step) = step else {
        return (None, Vec::new());
    };
    let missing = table.detect_gaps(step);
    #[cfg(feature = "tracing")]
    {
        if !missing.is_empty() {
            tracing::warn!(
                target: "gridline::regularize",
                step = %step,
                missing = missing.len(),
                "source has missing timestamps"
            );
        }
    }
    (Some(step), missing)
}

/// Aggregate to the optional intermediate stage, then to the target.
#[must_use]
pub fn aggregate(table: &TimeSeriesTable, config: &RegularizeConfig) -> TimeSeriesTable {
    let staged = match config.pre_aggregate {
        Some(stage) => table.group_by_bucket(stage, config.aggregator),
        None => table.sort_by_time(),
    };
    staged.group_by_bucket(config.target, config.aggregator)
}

/// Rows holding at least one null.
#[must_use]
pub fn missing_values(table: &TimeSeriesTable) -> TimeSeriesTable {
    let nulls = table.rows_with_nulls();
    #[cfg(feature = "tracing")]
    {
        if !nulls.is_empty() {
            tracing::warn!(
                target: "gridline::regularize",
                rows = nulls.len(),
                "aggregated table has missing values"
            );
        }
    }
    nulls
}

/// Interpolate interior nulls across every field when `enabled`.
#[must_use]
pub fn fill_interior(table: TimeSeriesTable, enabled: bool) -> TimeSeriesTable {
    if enabled { table.interpolate_all() } else { table }
}
