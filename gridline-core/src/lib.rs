//! gridline-core
//!
//! The table type and the pure primitives the regularization pipeline is built
//! from.
//!
//! - `table`: [`TimeSeriesTable`], an ordered table keyed by a timestamp.
//! - `raw`: [`RawSeries`], reader output before regularization.
//! - `timestamp`: parsing with timezone stripping.
//! - `timeseries`: gap scan, bucket aggregation, interpolation, joins, and
//!   calendar features.
//!
//! Every operation is synchronous and returns a new value; none of them
//! touches shared state, so steps compose and test in isolation.
#![warn(missing_docs)]

pub mod raw;
pub mod table;
/// Time-series primitives.
pub mod timeseries;
pub mod timestamp;

pub use gridline_types::{
    Aggregator, ColumnSpec, DEFAULT_TIME_COLUMN, DayType, Frequency, GridError, MergeConfig,
    RegularizeConfig,
};
pub use raw::{IntervalBounds, RawSeries};
pub use table::{Row, TimeSeriesTable};
pub use timeseries::calendar::{
    CALENDAR_COLUMNS, CalendarFields, MergedTable, derive_calendar_fields,
};
pub use timeseries::gaps::detect_gaps;
pub use timeseries::infer::{distinct_intervals, estimate_step, is_regular};
pub use timeseries::interpolate::interpolate_by_time;
pub use timeseries::join::inner_join;
pub use timeseries::resample::group_by_bucket;
pub use timestamp::{ParsedTimestamp, TimestampParser, parse_timestamp};
