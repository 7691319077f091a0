//! Gridline turns irregular meter and weather readings into regular series
//! and joins them on a shared time key.
//!
//! Overview
//! - [`Regularizer`] takes one raw series (possibly interval-shaped, with
//!   offsets, duplicates and gaps) to a gap-free calendar grid.
//! - [`Merger`] inner-joins two regularized series and adds calendar
//!   features (year, month, day, day of week, weekday/weekend).
//! - Every run returns a report next to the data. Gaps, nulls and uneven
//!   source intervals are findings, never errors.
//!
//! Key behaviors
//! - Buckets are left-closed and aligned to midnight of the first day, or to
//!   Monday for weekly grids. Every bucket between the first and last
//!   observation is emitted; empty ones are null until interpolation.
//! - Interpolation weights by elapsed time and fills interior nulls only.
//!   Leading and trailing nulls stay null.
//! - The join keeps the intersection of timestamps. The first of several
//!   duplicate timestamps wins.
//!
//! Example
//! ```
//! use chrono::{NaiveDate, TimeDelta};
//! use gridline::{Frequency, Merger, Regularizer, Row, TimeSeriesTable};
//!
//! let t0 = NaiveDate::from_ymd_opt(2015, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! // Three days of half-hourly load with the whole second day missing.
//! let rows = (0..144)
//!     .filter(|i| !(48..96).contains(i))
//!     .map(|i| Row::new(t0 + TimeDelta::minutes(30 * i), vec![Some(100.0)]))
//!     .collect();
//! let raw = TimeSeriesTable::from_rows("time", vec!["load".into()], rows).unwrap();
//!
//! let regularizer = Regularizer::builder()
//!     .source_interval(Frequency::HALF_HOURLY)
//!     .build()
//!     .unwrap();
//! let out = regularizer.regularize(raw);
//! assert_eq!(out.table.len(), 3);
//! assert_eq!(out.report.missing_times.len(), 48);
//! assert_eq!(out.table.column("load").unwrap()[1], Some(100.0));
//!
//! let merged = Merger::default().merge(&out.table, &out.table.clone()).unwrap();
//! assert_eq!(merged.table.len(), 3);
//! ```
#![warn(missing_docs)]

pub(crate) mod core;
mod merge;
mod report;
pub mod steps;

pub use crate::core::{Regularized, Regularizer, RegularizerBuilder};
pub use merge::{Merged, Merger};
pub use report::{MergeReport, RegularizeReport, format_duration, markdown_table};

// Re-export core types for convenience
pub use gridline_core::{
    Aggregator, CALENDAR_COLUMNS, CalendarFields, ColumnSpec, DEFAULT_TIME_COLUMN, DayType,
    Frequency, GridError, IntervalBounds, MergeConfig, MergedTable, RawSeries, RegularizeConfig,
    Row, TimeSeriesTable,
};
