//! Time-series primitives over [`TimeSeriesTable`](crate::TimeSeriesTable).
//!
//! Modules include:
//! - `infer`: estimate cadence, list source interval lengths, check regularity
//! - `gaps`: find grid points missing from a series
//! - `resample`: aggregate rows into calendar-aligned buckets
//! - `interpolate`: time-weighted filling of interior nulls
//! - `join`: inner join of two tables on the time key
//! - `calendar`: year/month/day/weekday features
/// Calendar feature derivation.
pub mod calendar;
/// Gap detection against a regular grid.
pub mod gaps;
/// Cadence inference and regularity checks.
pub mod infer;
/// Time-weighted interpolation.
pub mod interpolate;
/// Joining tables on the time key.
pub mod join;
/// Bucket aggregation.
pub mod resample;
