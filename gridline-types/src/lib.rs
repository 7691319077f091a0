//! Gridline-specific error, frequency, and configuration primitives.
#![warn(missing_docs)]

mod calendar;
mod config;
mod error;
mod frequency;

pub use calendar::DayType;
pub use config::{Aggregator, ColumnSpec, DEFAULT_TIME_COLUMN, MergeConfig, RegularizeConfig};
pub use error::GridError;
pub use frequency::Frequency;
