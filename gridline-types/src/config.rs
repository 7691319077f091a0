//! Configuration types shared by the pipeline crates.
//!
//! Column names and frequency codes live here rather than in process-wide
//! constants so several pipelines with different schemas can run side by side.

use serde::{Deserialize, Serialize};

use crate::Frequency;

/// Name of the timestamp column every regularized table is keyed on.
pub const DEFAULT_TIME_COLUMN: &str = "time";

/// Reducer applied to the values that fall into one bucket.
///
/// Every aggregator ignores nulls. A bucket whose values are all null (or
/// which received no rows at all) yields null.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum Aggregator {
    /// Arithmetic mean of the non-null values.
    #[default]
    Mean,
    /// Sum of the non-null values.
    Sum,
    /// Smallest non-null value.
    Min,
    /// Largest non-null value.
    Max,
    /// Earliest non-null value in time order.
    First,
    /// Latest non-null value in time order.
    Last,
}

/// Describes where the timestamp and the numeric fields live in an input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Column holding the timestamp, or the interval start for interval-shaped sources.
    pub time: String,
    /// Name the time key carries after reading.
    pub output_time: String,
    /// Column holding the interval end, for `(start, end)` sources.
    pub interval_end: Option<String>,
    /// Numeric field columns. `None` takes every column not otherwise claimed.
    pub fields: Option<Vec<String>>,
    /// Text columns that are read but dropped (station names and such).
    pub ignore: Vec<String>,
}

impl ColumnSpec {
    /// Spec keyed on `time`, keeping every other column as a numeric field.
    pub fn new(time: impl Into<String>) -> Self {
        let time = time.into();
        Self {
            output_time: time.clone(),
            time,
            interval_end: None,
            fields: None,
            ignore: Vec::new(),
        }
    }

    /// Mark the source as interval-shaped with the given end column.
    #[must_use]
    pub fn with_interval_end(mut self, end: impl Into<String>) -> Self {
        self.interval_end = Some(end.into());
        self
    }

    /// Rename the time key after reading.
    #[must_use]
    pub fn rename_time_to(mut self, name: impl Into<String>) -> Self {
        self.output_time = name.into();
        self
    }

    /// Restrict the numeric fields to an explicit list, in output order.
    #[must_use]
    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Drop a text column after reading.
    #[must_use]
    pub fn ignoring(mut self, column: impl Into<String>) -> Self {
        self.ignore.push(column.into());
        self
    }

    /// Half-hourly load data: `start,end,<fields>` with offset-qualified instants.
    #[must_use]
    pub fn electricity() -> Self {
        Self::new("start")
            .with_interval_end("end")
            .rename_time_to(DEFAULT_TIME_COLUMN)
    }

    /// Hourly multi-station weather: `county,station,date,rain,temp`.
    #[must_use]
    pub fn weather() -> Self {
        Self::new("date")
            .rename_time_to(DEFAULT_TIME_COLUMN)
            .with_fields(["rain", "temp"])
            .ignoring("county")
            .ignoring("station")
    }

    /// Output of a previous regularization run, keyed on `time`.
    #[must_use]
    pub fn regularized() -> Self {
        Self::new(DEFAULT_TIME_COLUMN)
    }

    /// True when the given header name is consumed by something other than a field.
    #[must_use]
    pub fn claims(&self, column: &str) -> bool {
        column == self.time
            || self.interval_end.as_deref() == Some(column)
            || self.ignore.iter().any(|c| c == column)
    }
}

impl Default for ColumnSpec {
    fn default() -> Self {
        Self::regularized()
    }
}

/// Settings for one regularization run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegularizeConfig {
    /// Frequency of the output grid.
    pub target: Frequency,
    /// Expected spacing of the raw readings. Estimated from the data when absent.
    pub source_interval: Option<Frequency>,
    /// Optional intermediate stage aggregated before the target stage.
    pub pre_aggregate: Option<Frequency>,
    /// Reducer used at every aggregation stage.
    pub aggregator: Aggregator,
    /// Fill interior nulls after aggregation.
    pub interpolate: bool,
}

impl RegularizeConfig {
    /// Daily mean with interpolation and an estimated source interval.
    #[must_use]
    pub const fn new(target: Frequency) -> Self {
        Self {
            target,
            source_interval: None,
            pre_aggregate: None,
            aggregator: Aggregator::Mean,
            interpolate: true,
        }
    }

    /// Set the expected raw spacing used for gap detection.
    #[must_use]
    pub const fn source_interval(mut self, f: Frequency) -> Self {
        self.source_interval = Some(f);
        self
    }

    /// Aggregate to `f` first, then to the target.
    #[must_use]
    pub const fn pre_aggregate(mut self, f: Frequency) -> Self {
        self.pre_aggregate = Some(f);
        self
    }

    /// Choose the bucket reducer.
    #[must_use]
    pub const fn aggregator(mut self, a: Aggregator) -> Self {
        self.aggregator = a;
        self
    }

    /// Toggle interpolation of interior nulls.
    #[must_use]
    pub const fn interpolate(mut self, yes: bool) -> Self {
        self.interpolate = yes;
        self
    }
}

impl Default for RegularizeConfig {
    fn default() -> Self {
        Self::new(Frequency::DAILY)
    }
}

/// Settings for joining two regularized tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeConfig {
    /// Suffix appended to a left-side field whose name also exists on the right.
    pub left_suffix: String,
    /// Suffix appended to the colliding right-side field.
    pub right_suffix: String,
    /// Append year/month/day/day-of-week/day-type columns.
    pub calendar: bool,
}

impl MergeConfig {
    /// Override the collision suffixes.
    #[must_use]
    pub fn suffixes(mut self, left: impl Into<String>, right: impl Into<String>) -> Self {
        self.left_suffix = left.into();
        self.right_suffix = right.into();
        self
    }

    /// Toggle calendar columns.
    #[must_use]
    pub const fn calendar(mut self, yes: bool) -> Self {
        self.calendar = yes;
        self
    }
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            left_suffix: "_x".into(),
            right_suffix: "_y".into(),
            calendar: true,
        }
    }
}
