//! The in-memory table every pipeline step consumes and produces.

use std::collections::HashSet;

use chrono::NaiveDateTime;
use gridline_types::{Aggregator, Frequency, GridError};

use crate::timeseries::{gaps, interpolate, resample};

/// One observation: a timestamp and a value per table field.
///
/// `values` is aligned with [`TimeSeriesTable::fields`]; `None` is a missing
/// reading, which is distinct from a reading of zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Naive local timestamp.
    pub ts: NaiveDateTime,
    /// One entry per field.
    pub values: Vec<Option<f64>>,
}

impl Row {
    /// Build a row.
    #[must_use]
    pub const fn new(ts: NaiveDateTime, values: Vec<Option<f64>>) -> Self {
        Self { ts, values }
    }

    /// True if any field is missing.
    #[must_use]
    pub fn has_null(&self) -> bool {
        self.values.iter().any(Option::is_none)
    }
}

/// An ordered table keyed by a timestamp column.
///
/// Every transforming method takes `&self` and returns a new table; nothing
/// mutates a table after construction except [`TimeSeriesTable::push`],
/// which readers use while building one.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeriesTable {
    time_column: String,
    fields: Vec<String>,
    rows: Vec<Row>,
}

impl TimeSeriesTable {
    /// Create an empty table.
    ///
    /// # Errors
    /// Returns `Err(GridError::InvalidArg)` if a field name is repeated or
    /// equals the time column name.
    pub fn new(time_column: impl Into<String>, fields: Vec<String>) -> Result<Self, GridError> {
        let time_column = time_column.into();
        let mut seen: HashSet<&str> = HashSet::with_capacity(fields.len() + 1);
        seen.insert(time_column.as_str());
        for f in &fields {
            if !seen.insert(f.as_str()) {
                return Err(GridError::InvalidArg(format!(
                    "duplicate column name `{f}`"
                )));
            }
        }
        Ok(Self {
            time_column,
            fields,
            rows: Vec::new(),
        })
    }

    /// Create a table from prepared rows.
    ///
    /// # Errors
    /// Same as [`TimeSeriesTable::new`], plus `Err(GridError::Data)` when a
    /// row's width differs from the number of fields.
    pub fn from_rows(
        time_column: impl Into<String>,
        fields: Vec<String>,
        rows: Vec<Row>,
    ) -> Result<Self, GridError> {
        let mut table = Self::new(time_column, fields)?;
        table.rows.reserve(rows.len());
        for r in rows {
            table.push(r)?;
        }
        Ok(table)
    }

    /// Append a row.
    ///
    /// # Errors
    /// Returns `Err(GridError::Data)` when the row width is wrong.
    pub fn push(&mut self, row: Row) -> Result<(), GridError> {
        if row.values.len() != self.fields.len() {
            return Err(GridError::Data(format!(
                "row at {} has {} values, table has {} fields",
                row.ts,
                row.values.len(),
                self.fields.len()
            )));
        }
        self.rows.push(row);
        Ok(())
    }

    /// An empty table with the same columns.
    #[must_use]
    pub fn empty_like(&self) -> Self {
        Self {
            time_column: self.time_column.clone(),
            fields: self.fields.clone(),
            rows: Vec::new(),
        }
    }

    pub(crate) fn with_rows(&self, rows: Vec<Row>) -> Self {
        Self {
            time_column: self.time_column.clone(),
            fields: self.fields.clone(),
            rows,
        }
    }

    /// Name of the timestamp column.
    #[must_use]
    pub fn time_column(&self) -> &str {
        &self.time_column
    }

    /// Field names in column order.
    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Rows in table order.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Consume the table and return its rows.
    #[must_use]
    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Timestamps in table order.
    pub fn timestamps(&self) -> impl Iterator<Item = NaiveDateTime> + '_ {
        self.rows.iter().map(|r| r.ts)
    }

    /// Position of a field.
    ///
    /// # Errors
    /// Returns `Err(GridError::UnknownField)` if no such field exists.
    pub fn field_index(&self, name: &str) -> Result<usize, GridError> {
        self.fields
            .iter()
            .position(|f| f == name)
            .ok_or_else(|| GridError::unknown_field(name))
    }

    /// All values of one field in table order.
    ///
    /// # Errors
    /// Returns `Err(GridError::UnknownField)` if no such field exists.
    pub fn column(&self, name: &str) -> Result<Vec<Option<f64>>, GridError> {
        let idx = self.field_index(name)?;
        Ok(self.rows.iter().map(|r| r.values[idx]).collect())
    }

    /// Rename the time key.
    ///
    /// # Errors
    /// Returns `Err(GridError::InvalidArg)` if the new name collides with a field.
    pub fn rename_time_column(self, name: impl Into<String>) -> Result<Self, GridError> {
        let name = name.into();
        if self.fields.iter().any(|f| *f == name) {
            return Err(GridError::InvalidArg(format!(
                "time column `{name}` collides with a field"
            )));
        }
        Ok(Self {
            time_column: name,
            ..self
        })
    }

    /// Keep only the named fields, in the given order.
    ///
    /// # Errors
    /// Returns `Err(GridError::UnknownField)` for a name not in the table.
    pub fn select(&self, names: &[&str]) -> Result<Self, GridError> {
        let idx: Vec<usize> = names
            .iter()
            .map(|n| self.field_index(n))
            .collect::<Result<_, _>>()?;
        let rows = self
            .rows
            .iter()
            .map(|r| Row::new(r.ts, idx.iter().map(|&i| r.values[i]).collect()))
            .collect();
        Self::from_rows(
            self.time_column.clone(),
            names.iter().map(|s| (*s).to_string()).collect(),
            rows,
        )
    }

    /// Rows ordered by ascending timestamp. Ties keep their input order.
    #[must_use]
    pub fn sort_by_time(&self) -> Self {
        let mut rows = self.rows.clone();
        rows.sort_by_key(|r| r.ts);
        self.with_rows(rows)
    }

    /// True if timestamps strictly increase.
    #[must_use]
    pub fn is_strictly_increasing(&self) -> bool {
        self.rows.windows(2).all(|w| w[0].ts < w[1].ts)
    }

    /// The subset of rows that contain at least one null field.
    #[must_use]
    pub fn rows_with_nulls(&self) -> Self {
        self.with_rows(self.rows.iter().filter(|r| r.has_null()).cloned().collect())
    }

    /// Grid points absent from the table at the given spacing.
    ///
    /// See [`gaps::detect_gaps`].
    #[must_use]
    pub fn detect_gaps(&self, interval: Frequency) -> Vec<NaiveDateTime> {
        gaps::detect_gaps(self.timestamps(), interval)
    }

    /// Aggregate into calendar-aligned buckets.
    ///
    /// See [`resample::group_by_bucket`].
    #[must_use]
    pub fn group_by_bucket(&self, frequency: Frequency, aggregator: Aggregator) -> Self {
        resample::group_by_bucket(self, frequency, aggregator)
    }

    /// Fill interior nulls of the named fields by time-weighted interpolation.
    ///
    /// # Errors
    /// Returns `Err(GridError::UnknownField)` for a name not in the table.
    pub fn interpolate_by_time(&self, fields: &[&str]) -> Result<Self, GridError> {
        interpolate::interpolate_by_time(self, fields)
    }

    /// Interpolate every field.
    #[must_use]
    pub fn interpolate_all(&self) -> Self {
        interpolate::interpolate_columns(self, &(0..self.fields.len()).collect::<Vec<_>>())
    }
}
