//! Diagnostic reports produced alongside every output table.
//!
//! Reports never affect the data; they describe what the pipeline found so a
//! driver can print it.

use std::fmt;

use chrono::{NaiveDateTime, TimeDelta};
use gridline_core::{Frequency, TimeSeriesTable};

/// Findings from one regularization run.
#[derive(Debug, Clone, PartialEq)]
pub struct RegularizeReport {
    /// Source spacing used for the gap scan, configured or estimated.
    /// `None` when the input had too few rows to estimate one.
    pub source_step: Option<Frequency>,
    /// Distinct `end - start` durations of an interval-shaped source.
    pub intervals: Vec<TimeDelta>,
    /// Grid points absent from the raw input.
    pub missing_times: Vec<NaiveDateTime>,
    /// Rows of the aggregated table holding a null, taken before interpolation.
    pub missing_values: TimeSeriesTable,
}

impl RegularizeReport {
    /// True when the source reported more than one interval length.
    #[must_use]
    pub fn has_uneven_intervals(&self) -> bool {
        self.intervals.len() > 1
    }

    /// True when nothing worth a warning was found.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.missing_times.is_empty()
            && self.missing_values.is_empty()
            && !self.has_uneven_intervals()
    }
}

impl fmt::Display for RegularizeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.source_step {
            Some(step) => writeln!(f, "source step: {step}")?,
            None => writeln!(f, "source step: unknown")?,
        }
        writeln!(f, "missing timestamps ({}):", self.missing_times.len())?;
        for ts in &self.missing_times {
            writeln!(f, "  {ts}")?;
        }
        if !self.intervals.is_empty() {
            let list: Vec<String> = self.intervals.iter().map(|d| format_duration(*d)).collect();
            writeln!(f, "distinct source intervals: {}", list.join(", "))?;
        }
        writeln!(f, "rows with missing values ({}):", self.missing_values.len())?;
        if !self.missing_values.is_empty() {
            f.write_str(&markdown_table(&self.missing_values))?;
        }
        Ok(())
    }
}

/// Findings from one merge run.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeReport {
    /// Rows in the left input.
    pub left_rows: usize,
    /// Rows in the right input.
    pub right_rows: usize,
    /// Rows kept by the join.
    pub joined_rows: usize,
    /// Joined rows that still hold a null.
    pub missing_values: TimeSeriesTable,
}

impl MergeReport {
    /// Rows of the larger input that found no partner.
    #[must_use]
    pub fn dropped_rows(&self) -> usize {
        self.left_rows.max(self.right_rows) - self.joined_rows
    }
}

impl fmt::Display for MergeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "joined {} rows (left {}, right {})",
            self.joined_rows, self.left_rows, self.right_rows
        )?;
        writeln!(f, "rows with missing values ({}):", self.missing_values.len())?;
        if !self.missing_values.is_empty() {
            f.write_str(&markdown_table(&self.missing_values))?;
        }
        Ok(())
    }
}

/// Short code for a duration: a frequency code such as `30min` when one
/// matches, else whole seconds.
#[must_use]
pub fn format_duration(d: TimeDelta) -> String {
    Frequency::from_step(d).map_or_else(|| format!("{}s", d.num_seconds()), Frequency::code)
}

/// Render a table as a GitHub-flavoured Markdown table. Nulls print as `null`.
///
/// ```
/// use chrono::NaiveDate;
/// use gridline::{markdown_table, Row, TimeSeriesTable};
///
/// let ts = NaiveDate::from_ymd_opt(2015, 1, 2).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let t = TimeSeriesTable::from_rows("time", vec!["load".into()],
///     vec![Row::new(ts, vec![None])]).unwrap();
/// let md = markdown_table(&t);
/// assert!(md.starts_with("| time | load |\n"));
/// assert!(md.contains("| 2015-01-02 00:00:00 | null |"));
/// ```
#[must_use]
pub fn markdown_table(table: &TimeSeriesTable) -> String {
    let mut out = String::new();
    out.push_str("| ");
    out.push_str(table.time_column());
    for field in table.fields() {
        out.push_str(" | ");
        out.push_str(field);
    }
    out.push_str(" |\n|:--");
    for _ in table.fields() {
        out.push_str("|--:");
    }
    out.push_str("|\n");
    for row in table.rows() {
        out.push_str("| ");
        out.push_str(&row.ts.to_string());
        for v in &row.values {
            out.push_str(" | ");
            match v {
                Some(x) => out.push_str(&x.to_string()),
                None => out.push_str("null"),
            }
        }
        out.push_str(" |\n");
    }
    out
}
