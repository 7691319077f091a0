use std::fs::File;
use std::io;
use std::path::Path;

use chrono::Timelike;
use csv::Writer;
use gridline_core::{CALENDAR_COLUMNS, CalendarFields, GridError, MergedTable, TimeSeriesTable};

use crate::CsvOptions;
use crate::csv_error;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Date-only when every timestamp falls on midnight.
fn time_format(table: &TimeSeriesTable) -> &'static str {
    let all_midnight = table
        .timestamps()
        .all(|ts| ts.num_seconds_from_midnight() == 0 && ts.nanosecond() == 0);
    if all_midnight { DATE_FORMAT } else { DATETIME_FORMAT }
}

fn format_value(v: Option<f64>, precision: usize) -> String {
    v.map_or_else(String::new, |x| format!("{x:.precision$}"))
}

fn write_rows<W: io::Write>(
    out: &mut Writer<W>,
    table: &TimeSeriesTable,
    calendar: Option<&[CalendarFields]>,
    opts: &CsvOptions,
) -> Result<(), GridError> {
    let mut header: Vec<&str> = Vec::with_capacity(1 + table.fields().len() + CALENDAR_COLUMNS.len());
    header.push(table.time_column());
    header.extend(table.fields().iter().map(String::as_str));
    if calendar.is_some() {
        header.extend(CALENDAR_COLUMNS);
    }
    out.write_record(&header).map_err(csv_error)?;

    let fmt = time_format(table);
    let mut record: Vec<String> = Vec::with_capacity(header.len());
    for (i, row) in table.rows().iter().enumerate() {
        record.clear();
        record.push(row.ts.format(fmt).to_string());
        record.extend(row.values.iter().map(|v| format_value(*v, opts.precision)));
        if let Some(c) = calendar.and_then(|c| c.get(i)) {
            record.push(c.year.to_string());
            record.push(c.month.to_string());
            record.push(c.day.to_string());
            record.push(c.day_of_week.to_string());
            record.push(c.day_type.as_str().to_string());
        }
        out.write_record(&record).map_err(csv_error)?;
    }
    out.flush()?;

    #[cfg(feature = "tracing")]
    tracing::debug!(target: "gridline::csv", rows = table.len(), "wrote csv");
    Ok(())
}

fn writer_for<W: io::Write>(writer: W, opts: &CsvOptions) -> Writer<W> {
    csv::WriterBuilder::new()
        .delimiter(opts.delimiter)
        .from_writer(writer)
}

fn create(path: &Path) -> Result<File, GridError> {
    File::create(path).map_err(|e| GridError::Io(format!("{}: {e}", path.display())))
}

/// Write a merged table, calendar columns last, to any writer.
///
/// Timestamps are written as `YYYY-MM-DD` when every row is at midnight and
/// as `YYYY-MM-DD HH:MM:SS` otherwise. Numbers use `opts.precision` decimal
/// places; nulls are empty cells.
///
/// # Errors
/// `GridError::Csv` or `GridError::Io` if writing fails.
pub fn write_merged_to<W: io::Write>(
    writer: W,
    merged: &MergedTable,
    opts: &CsvOptions,
) -> Result<(), GridError> {
    let mut out = writer_for(writer, opts);
    write_rows(&mut out, merged.table(), merged.calendar(), opts)
}

/// Write a table to any writer. See [`write_merged_to`] for the format.
///
/// # Errors
/// `GridError::Csv` or `GridError::Io` if writing fails.
pub fn write_table_to<W: io::Write>(
    writer: W,
    table: &TimeSeriesTable,
    opts: &CsvOptions,
) -> Result<(), GridError> {
    let mut out = writer_for(writer, opts);
    write_rows(&mut out, table, None, opts)
}

/// Write a table to a file, replacing it.
///
/// # Errors
/// `GridError::Io` if the file cannot be created, else as [`write_table_to`].
pub fn write_table(
    path: impl AsRef<Path>,
    table: &TimeSeriesTable,
    opts: &CsvOptions,
) -> Result<(), GridError> {
    write_table_to(create(path.as_ref())?, table, opts)
}

/// Write a merged table to a file, replacing it.
///
/// # Errors
/// `GridError::Io` if the file cannot be created, else as [`write_merged_to`].
pub fn write_merged(
    path: impl AsRef<Path>,
    merged: &MergedTable,
    opts: &CsvOptions,
) -> Result<(), GridError> {
    write_merged_to(create(path.as_ref())?, merged, opts)
}
