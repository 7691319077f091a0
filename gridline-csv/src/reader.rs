use std::fs::File;
use std::io;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use gridline_core::{
    ColumnSpec, GridError, IntervalBounds, RawSeries, Row, TimeSeriesTable, TimestampParser,
};

use crate::CsvOptions;
use crate::csv_error;

/// Header positions resolved against a [`ColumnSpec`].
struct Layout {
    time: usize,
    end: Option<usize>,
    fields: Vec<(usize, String)>,
}

impl Layout {
    fn resolve(headers: &StringRecord, spec: &ColumnSpec) -> Result<Self, GridError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| GridError::missing_column(name))
        };
        let time = find(&spec.time)?;
        let end = spec.interval_end.as_deref().map(find).transpose()?;
        let fields = match &spec.fields {
            Some(names) => names
                .iter()
                .map(|n| find(n).map(|i| (i, n.clone())))
                .collect::<Result<_, _>>()?,
            None => headers
                .iter()
                .enumerate()
                .filter(|(_, h)| !spec.claims(h))
                .map(|(i, h)| (i, h.to_string()))
                .collect(),
        };
        Ok(Self { time, end, fields })
    }
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map_or(0, csv::Position::line)
}

fn parse_value(
    cell: &str,
    column: &str,
    line: u64,
    opts: &CsvOptions,
) -> Result<Option<f64>, GridError> {
    if opts.is_na(cell) {
        return Ok(None);
    }
    let v: f64 = cell.trim().parse().map_err(|e: std::num::ParseFloatError| {
        GridError::parse(format!("number in column `{column}` at line {line}"), cell, e.to_string())
    })?;
    Ok(if v.is_nan() { None } else { Some(v) })
}

/// Read a raw series from any reader.
///
/// The time column is parsed with offsets stripped and renamed to
/// `spec.output_time`. With `spec.interval_end` set, the end column is parsed
/// too and the offset-aware bounds are kept in the result.
///
/// # Errors
/// - `GridError::MissingColumn` when a named column is absent.
/// - `GridError::Parse` for a bad timestamp or number, naming column and line.
/// - `GridError::Csv` for malformed CSV.
pub fn read_raw_from<R: io::Read>(
    reader: R,
    spec: &ColumnSpec,
    opts: &CsvOptions,
) -> Result<RawSeries, GridError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .delimiter(opts.delimiter)
        .from_reader(reader);

    let headers = rdr.headers().map_err(csv_error)?.clone();
    let layout = Layout::resolve(&headers, spec)?;

    let parser = opts
        .timestamp_formats
        .iter()
        .fold(TimestampParser::new(), |p, f| p.with_format(f.clone()));
    let parse_ts = |cell: &str, column: &str, line: u64| {
        parser.parse(cell).map_err(|e| match e {
            GridError::Parse { value, reason, .. } => GridError::parse(
                format!("timestamp in column `{column}` at line {line}"),
                value,
                reason,
            ),
            other => other,
        })
    };

    let field_names: Vec<String> = layout.fields.iter().map(|(_, n)| n.clone()).collect();
    let mut table = TimeSeriesTable::new(spec.output_time.clone(), field_names)?;
    let mut bounds: Vec<IntervalBounds> = Vec::new();

    for result in rdr.records() {
        let record = result.map_err(csv_error)?;
        let line = line_of(&record);
        let cell = |i: usize| record.get(i).unwrap_or("");

        let start = parse_ts(cell(layout.time), &spec.time, line)?;
        if let (Some(end_idx), Some(end_name)) = (layout.end, spec.interval_end.as_deref()) {
            let end = parse_ts(cell(end_idx), end_name, line)?;
            bounds.push((start.instant(), end.instant()));
        }

        let values = layout
            .fields
            .iter()
            .map(|(i, name)| parse_value(cell(*i), name, line, opts))
            .collect::<Result<Vec<_>, _>>()?;
        table.push(Row::new(start.local, values))?;
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        target: "gridline::csv",
        rows = table.len(),
        fields = table.fields().len(),
        "read csv"
    );

    Ok(if layout.end.is_some() {
        RawSeries::with_intervals(table, bounds)
    } else {
        RawSeries::points(table)
    })
}

/// Read a raw series from a file. See [`read_raw_from`].
///
/// # Errors
/// `GridError::Io` if the file cannot be opened, else as [`read_raw_from`].
pub fn read_raw(
    path: impl AsRef<Path>,
    spec: &ColumnSpec,
    opts: &CsvOptions,
) -> Result<RawSeries, GridError> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| GridError::Io(format!("{}: {e}", path.display())))?;
    read_raw_from(file, spec, opts)
}

/// Read a table from any reader, dropping interval bounds.
///
/// # Errors
/// As [`read_raw_from`].
pub fn read_table_from<R: io::Read>(
    reader: R,
    spec: &ColumnSpec,
    opts: &CsvOptions,
) -> Result<TimeSeriesTable, GridError> {
    read_raw_from(reader, spec, opts).map(RawSeries::into_table)
}

/// Read a table from a file, dropping interval bounds.
///
/// # Errors
/// As [`read_raw`].
pub fn read_table(
    path: impl AsRef<Path>,
    spec: &ColumnSpec,
    opts: &CsvOptions,
) -> Result<TimeSeriesTable, GridError> {
    read_raw(path, spec, opts).map(RawSeries::into_table)
}
