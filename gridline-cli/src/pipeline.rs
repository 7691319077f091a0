use std::io::Write;

use gridline::{ColumnSpec, GridError, MergeConfig, Merger, Regularizer};
use gridline_csv::{CsvOptions, read_raw, read_table, write_merged, write_table};

use crate::args::{ElectricityArgs, MergeArgs, WeatherArgs};

/// Read, regularize and write one electricity file. The report goes to `diag`.
///
/// # Errors
/// Any read, parse, configuration or write failure.
pub fn preprocess_electricity(args: &ElectricityArgs, diag: &mut dyn Write) -> Result<(), GridError> {
    let raw = read_raw(&args.input, &ColumnSpec::electricity(), &CsvOptions::default())?;
    let regularizer = Regularizer::builder()
        .target(args.freq)
        .source_interval(args.source_interval)
        .interpolate(!args.no_interpolate)
        .build()?;

    let out = regularizer.regularize(raw);
    write!(diag, "{}", out.report)?;
    write_table(&args.output, &out.table, &CsvOptions::with_precision(args.precision))?;

    tracing::info!(
        input = %args.input.display(),
        output = %args.output.display(),
        rows = out.table.len(),
        "electricity regularized"
    );
    Ok(())
}

/// Read, regularize and write one weather file. The report goes to `diag`.
///
/// # Errors
/// Any read, parse, configuration or write failure.
pub fn preprocess_weather(args: &WeatherArgs, diag: &mut dyn Write) -> Result<(), GridError> {
    let raw = read_raw(&args.input, &ColumnSpec::weather(), &CsvOptions::default())?;
    let mut builder = Regularizer::builder()
        .target(args.freq)
        .pre_aggregate(args.pre_aggregate)
        .interpolate(!args.no_interpolate);
    if let Some(step) = args.source_interval {
        builder = builder.source_interval(step);
    }

    let out = builder.build()?.regularize(raw);
    write!(diag, "{}", out.report)?;
    write_table(&args.output, &out.table, &CsvOptions::with_precision(args.precision))?;

    tracing::info!(
        input = %args.input.display(),
        output = %args.output.display(),
        rows = out.table.len(),
        "weather regularized"
    );
    Ok(())
}

/// Join two regularized files and write the result. The report goes to `diag`.
///
/// # Errors
/// Any read, parse, join or write failure.
pub fn merge_files(args: &MergeArgs, diag: &mut dyn Write) -> Result<(), GridError> {
    let opts = CsvOptions::default();
    let electricity = read_table(&args.electricity, &ColumnSpec::regularized(), &opts)?;
    let weather = read_table(&args.weather, &ColumnSpec::regularized(), &opts)?;

    let merger = Merger::new(MergeConfig::default().calendar(!args.no_calendar));
    let merged = merger.merge(&electricity, &weather)?;
    write!(diag, "{}", merged.report)?;
    write_merged(&args.output, &merged.table, &CsvOptions::with_precision(args.precision))?;

    tracing::info!(output = %args.output.display(), rows = merged.table.len(), "files merged");
    Ok(())
}
