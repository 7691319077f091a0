use std::path::PathBuf;

use clap::Parser;
use gridline::Frequency;

/// Regularize half-hourly electricity readings to a daily series.
#[derive(Debug, Clone, Parser)]
#[command(name = "preprocess-electricity", version)]
pub struct ElectricityArgs {
    /// CSV with columns `start,end,<fields>`.
    pub input: PathBuf,
    /// Where to write the regularized CSV.
    pub output: PathBuf,
    /// Output frequency, e.g. `1D`, `1W`, `1h`.
    #[arg(long, default_value = "1D")]
    pub freq: Frequency,
    /// Expected spacing of the raw readings.
    #[arg(long = "source-interval", default_value = "30min")]
    pub source_interval: Frequency,
    /// Decimal places in the output.
    #[arg(long, default_value_t = 0)]
    pub precision: usize,
    /// Leave interior nulls unfilled.
    #[arg(long = "no-interpolate")]
    pub no_interpolate: bool,
}

/// Regularize hourly multi-station weather readings to a daily series.
#[derive(Debug, Clone, Parser)]
#[command(name = "preprocess-weather", version)]
pub struct WeatherArgs {
    /// CSV with columns `county,station,date,rain,temp`.
    pub input: PathBuf,
    /// Where to write the regularized CSV.
    pub output: PathBuf,
    /// Output frequency.
    #[arg(long, default_value = "1D")]
    pub freq: Frequency,
    /// Stage that averages stations reporting for the same instant.
    #[arg(long = "pre-aggregate", default_value = "1h")]
    pub pre_aggregate: Frequency,
    /// Expected spacing of the raw readings. Estimated when omitted.
    #[arg(long = "source-interval")]
    pub source_interval: Option<Frequency>,
    /// Decimal places in the output.
    #[arg(long, default_value_t = 1)]
    pub precision: usize,
    /// Leave interior nulls unfilled.
    #[arg(long = "no-interpolate")]
    pub no_interpolate: bool,
}

/// Join regularized electricity and weather series on `time`.
#[derive(Debug, Clone, Parser)]
#[command(name = "merge-file", version)]
pub struct MergeArgs {
    /// Regularized electricity CSV.
    pub electricity: PathBuf,
    /// Regularized weather CSV.
    pub weather: PathBuf,
    /// Where to write the merged CSV.
    pub output: PathBuf,
    /// Decimal places in the output.
    #[arg(long, default_value_t = 1)]
    pub precision: usize,
    /// Skip the calendar columns.
    #[arg(long = "no-calendar")]
    pub no_calendar: bool,
}

/// Usage text printed when positional arguments are missing or extra.
pub const ELECTRICITY_USAGE: &str = "\
usage: preprocess-electricity INPUT OUTPUT [--freq 1D] [--source-interval 30min]

INPUT is a CSV with columns start,end,<fields>; start and end may carry UTC offsets.";

/// Usage text for `preprocess-weather`.
pub const WEATHER_USAGE: &str = "\
usage: preprocess-weather INPUT OUTPUT [--freq 1D]

INPUT is a CSV with columns county,station,date,rain,temp; blank cells are missing values.";

/// Usage text for `merge-file`.
pub const MERGE_USAGE: &str = "\
usage: merge-file ELECTRICITY WEATHER OUTPUT

ELECTRICITY and WEATHER are regularized CSVs keyed on a `time` column.";
