//! Shared plumbing for the `preprocess-electricity`, `preprocess-weather` and
//! `merge-file` binaries.
//!
//! Each binary parses its arguments, runs one pipeline from [`pipeline`], and
//! writes diagnostics to stderr. Set `RUST_LOG` (for example
//! `RUST_LOG=gridline=debug`) to see step-level logs.
#![warn(missing_docs)]

use std::process::ExitCode;

use clap::Parser;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use gridline::GridError;
use tracing_subscriber::EnvFilter;

pub mod args;
pub mod pipeline;

pub use args::{ELECTRICITY_USAGE, ElectricityArgs, MERGE_USAGE, MergeArgs, WEATHER_USAGE, WeatherArgs};

/// Install a stderr `fmt` subscriber filtered by `RUST_LOG`, `error` by default.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Parse arguments, or decide how to exit.
///
/// A wrong number of positional arguments prints `usage` to stderr and
/// exits cleanly without doing any work. An invalid option value or an
/// unknown flag is an error. `--help` and `--version` print as usual.
///
/// # Errors
/// Returns the exit code the binary should end with when parsing did not
/// produce arguments.
pub fn parse_or_exit<A: Parser>(usage: &str) -> Result<A, ExitCode> {
    A::try_parse().map_err(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = e.print();
            ExitCode::SUCCESS
        }
        ErrorKind::InvalidValue | ErrorKind::ValueValidation => {
            let _ = e.print();
            ExitCode::from(2)
        }
        ErrorKind::UnknownArgument if is_unknown_flag(&e) => {
            let _ = e.print();
            ExitCode::from(2)
        }
        _ => {
            eprintln!("{usage}");
            ExitCode::SUCCESS
        }
    })
}

/// True when clap rejected an option such as `--frq`, as opposed to a surplus
/// positional argument.
fn is_unknown_flag(e: &clap::Error) -> bool {
    matches!(
        e.get(ContextKind::InvalidArg),
        Some(ContextValue::String(arg)) if arg.starts_with('-')
    )
}

/// Map a pipeline result to an exit code, printing any error to stderr.
#[must_use]
pub fn finish(result: Result<(), GridError>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
