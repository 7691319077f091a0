use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the gridline workspace.
///
/// Parse failures are fatal by contract: they signal malformed input that no
/// later step can work around. Data-quality findings (gaps, nulls, uneven
/// source intervals) are never errors; they travel in reports instead.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GridError {
    /// A timestamp, number, or code could not be parsed.
    #[error("cannot parse {what} from {value:?}: {reason}")]
    Parse {
        /// What was being parsed, e.g. "timestamp in column `start` at line 4".
        what: String,
        /// The offending raw text.
        value: String,
        /// Parser message.
        reason: String,
    },

    /// A required column is absent from the input header.
    #[error("missing required column: {0}")]
    MissingColumn(String),

    /// A field name does not exist in the table.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// A frequency code was not recognized.
    #[error("invalid frequency: {0}")]
    InvalidFrequency(String),

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// Structural problem with the data (mismatched row width, etc.).
    #[error("data issue: {0}")]
    Data(String),

    /// Filesystem failure.
    #[error("io error: {0}")]
    Io(String),

    /// CSV encoding or decoding failure that is not a field parse error.
    #[error("csv error: {0}")]
    Csv(String),
}

impl GridError {
    /// Helper: build a `Parse` error.
    pub fn parse(
        what: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Parse {
            what: what.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Helper: build a `MissingColumn` error.
    pub fn missing_column(name: impl Into<String>) -> Self {
        Self::MissingColumn(name.into())
    }

    /// Helper: build an `UnknownField` error.
    pub fn unknown_field(name: impl Into<String>) -> Self {
        Self::UnknownField(name.into())
    }

    /// Returns true if the error comes from malformed input rather than the environment.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::Parse { .. }
                | Self::MissingColumn(_)
                | Self::InvalidFrequency(_)
                | Self::Data(_)
        )
    }
}

impl From<std::io::Error> for GridError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
