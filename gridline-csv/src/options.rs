use serde::{Deserialize, Serialize};

/// Formatting and parsing options for CSV input and output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvOptions {
    /// Decimal places for numeric fields on output.
    pub precision: usize,
    /// Extra tokens read as a missing value. Empty and whitespace-only cells
    /// are always missing.
    pub na_values: Vec<String>,
    /// `strftime` patterns tried before the built-in timestamp formats.
    pub timestamp_formats: Vec<String>,
    /// Field delimiter.
    pub delimiter: u8,
}

impl CsvOptions {
    /// Defaults with the given output precision.
    #[must_use]
    pub fn with_precision(precision: usize) -> Self {
        Self {
            precision,
            ..Self::default()
        }
    }

    /// Set the output precision.
    #[must_use]
    pub const fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Add a missing-value token.
    #[must_use]
    pub fn na_value(mut self, token: impl Into<String>) -> Self {
        self.na_values.push(token.into());
        self
    }

    /// Add a timestamp format tried before the built-in ones.
    #[must_use]
    pub fn timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_formats.push(format.into());
        self
    }

    /// Set the field delimiter.
    #[must_use]
    pub const fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub(crate) fn is_na(&self, cell: &str) -> bool {
        let cell = cell.trim();
        cell.is_empty() || self.na_values.iter().any(|t| t == cell)
    }
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            precision: 1,
            na_values: vec!["NA".into(), "NaN".into(), "nan".into()],
            timestamp_formats: Vec::new(),
            delimiter: b',',
        }
    }
}
