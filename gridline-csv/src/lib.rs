//! CSV input and output for gridline tables.
//!
//! Reading resolves columns through a [`ColumnSpec`](gridline_core::ColumnSpec):
//! the time column (renamed on the way in), an optional interval end, the
//! numeric fields, and text columns to skip. Cells are trimmed; empty cells
//! and the configured NA tokens become nulls.
//!
//! Writing always emits a header, fixed-precision numbers, and empty cells
//! for nulls.
//!
//! ```
//! use gridline_core::ColumnSpec;
//! use gridline_csv::{CsvOptions, read_table_from, write_table_to};
//!
//! let input = "date,temp\n2015-01-01 00:00,1.26\n2015-01-01 01:00, \n";
//! let table = read_table_from(input.as_bytes(), &ColumnSpec::new("date"), &CsvOptions::default()).unwrap();
//! assert_eq!(table.column("temp").unwrap(), vec![Some(1.26), None]);
//!
//! let mut out = Vec::new();
//! write_table_to(&mut out, &table, &CsvOptions::with_precision(1)).unwrap();
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "date,temp\n2015-01-01 00:00:00,1.3\n2015-01-01 01:00:00,\n"
//! );
//! ```
#![warn(missing_docs)]

mod options;
mod reader;
mod writer;

use gridline_core::GridError;

pub use options::CsvOptions;
pub use reader::{read_raw, read_raw_from, read_table, read_table_from};
pub use writer::{write_merged, write_merged_to, write_table, write_table_to};

pub(crate) fn csv_error(e: csv::Error) -> GridError {
    if e.is_io_error() {
        GridError::Io(e.to_string())
    } else {
        GridError::Csv(e.to_string())
    }
}
