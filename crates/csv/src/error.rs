//! Error types for CSV reading and writing.

use core::fmt;
use querymate_core::Error;

/// Result type alias for CSV operations.
pub type CsvResult<T> = core::result::Result<T, CsvError>;

/// CSV errors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CsvError {
    /// A quoted field is never closed. `line` is where its record starts.
    UnterminatedQuote { line: usize },
    /// The delimiter is a quote or a line break.
    InvalidDelimiter { delimiter: char },
    /// Export was asked for a dataset without rows.
    NoData,
    /// The parsed records do not form a valid dataset.
    Dataset(Error),
}

impl fmt::Display for CsvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CsvError::UnterminatedQuote { line } => {
                write!(f, "Unterminated quoted field in record starting on line {}", line)
            }
            CsvError::InvalidDelimiter { delimiter } => {
                write!(f, "Invalid CSV delimiter: {:?}", delimiter)
            }
            CsvError::NoData => f.write_str("No data to export"),
            CsvError::Dataset(e) => write!(f, "{}", e),
        }
    }
}

impl From<Error> for CsvError {
    fn from(e: Error) -> Self {
        CsvError::Dataset(e)
    }
}
