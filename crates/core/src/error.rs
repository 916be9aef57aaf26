//! Error types for QueryMate datasets.

use alloc::string::String;
use core::fmt;

/// Result type alias for dataset operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors raised while building or reading a dataset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Invalid schema definition.
    InvalidSchema {
        message: String,
    },
    /// Two columns share a name.
    DuplicateColumn {
        column: String,
    },
    /// Column not found among the dataset fields.
    ColumnNotFound {
        column: String,
    },
    /// A row does not carry exactly one value per field.
    RowWidthMismatch {
        row: usize,
        expected: usize,
        got: usize,
    },
    /// Invalid operation.
    InvalidOperation {
        message: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidSchema { message } => {
                write!(f, "Invalid schema: {}", message)
            }
            Error::DuplicateColumn { column } => {
                write!(f, "Duplicate column: {}", column)
            }
            Error::ColumnNotFound { column } => {
                write!(f, "Column not found: {}", column)
            }
            Error::RowWidthMismatch { row, expected, got } => {
                write!(
                    f,
                    "Row {} has {} values, expected {}",
                    row, got, expected
                )
            }
            Error::InvalidOperation { message } => {
                write!(f, "Invalid operation: {}", message)
            }
        }
    }
}

impl Error {
    /// Creates an invalid schema error.
    pub fn invalid_schema(message: impl Into<String>) -> Self {
        Error::InvalidSchema {
            message: message.into(),
        }
    }

    /// Creates a duplicate column error.
    pub fn duplicate_column(column: impl Into<String>) -> Self {
        Error::DuplicateColumn {
            column: column.into(),
        }
    }

    /// Creates a column not found error.
    pub fn column_not_found(column: impl Into<String>) -> Self {
        Error::ColumnNotFound {
            column: column.into(),
        }
    }

    /// Creates a row width mismatch error.
    pub fn row_width_mismatch(row: usize, expected: usize, got: usize) -> Self {
        Error::RowWidthMismatch { row, expected, got }
    }

    /// Creates an invalid operation error.
    pub fn invalid_operation(message: impl Into<String>) -> Self {
        Error::InvalidOperation {
            message: message.into(),
        }
    }
}
