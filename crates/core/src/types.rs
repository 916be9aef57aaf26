//! Data type definitions for QueryMate datasets.
//!
//! A `DataType` is the display/sort type inferred for a column. It does not
//! constrain the raw values stored in that column.

use core::fmt;

/// Column types derived by schema inference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DataType {
    /// Free text, and the fallback for columns with no usable sample.
    #[default]
    String,
    /// Whole numbers.
    Integer,
    /// Numbers with a fractional part.
    Decimal,
    /// true/false
    Boolean,
    /// Text that starts with a `yyyy-m-d` or `yyyy/m/d` date.
    Date,
}

impl DataType {
    /// Returns the lower-case name used by the display layer.
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::String => "string",
            DataType::Integer => "integer",
            DataType::Decimal => "decimal",
            DataType::Boolean => "boolean",
            DataType::Date => "date",
        }
    }

    /// Returns the narrowest type both `self` and `other` fit in.
    ///
    /// Integers widen to decimals; any other disagreement falls back to
    /// `String`.
    pub fn unify(self, other: DataType) -> DataType {
        match (self, other) {
            (a, b) if a == b => a,
            (DataType::Integer, DataType::Decimal) | (DataType::Decimal, DataType::Integer) => {
                DataType::Decimal
            }
            _ => DataType::String,
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
