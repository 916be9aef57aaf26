//! Column descriptor for QueryMate datasets.

use crate::types::DataType;
use alloc::string::String;

/// Name and inferred type of one dataset column.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ColumnDescriptor {
    /// Column name.
    name: String,
    /// Inferred display/sort type.
    data_type: DataType,
}

impl ColumnDescriptor {
    /// Creates a new column descriptor.
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }

    /// Returns the column name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the data type.
    #[inline]
    pub fn data_type(&self) -> DataType {
        self.data_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_new() {
        let col = ColumnDescriptor::new("customerID", DataType::String);
        assert_eq!(col.name(), "customerID");
        assert_eq!(col.data_type(), DataType::String);
    }

    #[test]
    fn test_column_equality() {
        assert_eq!(
            ColumnDescriptor::new("a", DataType::Integer),
            ColumnDescriptor::new("a", DataType::Integer)
        );
        assert_ne!(
            ColumnDescriptor::new("a", DataType::Integer),
            ColumnDescriptor::new("a", DataType::Decimal)
        );
    }
}
