//! Dataset definition.
//!
//! A `Dataset` pairs an ordered list of projected columns with rows that
//! always carry every *field* of the original table. Projection only narrows
//! the column list; rows are shared (`Arc<Row>`) between a dataset and every
//! dataset derived from it, and are never mutated.

use super::column::ColumnDescriptor;
use crate::error::{Error, Result};
use crate::row::Row;
use crate::value::Value;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use hashbrown::HashSet;

/// Shared field names, cloned cheaply between derived datasets.
pub type SharedFields = Arc<[String]>;

static NULL: Value = Value::Null;

/// An immutable table value: projected columns plus full-width rows.
#[derive(Clone, Debug)]
pub struct Dataset {
    /// Projected columns in display order.
    columns: Vec<ColumnDescriptor>,
    /// Field position of each projected column.
    column_indices: Vec<usize>,
    /// Names of all fields every row carries.
    fields: SharedFields,
    /// Rows, one value per field.
    rows: Vec<Arc<Row>>,
}

impl Dataset {
    /// Returns the normalized empty dataset `{columns: [], rows: []}`.
    pub fn empty() -> Self {
        Self {
            columns: Vec::new(),
            column_indices: Vec::new(),
            fields: Arc::from(Vec::new()),
            rows: Vec::new(),
        }
    }

    /// Creates a dataset whose fields are exactly `columns`.
    pub fn new(columns: Vec<ColumnDescriptor>, rows: Vec<Row>) -> Result<Self> {
        let fields: Vec<String> = columns.iter().map(|c| String::from(c.name())).collect();
        let rows = rows.into_iter().map(Arc::new).collect();
        Self::from_parts(columns, fields.into(), rows)
    }

    /// Creates a dataset from its parts, checking every invariant.
    ///
    /// `columns` must be distinct fields listed in field order; every row must
    /// carry exactly `fields.len()` values.
    pub fn from_parts(
        columns: Vec<ColumnDescriptor>,
        fields: SharedFields,
        rows: Vec<Arc<Row>>,
    ) -> Result<Self> {
        {
            let mut seen = HashSet::with_capacity(fields.len());
            for field in fields.iter() {
                if field.is_empty() {
                    return Err(Error::invalid_schema("empty column name"));
                }
                if !seen.insert(field.as_str()) {
                    return Err(Error::duplicate_column(field.as_str()));
                }
            }
        }

        let mut column_indices = Vec::with_capacity(columns.len());
        let mut last: Option<usize> = None;
        for column in &columns {
            let idx = fields
                .iter()
                .position(|f| f == column.name())
                .ok_or_else(|| Error::column_not_found(column.name()))?;
            if last.map_or(false, |prev| idx <= prev) {
                return Err(Error::invalid_schema(
                    "projected columns must follow field order without repeats",
                ));
            }
            last = Some(idx);
            column_indices.push(idx);
        }

        for (i, row) in rows.iter().enumerate() {
            if row.len() != fields.len() {
                return Err(Error::row_width_mismatch(i, fields.len(), row.len()));
            }
        }

        Ok(Self {
            columns,
            column_indices,
            fields,
            rows,
        })
    }

    /// Returns a dataset with the same fields but different columns and rows.
    ///
    /// Rows must come from this dataset (or one sharing its fields).
    pub fn derive(&self, columns: Vec<ColumnDescriptor>, rows: Vec<Arc<Row>>) -> Result<Self> {
        Self::from_parts(columns, self.fields.clone(), rows)
    }

    /// Returns the projected columns.
    #[inline]
    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    /// Returns the names of every field rows carry.
    #[inline]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Returns the rows.
    #[inline]
    pub fn rows(&self) -> &[Arc<Row>] {
        &self.rows
    }

    /// Returns the number of rows.
    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of projected columns.
    #[inline]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if the dataset has no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Resolves a field name, exactly first and then ignoring ASCII case.
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields
            .iter()
            .position(|f| f == name)
            .or_else(|| self.fields.iter().position(|f| f.eq_ignore_ascii_case(name)))
    }

    /// Returns a row's values for the projected columns, in column order.
    pub fn projected<'a>(&'a self, row: &'a Row) -> impl Iterator<Item = &'a Value> + 'a {
        self.column_indices
            .iter()
            .map(move |&idx| row.get(idx).unwrap_or(&NULL))
    }

    /// Returns the projected view of every row.
    pub fn records(&self) -> impl Iterator<Item = Vec<&Value>> + '_ {
        self.rows.iter().map(move |row| self.projected(row).collect())
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DataType;
    use alloc::vec;

    fn sample() -> Dataset {
        Dataset::new(
            vec![
                ColumnDescriptor::new("customerID", DataType::String),
                ColumnDescriptor::new("country", DataType::String),
                ColumnDescriptor::new("age", DataType::Integer),
            ],
            vec![
                Row::new(vec!["A".into(), "Germany".into(), Value::Int64(30)]),
                Row::new(vec!["B".into(), Value::Null, Value::Int64(41)]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_empty_dataset() {
        let ds = Dataset::empty();
        assert!(ds.is_empty());
        assert_eq!(ds.column_count(), 0);
        assert!(ds.fields().is_empty());
    }

    #[test]
    fn test_new_dataset() {
        let ds = sample();
        assert_eq!(ds.row_count(), 2);
        assert_eq!(ds.column_count(), 3);
        assert_eq!(ds.fields().len(), 3);
    }

    #[test]
    fn test_duplicate_column_rejected() {
        let err = Dataset::new(
            vec![
                ColumnDescriptor::new("a", DataType::String),
                ColumnDescriptor::new("a", DataType::String),
            ],
            vec![],
        )
        .unwrap_err();
        assert_eq!(err, Error::duplicate_column("a"));
    }

    #[test]
    fn test_row_width_checked() {
        let err = Dataset::new(
            vec![ColumnDescriptor::new("a", DataType::String)],
            vec![Row::new(vec![Value::Null, Value::Null])],
        )
        .unwrap_err();
        assert_eq!(err, Error::row_width_mismatch(0, 1, 2));
    }

    #[test]
    fn test_field_index_case_insensitive() {
        let ds = sample();
        assert_eq!(ds.field_index("country"), Some(1));
        assert_eq!(ds.field_index("CustomerId"), Some(0));
        assert_eq!(ds.field_index("fax"), None);
    }

    #[test]
    fn test_derive_projection_shares_rows() {
        let ds = sample();
        let projected = ds
            .derive(
                vec![ColumnDescriptor::new("age", DataType::Integer)],
                ds.rows().to_vec(),
            )
            .unwrap();
        assert_eq!(projected.column_count(), 1);
        assert_eq!(projected.fields().len(), 3);
        assert!(Arc::ptr_eq(&projected.rows()[0], &ds.rows()[0]));

        let records: Vec<Vec<&Value>> = projected.records().collect();
        assert_eq!(records[1], vec![&Value::Int64(41)]);
    }

    #[test]
    fn test_derive_rejects_reordered_columns() {
        let ds = sample();
        let err = ds
            .derive(
                vec![
                    ColumnDescriptor::new("age", DataType::Integer),
                    ColumnDescriptor::new("customerID", DataType::String),
                ],
                Vec::new(),
            )
            .unwrap_err();
        assert!(matches!(err, Error::InvalidSchema { .. }));
    }

    #[test]
    fn test_derive_rejects_unknown_column() {
        let ds = sample();
        let err = ds
            .derive(vec![ColumnDescriptor::new("fax", DataType::String)], Vec::new())
            .unwrap_err();
        assert_eq!(err, Error::column_not_found("fax"));
    }

    #[test]
    fn test_from_parts_shares_fields() {
        let fields: SharedFields = vec![String::from("id"), String::from("fax")].into();
        let rows = vec![
            Arc::new(Row::new(vec![Value::Int64(1), Value::Null])),
            Arc::new(Row::new(vec![Value::Int64(2), "555".into()])),
        ];
        let ds = Dataset::from_parts(
            vec![ColumnDescriptor::new("fax", DataType::String)],
            fields.clone(),
            rows,
        )
        .unwrap();
        assert_eq!(ds.fields(), &*fields);
        assert_eq!(ds.field_index("FAX"), Some(1));
        let records: Vec<Vec<&Value>> = ds.records().collect();
        assert_eq!(records, vec![vec![&Value::Null], vec![&Value::from("555")]]);
    }

    #[test]
    fn test_from_parts_rejects_duplicate_and_empty_fields() {
        let dup: SharedFields = vec![String::from("id"), String::from("id")].into();
        assert_eq!(
            Dataset::from_parts(Vec::new(), dup, Vec::new()).unwrap_err(),
            Error::duplicate_column("id")
        );
        let empty: SharedFields = vec![String::new()].into();
        assert!(Dataset::from_parts(Vec::new(), empty, Vec::new()).is_err());
    }
}
