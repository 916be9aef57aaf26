//! Schema inference.
//!
//! Derives a `ColumnDescriptor` per column from raw records. The default
//! strategy types a column by its first non-empty value; the reconciling
//! strategy looks at every value instead.

use super::column::ColumnDescriptor;
use super::dataset::Dataset;
use crate::error::Result;
use crate::row::Record;
use crate::types::DataType;
use alloc::string::String;
use alloc::vec::Vec;

/// How a column's type is derived from its values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InferenceStrategy {
    /// The first value that is neither null nor empty decides the type.
    /// Later values are not checked.
    #[default]
    FirstNonEmpty,
    /// Every non-empty value is typed and the results are unified: integers
    /// widen to decimals, any other disagreement yields `String`.
    Reconcile,
}

/// Schema inference with a configurable strategy.
#[derive(Clone, Copy, Debug, Default)]
pub struct SchemaInference {
    strategy: InferenceStrategy,
}

impl SchemaInference {
    /// Creates an inference pass using the default strategy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the inference strategy.
    pub fn strategy(mut self, strategy: InferenceStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Returns the configured strategy.
    #[inline]
    pub fn get_strategy(&self) -> InferenceStrategy {
        self.strategy
    }

    /// Infers column descriptors for `records`.
    ///
    /// Column order is `known_columns` when given and non-empty, otherwise
    /// the key order of the first record. No records means no columns.
    pub fn infer_columns(
        &self,
        records: &[Record],
        known_columns: Option<&[String]>,
    ) -> Vec<ColumnDescriptor> {
        if records.is_empty() {
            return Vec::new();
        }

        column_names(records, known_columns)
            .into_iter()
            .map(|name| {
                let data_type = self.infer_type(records, &name);
                ColumnDescriptor::new(name, data_type)
            })
            .collect()
    }

    /// Builds a dataset from `records`, inferring its columns.
    ///
    /// An empty input yields the normalized empty dataset.
    pub fn infer(&self, records: &[Record], known_columns: Option<&[String]>) -> Result<Dataset> {
        if records.is_empty() {
            return Ok(Dataset::empty());
        }

        let columns = self.infer_columns(records, known_columns);
        let fields: Vec<String> = columns.iter().map(|c| String::from(c.name())).collect();
        let rows = records.iter().map(|r| r.to_row(&fields)).collect();
        Dataset::new(columns, rows)
    }

    fn infer_type(&self, records: &[Record], name: &str) -> DataType {
        let mut sampled = records
            .iter()
            .filter_map(|r| r.get(name))
            .filter_map(|v| v.inferred_type());

        match self.strategy {
            InferenceStrategy::FirstNonEmpty => sampled.next().unwrap_or_default(),
            InferenceStrategy::Reconcile => match sampled.next() {
                Some(first) => sampled.fold(first, DataType::unify),
                None => DataType::default(),
            },
        }
    }
}

/// Infers column descriptors with the default strategy.
pub fn infer_columns(records: &[Record], known_columns: Option<&[String]>) -> Vec<ColumnDescriptor> {
    SchemaInference::new().infer_columns(records, known_columns)
}

/// Builds a dataset from `records` with the default strategy.
pub fn infer(records: &[Record], known_columns: Option<&[String]>) -> Result<Dataset> {
    SchemaInference::new().infer(records, known_columns)
}

fn column_names(records: &[Record], known_columns: Option<&[String]>) -> Vec<String> {
    match known_columns {
        Some(names) if !names.is_empty() => names.to_vec(),
        _ => records
            .first()
            .map(|r| r.keys().map(String::from).collect())
            .unwrap_or_default(),
    }
}
