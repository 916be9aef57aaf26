//! Schema module for QueryMate datasets.
//!
//! This module contains column descriptors, the `Dataset` value and schema
//! inference over raw records.

mod column;
mod dataset;
mod infer;

pub use column::ColumnDescriptor;
pub use dataset::{Dataset, SharedFields};
pub use infer::{infer, infer_columns, InferenceStrategy, SchemaInference};
