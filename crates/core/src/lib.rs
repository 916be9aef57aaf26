//! QueryMate Core - Value, schema and dataset types for the QueryMate engine.
//!
//! This crate provides the foundational types the query interpreter runs on:
//!
//! - `DataType`: Inferred column types (String, Integer, Decimal, Boolean, Date)
//! - `Value`: Raw cell values (`string | number | boolean | null`)
//! - `Record`: A raw, name-keyed input row
//! - `Row`: A positional row stored in a dataset
//! - `schema`: Column descriptors, `Dataset`, and schema inference
//! - `Error`: Error types for dataset operations
//!
//! # Example
//!
//! ```rust
//! use querymate_core::{DataType, Record, Value};
//! use querymate_core::schema::infer;
//!
//! let records = vec![
//!     Record::new().with("customerID", "ALFKI").with("since", "1996-07-04"),
//!     Record::new().with("customerID", "ANATR").with("since", Value::Null),
//! ];
//!
//! let dataset = infer(&records, None).unwrap();
//! assert_eq!(dataset.columns()[1].data_type(), DataType::Date);
//! assert_eq!(dataset.row_count(), 2);
//! ```

#![no_std]

extern crate alloc;

mod error;
pub mod pattern_match;
mod row;
pub mod schema;
mod types;
mod value;

pub use error::{Error, Result};
pub use row::{Record, Row};
pub use schema::{ColumnDescriptor, Dataset};
pub use types::DataType;
pub use value::Value;
