//! QueryMate Query - Query interpreter for QueryMate datasets.
//!
//! This crate parses and runs a constrained SQL dialect against an in-memory
//! [`Dataset`](querymate_core::Dataset):
//!
//! - `lexer`: Tokenizer with byte spans into the source
//! - `parser`: Clause splitting and parsing into a typed `Query`
//! - `ast`: `Query`, `Projection`, `Predicate`, `OrderBy`
//! - `executor`: Project, filter, sort and limit stages over shared rows
//! - `interpreter`: The evaluation pipeline, options and fail-open notices
//! - `presets`: Predefined queries
//!
//! # Example
//!
//! ```rust
//! use querymate_core::{ColumnDescriptor, DataType, Dataset, Row};
//! use querymate_query::execute;
//!
//! let dataset = Dataset::new(
//!     vec![
//!         ColumnDescriptor::new("customerID", DataType::String),
//!         ColumnDescriptor::new("country", DataType::String),
//!     ],
//!     vec![
//!         Row::new(vec!["A".into(), "Germany".into()]),
//!         Row::new(vec!["B".into(), "UK".into()]),
//!     ],
//! )
//! .unwrap();
//!
//! let result = execute("SELECT customerID FROM customers WHERE country = 'uk'", &dataset).unwrap();
//! assert_eq!(result.row_count(), 1);
//! assert_eq!(result.columns()[0].name(), "customerID");
//! ```

#![no_std]

extern crate alloc;

#[macro_use]
mod log;

pub mod ast;
mod error;
pub mod executor;
mod interpreter;
pub mod lexer;
pub mod parser;
pub mod presets;

pub use ast::{OrderBy, Predicate, Projection, Query, SortOrder};
pub use error::{QueryError, QueryResult};
pub use interpreter::{
    execute, ExecuteOptions, Execution, Interpreter, Notice, UnsupportedPredicatePolicy,
};
pub use parser::parse;
pub use presets::{PresetQuery, PRESETS};
