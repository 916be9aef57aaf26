//! QueryMate CSV - CSV loading and export for QueryMate datasets.
//!
//! Reading turns CSV text into name-keyed records with dynamically typed
//! cells; [`load_dataset`] then infers the column types. Writing renders
//! the projected columns of a dataset, nulls as empty fields.
//!
//! ```rust
//! use querymate_csv::{load_dataset, CsvWriter};
//!
//! let dataset = load_dataset("id,country\n1,Germany\n2,\n").unwrap();
//! assert_eq!(dataset.row_count(), 2);
//!
//! let csv = CsvWriter::new().newline("\n").write(&dataset).unwrap();
//! assert_eq!(csv, "id,country\n1,Germany\n2,");
//! ```

#![no_std]

extern crate alloc;

mod error;
mod reader;
mod typing;
mod writer;

pub use error::{CsvError, CsvResult};
pub use reader::{CsvReader, ParseOutput, ParseWarning};
pub use typing::dynamic_value;
pub use writer::CsvWriter;

use querymate_core::Dataset;

/// Reads CSV text with default settings and infers its schema.
///
/// Parse warnings are dropped; use [`CsvReader`] to see them.
pub fn load_dataset(text: &str) -> CsvResult<Dataset> {
    CsvReader::new().read(text)?.into_dataset()
}
