//! QueryMate WASM - JavaScript API for the QueryMate engine.
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import { QueryMate } from 'querymate';
//!
//! const csv = await (await fetch('/customers.csv')).text();
//! const qm = QueryMate.fromCsv(csv);
//!
//! const result = qm.execute("SELECT customerID, country FROM customers WHERE country = 'Germany'");
//! console.log(result.columns(), result.rows(), result.notices());
//!
//! const download = result.toCsv();
//! ```

pub mod convert;
mod result;
mod session;

pub use convert::{row_to_js, rows_to_js_array, value_to_js, ColumnInfo, PresetInfo};
pub use result::QueryResult;
pub use session::{QueryMate, DATA_UNAVAILABLE};

use wasm_bindgen::prelude::*;

/// Returns the crate version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
