//! Query results handed to JavaScript.

use crate::convert::{column_infos, notice_messages, rows_to_js_array, to_js};
use querymate_csv::CsvWriter;
use querymate_query::Execution;
use wasm_bindgen::prelude::*;

/// The dataset produced by a query, plus its fail-open notices.
#[wasm_bindgen]
pub struct QueryResult {
    execution: Execution,
}

impl QueryResult {
    pub(crate) fn new(execution: Execution) -> Self {
        Self { execution }
    }

    /// Returns the underlying execution.
    pub fn execution(&self) -> &Execution {
        &self.execution
    }

    /// Renders the result as CSV text.
    pub fn to_csv_internal(&self) -> Result<String, String> {
        CsvWriter::new()
            .write(&self.execution.dataset)
            .map_err(|e| e.to_string())
    }
}

#[wasm_bindgen]
impl QueryResult {
    /// Returns the projected column metadata, `[{ name, type }]`.
    pub fn columns(&self) -> Result<JsValue, JsValue> {
        to_js(&column_infos(&self.execution.dataset))
    }

    /// Returns the rows as objects keyed by projected column name.
    pub fn rows(&self) -> JsValue {
        rows_to_js_array(&self.execution.dataset)
    }

    /// Returns the notice messages.
    pub fn notices(&self) -> Result<JsValue, JsValue> {
        to_js(&notice_messages(&self.execution.notices))
    }

    /// Returns the number of rows.
    #[wasm_bindgen(js_name = rowCount)]
    pub fn row_count(&self) -> usize {
        self.execution.dataset.row_count()
    }

    /// Renders the result as CSV. Fails with "No data to export" when empty.
    #[wasm_bindgen(js_name = toCsv)]
    pub fn to_csv(&self) -> Result<String, JsValue> {
        self.to_csv_internal().map_err(|e| JsValue::from_str(&e))
    }
}
