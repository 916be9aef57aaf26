//! QueryMate - Main entry point for loading data and running queries.

use crate::convert::{column_infos, to_js, PresetInfo};
use crate::result::QueryResult;
use querymate_core::Dataset;
use querymate_csv::{CsvReader, ParseWarning};
use querymate_query::{
    presets, ExecuteOptions, Execution, Interpreter, UnsupportedPredicatePolicy,
};
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
fn warn(s: &str) {
    web_sys::console::warn_1(&JsValue::from_str(s));
}

#[cfg(not(target_arch = "wasm32"))]
fn warn(_s: &str) {}

/// Message returned when a query is run before any data is loaded.
pub const DATA_UNAVAILABLE: &str = "Customer data is not available";

fn report_warnings(warnings: &[ParseWarning]) {
    if warnings.is_empty() {
        return;
    }
    warn(&format!("CSV parsing had {} warning(s):", warnings.len()));
    for w in warnings {
        warn(&w.to_string());
    }
}

/// A loaded dataset and the options queries run with.
#[wasm_bindgen]
#[derive(Default)]
pub struct QueryMate {
    dataset: Option<Dataset>,
    options: ExecuteOptions,
}

impl QueryMate {
    /// Parses CSV text and replaces the loaded dataset.
    pub fn load_csv_internal(&mut self, text: &str) -> Result<(), String> {
        let output = CsvReader::new().read(text).map_err(|e| e.to_string())?;
        report_warnings(&output.warnings);
        self.dataset = Some(output.into_dataset().map_err(|e| e.to_string())?);
        Ok(())
    }

    /// Runs a query against the loaded dataset.
    pub fn run_internal(&self, query: &str) -> Result<Execution, String> {
        let dataset = self.dataset.as_ref().ok_or_else(|| DATA_UNAVAILABLE.to_string())?;
        Interpreter::with_options(self.options)
            .run(query, dataset)
            .map_err(|e| e.to_string())
    }

    /// Returns the loaded dataset.
    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }
}

#[wasm_bindgen]
impl QueryMate {
    /// Creates an instance with no data loaded.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an instance from CSV text.
    #[wasm_bindgen(js_name = fromCsv)]
    pub fn from_csv(text: &str) -> Result<QueryMate, JsValue> {
        let mut session = Self::new();
        session.load_csv(text)?;
        Ok(session)
    }

    /// Replaces the loaded dataset with the contents of CSV text.
    #[wasm_bindgen(js_name = loadCsv)]
    pub fn load_csv(&mut self, text: &str) -> Result<(), JsValue> {
        self.load_csv_internal(text)
            .map_err(|e| JsValue::from_str(&e))
    }

    /// Returns true once a dataset is loaded.
    #[wasm_bindgen(getter, js_name = isLoaded)]
    pub fn is_loaded(&self) -> bool {
        self.dataset.is_some()
    }

    /// Makes unsupported WHERE clauses fail instead of being ignored.
    #[wasm_bindgen(js_name = setRejectUnsupported)]
    pub fn set_reject_unsupported(&mut self, reject: bool) {
        let policy = if reject {
            UnsupportedPredicatePolicy::Reject
        } else {
            UnsupportedPredicatePolicy::Ignore
        };
        self.options = self.options.unsupported_predicate(policy);
    }

    /// Returns the column metadata, `[{ name, type }]`.
    pub fn columns(&self) -> Result<JsValue, JsValue> {
        let infos = self.dataset.as_ref().map(column_infos).unwrap_or_default();
        to_js(&infos)
    }

    /// Returns the number of loaded rows.
    #[wasm_bindgen(js_name = rowCount)]
    pub fn row_count(&self) -> usize {
        self.dataset.as_ref().map_or(0, Dataset::row_count)
    }

    /// Runs a query.
    pub fn execute(&self, query: &str) -> Result<QueryResult, JsValue> {
        self.run_internal(query)
            .map(QueryResult::new)
            .map_err(|e| JsValue::from_str(&e))
    }

    /// Returns the predefined queries.
    pub fn presets() -> Result<JsValue, JsValue> {
        let infos: Vec<PresetInfo> = presets::PRESETS.iter().map(PresetInfo::from).collect();
        to_js(&infos)
    }
}
