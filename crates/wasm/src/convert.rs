//! Type conversion utilities between QueryMate and JavaScript types.
//!
//! Cell values map to plain JS primitives. Column and preset metadata go
//! through serde so their shape is defined in one place.

use js_sys::{Array, Object, Reflect};
use querymate_core::{ColumnDescriptor, Dataset, Row, Value};
use querymate_query::{Notice, PresetQuery};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Column metadata as exposed to JavaScript: `{ name, type }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ColumnInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: &'static str,
}

impl From<&ColumnDescriptor> for ColumnInfo {
    fn from(column: &ColumnDescriptor) -> Self {
        Self {
            name: column.name().to_string(),
            data_type: column.data_type().as_str(),
        }
    }
}

/// Preset metadata as exposed to JavaScript.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PresetInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub query: &'static str,
}

impl From<&PresetQuery> for PresetInfo {
    fn from(preset: &PresetQuery) -> Self {
        Self {
            id: preset.id,
            name: preset.name,
            description: preset.description,
            query: preset.query,
        }
    }
}

/// Returns the column metadata of a dataset.
pub fn column_infos(dataset: &Dataset) -> Vec<ColumnInfo> {
    dataset.columns().iter().map(ColumnInfo::from).collect()
}

/// Returns the notices as display strings.
pub fn notice_messages(notices: &[Notice]) -> Vec<String> {
    notices.iter().map(|n| n.to_string()).collect()
}

/// Serializes a value with serde into a JS value.
pub fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Converts a QueryMate value to a JavaScript value.
pub fn value_to_js(value: &Value) -> JsValue {
    match value {
        Value::Null => JsValue::NULL,
        Value::Boolean(b) => JsValue::from_bool(*b),
        Value::Int64(n) => JsValue::from_f64(*n as f64),
        Value::Float64(n) => JsValue::from_f64(*n),
        Value::String(s) => JsValue::from_str(s),
    }
}

/// Converts the projected view of a row to a JavaScript object keyed by
/// column name.
pub fn row_to_js(dataset: &Dataset, row: &Row) -> JsValue {
    let obj = Object::new();
    for (column, value) in dataset.columns().iter().zip(dataset.projected(row)) {
        Reflect::set(&obj, &JsValue::from_str(column.name()), &value_to_js(value)).ok();
    }
    obj.into()
}

/// Converts every row of a dataset to a JavaScript array of objects.
pub fn rows_to_js_array(dataset: &Dataset) -> JsValue {
    let arr = Array::new_with_length(dataset.row_count() as u32);
    for (i, row) in dataset.rows().iter().enumerate() {
        arr.set(i as u32, row_to_js(dataset, row));
    }
    arr.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use querymate_core::DataType;
    use querymate_query::{presets, Notice};

    #[test]
    fn test_column_infos() {
        let ds = Dataset::new(
            vec![
                ColumnDescriptor::new("customerID", DataType::String),
                ColumnDescriptor::new("since", DataType::Date),
            ],
            vec![],
        )
        .unwrap();
        assert_eq!(
            column_infos(&ds),
            vec![
                ColumnInfo {
                    name: "customerID".into(),
                    data_type: "string"
                },
                ColumnInfo {
                    name: "since".into(),
                    data_type: "date"
                },
            ]
        );
    }

    #[test]
    fn test_preset_info() {
        let info = PresetInfo::from(presets::find("company-search").unwrap());
        assert_eq!(info.id, "company-search");
        assert!(info.query.contains("LIKE"));
    }

    #[test]
    fn test_notice_messages() {
        let messages = notice_messages(&[Notice::IgnoredGroupBy]);
        assert_eq!(messages, vec!["GROUP BY is not supported and was ignored".to_string()]);
    }
}
