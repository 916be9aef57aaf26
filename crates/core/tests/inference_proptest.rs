//! Property-based tests for schema inference.

use proptest::prelude::*;
use querymate_core::schema::{infer, infer_columns, InferenceStrategy, SchemaInference};
use querymate_core::{DataType, Record, Value};

/// Strategy for a single cell, including the empty forms.
fn value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        Just(Value::from("")),
        any::<bool>().prop_map(Value::Boolean),
        (-1000i64..1000).prop_map(Value::Int64),
        (-1000.0f64..1000.0).prop_map(Value::Float64),
        "[a-z]{1,6}".prop_map(Value::String),
        (1900u32..2100, 1u32..13, 1u32..29)
            .prop_map(|(y, m, d)| Value::String(format!("{}-{:02}-{}", y, m, d))),
    ]
}

/// Strategy for a column of values.
fn column_strategy(max_rows: usize) -> impl Strategy<Value = Vec<Value>> {
    prop::collection::vec(value_strategy(), 1..max_rows)
}

fn records(columns: &[Vec<Value>]) -> Vec<Record> {
    let rows = columns.iter().map(Vec::len).max().unwrap_or(0);
    (0..rows)
        .map(|r| {
            columns
                .iter()
                .enumerate()
                .map(|(c, col)| (format!("c{}", c), col.get(r).cloned().unwrap_or(Value::Null)))
                .collect()
        })
        .collect()
}

proptest! {
    /// Property: the type comes from the first non-empty value only.
    #[test]
    fn type_from_first_non_empty(col in column_strategy(20)) {
        let recs = records(&[col.clone()]);
        let expected = col
            .iter()
            .find_map(Value::inferred_type)
            .unwrap_or(DataType::String);
        prop_assert_eq!(infer_columns(&recs, None)[0].data_type(), expected);
    }

    /// Property: a dataset keeps every record, one row per record, and
    /// columns follow the first record's key order.
    #[test]
    fn infer_keeps_rows_and_order(cols in prop::collection::vec(column_strategy(10), 1..6)) {
        let recs = records(&cols);
        let ds = infer(&recs, None).unwrap();
        prop_assert_eq!(ds.row_count(), recs.len());
        let names: Vec<String> = ds.columns().iter().map(|c| c.name().to_string()).collect();
        let expected: Vec<String> = (0..cols.len()).map(|c| format!("c{}", c)).collect();
        prop_assert_eq!(names, expected);
    }

    /// Property: reconciling picks the common type of every non-empty value:
    /// one shared type stays, integers mixed with decimals widen to decimal,
    /// any other mix is a string.
    #[test]
    fn reconcile_picks_common_type(col in column_strategy(20)) {
        let types: Vec<DataType> = col.iter().filter_map(Value::inferred_type).collect();
        let expected = match types.first() {
            None => DataType::String,
            Some(first) if types.iter().all(|t| t == first) => *first,
            Some(_) if types.iter().all(|t| matches!(t, DataType::Integer | DataType::Decimal)) => {
                DataType::Decimal
            }
            Some(_) => DataType::String,
        };

        let recs = records(&[col]);
        let reconciled = SchemaInference::new()
            .strategy(InferenceStrategy::Reconcile)
            .infer_columns(&recs, None)[0]
            .data_type();
        prop_assert_eq!(reconciled, expected);
    }
}
