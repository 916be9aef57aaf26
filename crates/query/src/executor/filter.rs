//! Filter executor.

use crate::ast::Predicate;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use hashbrown::HashSet;
use querymate_core::pattern_match::{contains_ignore_case, eq_ignore_case, fold};
use querymate_core::{Dataset, Row, Value};

/// A condition evaluated against full-width rows.
pub trait RowFilter {
    /// Returns true if `row` is kept.
    fn eval(&self, row: &Row) -> bool;
}

/// A predicate resolved against a dataset's fields.
///
/// IN literals are folded once at bind time. A column that does not resolve
/// binds to `None` and evaluates like an all-null column.
#[derive(Clone, Debug)]
pub enum BoundPredicate {
    Equals { index: Option<usize>, value: String },
    Like { index: Option<usize>, text: String },
    In { index: Option<usize>, values: HashSet<String> },
    /// Keeps every row.
    Pass,
}

impl BoundPredicate {
    /// Binds `predicate` to the fields of `dataset`.
    ///
    /// Unsupported predicates bind to `Pass`.
    pub fn bind(predicate: &Predicate, dataset: &Dataset) -> Self {
        let index = predicate.column().and_then(|c| dataset.field_index(c));
        match predicate {
            Predicate::Equals { value, .. } => BoundPredicate::Equals {
                index,
                value: value.clone(),
            },
            Predicate::Like { text, .. } => BoundPredicate::Like {
                index,
                text: text.clone(),
            },
            Predicate::In { values, .. } => BoundPredicate::In {
                index,
                values: values.iter().map(|v| fold(v)).collect(),
            },
            Predicate::Unsupported { .. } => BoundPredicate::Pass,
        }
    }

    fn string_form(row: &Row, index: Option<usize>) -> Option<String> {
        index
            .and_then(|idx| row.get(idx))
            .and_then(Value::string_form)
    }
}

impl RowFilter for BoundPredicate {
    fn eval(&self, row: &Row) -> bool {
        match self {
            BoundPredicate::Equals { index, value } => {
                Self::string_form(row, *index).map_or(false, |v| eq_ignore_case(&v, value))
            }
            BoundPredicate::Like { index, text } => {
                Self::string_form(row, *index).map_or(false, |v| contains_ignore_case(&v, text))
            }
            BoundPredicate::In { index, values } => {
                Self::string_form(row, *index).map_or(false, |v| values.contains(&fold(&v)))
            }
            BoundPredicate::Pass => true,
        }
    }
}

/// Filter executor - keeps the rows a predicate accepts, in order.
pub struct FilterExecutor<P: RowFilter> {
    predicate: P,
}

impl<P: RowFilter> FilterExecutor<P> {
    /// Creates a new filter executor.
    pub fn new(predicate: P) -> Self {
        Self { predicate }
    }

    /// Executes the filter on the input rows.
    pub fn execute(&self, input: Vec<Arc<Row>>) -> Vec<Arc<Row>> {
        input
            .into_iter()
            .filter(|row| self.predicate.eval(row))
            .collect()
    }
}
