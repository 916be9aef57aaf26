//! Query interpreter.
//!
//! Runs a parsed query against a dataset through a fixed pipeline:
//! projection, filter, ordering, limit. The order in which clauses appear in
//! the source text has no effect.
//!
//! Clauses the interpreter cannot honor are skipped rather than rejected
//! (fail-open). Every such skip is recorded as a [`Notice`] on the returned
//! [`Execution`], so callers can tell a filtered result from an unfiltered
//! one.

use crate::ast::{Projection, Query};
use crate::error::{QueryError, QueryResult};
use crate::executor::{BoundPredicate, FilterExecutor, LimitExecutor, ProjectExecutor, SortExecutor};
use crate::parser::parse;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use querymate_core::Dataset;

/// What to do with a WHERE clause that is not a supported form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnsupportedPredicatePolicy {
    /// Skip filtering and record a notice.
    #[default]
    Ignore,
    /// Fail with `QueryError::UnsupportedPredicate`.
    Reject,
}

/// Execution options.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExecuteOptions {
    unsupported_predicate: UnsupportedPredicatePolicy,
}

impl ExecuteOptions {
    /// Creates the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the unsupported predicate policy.
    pub fn unsupported_predicate(mut self, policy: UnsupportedPredicatePolicy) -> Self {
        self.unsupported_predicate = policy;
        self
    }

    /// Returns the unsupported predicate policy.
    #[inline]
    pub fn get_unsupported_predicate(&self) -> UnsupportedPredicatePolicy {
        self.unsupported_predicate
    }
}

/// A non-fatal event recorded while executing a query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    /// The column list could not be extracted; every column was kept.
    ProjectionFallback,
    /// The WHERE clause was not a supported form; no rows were filtered.
    IgnoredPredicate { clause: String },
    /// A GROUP BY clause was present and skipped.
    IgnoredGroupBy,
    /// The ORDER BY column does not exist; row order was kept.
    UnknownSortColumn { column: String },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::ProjectionFallback => {
                f.write_str("Could not read the column list; showing all columns")
            }
            Notice::IgnoredPredicate { clause } => {
                write!(f, "Unsupported WHERE clause ignored: {}", clause)
            }
            Notice::IgnoredGroupBy => f.write_str("GROUP BY is not supported and was ignored"),
            Notice::UnknownSortColumn { column } => {
                write!(f, "Unknown ORDER BY column ignored: {}", column)
            }
        }
    }
}

/// The result of running a query.
#[derive(Clone, Debug)]
pub struct Execution {
    /// Result dataset.
    pub dataset: Dataset,
    /// Fail-open events, in pipeline order.
    pub notices: Vec<Notice>,
}

impl Execution {
    fn unchanged(dataset: &Dataset) -> Self {
        Self {
            dataset: dataset.clone(),
            notices: Vec::new(),
        }
    }

    /// Returns the result dataset, dropping the notices.
    pub fn into_dataset(self) -> Dataset {
        self.dataset
    }
}

/// Query interpreter.
#[derive(Clone, Copy, Debug, Default)]
pub struct Interpreter {
    options: ExecuteOptions,
}

impl Interpreter {
    /// Creates an interpreter with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an interpreter with the given options.
    pub fn with_options(options: ExecuteOptions) -> Self {
        Self { options }
    }

    /// Returns the interpreter options.
    #[inline]
    pub fn options(&self) -> &ExecuteOptions {
        &self.options
    }

    /// Parses and runs `source` against `dataset`.
    ///
    /// A dataset without rows is returned as is, before the query is even
    /// parsed.
    pub fn run(&self, source: &str, dataset: &Dataset) -> QueryResult<Execution> {
        if dataset.is_empty() {
            debug_log!("[querymate] empty dataset, query not evaluated");
            return Ok(Execution::unchanged(dataset));
        }
        let query = parse(source)?;
        self.execute_query(&query, dataset)
    }

    /// Parses and runs `source`, returning only the result dataset.
    pub fn execute(&self, source: &str, dataset: &Dataset) -> QueryResult<Dataset> {
        self.run(source, dataset).map(Execution::into_dataset)
    }

    /// Runs an already parsed query.
    pub fn execute_query(&self, query: &Query, dataset: &Dataset) -> QueryResult<Execution> {
        if dataset.is_empty() {
            return Ok(Execution::unchanged(dataset));
        }
        let mut notices = Vec::new();

        if query.projection == Projection::Unresolved {
            debug_log!("[querymate] projection fallback to all columns");
            notices.push(Notice::ProjectionFallback);
        }
        let columns = ProjectExecutor::new(&query.projection).execute(dataset.columns())?;

        let mut rows = dataset.rows().to_vec();

        if query.has_unsupported_predicate() {
            let clause = query
                .predicate
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default();
            match self.options.unsupported_predicate {
                UnsupportedPredicatePolicy::Reject => {
                    return Err(QueryError::unsupported_predicate(clause));
                }
                UnsupportedPredicatePolicy::Ignore => {
                    debug_log!("[querymate] ignoring unsupported WHERE clause: {}", clause);
                    notices.push(Notice::IgnoredPredicate { clause });
                }
            }
        } else if let Some(predicate) = &query.predicate {
            let bound = BoundPredicate::bind(predicate, dataset);
            rows = FilterExecutor::new(bound).execute(rows);
        }

        if query.group_by {
            debug_log!("[querymate] ignoring GROUP BY");
            notices.push(Notice::IgnoredGroupBy);
        }

        if let Some(order_by) = &query.order_by {
            let index = dataset.field_index(&order_by.column);
            if index.is_none() {
                debug_log!("[querymate] unknown ORDER BY column: {}", order_by.column);
                notices.push(Notice::UnknownSortColumn {
                    column: order_by.column.clone(),
                });
            }
            rows = SortExecutor::new(index, order_by.order).execute(rows);
        }

        if let Some(limit) = query.limit {
            rows = LimitExecutor::new(limit).execute(rows);
        }

        Ok(Execution {
            dataset: dataset.derive(columns, rows)?,
            notices,
        })
    }
}

/// Runs `source` against `dataset` with default options.
pub fn execute(source: &str, dataset: &Dataset) -> QueryResult<Dataset> {
    Interpreter::new().execute(source, dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::sync::Arc;
    use alloc::vec;
    use querymate_core::{ColumnDescriptor, DataType, Row, Value};

    fn customers() -> Dataset {
        Dataset::new(
            vec![
                ColumnDescriptor::new("customerID", DataType::String),
                ColumnDescriptor::new("companyName", DataType::String),
                ColumnDescriptor::new("country", DataType::String),
            ],
            vec![
                Row::new(vec!["A".into(), "Alpha Foods".into(), "Germany".into()]),
                Row::new(vec!["B".into(), "Beta Market".into(), "UK".into()]),
                Row::new(vec!["C".into(), "Gamma".into(), "Germany".into()]),
            ],
        )
        .unwrap()
    }

    fn ids(ds: &Dataset) -> Vec<&Value> {
        ds.rows().iter().map(|r| &r.values()[0]).collect()
    }

    #[test]
    fn test_end_to_end() {
        let ds = customers();
        let result = execute(
            "SELECT customerID, country FROM customers WHERE country = 'Germany' ORDER BY customerID DESC",
            &ds,
        )
        .unwrap();
        let names: Vec<&str> = result.columns().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["customerID", "country"]);
        let records: Vec<Vec<&Value>> = result.records().collect();
        assert_eq!(
            records,
            vec![
                vec![&Value::from("C"), &Value::from("Germany")],
                vec![&Value::from("A"), &Value::from("Germany")],
            ]
        );
    }

    #[test]
    fn test_rows_are_shared() {
        let ds = customers();
        let result = execute("SELECT * FROM customers", &ds).unwrap();
        assert_eq!(result.columns(), ds.columns());
        for (a, b) in result.rows().iter().zip(ds.rows()) {
            assert!(Arc::ptr_eq(a, b));
        }
    }

    #[test]
    fn test_empty_dataset_skips_validation() {
        let ds = Dataset::empty();
        let result = execute("DROP TABLE customers", &ds).unwrap();
        assert!(result.is_empty());
        assert_eq!(result.column_count(), 0);
    }

    #[test]
    fn test_grammar_errors() {
        let ds = customers();
        assert_eq!(execute("DELETE FROM customers", &ds).unwrap_err(), QueryError::not_select());
        assert_eq!(
            execute("SELECT * FROM a JOIN b", &ds).unwrap_err(),
            QueryError::join_unsupported()
        );
        assert_eq!(
            execute("SELECT * FROM customers WHERE customerID = 'join'", &ds).unwrap_err(),
            QueryError::join_unsupported()
        );
    }

    #[test]
    fn test_empty_equals_literal_is_ignored() {
        let ds = customers();
        let exec = Interpreter::new()
            .run("SELECT * FROM customers WHERE country = ''", &ds)
            .unwrap();
        assert_eq!(exec.dataset.row_count(), 3);
        assert_eq!(
            exec.notices,
            vec![Notice::IgnoredPredicate {
                clause: String::from("country = ''")
            }]
        );
    }

    #[test]
    fn test_projection_error() {
        let ds = customers();
        let err = execute("SELECT fax FROM customers", &ds).unwrap_err();
        assert!(matches!(err, QueryError::NoMatchingColumns { .. }));
    }

    #[test]
    fn test_filter_on_unprojected_column() {
        let ds = customers();
        let result = execute("SELECT companyName FROM customers WHERE country = 'uk'", &ds).unwrap();
        assert_eq!(result.column_count(), 1);
        assert_eq!(ids(&result), vec![&Value::from("B")]);
    }

    #[test]
    fn test_unsupported_predicate_is_fail_open() {
        let ds = customers();
        let exec = Interpreter::new()
            .run("SELECT * FROM customers WHERE fax IS NULL", &ds)
            .unwrap();
        assert_eq!(exec.dataset.row_count(), 3);
        assert_eq!(
            exec.notices,
            vec![Notice::IgnoredPredicate {
                clause: "fax IS NULL".into()
            }]
        );
    }

    #[test]
    fn test_unsupported_predicate_rejected() {
        let ds = customers();
        let interpreter = Interpreter::with_options(
            ExecuteOptions::new().unsupported_predicate(UnsupportedPredicatePolicy::Reject),
        );
        assert_eq!(
            interpreter.options().get_unsupported_predicate(),
            UnsupportedPredicatePolicy::Reject
        );
        let err = interpreter
            .execute("SELECT * FROM customers WHERE a = 'x' AND b = 'y'", &ds)
            .unwrap_err();
        assert_eq!(err, QueryError::unsupported_predicate("a = 'x' AND b = 'y'"));
        // supported forms are unaffected
        assert!(interpreter
            .execute("SELECT * FROM customers WHERE country = 'UK'", &ds)
            .is_ok());
    }

    #[test]
    fn test_projection_fallback_notice() {
        let ds = customers();
        let exec = Interpreter::new().run("SELECT customerID", &ds).unwrap();
        assert_eq!(exec.dataset.column_count(), 3);
        assert_eq!(exec.notices, vec![Notice::ProjectionFallback]);
    }

    #[test]
    fn test_unknown_sort_column() {
        let ds = customers();
        let exec = Interpreter::new()
            .run("SELECT * FROM customers ORDER BY fax DESC", &ds)
            .unwrap();
        assert_eq!(
            ids(&exec.dataset),
            vec![&Value::from("A"), &Value::from("B"), &Value::from("C")]
        );
        assert_eq!(
            exec.notices,
            vec![Notice::UnknownSortColumn { column: "fax".into() }]
        );
    }

    #[test]
    fn test_group_by_ignored() {
        let ds = customers();
        let exec = Interpreter::new()
            .run("SELECT country FROM customers GROUP BY country", &ds)
            .unwrap();
        assert_eq!(exec.dataset.row_count(), 3);
        assert_eq!(exec.notices, vec![Notice::IgnoredGroupBy]);
    }

    #[test]
    fn test_limit_after_sort() {
        let ds = customers();
        let result = execute("SELECT * FROM customers LIMIT 2 ORDER BY customerID DESC", &ds).unwrap();
        assert_eq!(ids(&result), vec![&Value::from("C"), &Value::from("B")]);
    }

    #[test]
    fn test_unknown_filter_column_keeps_nothing() {
        let ds = customers();
        let result = execute("SELECT * FROM customers WHERE fax = 'x'", &ds).unwrap();
        assert!(result.is_empty());
        assert_eq!(result.column_count(), 3);
    }

    #[test]
    fn test_notice_display() {
        assert_eq!(
            Notice::IgnoredPredicate { clause: "a > 1".into() }.to_string(),
            "Unsupported WHERE clause ignored: a > 1"
        );
    }
}
