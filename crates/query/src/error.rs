//! Error types for query parsing and execution.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use querymate_core::Error;

/// Result type alias for query operations.
pub type QueryResult<T> = core::result::Result<T, QueryError>;

pub(crate) const NOT_SELECT: &str = "Query must start with SELECT";
pub(crate) const JOIN_UNSUPPORTED: &str = "Unsupported SQL syntax. JOIN clauses are not supported.";

/// Fatal query errors. Each one aborts execution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryError {
    /// The statement is outside the accepted grammar.
    Grammar { message: String },
    /// None of the requested columns exist in the dataset.
    NoMatchingColumns { requested: Vec<String> },
    /// The WHERE clause is not a supported form and the policy rejects it.
    UnsupportedPredicate { clause: String },
    /// Building the result dataset failed.
    Dataset(Error),
}

impl QueryError {
    /// Creates a grammar error.
    pub fn grammar(message: impl Into<String>) -> Self {
        QueryError::Grammar {
            message: message.into(),
        }
    }

    /// Grammar error for statements that do not start with `SELECT`.
    pub fn not_select() -> Self {
        Self::grammar(NOT_SELECT)
    }

    /// Grammar error for statements containing `JOIN`.
    pub fn join_unsupported() -> Self {
        Self::grammar(JOIN_UNSUPPORTED)
    }

    /// Creates a projection error.
    pub fn no_matching_columns(requested: Vec<String>) -> Self {
        QueryError::NoMatchingColumns { requested }
    }

    /// Creates an unsupported predicate error.
    pub fn unsupported_predicate(clause: impl Into<String>) -> Self {
        QueryError::UnsupportedPredicate {
            clause: clause.into(),
        }
    }

    /// Returns true for grammar errors.
    pub fn is_grammar(&self) -> bool {
        matches!(self, QueryError::Grammar { .. })
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::Grammar { message } => f.write_str(message),
            QueryError::NoMatchingColumns { .. } => {
                f.write_str("None of the selected columns match the dataset")
            }
            QueryError::UnsupportedPredicate { clause } => {
                write!(f, "Unsupported WHERE clause: {}", clause)
            }
            QueryError::Dataset(e) => write!(f, "{}", e),
        }
    }
}

impl From<Error> for QueryError {
    fn from(e: Error) -> Self {
        QueryError::Dataset(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    #[test]
    fn test_messages() {
        assert_eq!(QueryError::not_select().to_string(), "Query must start with SELECT");
        assert_eq!(
            QueryError::join_unsupported().to_string(),
            "Unsupported SQL syntax. JOIN clauses are not supported."
        );
        assert_eq!(
            QueryError::no_matching_columns(vec!["fax".into()]).to_string(),
            "None of the selected columns match the dataset"
        );
        assert_eq!(
            QueryError::unsupported_predicate("a > 1").to_string(),
            "Unsupported WHERE clause: a > 1"
        );
    }

    #[test]
    fn test_from_core_error() {
        let err: QueryError = Error::column_not_found("x").into();
        assert_eq!(err, QueryError::Dataset(Error::column_not_found("x")));
        assert_eq!(err.to_string(), "Column not found: x");
        assert!(!err.is_grammar());
        assert!(QueryError::not_select().is_grammar());
    }
}
