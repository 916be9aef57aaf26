//! WHERE clause predicates.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// The single WHERE condition a query may carry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Predicate {
    /// `column = 'value'`
    Equals { column: String, value: String },
    /// `column LIKE '%text%'`; `text` has the wrapping `%` removed.
    Like { column: String, text: String },
    /// `column IN ('a', 'b', ...)`
    In { column: String, values: Vec<String> },
    /// Any WHERE clause outside the three forms above, kept verbatim.
    Unsupported { clause: String },
}

impl Predicate {
    /// Creates an equals predicate.
    pub fn equals(column: impl Into<String>, value: impl Into<String>) -> Self {
        Predicate::Equals {
            column: column.into(),
            value: value.into(),
        }
    }

    /// Creates a substring predicate.
    pub fn like(column: impl Into<String>, text: impl Into<String>) -> Self {
        Predicate::Like {
            column: column.into(),
            text: text.into(),
        }
    }

    /// Creates a membership predicate.
    pub fn in_list<I, S>(column: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Predicate::In {
            column: column.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates an unsupported predicate.
    pub fn unsupported(clause: impl Into<String>) -> Self {
        Predicate::Unsupported {
            clause: clause.into(),
        }
    }

    /// Returns the column this predicate tests, if it is a supported form.
    pub fn column(&self) -> Option<&str> {
        match self {
            Predicate::Equals { column, .. }
            | Predicate::Like { column, .. }
            | Predicate::In { column, .. } => Some(column),
            Predicate::Unsupported { .. } => None,
        }
    }

    /// Returns false for `Unsupported`.
    #[inline]
    pub fn is_supported(&self) -> bool {
        !matches!(self, Predicate::Unsupported { .. })
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Equals { column, value } => {
                write!(f, "{} = ", column)?;
                write_literal(f, value)
            }
            Predicate::Like { column, text } => {
                write!(f, "{} LIKE '%", column)?;
                f.write_str(&text.replace('\'', "''"))?;
                f.write_str("%'")
            }
            Predicate::In { column, values } => {
                write!(f, "{} IN (", column)?;
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write_literal(f, v)?;
                }
                f.write_str(")")
            }
            Predicate::Unsupported { clause } => f.write_str(clause),
        }
    }
}

fn write_literal(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    write!(f, "'{}'", value.replace('\'', "''"))
}
