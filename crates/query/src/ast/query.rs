//! Query AST definitions.

use super::predicate::Predicate;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// Column selection of a query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Projection {
    /// `SELECT *`
    All,
    /// Requested identifiers, trimmed and lower-cased, in the order written.
    Columns(Vec<String>),
    /// The identifier list could not be extracted (no `FROM`, empty list).
    /// Evaluates like `All`.
    Unresolved,
}

/// Sort order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// `ORDER BY column [ASC|DESC]`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderBy {
    /// Column name as written.
    pub column: String,
    pub order: SortOrder,
}

impl OrderBy {
    pub fn new(column: impl Into<String>, order: SortOrder) -> Self {
        Self {
            column: column.into(),
            order,
        }
    }

    pub fn asc(column: impl Into<String>) -> Self {
        Self::new(column, SortOrder::Asc)
    }

    pub fn desc(column: impl Into<String>) -> Self {
        Self::new(column, SortOrder::Desc)
    }
}

/// A parsed query.
///
/// Clauses are stored by role, not by position: evaluation always runs
/// projection, filter, ordering and limit in that order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Query {
    pub projection: Projection,
    /// Table name as written. Never validated.
    pub table: Option<String>,
    pub predicate: Option<Predicate>,
    pub order_by: Option<OrderBy>,
    pub limit: Option<usize>,
    /// Whether a `GROUP BY` clause was present. It is never evaluated.
    pub group_by: bool,
}

impl Query {
    /// Creates a `SELECT * FROM table` query.
    pub fn select_all(table: impl Into<String>) -> Self {
        Self {
            projection: Projection::All,
            table: Some(table.into()),
            predicate: None,
            order_by: None,
            limit: None,
            group_by: false,
        }
    }

    /// Returns true if the WHERE clause is present but not one of the
    /// supported forms.
    pub fn has_unsupported_predicate(&self) -> bool {
        matches!(&self.predicate, Some(p) if !p.is_supported())
    }
}

impl fmt::Display for Query {
    /// Renders the query in canonical form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SELECT ")?;
        match &self.projection {
            Projection::All | Projection::Unresolved => f.write_str("*")?,
            Projection::Columns(cols) => {
                for (i, c) in cols.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str(c)?;
                }
            }
        }
        if let Some(table) = &self.table {
            write!(f, " FROM {}", table)?;
        }
        if let Some(predicate) = &self.predicate {
            write!(f, " WHERE {}", predicate)?;
        }
        if let Some(order_by) = &self.order_by {
            write!(f, " ORDER BY {}", order_by.column)?;
            if order_by.order == SortOrder::Desc {
                f.write_str(" DESC")?;
            }
        }
        if let Some(limit) = self.limit {
            write!(f, " LIMIT {}", limit)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    #[test]
    fn test_select_all() {
        let q = Query::select_all("customers");
        assert_eq!(q.projection, Projection::All);
        assert_eq!(q.table.as_deref(), Some("customers"));
        assert!(!q.has_unsupported_predicate());
    }

    #[test]
    fn test_unsupported_predicate_flag() {
        let mut q = Query::select_all("t");
        q.predicate = Some(Predicate::unsupported("a = 'x' AND b = 'y'"));
        assert!(q.has_unsupported_predicate());
    }

    #[test]
    fn test_display() {
        let q = Query {
            projection: Projection::Columns(vec!["customerid".into(), "country".into()]),
            table: Some("customers".into()),
            predicate: Some(Predicate::equals("country", "Germany")),
            order_by: Some(OrderBy::desc("customerID")),
            limit: Some(5),
            group_by: false,
        };
        assert_eq!(
            q.to_string(),
            "SELECT customerid, country FROM customers WHERE country = 'Germany' ORDER BY customerID DESC LIMIT 5"
        );
    }
}
