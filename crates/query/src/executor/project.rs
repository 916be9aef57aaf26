//! Project executor.

use crate::ast::Projection;
use crate::error::{QueryError, QueryResult};
use alloc::string::String;
use alloc::vec::Vec;
use hashbrown::HashSet;
use querymate_core::pattern_match::fold;
use querymate_core::ColumnDescriptor;

/// Project executor - selects the columns a query asks for.
///
/// Rows are untouched: projection only narrows the column list, keeping the
/// input's column order regardless of the order names were requested in.
pub struct ProjectExecutor {
    /// Folded requested names, or `None` to keep every column.
    requested: Option<Vec<String>>,
}

impl ProjectExecutor {
    /// Creates a project executor for a parsed projection.
    pub fn new(projection: &Projection) -> Self {
        match projection {
            Projection::All | Projection::Unresolved => Self::all(),
            Projection::Columns(names) => Self::columns(names.iter().map(String::as_str)),
        }
    }

    /// Keeps every column.
    pub fn all() -> Self {
        Self { requested: None }
    }

    /// Keeps the columns whose name matches one of `names`, ignoring case.
    pub fn columns<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            requested: Some(names.into_iter().map(fold).collect()),
        }
    }

    /// Resolves the projected columns of `columns`.
    pub fn execute(&self, columns: &[ColumnDescriptor]) -> QueryResult<Vec<ColumnDescriptor>> {
        let requested = match &self.requested {
            None => return Ok(columns.to_vec()),
            Some(requested) => requested,
        };

        let wanted: HashSet<&str> = requested.iter().map(String::as_str).collect();
        let projected: Vec<ColumnDescriptor> = columns
            .iter()
            .filter(|c| wanted.contains(fold(c.name()).as_str()))
            .cloned()
            .collect();

        if projected.is_empty() && !requested.is_empty() {
            return Err(QueryError::no_matching_columns(requested.clone()));
        }
        Ok(projected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use querymate_core::DataType;

    fn columns() -> Vec<ColumnDescriptor> {
        vec![
            ColumnDescriptor::new("customerID", DataType::String),
            ColumnDescriptor::new("companyName", DataType::String),
            ColumnDescriptor::new("country", DataType::String),
        ]
    }

    fn names(cols: &[ColumnDescriptor]) -> Vec<&str> {
        cols.iter().map(|c| c.name()).collect()
    }

    #[test]
    fn test_project_all() {
        let cols = columns();
        let result = ProjectExecutor::new(&Projection::All).execute(&cols).unwrap();
        assert_eq!(result, cols);
        let result = ProjectExecutor::new(&Projection::Unresolved).execute(&cols).unwrap();
        assert_eq!(result, cols);
    }

    #[test]
    fn test_project_keeps_dataset_order() {
        let cols = columns();
        let result = ProjectExecutor::columns(["country", "CUSTOMERID"]).execute(&cols).unwrap();
        assert_eq!(names(&result), vec!["customerID", "country"]);
    }

    #[test]
    fn test_project_ignores_unknown_names() {
        let cols = columns();
        let result = ProjectExecutor::columns(["fax", "country"]).execute(&cols).unwrap();
        assert_eq!(names(&result), vec!["country"]);
    }

    #[test]
    fn test_project_no_match() {
        let cols = columns();
        let err = ProjectExecutor::columns(["fax", "phone"]).execute(&cols).unwrap_err();
        assert_eq!(
            err,
            QueryError::no_matching_columns(vec!["fax".into(), "phone".into()])
        );
    }
}
