//! AST module for parsed queries and predicates.

mod predicate;
mod query;

pub use predicate::Predicate;
pub use query::{OrderBy, Projection, Query, SortOrder};
