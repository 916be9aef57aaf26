//! Query executor module.
//!
//! Each stage works on shared full-width rows (`Arc<Row>`) and never copies
//! or mutates row contents.

mod filter;
mod limit;
mod project;
mod sort;

pub use filter::{BoundPredicate, FilterExecutor, RowFilter};
pub use limit::LimitExecutor;
pub use project::ProjectExecutor;
pub use sort::SortExecutor;
