//! Sort executor.

use crate::ast::SortOrder;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cmp::Ordering;
use querymate_core::{Row, Value};

/// Sort executor - stable single-key sort with nulls last.
pub struct SortExecutor {
    /// Field index, or `None` when the column did not resolve.
    index: Option<usize>,
    order: SortOrder,
}

impl SortExecutor {
    /// Creates a new sort executor.
    pub fn new(index: Option<usize>, order: SortOrder) -> Self {
        Self { index, order }
    }

    /// Executes the sort on the input rows.
    ///
    /// An unresolved column sorts as all-null, which leaves the order as is.
    pub fn execute(&self, mut input: Vec<Arc<Row>>) -> Vec<Arc<Row>> {
        if let Some(index) = self.index {
            input.sort_by(|a, b| self.compare(a.get(index), b.get(index)));
        }
        input
    }

    fn compare(&self, a: Option<&Value>, b: Option<&Value>) -> Ordering {
        let a = a.filter(|v| !v.is_null());
        let b = b.filter(|v| !v.is_null());
        match (a, b) {
            (Some(av), Some(bv)) => match self.order {
                SortOrder::Asc => av.cmp(bv),
                SortOrder::Desc => bv.cmp(av),
            },
            // nulls trail in both directions
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (None, None) => Ordering::Equal,
        }
    }
}
