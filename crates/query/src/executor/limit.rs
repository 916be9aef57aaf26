//! Limit executor.

use alloc::sync::Arc;
use alloc::vec::Vec;
use querymate_core::Row;

/// Limit executor - keeps the first `limit` rows.
pub struct LimitExecutor {
    limit: usize,
}

impl LimitExecutor {
    /// Creates a new limit executor.
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    /// Executes the limit on the input rows.
    pub fn execute(&self, mut input: Vec<Arc<Row>>) -> Vec<Arc<Row>> {
        input.truncate(self.limit);
        input
    }
}
