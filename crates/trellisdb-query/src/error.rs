//! Error types for the query crate.

use thiserror::Error;
use trellisdb_core::CoreError;
use trellisdb_storage::StorageError;

/// Errors that can occur while building or running a query plan.
///
/// Once a plan is successfully built, `open`/`next`/`close` are not expected
/// to fail under correct use; a failure there indicates a defect in how the
/// plan was assembled, not a data condition to recover from.
#[derive(Debug, Error)]
pub enum QueryError {
    /// A join's left and right join-column lists differ in length.
    #[error("join column lists differ in length: left {left}, right {right}")]
    JoinColumnMismatch {
        /// Length of the left join-column list.
        left: usize,
        /// Length of the right join-column list.
        right: usize,
    },

    /// A column-selection error (out-of-range or oversized selection).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A storage error surfaced while scanning.
    #[error(transparent)]
    Storage(#[from] StorageError),
}
