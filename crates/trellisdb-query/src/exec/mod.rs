//! Operator protocol and physical operators.
//!
//! Execution is single-threaded, synchronous, and strictly demand-driven: a
//! child produces a row only when its parent asks for one. The only
//! operators that buffer or re-scan are [`SortOp`](operators::SortOp)
//! (drains its child at open) and
//! [`NestedLoopJoinOp`](operators::NestedLoopJoinOp) (restarts its left
//! child). Table storage and indexes are treated as read-only for the
//! duration of a query.

pub mod operator;
pub mod operators;

pub use operator::{BoxedOperator, Operator, OperatorBase, OperatorResult, OperatorState};

use trellisdb_core::RowHandle;

/// Runs an open operator to exhaustion, collecting every row it produces.
///
/// The operator must already be open; it is left in the finished state, not
/// closed, so the caller can close and reopen it.
///
/// # Errors
///
/// Propagates any error the operator raises while producing rows.
pub fn drain(op: &mut dyn Operator) -> OperatorResult<Vec<RowHandle>> {
    let mut rows = Vec::new();
    while let Some(row) = op.next()? {
        rows.push(row);
    }
    Ok(rows)
}
