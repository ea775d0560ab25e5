//! Plan-building functions.
//!
//! Thin constructors that wire operators together into a plan tree. Each is
//! validated against its child's declared output width at construction
//! time; none contains logic beyond allocation. The resulting
//! [`BoxedOperator`] is consumed through the usual open/next/close protocol.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use trellisdb_core::ColumnNames;
//! use trellisdb_query::plan::{project, sort, table_scan, unique};
//! use trellisdb_storage::Table;
//!
//! let table = Arc::new(Table::new("t", ColumnNames::new(["a", "b"]))?);
//! // All values of column b, deduplicated.
//! let plan = unique(sort(project(table_scan(table), &[1])?, &[0])?);
//! assert_eq!(plan.n_columns(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::sync::Arc;

use trellisdb_core::{CoreError, Row};
use trellisdb_storage::{Index, Table};

use crate::error::QueryError;
use crate::exec::operator::BoxedOperator;
use crate::exec::operators::{
    IndexScanOp, NestedLoopJoinOp, ProjectOp, RowPredicate, SelectOp, SortOp, TableScanOp,
    UniqueOp,
};

/// Returns an operator that scans the rows of the given table in storage
/// (insertion) order.
#[must_use]
pub fn table_scan(table: Arc<Table>) -> BoxedOperator {
    Box::new(TableScanOp::new(table))
}

/// Returns an operator that scans the rows of a table identified by a
/// search of the index.
///
/// The scan begins at the first key `>= lo` and ends at the last key
/// `<= hi`. If `hi` is omitted it is assumed to be the same as `lo`, i.e.
/// the search is for a single key.
#[must_use]
pub fn index_scan(index: Arc<Index>, lo: Row, hi: Option<Row>) -> BoxedOperator {
    Box::new(IndexScanOp::new(index, lo, hi))
}

/// Returns an operator including only those input rows that satisfy the
/// given predicate.
#[must_use]
pub fn select(input: BoxedOperator, predicate: RowPredicate) -> BoxedOperator {
    Box::new(SelectOp::new(input, predicate))
}

/// Returns an operator whose rows contain only the columns at the given
/// positions of the input, in the given order. Duplicates are NOT
/// eliminated.
///
/// # Errors
///
/// Returns an error if `project_columns` selects more positions than the
/// input has or names an out-of-range position.
pub fn project(
    input: BoxedOperator,
    project_columns: &[usize],
) -> Result<BoxedOperator, QueryError> {
    Ok(Box::new(ProjectOp::new(input, project_columns)?))
}

/// Returns an operator containing the join of rows in `left` and `right`.
///
/// The join columns of the left input are given by `left_columns`, those of
/// the right input by `right_columns`, paired positionally. Output rows
/// contain all the columns of the left input followed by the non-join
/// columns of the right input. E.g., if the left input has 5 columns with
/// `left_columns` `(0, 1)`, and the right input has 4 columns with
/// `right_columns` `(2, 3)`, then each output row has all five left columns
/// followed by right columns 0 and 1.
///
/// Matches are fully enumerated only when equal join-key groups are
/// contiguous in each input's scan order; see
/// [`NestedLoopJoinOp`](crate::exec::operators::NestedLoopJoinOp).
///
/// # Errors
///
/// Returns [`QueryError::JoinColumnMismatch`] if the column lists differ in
/// length, or a selector error if either list is invalid for its input.
pub fn nested_loops_join(
    left: BoxedOperator,
    left_columns: &[usize],
    right: BoxedOperator,
    right_columns: &[usize],
) -> Result<BoxedOperator, QueryError> {
    Ok(Box::new(NestedLoopJoinOp::new(left, left_columns, right, right_columns)?))
}

/// Returns an operator sorting its input by the columns at the given
/// positions, primary first, then secondary, and so on.
///
/// # Errors
///
/// Returns an error if any sort-column position is outside the input's
/// width.
pub fn sort(input: BoxedOperator, sort_columns: &[usize]) -> Result<BoxedOperator, QueryError> {
    let n_columns = input.n_columns();
    for &position in sort_columns {
        if position >= n_columns {
            return Err(QueryError::Core(CoreError::ColumnOutOfRange {
                position,
                columns: n_columns,
            }));
        }
    }
    Ok(Box::new(SortOp::new(input, sort_columns.to_vec())))
}

/// Returns an operator eliminating duplicates. This implementation assumes
/// that the input is sorted, which causes duplicates to be adjacent.
#[must_use]
pub fn unique(input: BoxedOperator) -> BoxedOperator {
    Box::new(UniqueOp::new(input))
}
