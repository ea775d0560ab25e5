//! Nested-loop equi-join operator.

use trellisdb_core::{ColumnSelector, Row, RowHandle};

use crate::error::QueryError;
use crate::exec::operator::{
    BoxedOperator, Operator, OperatorBase, OperatorResult, OperatorState,
};

/// Nested-loop equi-join operator.
///
/// Joins left and right inputs on positionally paired join columns: the
/// i-th left join column is compared for exact string equality against the
/// i-th right join column. Each output row contains all left columns
/// followed by the right row's non-join columns in ascending original
/// order, so the output width is
/// `left width + (right width - right join-column count)`.
///
/// # Algorithm
///
/// The operator keeps a current-left-row cursor alive across `next()`
/// calls. Each call pulls one right row, then advances the left side until
/// the pair matches; when the left side is exhausted it drops the right
/// row, pulls the next one, and restarts the left child from the top.
///
/// # Input ordering
///
/// The left-restart policy enumerates every matching pair only when rows
/// with equal join keys are contiguous in each input's scan order (as after
/// an index scan or a sort on the join key). For arbitrarily ordered
/// inputs, matches in non-contiguous positions can be missed. This is the
/// operator's documented contract, not an accident; feed it grouped inputs.
///
/// No outer-join variants are provided.
pub struct NestedLoopJoinOp {
    /// Base operator state.
    base: OperatorBase,
    /// Left (outer) input.
    left: BoxedOperator,
    /// Right (inner) input.
    right: BoxedOperator,
    /// Join-key / pass-through split of the left input.
    left_columns: ColumnSelector,
    /// Join-key / pass-through split of the right input.
    right_columns: ColumnSelector,
    /// Current left row, persistent across `next()` calls.
    current_left: Option<RowHandle>,
}

impl NestedLoopJoinOp {
    /// Creates a new nested-loop join operator.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::JoinColumnMismatch`] if the join-column lists
    /// differ in length, or a selector construction error if either list
    /// names a position outside its input's width.
    pub fn new(
        left: BoxedOperator,
        left_join_columns: &[usize],
        right: BoxedOperator,
        right_join_columns: &[usize],
    ) -> Result<Self, QueryError> {
        if left_join_columns.len() != right_join_columns.len() {
            return Err(QueryError::JoinColumnMismatch {
                left: left_join_columns.len(),
                right: right_join_columns.len(),
            });
        }
        let left_columns = ColumnSelector::new(left.n_columns(), left_join_columns)?;
        let right_columns = ColumnSelector::new(right.n_columns(), right_join_columns)?;
        let n_columns = left_columns.n_columns() + right_columns.n_unselected();
        Ok(Self {
            base: OperatorBase::new(n_columns),
            left,
            right,
            left_columns,
            right_columns,
            current_left: None,
        })
    }

    /// Returns true if the paired join-column values are all equal.
    fn matches(&self, left: &Row, right: &Row) -> bool {
        (0..self.left_columns.n_selected()).all(|i| {
            left.at(self.left_columns.selected(i)) == right.at(self.right_columns.selected(i))
        })
    }

    /// Builds the joined output row: all left columns, then the right row's
    /// non-join columns in ascending original order.
    fn join_rows(&self, left: &Row, right: &Row) -> RowHandle {
        let mut values = Vec::with_capacity(self.base.n_columns());
        values.extend(left.values().iter().cloned());
        values.extend(
            self.right_columns
                .unselected_positions()
                .iter()
                .map(|&position| right.at(position).to_string()),
        );
        RowHandle::Fresh(Row::literal(values))
    }
}

impl Operator for NestedLoopJoinOp {
    fn open(&mut self) -> OperatorResult<()> {
        self.left.open()?;
        self.right.open()?;
        self.current_left = self.left.next()?;
        self.base.set_open();
        Ok(())
    }

    fn next(&mut self) -> OperatorResult<Option<RowHandle>> {
        let mut right_row = self.right.next()?;

        // Advance the left cursor until it matches the right row. When the
        // left side runs out, move to the next right row and restart the
        // left child for it.
        loop {
            let matched = match (self.current_left.as_ref(), right_row.as_ref()) {
                (Some(left), Some(right)) => self.matches(left, right),
                _ => break,
            };
            if matched {
                break;
            }
            // The replaced left row is dropped (reclaimed if intermediate).
            self.current_left = self.left.next()?;
            if self.current_left.is_none() {
                right_row = self.right.next()?;
                if right_row.is_some() {
                    self.left.close()?;
                    self.left.open()?;
                    self.current_left = self.left.next()?;
                }
            }
        }

        let joined = match (self.current_left.as_ref(), right_row.as_ref()) {
            (Some(left), Some(right)) => {
                self.base.inc_rows_produced();
                Some(self.join_rows(left, right))
            }
            _ => {
                self.base.set_finished();
                None
            }
        };
        // The right row is dropped here, before returning.
        Ok(joined)
    }

    fn close(&mut self) -> OperatorResult<()> {
        self.left.close()?;
        self.right.close()?;
        // Drop the held left row.
        self.current_left = None;
        self.base.set_closed();
        Ok(())
    }

    fn n_columns(&self) -> usize {
        self.base.n_columns()
    }

    fn state(&self) -> OperatorState {
        self.base.state()
    }

    fn name(&self) -> &'static str {
        "NestedLoopJoin"
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use trellisdb_core::ColumnNames;
    use trellisdb_storage::Table;

    use crate::exec::operators::scan::TableScanOp;

    use super::*;

    fn make_table(name: &str, columns: &[&str], rows: &[&[&str]]) -> Arc<Table> {
        let table = Table::new(name, ColumnNames::new(columns.iter().copied())).unwrap();
        for row in rows {
            table.insert(row.iter().map(|v| (*v).to_string()).collect()).unwrap();
        }
        Arc::new(table)
    }

    fn scan(table: &Arc<Table>) -> BoxedOperator {
        Box::new(TableScanOp::new(Arc::clone(table)))
    }

    fn drain_values(op: &mut NestedLoopJoinOp) -> Vec<Vec<String>> {
        let mut rows = Vec::new();
        while let Some(row) = op.next().unwrap() {
            assert!(row.is_intermediate());
            rows.push(row.values().to_vec());
        }
        rows
    }

    fn row_of(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn join_width_is_left_plus_right_passthrough() {
        let r = make_table("r", &["a", "b", "c"], &[]);
        let s = make_table("s", &["c", "d", "e"], &[]);
        let op = NestedLoopJoinOp::new(scan(&r), &[2], scan(&s), &[0]).unwrap();
        assert_eq!(op.n_columns(), 5);
    }

    #[test]
    fn join_both_empty() {
        let r = make_table("r", &["a", "b", "c"], &[]);
        let s = make_table("s", &["c", "d", "e"], &[]);
        let mut op = NestedLoopJoinOp::new(scan(&r), &[2], scan(&s), &[0]).unwrap();
        for _ in 0..2 {
            op.open().unwrap();
            assert!(op.next().unwrap().is_none());
            assert!(op.next().unwrap().is_none());
            op.close().unwrap();
        }
    }

    #[test]
    fn join_left_empty() {
        let r = make_table("r", &["a", "b", "c"], &[]);
        let s = make_table(
            "s",
            &["c", "d", "e"],
            &[&["a", "12", "1"], &["c", "56", "1"], &["d", "--", "-"]],
        );
        let mut op = NestedLoopJoinOp::new(scan(&r), &[2], scan(&s), &[0]).unwrap();
        for _ in 0..2 {
            op.open().unwrap();
            assert!(drain_values(&mut op).is_empty());
            op.close().unwrap();
        }
    }

    #[test]
    fn join_right_empty() {
        let r = make_table(
            "r",
            &["a", "b", "c"],
            &[&["1", "2", "a"], &["3", "4", "b"], &["5", "6", "c"]],
        );
        let s = make_table("s", &["c", "d", "e"], &[]);
        let mut op = NestedLoopJoinOp::new(scan(&r), &[2], scan(&s), &[0]).unwrap();
        for _ in 0..2 {
            op.open().unwrap();
            assert!(drain_values(&mut op).is_empty());
            op.close().unwrap();
        }
    }

    #[test]
    fn join_contiguous_groups() {
        let r = make_table(
            "r",
            &["a", "b", "c"],
            &[&["1", "2", "a"], &["3", "4", "b"], &["5", "6", "c"]],
        );
        let s = make_table(
            "s",
            &["c", "d", "e"],
            &[
                &["a", "12", "1"],
                &["a", "12", "2"],
                &["c", "56", "1"],
                &["c", "56", "2"],
                &["c", "56", "3"],
                &["d", "--", "-"],
            ],
        );
        let mut op = NestedLoopJoinOp::new(scan(&r), &[2], scan(&s), &[0]).unwrap();
        assert_eq!(op.n_columns(), 5);

        for _ in 0..2 {
            op.open().unwrap();
            let rows = drain_values(&mut op);
            assert_eq!(
                rows,
                vec![
                    row_of(&["1", "2", "a", "12", "1"]),
                    row_of(&["1", "2", "a", "12", "2"]),
                    row_of(&["5", "6", "c", "56", "1"]),
                    row_of(&["5", "6", "c", "56", "2"]),
                    row_of(&["5", "6", "c", "56", "3"]),
                ]
            );
            op.close().unwrap();
        }
    }

    #[test]
    fn join_multi_column_key() {
        let r = make_table("r", &["a", "b"], &[&["k1", "k2"], &["k1", "k3"]]);
        let s = make_table("s", &["x", "y", "z"], &[&["k1", "k2", "v"]]);
        let mut op = NestedLoopJoinOp::new(scan(&r), &[0, 1], scan(&s), &[0, 1]).unwrap();
        assert_eq!(op.n_columns(), 3);
        op.open().unwrap();
        let rows = drain_values(&mut op);
        assert_eq!(rows, vec![row_of(&["k1", "k2", "v"])]);
        op.close().unwrap();
    }

    #[test]
    fn join_rejects_mismatched_column_lists() {
        let r = make_table("r", &["a", "b", "c"], &[]);
        let s = make_table("s", &["c", "d", "e"], &[]);
        // `NestedLoopJoinOp` has no `Debug`, so take the error side directly.
        let err = NestedLoopJoinOp::new(scan(&r), &[2], scan(&s), &[0, 1]).err();
        assert!(matches!(err, Some(QueryError::JoinColumnMismatch { left: 1, right: 2 })));
    }
}
