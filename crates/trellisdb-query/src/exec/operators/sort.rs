//! In-memory sort operator.

use std::cmp::Ordering;
use std::collections::VecDeque;

use trellisdb_core::{Row, RowHandle};

use crate::exec::operator::{
    BoxedOperator, Operator, OperatorBase, OperatorResult, OperatorState,
};

/// Sort operator.
///
/// `open()` drains the entire child into a buffer and orders it by the sort
/// columns (primary first, then secondary, and so on), comparing field
/// values with byte-wise string ordering, ascending; the first differing
/// column decides. Ties (rows equal on every sort column) may come out in
/// any relative order. Every `open()` re-drains and re-sorts, so the
/// operator is fully restartable.
pub struct SortOp {
    /// Base operator state.
    base: OperatorBase,
    /// Sort-column positions, in priority order.
    sort_columns: Vec<usize>,
    /// Input operator.
    input: BoxedOperator,
    /// Sorted rows, handed out front to back.
    sorted: VecDeque<RowHandle>,
}

impl SortOp {
    /// Creates a new sort operator.
    ///
    /// The caller (the plan builder) validates the sort-column positions
    /// against the input's width.
    #[must_use]
    pub fn new(input: BoxedOperator, sort_columns: Vec<usize>) -> Self {
        let n_columns = input.n_columns();
        Self { base: OperatorBase::new(n_columns), sort_columns, input, sorted: VecDeque::new() }
    }

    /// Returns the sort-column positions, in priority order.
    #[must_use]
    pub fn sort_columns(&self) -> &[usize] {
        &self.sort_columns
    }

    /// Compares two rows over the sort columns, first difference deciding.
    fn compare(sort_columns: &[usize], x: &Row, y: &Row) -> Ordering {
        for &column in sort_columns {
            match x.at(column).cmp(y.at(column)) {
                Ordering::Equal => {}
                decided => return decided,
            }
        }
        Ordering::Equal
    }
}

impl Operator for SortOp {
    fn open(&mut self) -> OperatorResult<()> {
        self.input.open()?;
        let mut buffer: Vec<RowHandle> = Vec::new();
        while let Some(row) = self.input.next()? {
            buffer.push(row);
        }
        let sort_columns = &self.sort_columns;
        buffer.sort_unstable_by(|x, y| Self::compare(sort_columns, x, y));
        self.sorted = buffer.into();
        self.base.set_open();
        Ok(())
    }

    fn next(&mut self) -> OperatorResult<Option<RowHandle>> {
        match self.sorted.pop_front() {
            Some(row) => {
                self.base.inc_rows_produced();
                Ok(Some(row))
            }
            None => {
                self.base.set_finished();
                Ok(None)
            }
        }
    }

    fn close(&mut self) -> OperatorResult<()> {
        self.input.close()?;
        // Remaining buffered rows are dropped.
        self.sorted.clear();
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
        "Sort"
    }
}
