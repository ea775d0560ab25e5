//! Adjacent-duplicate elimination operator.

use trellisdb_core::RowHandle;

use crate::exec::operator::{
    BoxedOperator, Operator, OperatorBase, OperatorResult, OperatorState,
};

/// Unique operator.
///
/// Drops input rows whose full field sequence equals the last row emitted.
/// The operator does not re-sort: it only removes *adjacent* duplicates, so
/// correctness depends on the caller feeding grouped input, typically a
/// [`SortOp`](super::SortOp) immediately upstream. A duplicate appearing
/// again after different rows is emitted again.
///
/// The last-emitted template starts as the empty row at each `open()`, so
/// the first non-empty input row is always treated as distinct. (A
/// zero-width first row equals the empty template and is suppressed.)
pub struct UniqueOp {
    /// Base operator state.
    base: OperatorBase,
    /// Input operator.
    input: BoxedOperator,
    /// Field values of the last emitted row.
    last_emitted: Vec<String>,
}

impl UniqueOp {
    /// Creates a new unique operator.
    #[must_use]
    pub fn new(input: BoxedOperator) -> Self {
        let n_columns = input.n_columns();
        Self { base: OperatorBase::new(n_columns), input, last_emitted: Vec::new() }
    }
}

impl Operator for UniqueOp {
    fn open(&mut self) -> OperatorResult<()> {
        self.input.open()?;
        self.last_emitted.clear();
        self.base.set_open();
        Ok(())
    }

    fn next(&mut self) -> OperatorResult<Option<RowHandle>> {
        loop {
            match self.input.next()? {
                Some(row) => {
                    if row.values() != self.last_emitted.as_slice() {
                        self.last_emitted = row.values().to_vec();
                        self.base.inc_rows_produced();
                        return Ok(Some(row));
                    }
                    // Duplicate of the last emitted row; dropped here.
                }
                None => {
                    self.base.set_finished();
                    return Ok(None);
                }
            }
        }
    }

    fn close(&mut self) -> OperatorResult<()> {
        self.input.close()?;
        self.last_emitted.clear();
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
        "Unique"
    }
}
