//! Select operator for predicate evaluation.

use trellisdb_core::{Row, RowHandle};

use crate::exec::operator::{
    BoxedOperator, Operator, OperatorBase, OperatorResult, OperatorState,
};

/// A boolean row predicate.
pub type RowPredicate = Box<dyn Fn(&Row) -> bool + Send>;

/// Select operator.
///
/// Evaluates a predicate for each input row and only passes through rows
/// where the predicate holds. Rejected rows are dropped immediately: an
/// intermediate row is reclaimed the moment it is rejected, never buffered.
/// Order-preserving: surviving rows appear in the child's order.
pub struct SelectOp {
    /// Base operator state.
    base: OperatorBase,
    /// The predicate to evaluate.
    predicate: RowPredicate,
    /// Input operator.
    input: BoxedOperator,
}

impl SelectOp {
    /// Creates a new select operator.
    #[must_use]
    pub fn new(input: BoxedOperator, predicate: RowPredicate) -> Self {
        let n_columns = input.n_columns();
        Self { base: OperatorBase::new(n_columns), predicate, input }
    }
}

impl Operator for SelectOp {
    fn open(&mut self) -> OperatorResult<()> {
        self.input.open()?;
        self.base.set_open();
        Ok(())
    }

    fn next(&mut self) -> OperatorResult<Option<RowHandle>> {
        loop {
            match self.input.next()? {
                Some(row) => {
                    if (self.predicate)(&row) {
                        self.base.inc_rows_produced();
                        return Ok(Some(row));
                    }
                    // Rejected row dropped here; base rows survive in
                    // storage, intermediate rows are reclaimed.
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
        "Select"
    }
}
