//! Projection operator for column selection.

use trellisdb_core::{ColumnSelector, Row, RowHandle};

use crate::error::QueryError;
use crate::exec::operator::{
    BoxedOperator, Operator, OperatorBase, OperatorResult, OperatorState,
};

/// Projection operator.
///
/// Builds, for each input row, a new intermediate row containing the input's
/// fields at the selected positions, in selector order. Duplicate output
/// columns are allowed and output rows are not deduplicated, so output row
/// count always equals input row count. The input row is dropped once its
/// fields are copied.
pub struct ProjectOp {
    /// Base operator state.
    base: OperatorBase,
    /// The positions to keep, over the input's width.
    selector: ColumnSelector,
    /// Input operator.
    input: BoxedOperator,
}

impl ProjectOp {
    /// Creates a new projection operator keeping `columns` of the input, in
    /// the given order.
    ///
    /// # Errors
    ///
    /// Returns a selector construction error if `columns` selects more
    /// positions than the input has or names an out-of-range position.
    pub fn new(input: BoxedOperator, columns: &[usize]) -> Result<Self, QueryError> {
        let selector = ColumnSelector::new(input.n_columns(), columns)?;
        Ok(Self { base: OperatorBase::new(selector.n_selected()), selector, input })
    }

    /// Returns the output column positions, in output order.
    #[must_use]
    pub fn columns(&self) -> &[usize] {
        self.selector.selected_positions()
    }
}

impl Operator for ProjectOp {
    fn open(&mut self) -> OperatorResult<()> {
        self.input.open()?;
        self.base.set_open();
        Ok(())
    }

    fn next(&mut self) -> OperatorResult<Option<RowHandle>> {
        match self.input.next()? {
            Some(row) => {
                let values: Vec<String> = self
                    .selector
                    .selected_positions()
                    .iter()
                    .map(|&position| row.at(position).to_string())
                    .collect();
                self.base.inc_rows_produced();
                // The input row is dropped here.
                Ok(Some(RowHandle::Fresh(Row::literal(values))))
            }
            None => {
                self.base.set_finished();
                Ok(None)
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
        "Project"
    }
}
