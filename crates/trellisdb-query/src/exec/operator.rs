//! Operator trait and base types.
//!
//! This module defines the [`Operator`] trait that all execution operators
//! implement, together with the shared lifecycle state machine.

use trellisdb_core::RowHandle;

use crate::error::QueryError;

/// Result type for operator operations.
pub type OperatorResult<T> = Result<T, QueryError>;

/// The state of an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorState {
    /// Operator has not been opened yet.
    Created,
    /// Operator is open and ready to produce rows.
    Open,
    /// Operator has finished producing rows.
    Finished,
    /// Operator has been closed.
    Closed,
}

impl OperatorState {
    /// Returns true if the operator is open.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// Returns true if the operator has finished.
    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Finished)
    }

    /// Returns true if the operator is closed.
    #[must_use]
    pub const fn is_closed(self) -> bool {
        matches!(self, Self::Closed)
    }
}

/// The operator trait for pull-based query execution.
///
/// Operators are organized in a tree matching the plan. Data flows from
/// leaf operators (scans) up through intermediate operators (select,
/// project, join, sort, unique) to the root.
///
/// # Lifecycle
///
/// 1. **Created**: Initial state after construction
/// 2. **Open**: After `open()`; ready to produce rows
/// 3. **Finished**: After `next()` returns `None`; no more rows
/// 4. **Closed**: After `close()`; resources released
///
/// `open()` may be called again from any state, including after `close()`,
/// and restarts the operator: a restarted operator reproduces its output
/// sequence identically. Once `next()` has returned `None` it keeps
/// returning `None` until the operator is reopened.
///
/// # Ownership
///
/// `next()` transfers each [`RowHandle`] to the caller. A caller that stops
/// forwarding a handle simply drops it; base rows survive in table storage,
/// intermediate rows are reclaimed (see [`RowHandle`]).
///
/// # Thread Safety
///
/// The `Send` bound allows operators to be passed between threads, but
/// operators are not `Sync`: they maintain mutable internal state and a
/// plan executes single-threaded.
pub trait Operator: Send {
    /// Opens the operator and prepares it to produce rows.
    ///
    /// This method recursively opens any child operators.
    fn open(&mut self) -> OperatorResult<()>;

    /// Returns the next row, or `None` if there are no more rows.
    ///
    /// This method should be called repeatedly until it returns `None`.
    fn next(&mut self) -> OperatorResult<Option<RowHandle>>;

    /// Closes the operator and releases resources.
    ///
    /// This method recursively closes any child operators.
    fn close(&mut self) -> OperatorResult<()>;

    /// Returns the output column count of this operator.
    ///
    /// Computable without opening.
    fn n_columns(&self) -> usize;

    /// Returns the current state of this operator.
    fn state(&self) -> OperatorState;

    /// Returns the name of this operator type.
    fn name(&self) -> &'static str;
}

/// A boxed operator for dynamic dispatch.
pub type BoxedOperator = Box<dyn Operator>;

/// Base implementation for operators.
///
/// Holds the output width, the lifecycle state, and a rows-produced counter.
#[derive(Debug)]
pub struct OperatorBase {
    /// The output column count.
    n_columns: usize,
    /// The current state.
    state: OperatorState,
    /// Number of rows produced.
    rows_produced: u64,
}

impl OperatorBase {
    /// Creates a new operator base with the given output width.
    #[must_use]
    pub fn new(n_columns: usize) -> Self {
        Self { n_columns, state: OperatorState::Created, rows_produced: 0 }
    }

    /// Returns the output column count.
    #[must_use]
    pub const fn n_columns(&self) -> usize {
        self.n_columns
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> OperatorState {
        self.state
    }

    /// Sets the state to open.
    pub fn set_open(&mut self) {
        self.state = OperatorState::Open;
    }

    /// Sets the state to finished.
    pub fn set_finished(&mut self) {
        self.state = OperatorState::Finished;
    }

    /// Sets the state to closed.
    pub fn set_closed(&mut self) {
        self.state = OperatorState::Closed;
    }

    /// Increments the rows produced counter.
    pub fn inc_rows_produced(&mut self) {
        self.rows_produced += 1;
    }

    /// Returns the number of rows produced.
    #[must_use]
    pub const fn rows_produced(&self) -> u64 {
        self.rows_produced
    }
}
