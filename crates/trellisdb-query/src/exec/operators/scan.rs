//! Scan operators for reading data from tables.
//!
//! This module provides operators for:
//! - Full table scans in storage (insertion) order
//! - Index range scans in key order
//!
//! Both scans yield base rows: shared references into table storage that
//! the pipeline never frees.

use std::sync::Arc;

use trellisdb_core::{Row, RowHandle};
use trellisdb_storage::{Index, Table};

use crate::exec::operator::{Operator, OperatorBase, OperatorResult, OperatorState};

/// Full table scan operator.
///
/// Yields every row of the table in insertion order. `open()` captures a
/// point-in-time snapshot of the row collection, so each open over an
/// unchanged table reproduces the same sequence.
pub struct TableScanOp {
    /// Base operator state.
    base: OperatorBase,
    /// The table being scanned.
    table: Arc<Table>,
    /// Snapshot captured at open.
    rows: Vec<Arc<Row>>,
    /// Cursor into the snapshot.
    current_row: usize,
}

impl TableScanOp {
    /// Creates a new table scan operator.
    #[must_use]
    pub fn new(table: Arc<Table>) -> Self {
        let n_columns = table.n_columns();
        Self { base: OperatorBase::new(n_columns), table, rows: Vec::new(), current_row: 0 }
    }

    /// Returns the name of the table being scanned.
    #[must_use]
    pub fn table_name(&self) -> &str {
        self.table.name()
    }
}

impl Operator for TableScanOp {
    fn open(&mut self) -> OperatorResult<()> {
        self.rows = self.table.snapshot()?;
        self.current_row = 0;
        self.base.set_open();
        Ok(())
    }

    fn next(&mut self) -> OperatorResult<Option<RowHandle>> {
        if self.current_row >= self.rows.len() {
            self.base.set_finished();
            return Ok(None);
        }

        let row = Arc::clone(&self.rows[self.current_row]);
        self.current_row += 1;
        self.base.inc_rows_produced();

        Ok(Some(RowHandle::Base(row)))
    }

    fn close(&mut self) -> OperatorResult<()> {
        self.rows.clear();
        self.current_row = 0;
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
        "TableScan"
    }
}

/// Index range scan operator.
///
/// Yields the base rows whose index key `k` satisfies `lo <= k <= hi`, in
/// key order. When no high key is given the scan is a point lookup
/// (`hi = lo`). Output width is the indexed table's column count; the
/// index returns whole rows, not just key columns.
pub struct IndexScanOp {
    /// Base operator state.
    base: OperatorBase,
    /// The index being scanned.
    index: Arc<Index>,
    /// Low search key.
    lo: Vec<String>,
    /// High search key (equal to `lo` for a point lookup).
    hi: Vec<String>,
    /// Rows in the key range, materialized at open.
    rows: Vec<Arc<Row>>,
    /// Cursor into the range.
    current_row: usize,
}

impl IndexScanOp {
    /// Creates a new index scan operator over `lo ..= hi`.
    ///
    /// `lo` and `hi` are search-key rows: their fields are the key-column
    /// values, in the index's key-column order. If `hi` is `None` the scan
    /// looks up exactly `lo`.
    #[must_use]
    pub fn new(index: Arc<Index>, lo: Row, hi: Option<Row>) -> Self {
        let lo: Vec<String> = lo.values().to_vec();
        let hi = hi.map_or_else(|| lo.clone(), |row| row.values().to_vec());
        let n_columns = index.n_columns();
        Self {
            base: OperatorBase::new(n_columns),
            index,
            lo,
            hi,
            rows: Vec::new(),
            current_row: 0,
        }
    }

    /// Returns the low search key.
    #[must_use]
    pub fn lo(&self) -> &[String] {
        &self.lo
    }

    /// Returns the high search key.
    #[must_use]
    pub fn hi(&self) -> &[String] {
        &self.hi
    }
}

impl Operator for IndexScanOp {
    fn open(&mut self) -> OperatorResult<()> {
        self.rows = self.index.range(&self.lo, &self.hi);
        self.current_row = 0;
        self.base.set_open();
        Ok(())
    }

    fn next(&mut self) -> OperatorResult<Option<RowHandle>> {
        if self.current_row >= self.rows.len() {
            self.base.set_finished();
            return Ok(None);
        }

        let row = Arc::clone(&self.rows[self.current_row]);
        self.current_row += 1;
        self.base.inc_rows_produced();

        Ok(Some(RowHandle::Base(row)))
    }

    fn close(&mut self) -> OperatorResult<()> {
        self.rows.clear();
        self.current_row = 0;
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
        "IndexScan"
    }
}
