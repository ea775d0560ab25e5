//! Append-only, order-preserving table storage.

use std::sync::{Arc, RwLock};

use trellisdb_core::{ColumnNames, Row};

use crate::error::StorageError;
use crate::index::Index;

/// An in-memory table: named columns, an append-ordered row collection, and
/// zero or more ordered indexes built over it.
///
/// Rows are stored as `Arc<Row>` so scans and indexes can share them without
/// copying; a row lives exactly as long as its table does. Interior locking
/// lets a catalog hand out `Arc<Table>` handles while rows are still being
/// loaded between queries; during a query the execution layer only reads.
///
/// # Example
///
/// ```
/// use trellisdb_core::ColumnNames;
/// use trellisdb_storage::Table;
///
/// let table = Table::new("user", ColumnNames::new(["id", "name"]))?;
/// table.insert(vec!["1".into(), "ada".into()])?;
/// assert_eq!(table.row_count()?, 1);
/// # Ok::<(), trellisdb_storage::StorageError>(())
/// ```
#[derive(Debug)]
pub struct Table {
    name: String,
    columns: Arc<ColumnNames>,
    rows: RwLock<Vec<Arc<Row>>>,
    indexes: RwLock<Vec<Arc<Index>>>,
}

impl Table {
    /// Creates an empty table with the given name and column names.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::EmptyColumns`] for a zero-column table and
    /// [`StorageError::DuplicateColumn`] when a column name repeats.
    pub fn new(name: impl Into<String>, columns: ColumnNames) -> Result<Self, StorageError> {
        if columns.is_empty() {
            return Err(StorageError::EmptyColumns);
        }
        if let Some(duplicate) = columns.first_duplicate() {
            return Err(StorageError::DuplicateColumn { name: duplicate.to_string() });
        }
        Ok(Self {
            name: name.into(),
            columns: Arc::new(columns),
            rows: RwLock::new(Vec::new()),
            indexes: RwLock::new(Vec::new()),
        })
    }

    /// Returns the table's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the table's column names.
    #[must_use]
    pub fn columns(&self) -> &Arc<ColumnNames> {
        &self.columns
    }

    /// Returns the table's column count.
    #[must_use]
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Appends a row with the given field values.
    ///
    /// The stored row is a base row carrying a back-reference to this
    /// table's column names for name lookup. Indexes already built over the
    /// table are not updated.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::RowWidthMismatch`] if the value count does
    /// not equal the column count.
    pub fn insert(&self, values: Vec<String>) -> Result<(), StorageError> {
        if values.len() != self.columns.len() {
            return Err(StorageError::RowWidthMismatch {
                expected: self.columns.len(),
                actual: values.len(),
            });
        }
        let row = Arc::new(Row::base(Arc::clone(&self.columns), values));
        self.rows
            .write()
            .map_err(|_| StorageError::LockPoisoned("table rows".to_string()))?
            .push(row);
        Ok(())
    }

    /// Returns a point-in-time snapshot of the row collection, in insertion
    /// order.
    ///
    /// The snapshot shares the rows themselves; only the list is cloned.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::LockPoisoned`] if the row lock is poisoned.
    pub fn snapshot(&self) -> Result<Vec<Arc<Row>>, StorageError> {
        Ok(self
            .rows
            .read()
            .map_err(|_| StorageError::LockPoisoned("table rows".to_string()))?
            .clone())
    }

    /// Returns the current number of rows.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::LockPoisoned`] if the row lock is poisoned.
    pub fn row_count(&self) -> Result<usize, StorageError> {
        Ok(self
            .rows
            .read()
            .map_err(|_| StorageError::LockPoisoned("table rows".to_string()))?
            .len())
    }

    /// Builds an ordered index over the given key columns, eagerly, from the
    /// table's current rows.
    ///
    /// The index is registered with the table and returned. It is not
    /// maintained as further rows are inserted; build indexes after loading.
    /// Duplicate keys keep the first-inserted row (see [`Index`]).
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::UnknownColumn`] if a key column is not a
    /// column of this table.
    pub fn add_index(&self, key_columns: &[&str]) -> Result<Arc<Index>, StorageError> {
        let mut key_positions = Vec::with_capacity(key_columns.len());
        for name in key_columns {
            let position = self
                .columns
                .position(name)
                .ok_or_else(|| StorageError::UnknownColumn { name: (*name).to_string() })?;
            key_positions.push(position);
        }
        let rows = self.snapshot()?;
        let index = Arc::new(Index::build(key_positions, self.columns.len(), &rows));
        self.indexes
            .write()
            .map_err(|_| StorageError::LockPoisoned("table indexes".to_string()))?
            .push(Arc::clone(&index));
        Ok(index)
    }

    /// Returns the indexes built over this table, in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::LockPoisoned`] if the index lock is poisoned.
    pub fn indexes(&self) -> Result<Vec<Arc<Index>>, StorageError> {
        Ok(self
            .indexes
            .read()
            .map_err(|_| StorageError::LockPoisoned("table indexes".to_string()))?
            .clone())
    }
}
