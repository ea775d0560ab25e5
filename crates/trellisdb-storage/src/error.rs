//! Error types for the storage crate.

use thiserror::Error;

/// Errors that can occur in table storage and bulk loading.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A table cannot be created with zero columns.
    #[error("table has no columns")]
    EmptyColumns,

    /// A table cannot be created with duplicate column names.
    #[error("duplicate column name: {name}")]
    DuplicateColumn {
        /// The repeated name.
        name: String,
    },

    /// An inserted row's width does not match the table's column count.
    #[error("row has {actual} fields, table has {expected} columns")]
    RowWidthMismatch {
        /// The table's column count.
        expected: usize,
        /// The inserted row's field count.
        actual: usize,
    },

    /// An index was requested over a column the table does not have.
    #[error("unknown column: {name}")]
    UnknownColumn {
        /// The missing column name.
        name: String,
    },

    /// An internal lock was poisoned (a thread panicked while holding it).
    #[error("internal lock poisoned: {0}")]
    LockPoisoned(String),

    /// An I/O error occurred while bulk loading.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A delimited-text parse error occurred while bulk loading.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
