//! Error types for the core crate.

use thiserror::Error;

/// Errors that can occur in the core crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A column name could not be resolved on a row.
    ///
    /// Raised both for names absent from the owning table and for name
    /// lookups on intermediate rows, which have no owning table at all.
    #[error("unknown column: {column}")]
    UnknownColumn {
        /// The name that failed to resolve.
        column: String,
    },

    /// More columns were selected than the row has.
    #[error("selected {selected} columns but only {columns} exist")]
    TooManySelected {
        /// Number of selected positions.
        selected: usize,
        /// Total number of columns.
        columns: usize,
    },

    /// A selected position is outside the valid column range.
    #[error("column position {position} out of range (columns: {columns})")]
    ColumnOutOfRange {
        /// The offending position.
        position: usize,
        /// Total number of columns.
        columns: usize,
    },
}
