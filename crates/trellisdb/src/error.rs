//! Error types for the main database crate.

use thiserror::Error;

/// Errors that can occur when using `TrellisDB`.
#[derive(Debug, Error)]
pub enum Error {
    /// A table with this name already exists in the catalog.
    #[error("table already exists: {name}")]
    TableExists {
        /// The duplicate table name.
        name: String,
    },

    /// No table with this name exists in the catalog.
    #[error("no such table: {name}")]
    TableNotFound {
        /// The unknown table name.
        name: String,
    },

    /// A core type error occurred.
    #[error(transparent)]
    Core(#[from] trellisdb_core::CoreError),

    /// A storage error occurred.
    #[error(transparent)]
    Storage(#[from] trellisdb_storage::StorageError),

    /// A query construction or execution error occurred.
    #[error(transparent)]
    Query(#[from] trellisdb_query::QueryError),
}

/// A convenience alias for results returned by this crate.
pub type Result<T> = std::result::Result<T, Error>;
