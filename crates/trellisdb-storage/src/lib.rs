//! `TrellisDB` Storage
//!
//! In-memory table storage for `TrellisDB`: append-only, order-preserving
//! row collections, ordered secondary indexes over them, and bulk loading
//! from delimited text.
//!
//! The query-execution layer treats everything in this crate as read-only
//! for the duration of a query: scans capture a snapshot of a table's row
//! list at open time and never add, remove, or reorder rows.
//!
//! # Example
//!
//! ```
//! use trellisdb_core::ColumnNames;
//! use trellisdb_storage::Table;
//!
//! let table = Table::new("t", ColumnNames::new(["a", "b", "c"]))?;
//! table.insert(vec!["a".into(), "b".into(), "30".into()])?;
//! table.insert(vec!["c".into(), "d".into(), "20".into()])?;
//!
//! // Rows come back in insertion order.
//! let rows = table.snapshot()?;
//! assert_eq!(rows[1].at(2), "20");
//!
//! // An ordered index over column c.
//! let index = table.add_index(&["c"])?;
//! assert_eq!(index.key_len(), 1);
//! # Ok::<(), trellisdb_storage::StorageError>(())
//! ```

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod index;
pub mod load;
pub mod table;

pub use error::StorageError;
pub use index::Index;
pub use load::{load_csv, load_csv_from};
pub use table::Table;
