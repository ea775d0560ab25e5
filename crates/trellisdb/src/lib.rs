//! `TrellisDB`
//!
//! An in-memory relational engine: tables of string-valued rows, ordered
//! indexes, and a pull-based query executor whose plans are built by
//! composing operators.
//!
//! # Features
//!
//! - **Tables**: append-only, order-preserving row storage with named columns
//! - **Indexes**: ordered key-to-row maps supporting range scans
//! - **Operators**: table scan, index scan, select, project, nested-loop
//!   join, sort, and unique, combined into plan trees and evaluated a row at
//!   a time
//!
//! # Example
//!
//! ```
//! use trellisdb::{drain, plan, ColumnNames, Database};
//!
//! let mut db = Database::new();
//! let user = db.create_table("user", ColumnNames::new(["id", "name", "age"]))?;
//! user.insert(vec!["1".into(), "ada".into(), "36".into()])?;
//! user.insert(vec!["2".into(), "grace".into(), "45".into()])?;
//! user.insert(vec!["3".into(), "edsger".into(), "36".into()])?;
//!
//! // SELECT name FROM user WHERE age = '36' ORDER BY name
//! let mut query = plan::sort(
//!     plan::project(
//!         plan::select(
//!             plan::table_scan(db.table("user")?),
//!             Box::new(|row| row.at(2) == "36"),
//!         ),
//!         &[1],
//!     )?,
//!     &[0],
//! )?;
//!
//! query.open()?;
//! let rows = drain(query.as_mut())?;
//! query.close()?;
//!
//! assert_eq!(rows.len(), 2);
//! assert_eq!(rows[0].at(0), "ada");
//! assert_eq!(rows[1].at(0), "edsger");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

// Re-export core types
pub use trellisdb_core::{ColumnNames, ColumnSelector, CoreError, Row, RowHandle};

// Re-export storage types
pub use trellisdb_storage::{load_csv, load_csv_from, Index, StorageError, Table};

// Re-export the execution surface
pub use trellisdb_query::exec::{drain, BoxedOperator, Operator, OperatorState};
pub use trellisdb_query::{plan, QueryError};

pub mod database;
pub mod error;

pub use database::Database;
pub use error::{Error, Result};
