//! `TrellisDB` Query
//!
//! The query-execution engine: composable pull-based operators evaluating
//! relational-algebra plans over in-memory tables of string-valued rows.
//!
//! # Overview
//!
//! - [`exec`]: the [`Operator`](exec::Operator) protocol and the seven
//!   physical operators (table scan, index scan, select, project,
//!   nested-loop join, sort, unique)
//! - [`plan`]: thin constructors that wire operators into a plan tree
//! - [`error`]: [`QueryError`]
//!
//! Data flows bottom-up on demand: the consumer calls `next()` on the root
//! operator and each operator pulls from its children as needed, returning
//! at most one row per call.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use trellisdb_core::ColumnNames;
//! use trellisdb_query::exec::drain;
//! use trellisdb_query::plan::{select, table_scan};
//! use trellisdb_storage::Table;
//!
//! let table = Arc::new(Table::new("t", ColumnNames::new(["a", "b", "c"]))?);
//! table.insert(vec!["a".into(), "b".into(), "30".into()])?;
//! table.insert(vec!["e".into(), "f".into(), "10".into()])?;
//!
//! let mut plan = select(
//!     table_scan(Arc::clone(&table)),
//!     Box::new(|row| row.at(2) >= "15" && row.at(2) <= "35"),
//! );
//! plan.open()?;
//! let rows = drain(plan.as_mut())?;
//! plan.close()?;
//!
//! assert_eq!(rows.len(), 1);
//! assert_eq!(rows[0].at(2), "30");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod exec;
pub mod plan;

pub use error::QueryError;
