//! `TrellisDB` Core
//!
//! This crate provides the fundamental types shared by the `TrellisDB`
//! storage and query-execution crates.
//!
//! # Overview
//!
//! - **Rows**: [`Row`] (an ordered sequence of string fields) and
//!   [`RowHandle`] (the ownership-aware unit that flows through an
//!   operator tree)
//! - **Columns**: [`ColumnNames`] for name-to-position resolution
//! - **Selection**: [`ColumnSelector`] for splitting a row's positions
//!   into selected and unselected lists
//! - **Errors**: [`CoreError`]
//!
//! # Example
//!
//! ```
//! use trellisdb_core::{ColumnSelector, Row, RowHandle};
//!
//! // An intermediate row, owned by whoever holds it.
//! let row = Row::literal(["a", "b", "30"]);
//! assert_eq!(row.at(2), "30");
//!
//! let handle = RowHandle::Fresh(row);
//! assert!(handle.is_intermediate());
//!
//! // Select columns 2 and 0 of a three-column row; 1 is left over.
//! let selector = ColumnSelector::new(3, &[2, 0])?;
//! assert_eq!(selector.selected_positions(), &[2, 0]);
//! assert_eq!(selector.unselected_positions(), &[1]);
//! # Ok::<(), trellisdb_core::CoreError>(())
//! ```

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod types;

pub use error::CoreError;
pub use types::{ColumnNames, ColumnSelector, Row, RowHandle};
