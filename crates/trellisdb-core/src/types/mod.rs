//! Core data types for `TrellisDB`.
//!
//! This module defines the row, column-name, and column-selection types
//! shared by the storage and query-execution layers.

mod columns;
mod row;
mod selector;

pub use columns::ColumnNames;
pub use row::{Row, RowHandle};
pub use selector::ColumnSelector;
