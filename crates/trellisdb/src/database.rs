//! Main database interface.
//!
//! This module provides the [`Database`] struct, a catalog of named tables
//! that is the primary entry point for setting up data and running plans
//! over it.
//!
//! # Examples
//!
//! Create a table, load rows, and run a plan:
//!
//! ```
//! use trellisdb::{Database, drain, plan};
//! use trellisdb::ColumnNames;
//!
//! let mut db = Database::new();
//! let user = db.create_table("user", ColumnNames::new(["id", "name"]))?;
//! user.insert(vec!["1".into(), "ada".into()])?;
//! user.insert(vec!["2".into(), "grace".into()])?;
//!
//! let mut scan = plan::table_scan(db.table("user")?);
//! scan.open()?;
//! let rows = drain(scan.as_mut())?;
//! scan.close()?;
//! assert_eq!(rows.len(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use trellisdb_core::ColumnNames;
use trellisdb_storage::Table;

use crate::error::{Error, Result};

/// A catalog of named tables.
///
/// Tables are handed out as `Arc<Table>` so plans can hold onto them across
/// catalog changes; dropping a table from the catalog does not invalidate
/// handles already captured by a plan.
///
/// # Examples
///
/// ```
/// use trellisdb::{ColumnNames, Database};
///
/// let mut db = Database::new();
/// db.create_table("user", ColumnNames::new(["id", "name"]))?;
/// assert_eq!(db.table_count(), 1);
/// # Ok::<(), trellisdb::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct Database {
    tables: HashMap<String, Arc<Table>>,
}

impl Database {
    /// Creates an empty database.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table with the given name and column names and registers it
    /// in the catalog.
    ///
    /// Returns a handle to the new table, the same handle later lookups
    /// yield.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TableExists`] if the name is already taken, or a
    /// storage error if the column list is empty or repeats a name.
    pub fn create_table(
        &mut self,
        name: impl Into<String>,
        columns: ColumnNames,
    ) -> Result<Arc<Table>> {
        let name = name.into();
        if self.tables.contains_key(&name) {
            return Err(Error::TableExists { name });
        }
        let table = Arc::new(Table::new(name.clone(), columns)?);
        self.tables.insert(name, Arc::clone(&table));
        Ok(table)
    }

    /// Looks up a table by name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TableNotFound`] if no table with this name exists.
    pub fn table(&self, name: &str) -> Result<Arc<Table>> {
        self.tables
            .get(name)
            .cloned()
            .ok_or_else(|| Error::TableNotFound { name: name.to_string() })
    }

    /// Returns the number of tables in the catalog.
    #[must_use]
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// Drops every table from the catalog.
    ///
    /// Handles already held elsewhere keep their tables alive; the catalog
    /// simply forgets them.
    pub fn clear(&mut self) {
        self.tables.clear();
    }
}
