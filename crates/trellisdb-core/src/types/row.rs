//! Rows and the ownership-aware handles that carry them through a plan.
//!
//! A [`Row`] is an ordered sequence of string fields. Rows come in two
//! lifecycle variants, and the distinction is carried in the type system by
//! [`RowHandle`] rather than by a runtime flag:
//!
//! - **Base rows** are created when a record is inserted into a table. They
//!   are owned by that table's storage as `Arc<Row>` and flow through
//!   operator trees as [`RowHandle::Base`]. Dropping such a handle only
//!   releases the reference; the pipeline has no way to free the row itself.
//! - **Intermediate rows** have no owning table. They are produced by
//!   projection and join output, or built directly as literals (for example
//!   an index search key), and flow as [`RowHandle::Fresh`]. Whoever stops
//!   forwarding the handle drops it, and `Drop` reclaims the row.
//!
//! Base rows also carry a back-reference to their table's column names,
//! used only to resolve a field by column name via [`Row::value`].

use std::sync::Arc;

use crate::error::CoreError;
use crate::types::ColumnNames;

/// An ordered sequence of string fields.
///
/// Field access is positional; name lookup is available only on base rows,
/// through the owning table's column names.
///
/// Equality compares field sequences only, never provenance: a base row and
/// an intermediate row with the same fields are equal.
///
/// # Example
///
/// ```
/// use trellisdb_core::Row;
///
/// let row = Row::literal(["c", "d", "20"]);
/// assert_eq!(row.len(), 3);
/// assert_eq!(row.at(1), "d");
/// assert!(row.value("d").is_err()); // no owning table
/// ```
#[derive(Debug, Clone)]
pub struct Row {
    /// Column names of the owning table; `None` for intermediate rows.
    columns: Option<Arc<ColumnNames>>,
    values: Vec<String>,
}

impl Row {
    /// Creates a base row for a table with the given column names.
    ///
    /// Callers (table storage) are responsible for checking that the value
    /// count matches the table's column count before storing the row.
    #[must_use]
    pub fn base(columns: Arc<ColumnNames>, values: Vec<String>) -> Self {
        Self { columns: Some(columns), values }
    }

    /// Creates an intermediate row from literal field values.
    #[must_use]
    pub fn literal<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { columns: None, values: values.into_iter().map(Into::into).collect() }
    }

    /// Creates an empty intermediate row.
    #[must_use]
    pub fn empty() -> Self {
        Self { columns: None, values: Vec::new() }
    }

    /// Returns the field at the given position.
    ///
    /// # Panics
    ///
    /// Panics if `position` is out of range. Operators validate positions at
    /// plan-construction time, so an out-of-range access here is a defect in
    /// how the plan was assembled.
    #[must_use]
    pub fn at(&self, position: usize) -> &str {
        &self.values[position]
    }

    /// Returns the field at the given position, or `None` if out of range.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&str> {
        self.values.get(position).map(String::as_str)
    }

    /// Resolves a field by column name through the owning table.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownColumn`] if the name does not appear in
    /// the owning table's columns, or if this row has no owning table.
    pub fn value(&self, column: &str) -> Result<&str, CoreError> {
        self.columns
            .as_ref()
            .and_then(|columns| columns.position(column))
            .map(|position| self.at(position))
            .ok_or_else(|| CoreError::UnknownColumn { column: column.to_string() })
    }

    /// Returns all fields in position order.
    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the row has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the owning table's column names, if this is a base row.
    #[must_use]
    pub fn columns(&self) -> Option<&Arc<ColumnNames>> {
        self.columns.as_ref()
    }
}

impl PartialEq for Row {
    fn eq(&self, other: &Self) -> bool {
        // Provenance is ignored; rows are their field sequences.
        self.values == other.values
    }
}

impl Eq for Row {}

/// The unit of data flow through an operator tree.
///
/// Carries the base/intermediate ownership duality in the type: base rows
/// are shared references into table storage and can never be freed by the
/// pipeline, while fresh rows are exclusively owned and are reclaimed by
/// `Drop` when the last holder stops forwarding them.
#[derive(Debug, Clone)]
pub enum RowHandle {
    /// A shared reference to a row owned by table storage.
    Base(Arc<Row>),
    /// A transient row owned by the holder of this handle.
    Fresh(Row),
}

impl PartialEq for RowHandle {
    fn eq(&self, other: &Self) -> bool {
        // Same rule as Row equality: fields only, never provenance.
        self.row() == other.row()
    }
}

impl Eq for RowHandle {}

impl RowHandle {
    /// Returns true if this handle owns a transient row.
    #[must_use]
    pub fn is_intermediate(&self) -> bool {
        matches!(self, Self::Fresh(_))
    }

    /// Returns the underlying row.
    #[must_use]
    pub fn row(&self) -> &Row {
        match self {
            Self::Base(row) => row,
            Self::Fresh(row) => row,
        }
    }
}

impl std::ops::Deref for RowHandle {
    type Target = Row;

    fn deref(&self) -> &Row {
        self.row()
    }
}
