//! Ordered column-name lists.

/// An ordered list of column names for a table.
///
/// Positions are significant: the name at position `i` labels field `i` of
/// every row in the table.
///
/// # Example
///
/// ```
/// use trellisdb_core::ColumnNames;
///
/// let columns = ColumnNames::new(["user_id", "username", "birth_date"]);
/// assert_eq!(columns.len(), 3);
/// assert_eq!(columns.position("username"), Some(1));
/// assert_eq!(columns.position("email"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnNames(Vec<String>);

impl ColumnNames {
    /// Creates a column-name list from the given names, in order.
    #[must_use]
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    /// Returns the position of the given name, or `None` if absent.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|c| c == name)
    }

    /// Returns the name at the given position.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&str> {
        self.0.get(position).map(String::as_str)
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the names in position order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Returns the name, if any, that appears at more than one position.
    ///
    /// Used by table construction to reject duplicate column names.
    #[must_use]
    pub fn first_duplicate(&self) -> Option<&str> {
        for (i, name) in self.0.iter().enumerate() {
            if self.0[i + 1..].iter().any(|other| other == name) {
                return Some(name);
            }
        }
        None
    }
}
