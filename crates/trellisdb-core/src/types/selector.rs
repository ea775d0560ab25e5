//! Column selection over a fixed column count.

use crate::error::CoreError;

/// An immutable split of a row's positions into selected and unselected
/// lists.
///
/// `selected` preserves the request order and keeps duplicates; `unselected`
/// lists the positions that appear nowhere in the request, ascending. Used
/// directly by projection, and by the join to split an input into join-key
/// columns and pass-through columns.
///
/// # Example
///
/// ```
/// use trellisdb_core::ColumnSelector;
///
/// let selector = ColumnSelector::new(4, &[3, 1])?;
/// assert_eq!(selector.n_columns(), 4);
/// assert_eq!(selector.selected_positions(), &[3, 1]);
/// assert_eq!(selector.unselected_positions(), &[0, 2]);
/// # Ok::<(), trellisdb_core::CoreError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSelector {
    n_columns: usize,
    selected: Vec<usize>,
    unselected: Vec<usize>,
}

impl ColumnSelector {
    /// Creates a selector over `n_columns` total positions.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::TooManySelected`] if more positions are selected
    /// than exist, and [`CoreError::ColumnOutOfRange`] if any position is
    /// `>= n_columns`.
    pub fn new(n_columns: usize, selected_positions: &[usize]) -> Result<Self, CoreError> {
        if selected_positions.len() > n_columns {
            return Err(CoreError::TooManySelected {
                selected: selected_positions.len(),
                columns: n_columns,
            });
        }
        for &position in selected_positions {
            if position >= n_columns {
                return Err(CoreError::ColumnOutOfRange { position, columns: n_columns });
            }
        }
        let selected = selected_positions.to_vec();
        let unselected =
            (0..n_columns).filter(|position| !selected.contains(position)).collect();
        Ok(Self { n_columns, selected, unselected })
    }

    /// Returns the total number of columns the selector covers.
    #[must_use]
    pub fn n_columns(&self) -> usize {
        self.n_columns
    }

    /// Returns the number of selected positions (duplicates counted).
    #[must_use]
    pub fn n_selected(&self) -> usize {
        self.selected.len()
    }

    /// Returns the number of unselected positions.
    #[must_use]
    pub fn n_unselected(&self) -> usize {
        self.unselected.len()
    }

    /// Returns the i-th selected position, in request order.
    ///
    /// # Panics
    ///
    /// Panics if `i >= n_selected()`.
    #[must_use]
    pub fn selected(&self, i: usize) -> usize {
        self.selected[i]
    }

    /// Returns the i-th unselected position, in ascending original order.
    ///
    /// # Panics
    ///
    /// Panics if `i >= n_unselected()`.
    #[must_use]
    pub fn unselected(&self, i: usize) -> usize {
        self.unselected[i]
    }

    /// Returns all selected positions in request order.
    #[must_use]
    pub fn selected_positions(&self) -> &[usize] {
        &self.selected
    }

    /// Returns all unselected positions, ascending.
    #[must_use]
    pub fn unselected_positions(&self) -> &[usize] {
        &self.unselected
    }
}
