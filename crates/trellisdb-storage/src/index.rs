//! Ordered secondary indexes over table rows.
//!
//! An [`Index`] maps a composite string key, the values of its designated
//! key columns in declaration order, to the one base row inserted for that
//! key. Keys are compared lexicographically component-by-component using
//! byte-wise string ordering, which is exactly the ordering of `Vec<String>`
//! over a `BTreeMap`.
//!
//! # Duplicate keys
//!
//! Keys are assumed unique and the assumption is not enforced: if two rows
//! produce the same key, the first-inserted row is retained under the key
//! and later rows are silently absent from the index. Shadowed rows remain
//! reachable through a full table scan.
//!
//! # Maintenance
//!
//! An index is built once, eagerly, from the table's rows at creation time.
//! Rows inserted afterwards are not reflected in it.

use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::Arc;

use trellisdb_core::Row;

/// An ordered mapping from composite string keys to base rows.
///
/// Built by [`Table::add_index`](crate::Table::add_index). The index returns
/// whole rows, not just key columns, so its output width is the indexed
/// table's column count.
#[derive(Debug)]
pub struct Index {
    /// Positions of the key columns within the table's rows.
    key_positions: Vec<usize>,
    /// The indexed table's column count.
    n_columns: usize,
    map: BTreeMap<Vec<String>, Arc<Row>>,
}

impl Index {
    /// Builds an index over the given rows, in insertion order.
    ///
    /// On duplicate keys, the first row wins.
    #[must_use]
    pub(crate) fn build(key_positions: Vec<usize>, n_columns: usize, rows: &[Arc<Row>]) -> Self {
        let mut map = BTreeMap::new();
        for row in rows {
            let key: Vec<String> =
                key_positions.iter().map(|&position| row.at(position).to_string()).collect();
            map.entry(key).or_insert_with(|| Arc::clone(row));
        }
        Self { key_positions, n_columns, map }
    }

    /// Returns the indexed table's column count.
    #[must_use]
    pub fn n_columns(&self) -> usize {
        self.n_columns
    }

    /// Returns the number of key columns.
    #[must_use]
    pub fn key_len(&self) -> usize {
        self.key_positions.len()
    }

    /// Returns the positions of the key columns within the table's rows.
    #[must_use]
    pub fn key_positions(&self) -> &[usize] {
        &self.key_positions
    }

    /// Returns the number of distinct keys in the index.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if the index holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns the rows whose key `k` satisfies `lo <= k <= hi`, in key
    /// order.
    ///
    /// An inverted range (`lo > hi`) yields no rows.
    #[must_use]
    pub fn range(&self, lo: &[String], hi: &[String]) -> Vec<Arc<Row>> {
        // BTreeMap::range panics on an inverted range where std::map's
        // lower_bound/upper_bound pair would simply produce nothing.
        if lo > hi {
            return Vec::new();
        }
        self.map
            .range::<[String], _>((Bound::Included(lo), Bound::Included(hi)))
            .map(|(_, row)| Arc::clone(row))
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn row(values: &[&str]) -> Arc<Row> {
        Arc::new(Row::literal(values.iter().copied()))
    }

    fn key(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    fn sample_index() -> Index {
        let rows = vec![
            row(&["a", "b", "30"]),
            row(&["c", "d", "20"]),
            row(&["e", "f", "10"]),
            row(&["g", "h", "40"]),
        ];
        Index::build(vec![2], 3, &rows)
    }

    #[test]
    fn range_is_inclusive_and_key_ordered() {
        let index = sample_index();
        let rows = index.range(&key(&["15"]), &key(&["35"]));
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].at(2), "20");
        assert_eq!(rows[1].at(2), "30");
    }

    #[test]
    fn point_lookup() {
        let index = sample_index();
        let rows = index.range(&key(&["20"]), &key(&["20"]));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].at(0), "c");
    }

    #[test]
    fn empty_range() {
        let index = sample_index();
        assert!(index.range(&key(&["50"]), &key(&["60"])).is_empty());
    }

    #[test]
    fn inverted_range_yields_nothing() {
        let index = sample_index();
        assert!(index.range(&key(&["35"]), &key(&["15"])).is_empty());
    }

    #[test]
    fn duplicate_key_keeps_first_row() {
        let rows = vec![row(&["first", "20"]), row(&["second", "20"])];
        let index = Index::build(vec![1], 2, &rows);
        assert_eq!(index.len(), 1);
        let found = index.range(&key(&["20"]), &key(&["20"]));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].at(0), "first");
    }

    #[test]
    fn composite_keys_order_component_wise() {
        let rows = vec![row(&["b", "1"]), row(&["a", "2"]), row(&["a", "1"])];
        let index = Index::build(vec![0, 1], 2, &rows);
        let all = index.range(&key(&["a", "0"]), &key(&["c", "9"]));
        let keys: Vec<(&str, &str)> = all.iter().map(|r| (r.at(0), r.at(1))).collect();
        assert_eq!(keys, vec![("a", "1"), ("a", "2"), ("b", "1")]);
    }
}
