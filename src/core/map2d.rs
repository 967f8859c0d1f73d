//! The `Map2D` contract.
//!
//! A two-dimensional map stores values under `(row, column)` pairs. Rows and
//! columns are plain hashable keys; neither has an order. Views hand out owned
//! snapshots, bulk operations return the receiver so they can be chained, and
//! only `put` can fail.
//!
//! An implementation supplies the storage primitives (`insert`, `get`,
//! `has_key`, `remove`, `clear`, `has_row`, `row_keys`, `iter`) and the type
//! conversions copy into. Everything else is provided on top of those and may
//! be overridden where the backing can do better than a full scan.
//!
//! Cells that store an absent value have nothing to copy, so views and fills
//! leave them out. `size`, `has_key` and `has_column` still count them.

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::core::error::{Map2DError, Map2DResult};
use crate::core::types::{Key, KeyPart};

pub trait Map2D<R: Key, C: Key, V> {
    /// Map type built by [`Map2D::copy_with_conversion`].
    type Converted<R2: Key, C2: Key, V2>: Map2D<R2, C2, V2>;

    /// An empty map of the converted type, set up like `self`.
    fn empty_converted<R2: Key, C2: Key, V2>(&self) -> Self::Converted<R2, C2, V2>;

    /// Stores a cell under keys that are already known to be present.
    ///
    /// Returns the replaced cell: `None` if it was vacant, `Some(None)` if it
    /// held an absent value.
    fn insert(&mut self, row: R, column: C, value: Option<V>) -> Option<Option<V>>;

    /// `None` for a missing cell and for a cell storing an absent value.
    /// Use [`Map2D::has_key`] to tell them apart.
    fn get(&self, row: &R, column: &C) -> Option<&V>;

    /// Presence check. Unlike `get`, true for a cell storing an absent value.
    fn has_key(&self, row: &R, column: &C) -> bool;

    /// Removes one cell. Unknown coordinates are a no-op.
    fn remove(&mut self, row: &R, column: &C) -> Option<V>;

    fn clear(&mut self);

    /// True while `row` is registered, which may outlast its last column.
    fn has_row(&self, row: &R) -> bool;

    /// Registered rows, including ones left without columns.
    fn row_keys(&self) -> HashSet<R>;

    /// Every stored cell, absent values included, in unspecified order.
    fn iter<'a>(&'a self) -> impl Iterator<Item = (&'a R, &'a C, Option<&'a V>)>
    where
        R: 'a,
        C: 'a,
        V: 'a;

    /// Stores `value` at `(row, column)`, returning the value it replaced.
    ///
    /// Keys and value may each be passed bare or as an `Option`. A `None` key
    /// fails with [`Map2DError::InvalidKey`] and leaves the map untouched.
    fn put(
        &mut self,
        row: impl Into<Option<R>>,
        column: impl Into<Option<C>>,
        value: impl Into<Option<V>>,
    ) -> Map2DResult<Option<V>> {
        let missing = match (row.into(), column.into()) {
            (Some(row), Some(column)) => {
                return Ok(self.insert(row, column, value.into()).flatten());
            }
            (None, Some(_)) => KeyPart::Row,
            (Some(_), None) => KeyPart::Column,
            (None, None) => KeyPart::Both,
        };
        warn!(%missing, "rejected put with absent key");
        Err(Map2DError::InvalidKey { missing })
    }

    /// Like `get`, but falls back to `default` for a missing cell and for a
    /// cell holding an absent value alike.
    fn get_or_default(&self, row: &R, column: &C, default: V) -> V
    where
        V: Clone,
    {
        self.get(row, column).cloned().unwrap_or(default)
    }

    /// True when no cell is stored, even if emptied rows are still registered.
    fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    fn non_empty(&self) -> bool {
        !self.is_empty()
    }

    /// Number of stored cells, counting cells that hold an absent value.
    fn size(&self) -> usize {
        self.iter().count()
    }

    fn row_count(&self) -> usize {
        self.row_keys().len()
    }

    /// Distinct column keys across all rows.
    fn column_keys(&self) -> HashSet<C> {
        self.iter().map(|(_, column, _)| column.clone()).collect()
    }

    fn has_column(&self, column: &C) -> bool {
        self.iter().any(|(_, stored, _)| stored == column)
    }

    /// True if any cell holds `value`. Passing `None` asks whether any cell
    /// stores an absent value.
    fn has_value<'v>(&self, value: impl Into<Option<&'v V>>) -> bool
    where
        V: PartialEq + 'v,
    {
        let value = value.into();
        self.iter().any(|(_, _, stored)| stored == value)
    }

    /// Snapshot of one row as column -> value. Unknown rows give an empty map.
    fn row_view(&self, row: &R) -> HashMap<C, V>
    where
        V: Clone,
    {
        let mut view = HashMap::new();
        self.fill_map_from_row(&mut view, row);
        view
    }

    /// Snapshot of one column as row -> value, gathered by scanning every row.
    fn column_view(&self, column: &C) -> HashMap<R, V>
    where
        V: Clone,
    {
        let mut view = HashMap::new();
        self.fill_map_from_column(&mut view, column);
        view
    }

    /// Row -> (column -> value) snapshot. Rows with nothing to show are left
    /// out, so an empty map always gives an empty view.
    fn row_map_view(&self) -> HashMap<R, HashMap<C, V>>
    where
        V: Clone,
    {
        let mut view: HashMap<R, HashMap<C, V>> = HashMap::new();
        for (row, column, value) in self.iter() {
            if let Some(value) = value {
                view.entry(row.clone())
                    .or_default()
                    .insert(column.clone(), value.clone());
            }
        }
        view
    }

    /// Column -> (row -> value) snapshot, the transpose of `row_map_view`.
    fn column_map_view(&self) -> HashMap<C, HashMap<R, V>>
    where
        V: Clone,
    {
        let mut view: HashMap<C, HashMap<R, V>> = HashMap::new();
        for (row, column, value) in self.iter() {
            if let Some(value) = value {
                view.entry(column.clone())
                    .or_default()
                    .insert(row.clone(), value.clone());
            }
        }
        view
    }

    /// Copies the row's column -> value pairs into `target`, overwriting keys
    /// it already holds.
    ///
    /// Returns `self` only so calls can be chained; the map is not modified.
    fn fill_map_from_row<T>(&self, target: &mut T, row: &R) -> &Self
    where
        T: Extend<(C, V)>,
        V: Clone,
    {
        target.extend(
            self.iter()
                .filter(|&(stored, _, _)| stored == row)
                .filter_map(|(_, column, value)| Some((column.clone(), value?.clone()))),
        );
        self
    }

    /// Copies the column's row -> value pairs into `target`, overwriting keys
    /// it already holds. Chains like [`Map2D::fill_map_from_row`].
    fn fill_map_from_column<T>(&self, target: &mut T, column: &C) -> &Self
    where
        T: Extend<(R, V)>,
        V: Clone,
    {
        target.extend(
            self.iter()
                .filter(|&(_, stored, _)| stored == column)
                .filter_map(|(row, _, value)| Some((row.clone(), value?.clone()))),
        );
        self
    }

    /// Copies every cell of `source` into this map, overwriting on collision.
    /// Cells storing an absent value are copied as such.
    fn put_all<M>(&mut self, source: &M) -> &mut Self
    where
        M: Map2D<R, C, V>,
        V: Clone,
    {
        let mut merged = 0usize;
        for (row, column, value) in source.iter() {
            self.insert(row.clone(), column.clone(), value.cloned());
            merged += 1;
        }
        debug!(merged, "put_all");
        self
    }

    /// Inserts each `(column, value)` of `source` under the fixed `row`.
    /// An empty source does not register the row.
    fn put_all_to_row<I>(&mut self, source: I, row: R) -> &mut Self
    where
        I: IntoIterator<Item = (C, V)>,
    {
        let mut merged = 0usize;
        for (column, value) in source {
            self.insert(row.clone(), column, Some(value));
            merged += 1;
        }
        debug!(merged, "put_all_to_row");
        self
    }

    /// Inserts each `(row, value)` of `source` under the fixed `column`.
    fn put_all_to_column<I>(&mut self, source: I, column: C) -> &mut Self
    where
        I: IntoIterator<Item = (R, V)>,
    {
        let mut merged = 0usize;
        for (row, value) in source {
            self.insert(row, column.clone(), Some(value));
            merged += 1;
        }
        debug!(merged, "put_all_to_column");
        self
    }

    /// Builds a new map by running every row key, column key and value through
    /// the given functions.
    ///
    /// Rows that convert to the same key merge into one row, and columns do
    /// the same. When two cells land on the same converted coordinate the one
    /// visited last wins. Visiting order follows `iter` and is not
    /// deterministic for hash backings. Absent values stay absent and
    /// `value_fn` is not called for them.
    fn copy_with_conversion<R2, C2, V2, FR, FC, FV>(
        &self,
        mut row_fn: FR,
        mut column_fn: FC,
        mut value_fn: FV,
    ) -> Self::Converted<R2, C2, V2>
    where
        R2: Key,
        C2: Key,
        FR: FnMut(&R) -> R2,
        FC: FnMut(&C) -> C2,
        FV: FnMut(&V) -> V2,
    {
        let mut converted = self.empty_converted::<R2, C2, V2>();
        let mut collisions = 0usize;

        for (row, column, value) in self.iter() {
            let value = value.map(&mut value_fn);
            if converted.insert(row_fn(row), column_fn(column), value).is_some() {
                collisions += 1;
            }
        }

        debug!(cells = converted.size(), collisions, "copy_with_conversion");
        converted
    }
}
