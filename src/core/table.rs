// storage + single-cell operations
use std::collections::{HashMap, HashSet};
use std::fmt;

use tracing::{debug, trace};

use crate::core::config::Map2DConfig;
use crate::core::map2d::Map2D;
use crate::core::types::Key;

/// Default `Map2D` implementation: a hash map of rows, each row a hash map of
/// columns.
///
/// Cells hold `Option<V>` so that an absent value can be stored on purpose.
/// Read methods flatten that back to `Option<&V>`, which means `get` cannot
/// tell "nothing here" from "absent stored here". Use [`Map2D::has_key`]
/// when presence matters.
#[derive(Clone)]
pub struct HashMap2D<R, C, V> {
    pub(crate) rows: HashMap<R, HashMap<C, Option<V>>>,
    pub(crate) config: Map2DConfig,
}

impl<R: Key, C: Key, V> HashMap2D<R, C, V> {
    pub fn new() -> Self {
        Self::with_config(Map2DConfig::default())
    }

    pub fn with_config(config: Map2DConfig) -> Self {
        Self {
            rows: HashMap::with_capacity(config.row_capacity),
            config,
        }
    }

    pub fn config(&self) -> &Map2DConfig {
        &self.config
    }

    //registers the row on first use, sized by the column capacity hint
    fn row_entry(&mut self, row: R) -> &mut HashMap<C, Option<V>> {
        let column_capacity = self.config.column_capacity;
        self.rows
            .entry(row)
            .or_insert_with(|| HashMap::with_capacity(column_capacity))
    }
}

impl<R: Key, C: Key, V> Map2D<R, C, V> for HashMap2D<R, C, V> {
    type Converted<R2: Key, C2: Key, V2> = HashMap2D<R2, C2, V2>;

    //copies keep the source's policy and capacity hints
    fn empty_converted<R2: Key, C2: Key, V2>(&self) -> HashMap2D<R2, C2, V2> {
        HashMap2D::with_config(self.config)
    }

    fn insert(&mut self, row: R, column: C, value: Option<V>) -> Option<Option<V>> {
        self.row_entry(row).insert(column, value)
    }

    fn get(&self, row: &R, column: &C) -> Option<&V> {
        self.rows.get(row)?.get(column)?.as_ref()
    }

    fn has_key(&self, row: &R, column: &C) -> bool {
        self.rows.get(row).is_some_and(|columns| columns.contains_key(column))
    }

    /// Whether the row stays registered once it has no columns left depends
    /// on [`Map2DConfig::empty_rows`].
    fn remove(&mut self, row: &R, column: &C) -> Option<V> {
        let columns = self.rows.get_mut(row)?;
        let previous = columns.remove(column)?;

        if columns.is_empty() && self.config.prunes_empty_rows() {
            self.rows.remove(row);
            trace!("pruned emptied row");
        }

        previous
    }

    fn clear(&mut self) {
        debug!(rows = self.rows.len(), cells = self.size(), "clearing map");
        self.rows.clear();
    }

    fn has_row(&self, row: &R) -> bool {
        self.rows.contains_key(row)
    }

    fn row_keys(&self) -> HashSet<R> {
        self.rows.keys().cloned().collect()
    }

    fn iter<'a>(&'a self) -> impl Iterator<Item = (&'a R, &'a C, Option<&'a V>)>
    where
        R: 'a,
        C: 'a,
        V: 'a,
    {
        self.rows.iter().flat_map(|(row, columns)| {
            columns
                .iter()
                .map(move |(column, value)| (row, column, value.as_ref()))
        })
    }

    fn is_empty(&self) -> bool {
        self.rows.values().all(|columns| columns.is_empty())
    }

    fn size(&self) -> usize {
        self.rows.values().map(|columns| columns.len()).sum()
    }

    /// Counts retained empty rows too.
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    //no column index: scans every row
    fn has_column(&self, column: &C) -> bool {
        self.rows.values().any(|columns| columns.contains_key(column))
    }

    fn fill_map_from_row<T>(&self, target: &mut T, row: &R) -> &Self
    where
        T: Extend<(C, V)>,
        V: Clone,
    {
        if let Some(columns) = self.rows.get(row) {
            target.extend(columns.iter().filter_map(|(column, value)| {
                Some((column.clone(), value.as_ref()?.clone()))
            }));
        }
        self
    }

    fn fill_map_from_column<T>(&self, target: &mut T, column: &C) -> &Self
    where
        T: Extend<(R, V)>,
        V: Clone,
    {
        target.extend(self.rows.iter().filter_map(|(row, columns)| {
            let value = columns.get(column)?.as_ref()?;
            Some((row.clone(), value.clone()))
        }));
        self
    }
}

impl<R: Key, C: Key, V> Default for HashMap2D<R, C, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R, C, V> fmt::Debug for HashMap2D<R, C, V>
where
    R: fmt::Debug,
    C: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashMap2D")
            .field("rows", &self.rows)
            .field("empty_rows", &self.config.empty_rows)
            .finish()
    }
}

//content equality: retained empty rows and config do not count
impl<R: Key, C: Key, V: PartialEq> PartialEq for HashMap2D<R, C, V> {
    fn eq(&self, other: &Self) -> bool {
        self.size() == other.size()
            && self.iter().all(|(row, column, value)| {
                other
                    .rows
                    .get(row)
                    .and_then(|columns| columns.get(column))
                    .is_some_and(|other_value| other_value.as_ref() == value)
            })
    }
}

impl<R: Key, C: Key, V: Eq> Eq for HashMap2D<R, C, V> {}
