use std::collections::HashMap;

use map2d::{create_instance, EmptyRowPolicy, HashMap2D, KeyPart, Map2D, Map2DConfig, Map2DError};
use pretty_assertions::assert_eq;

fn create_grid() -> HashMap2D<u32, &'static str, i32> {
    let mut grid = create_instance();
    grid.put(1, "a", 10).unwrap();
    grid.put(1, "b", 20).unwrap();
    grid.put(2, "a", 30).unwrap();
    grid
}

#[test]
fn test_grid_example() {
    let grid = create_grid();

    assert_eq!(grid.size(), 3);
    assert_eq!(grid.row_view(&1), HashMap::from([("a", 10), ("b", 20)]));
    assert_eq!(grid.column_view(&"a"), HashMap::from([(1, 10), (2, 30)]));
    assert!(grid.has_column(&"b"));
    assert!(!grid.has_row(&3));
}

#[test]
fn test_fill_map_from_row_returns_container() {
    let grid = create_grid();
    let mut target: HashMap<&str, i32> = HashMap::new();

    let returned = grid.fill_map_from_row(&mut target, &1);

    assert!(std::ptr::eq(returned, &grid));
    assert_eq!(target, HashMap::from([("a", 10), ("b", 20)]));
}

#[test]
fn test_put_returns_previous_value() {
    let mut grid = create_grid();

    assert_eq!(grid.put(1, "a", 11), Ok(Some(10)));
    assert_eq!(grid.put(3, "c", 40), Ok(None));
    assert_eq!(grid.size(), 4);
}

#[test]
fn test_put_rejects_absent_keys() {
    let mut grid = create_grid();

    assert_eq!(
        grid.put(None::<u32>, "a", 1),
        Err(Map2DError::InvalidKey { missing: KeyPart::Row })
    );
    assert_eq!(
        grid.put(Some(4), None::<&str>, 1),
        Err(Map2DError::InvalidKey { missing: KeyPart::Column })
    );
    assert_eq!(grid.size(), 3);
}

#[test]
fn test_remove_unoccupied_is_noop() {
    let mut grid = create_grid();

    assert_eq!(grid.remove(&1, &"zz"), None);
    assert_eq!(grid.remove(&99, &"a"), None);
    assert_eq!(grid.size(), 3);

    assert_eq!(grid.remove(&1, &"a"), Some(10));
    assert_eq!(grid.get(&1, &"a"), None);
    assert_eq!(grid.size(), 2);
}

#[test]
fn test_clear() {
    let mut grid = create_grid();
    grid.clear();

    assert!(grid.is_empty());
    assert!(!grid.non_empty());
    assert_eq!(grid.size(), 0);
    assert!(grid.row_map_view().is_empty());
}

#[test]
fn test_emptied_row_is_retained_by_default() {
    let mut grid = create_grid();
    grid.remove(&2, &"a");

    assert!(grid.has_row(&2));
    assert!(grid.row_view(&2).is_empty());
    assert!(!grid.has_column(&"zz"));
}

#[test]
fn test_emptied_row_is_pruned_when_configured() {
    let config = Map2DConfig::new()
        .with_empty_rows(EmptyRowPolicy::Prune)
        .with_row_capacity(4)
        .with_column_capacity(2);
    let mut grid: HashMap2D<u32, &str, i32> = HashMap2D::with_config(config);
    grid.put(2, "a", 30).unwrap();

    grid.remove(&2, &"a");

    assert!(!grid.has_row(&2));
    assert!(grid.is_empty());
    assert_eq!(grid.config(), &config);
}

#[test]
fn test_map_views_are_snapshots() {
    let mut grid = create_grid();
    let rows = grid.row_map_view();
    let mut columns = grid.column_map_view();

    grid.put(1, "a", 0).unwrap();
    grid.put(7, "q", 70).unwrap();
    columns.get_mut(&"a").unwrap().insert(5, 50);

    assert_eq!(rows[&1], HashMap::from([("a", 10), ("b", 20)]));
    assert!(!rows.contains_key(&7));
    assert!(!grid.has_key(&5, &"a"));
}

#[test]
fn test_put_all_merges_other_map() {
    let mut grid = create_grid();
    let mut other: HashMap2D<u32, &str, i32> = create_instance();
    other.put(2, "a", 300).unwrap();
    other.put(3, "d", 400).unwrap();

    grid.put_all(&other);

    for (row, column, value) in other.iter() {
        assert_eq!(grid.get(row, column), value);
    }
    assert_eq!(grid.get(&1, &"b"), Some(&20));
    assert_eq!(grid.size(), 4);
}

#[test]
fn test_put_all_to_row_and_column() {
    let mut grid = create_grid();
    grid.put_all_to_row(HashMap::from([("c", 1)]), 5)
        .put_all_to_column(HashMap::from([(6, 2), (1, 3)]), "b");

    assert_eq!(grid.row_view(&5), HashMap::from([("c", 1)]));
    assert_eq!(grid.column_view(&"b"), HashMap::from([(1, 3), (6, 2)]));
}

#[test]
fn test_copy_with_conversion_identity_and_merge() {
    let grid = create_grid();

    let same = grid.copy_with_conversion(|r| *r, |c| *c, |v| *v);
    assert_eq!(same, grid);

    let merged = grid.copy_with_conversion(|r| r % 2, |c| c.to_uppercase(), |v| v.to_string());
    assert_eq!(
        merged.row_view(&1),
        HashMap::from([("A".to_string(), "10".to_string()), ("B".to_string(), "20".to_string())])
    );
    assert_eq!(merged.row_view(&0), HashMap::from([("A".to_string(), "30".to_string())]));
}

#[test]
fn test_absent_value_ambiguity() {
    let mut grid = create_grid();
    grid.put(4, "a", None::<i32>).unwrap();

    assert_eq!(grid.get(&4, &"a"), None);
    assert_eq!(grid.get_or_default(&4, &"a", 7), 7);
    assert_eq!(grid.get_or_default(&1, &"a", 7), 10);
    assert!(grid.has_key(&4, &"a"));
    assert!(grid.has_value(None::<&i32>));
    assert_eq!(grid.size(), 4);
}

#[test]
fn test_collect_from_pairs() {
    let grid: HashMap2D<char, u8, bool> = [(('x', 0), true), (('x', 1), false), (('y', 0), true)]
        .into_iter()
        .collect();

    assert_eq!(grid.size(), 3);
    assert_eq!(grid.column_view(&0), HashMap::from([('x', true), ('y', true)]));
}

fn count_cells<M: Map2D<u32, &'static str, i32>>(map: &M) -> usize {
    map.iter().count()
}

#[test]
fn test_generic_code_over_trait() {
    let grid = create_grid();
    assert_eq!(count_cells(&grid), grid.size());
}
