//! A two-dimensional map: values keyed by a `(row, column)` pair, with row and
//! column snapshots, bulk merges and key/value conversion.
//!
//! ```
//! use map2d::{create_instance, Map2D};
//!
//! let mut grid = create_instance::<u32, &str, i32>();
//! grid.put(1, "a", 10).unwrap();
//! grid.put(1, "b", 20).unwrap();
//! grid.put(2, "a", 30).unwrap();
//!
//! assert_eq!(grid.size(), 3);
//! assert_eq!(grid.column_view(&"a").len(), 2);
//! ```

pub mod core;

pub use crate::core::config::Map2DConfig;
pub use crate::core::error::{Map2DError, Map2DResult};
pub use crate::core::map2d::Map2D;
pub use crate::core::table::HashMap2D;
pub use crate::core::types::{EmptyRowPolicy, Key, KeyPart};

/// Creates an empty map with the default implementation and configuration.
pub fn create_instance<R: Key, C: Key, V>() -> HashMap2D<R, C, V> {
    HashMap2D::new()
}
