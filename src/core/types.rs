// key bounds + row retention policy
use std::fmt;
use std::hash::Hash;

/// Anything usable as a row or column key.
///
/// Keys are compared by value and hashed; no ordering is required.
pub trait Key: Eq + Hash + Clone {}

impl<T: Eq + Hash + Clone> Key for T {}

/// What happens to a row registration once its last column is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EmptyRowPolicy {
    /// Keep the (now empty) row registered: `has_row` stays true.
    #[default]
    Retain,
    /// Drop the row registration together with its last column.
    Prune,
}

/// Which half of a composite key was missing on insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyPart {
    Row,
    Column,
    Both,
}

impl KeyPart {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyPart::Row => "row",
            KeyPart::Column => "column",
            KeyPart::Both => "row and column",
        }
    }
}

impl fmt::Display for KeyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
