// construction-time settings
use crate::core::types::EmptyRowPolicy;

/// Settings fixed when a map is created.
///
/// The default retains empty rows and reserves nothing up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Map2DConfig {
    pub empty_rows: EmptyRowPolicy,
    /// Initial capacity of the outer row table.
    pub row_capacity: usize,
    /// Initial capacity of every newly registered row.
    pub column_capacity: usize,
}

impl Map2DConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_empty_rows(mut self, policy: EmptyRowPolicy) -> Self {
        self.empty_rows = policy;
        self
    }

    pub fn with_row_capacity(mut self, capacity: usize) -> Self {
        self.row_capacity = capacity;
        self
    }

    pub fn with_column_capacity(mut self, capacity: usize) -> Self {
        self.column_capacity = capacity;
        self
    }

    pub fn prunes_empty_rows(&self) -> bool {
        self.empty_rows == EmptyRowPolicy::Prune
    }
}
