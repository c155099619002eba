//! Grid configuration.

use dimgrid_core::{GridError, MAX_CELLS};
use dimgrid_store::StorageKind;

/// Construction-time settings for a [`Grid`](crate::Grid).
///
/// Validated when the grid is built; immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridConfig {
    /// Backing store implementation.
    ///
    /// Default: [`StorageKind::Dense`].
    pub storage: StorageKind,

    /// Ceiling on the total cell count.
    ///
    /// Default: [`MAX_CELLS`](dimgrid_core::MAX_CELLS). Must be in
    /// `1..=MAX_CELLS`. Shapes whose extent product exceeds it are rejected
    /// with `GridError::Overflow`.
    pub max_cells: usize,
}

impl GridConfig {
    /// Default storage kind.
    pub const DEFAULT_STORAGE: StorageKind = StorageKind::Dense;

    /// Default cell ceiling.
    pub const DEFAULT_MAX_CELLS: usize = MAX_CELLS;

    /// Default configuration.
    pub fn new() -> Self {
        Self {
            storage: Self::DEFAULT_STORAGE,
            max_cells: Self::DEFAULT_MAX_CELLS,
        }
    }

    /// Use `storage` as the backing store.
    pub fn with_storage(mut self, storage: StorageKind) -> Self {
        self.storage = storage;
        self
    }

    /// Reject shapes with more than `max_cells` cells.
    pub fn with_max_cells(mut self, max_cells: usize) -> Self {
        self.max_cells = max_cells;
        self
    }

    /// Check field ranges.
    ///
    /// Returns `Err(GridError::InvalidConfig)` if `max_cells` is 0 or above
    /// [`MAX_CELLS`](dimgrid_core::MAX_CELLS).
    pub fn validate(&self) -> Result<(), GridError> {
        if self.max_cells == 0 {
            return Err(GridError::InvalidConfig {
                reason: "max_cells must be at least 1".to_string(),
            });
        }
        if self.max_cells > MAX_CELLS {
            return Err(GridError::InvalidConfig {
                reason: format!("max_cells {} exceeds {MAX_CELLS}", self.max_cells),
            });
        }
        Ok(())
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new()
    }
}
