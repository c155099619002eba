//! The `Grid` container.

use crate::config::GridConfig;
use dimgrid_core::{Coord, Dimension, GridError, Shape};
use dimgrid_space::{codec, Cells, Neighbours};
use dimgrid_store::{CellStore, Storage, StorageKind};
use std::fmt;

/// An N-dimensional grid over named dimensions, storing one optional `T`
/// per cell.
///
/// Dimension order is fixed by the size descriptor passed at construction
/// and never changes. Cells are addressed by named [`Coord`]inates, which
/// map to linear indices with the last dimension varying fastest; cell
/// enumeration follows the same order, so the `n`-th coordinate yielded by
/// [`cells`](Self::cells) always lives in slot `n`.
///
/// # Examples
///
/// ```
/// use dimgrid::prelude::*;
///
/// let mut grid: Grid<&str, u32> = Grid::new([("x", 3), ("y", 3)]).unwrap();
/// let c = Coord::from([("x", 1), ("y", 2)]);
/// assert_eq!(grid.to_index(&c).unwrap(), 5);
///
/// grid.set(&c, 42).unwrap();
/// assert_eq!(grid.get(&c).unwrap(), Some(&42));
///
/// let in_bounds = grid
///     .neighbours_in_bounds(&Coord::from([("x", 0), ("y", 0)]))
///     .unwrap()
///     .count();
/// assert_eq!(in_bounds, 4);
/// ```
pub struct Grid<D, T> {
    shape: Shape<D>,
    store: Storage<T>,
    config: GridConfig,
}

impl<D: Dimension, T> Grid<D, T> {
    /// Build a grid from `(dimension, extent)` pairs with the default
    /// configuration. Pair order defines dimension order.
    ///
    /// Returns `Err(GridError::MalformedSize)` for a zero extent, a repeated
    /// dimension or no dimensions, and `Err(GridError::Overflow)` if the
    /// extent product is too large.
    pub fn new(sizes: impl IntoIterator<Item = (D, usize)>) -> Result<Self, GridError> {
        Self::with_config(sizes, GridConfig::default())
    }

    /// Build a grid from `(dimension, extent)` pairs with `config`.
    pub fn with_config(
        sizes: impl IntoIterator<Item = (D, usize)>,
        config: GridConfig,
    ) -> Result<Self, GridError> {
        config.validate()?;
        let shape = Shape::with_limit(sizes, config.max_cells)?;
        Self::from_shape(shape, config)
    }

    /// Build a grid over an existing shape.
    pub fn from_shape(shape: Shape<D>, config: GridConfig) -> Result<Self, GridError> {
        config.validate()?;
        if shape.cell_count() > config.max_cells {
            log::warn!(
                "rejecting grid with {} cells (limit {})",
                shape.cell_count(),
                config.max_cells
            );
            return Err(GridError::Overflow {
                reason: format!(
                    "cell count {} exceeds limit {}",
                    shape.cell_count(),
                    config.max_cells
                ),
            });
        }
        let store = Storage::new(config.storage, shape.cell_count())?;
        log::debug!(
            "created {} grid {:?} ({} cells)",
            config.storage,
            shape,
            shape.cell_count()
        );
        Ok(Self {
            shape,
            store,
            config,
        })
    }

    // ── Shape ───────────────────────────────────────────────────

    /// The grid's size descriptor.
    pub fn shape(&self) -> &Shape<D> {
        &self.shape
    }

    /// The configuration the grid was built with.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Backing store kind.
    pub fn storage_kind(&self) -> StorageKind {
        self.store.kind()
    }

    /// Number of dimensions.
    pub fn ndim(&self) -> usize {
        self.shape.ndim()
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.shape.cell_count()
    }

    /// Dimensions in order.
    pub fn dims(&self) -> impl ExactSizeIterator<Item = &D> + '_ {
        self.shape.dims()
    }

    /// Extent of `dim`, if it is one of the grid's dimensions.
    pub fn extent(&self, dim: &D) -> Option<usize> {
        self.shape.extent(dim)
    }

    /// Whether `coord` names exactly this grid's dimensions and lies
    /// inside it.
    pub fn contains(&self, coord: &Coord<D>) -> bool {
        self.shape.contains(coord)
    }

    // ── Codec ───────────────────────────────────────────────────

    /// Linear index of `coord`.
    ///
    /// Returns `Err(GridError::OutOfRange)` if a component is outside
    /// `[0, extent)`, or `Err(GridError::DimensionMismatch)` if `coord`
    /// does not carry exactly the grid's dimensions.
    pub fn to_index(&self, coord: &Coord<D>) -> Result<usize, GridError> {
        codec::linear_index(&self.shape, coord)
    }

    /// Coordinate at linear index `index`.
    ///
    /// Returns `Err(GridError::IndexOutOfRange)` if `index >= cell_count`.
    pub fn to_coord(&self, index: usize) -> Result<Coord<D>, GridError> {
        codec::grid_index(&self.shape, index)
    }

    // ── Enumeration ─────────────────────────────────────────────

    /// Every coordinate in the grid, in linear-index order.
    ///
    /// Each call starts a fresh pass.
    pub fn cells(&self) -> Cells<'_, D> {
        Cells::new(&self.shape)
    }

    /// The `3^D` coordinates around `center`, center included.
    ///
    /// Coordinates outside the grid are yielded as-is; see
    /// [`neighbours_in_bounds`](Self::neighbours_in_bounds) for a filtered
    /// view.
    pub fn neighbours(&self, center: &Coord<D>) -> Result<Neighbours<'_, D>, GridError> {
        Neighbours::new(&self.shape, center)
    }

    /// Like [`neighbours`](Self::neighbours), skipping coordinates outside
    /// the grid.
    pub fn neighbours_in_bounds(
        &self,
        center: &Coord<D>,
    ) -> Result<impl Iterator<Item = Coord<D>> + '_, GridError> {
        let all = self.neighbours(center)?;
        Ok(all.filter(move |c| self.shape.contains(c)))
    }

    // ── Storage ─────────────────────────────────────────────────

    /// Value at `coord`, or `None` if the cell is empty.
    pub fn get(&self, coord: &Coord<D>) -> Result<Option<&T>, GridError> {
        let index = self.to_index(coord)?;
        self.store.get(index)
    }

    /// Mutable access to the value at `coord`, or `None` if the cell is
    /// empty.
    pub fn get_mut(&mut self, coord: &Coord<D>) -> Result<Option<&mut T>, GridError> {
        let index = self.to_index(coord)?;
        self.store.get_mut(index)
    }

    /// Store `value` at `coord`, returning the value it replaced.
    ///
    /// Last write wins.
    pub fn set(&mut self, coord: &Coord<D>, value: T) -> Result<Option<T>, GridError> {
        let index = self.to_index(coord)?;
        self.store.insert(index, value)
    }

    /// Empty the cell at `coord`, returning what it held.
    ///
    /// Deleting an empty cell is a no-op returning `Ok(None)`.
    pub fn delete(&mut self, coord: &Coord<D>) -> Result<Option<T>, GridError> {
        let index = self.to_index(coord)?;
        self.store.remove(index)
    }

    /// Value in slot `index`, or `None` if it is empty.
    pub fn get_index(&self, index: usize) -> Result<Option<&T>, GridError> {
        self.store.get(index)
    }

    /// Store `value` in slot `index`, returning the value it replaced.
    pub fn set_index(&mut self, index: usize, value: T) -> Result<Option<T>, GridError> {
        self.store.insert(index, value)
    }

    /// Number of non-empty cells.
    pub fn occupied(&self) -> usize {
        self.store.occupied()
    }

    /// Empty every cell. The shape is unchanged.
    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Non-empty cells as `(coord, value)`, in linear-index order.
    pub fn entries(&self) -> impl Iterator<Item = (Coord<D>, &T)> + '_ {
        self.store.iter_occupied().map(move |(i, v)| {
            let coord = codec::grid_index(&self.shape, i)
                .expect("store capacity equals cell_count, so occupied indices decode");
            (coord, v)
        })
    }
}

impl<'a, D: Dimension, T> IntoIterator for &'a Grid<D, T> {
    type Item = Coord<D>;
    type IntoIter = Cells<'a, D>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells()
    }
}

impl<D: Dimension, T> fmt::Debug for Grid<D, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("shape", &self.shape)
            .field("storage", &self.store.kind())
            .field("cell_count", &self.shape.cell_count())
            .field("occupied", &self.store.occupied())
            .finish()
    }
}
