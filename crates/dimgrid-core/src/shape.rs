//! The ordered size descriptor of a grid.

use crate::coord::{Coord, Position};
use crate::dimension::{label, Dimension};
use crate::error::GridError;
use indexmap::map::Entry;
use indexmap::IndexMap;
use std::fmt;

/// Largest cell count any shape may have.
///
/// A dense store cannot hold more than `isize::MAX` slots, and the bound
/// also keeps every in-range component within `i64`.
pub const MAX_CELLS: usize = isize::MAX as usize;

/// Ordered extents of every grid dimension, plus derived strides.
///
/// # Formal definition
///
/// Given dimensions `d_0, d_1, ..., d_{n-1}` (in the order supplied) with
/// extents `e_0, ..., e_{n-1}`:
///
/// - **Cell count**: `e_0 * e_1 * ... * e_{n-1}` (overflow-checked at
///   construction, capped at [`Shape::MAX_CELLS`]).
/// - **Strides**: `s_i = e_{i+1} * ... * e_{n-1}`, so `s_{n-1} = 1`. The
///   last dimension varies fastest; the first is the most significant.
/// - **Linear index** of `(c_0, ..., c_{n-1})`: `sum_i c_i * s_i`.
///
/// A `Shape` is immutable once built.
///
/// # Examples
///
/// ```
/// use dimgrid_core::Shape;
///
/// let shape = Shape::new([("x", 100), ("y", 20)]).unwrap();
/// assert_eq!(shape.cell_count(), 2000);
/// assert_eq!(shape.strides(), &[20, 1]);
/// ```
#[derive(Clone)]
pub struct Shape<D> {
    extents: IndexMap<D, usize>,
    strides: Vec<usize>,
    cell_count: usize,
}

impl<D: Dimension> Shape<D> {
    /// Largest representable cell count; see [`MAX_CELLS`](crate::shape::MAX_CELLS).
    pub const MAX_CELLS: usize = crate::shape::MAX_CELLS;

    /// Build a shape from `(dimension, extent)` pairs, in order.
    ///
    /// Returns `Err(GridError::MalformedSize)` for an empty descriptor, a
    /// zero extent, or a repeated dimension, and `Err(GridError::Overflow)`
    /// if the cell count exceeds [`MAX_CELLS`](Self::MAX_CELLS).
    pub fn new(sizes: impl IntoIterator<Item = (D, usize)>) -> Result<Self, GridError> {
        Self::with_limit(sizes, Self::MAX_CELLS)
    }

    /// Like [`new`](Self::new), but rejects cell counts above `max_cells`.
    pub fn with_limit(
        sizes: impl IntoIterator<Item = (D, usize)>,
        max_cells: usize,
    ) -> Result<Self, GridError> {
        let max_cells = max_cells.min(Self::MAX_CELLS);
        let mut extents: IndexMap<D, usize> = IndexMap::new();
        let mut cell_count: usize = 1;

        for (dim, extent) in sizes {
            if extent == 0 {
                return Err(GridError::MalformedSize {
                    reason: format!("dimension {} has extent 0", label(&dim)),
                });
            }
            cell_count = cell_count
                .checked_mul(extent)
                .ok_or_else(|| GridError::Overflow {
                    reason: "cell count overflows usize".to_string(),
                })?;
            match extents.entry(dim) {
                Entry::Occupied(e) => {
                    return Err(GridError::MalformedSize {
                        reason: format!("dimension {} appears more than once", label(e.key())),
                    });
                }
                Entry::Vacant(e) => {
                    e.insert(extent);
                }
            }
        }

        if extents.is_empty() {
            return Err(GridError::MalformedSize {
                reason: "at least one dimension is required".to_string(),
            });
        }
        if cell_count > max_cells {
            log::warn!("rejecting shape with {cell_count} cells (limit {max_cells})");
            return Err(GridError::Overflow {
                reason: format!("cell count {cell_count} exceeds limit {max_cells}"),
            });
        }

        // strides[i] = product(extent[j] for j > i); bounded by cell_count.
        let n = extents.len();
        let mut strides = vec![1usize; n];
        for i in (0..n - 1).rev() {
            strides[i] = strides[i + 1] * extents[i + 1];
        }

        let shape = Self {
            extents,
            strides,
            cell_count,
        };
        log::debug!("built shape {shape:?} with {cell_count} cells");
        Ok(shape)
    }

    /// Number of dimensions.
    pub fn ndim(&self) -> usize {
        self.extents.len()
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cell_count
    }

    /// Dimensions in order.
    pub fn dims(&self) -> impl ExactSizeIterator<Item = &D> + Clone + '_ {
        self.extents.keys()
    }

    /// The `i`-th dimension, if any.
    pub fn dim(&self, i: usize) -> Option<&D> {
        self.extents.get_index(i).map(|(d, _)| d)
    }

    /// Position of `dim` in the dimension order.
    pub fn axis_of(&self, dim: &D) -> Option<usize> {
        self.extents.get_index_of(dim)
    }

    /// Extent of `dim`, if it belongs to this shape.
    pub fn extent(&self, dim: &D) -> Option<usize> {
        self.extents.get(dim).copied()
    }

    /// Extents in dimension order.
    pub fn extents(&self) -> impl ExactSizeIterator<Item = usize> + '_ {
        self.extents.values().copied()
    }

    /// `(dimension, extent)` pairs in order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&D, usize)> + '_ {
        self.extents.iter().map(|(d, &e)| (d, e))
    }

    /// Per-dimension strides in dimension order.
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Extract `coord`'s components in dimension order.
    ///
    /// Only the dimension set is checked; values may be out of range.
    /// Returns `Err(GridError::DimensionMismatch)` if `coord` is missing a
    /// dimension or carries one the shape does not have.
    pub fn position_of(&self, coord: &Coord<D>) -> Result<Position, GridError> {
        if coord.len() != self.ndim() {
            return Err(self.mismatch(coord));
        }
        let mut position = Position::with_capacity(self.ndim());
        for dim in self.extents.keys() {
            match coord.get(dim) {
                Some(v) => position.push(v),
                None => return Err(self.mismatch(coord)),
            }
        }
        Ok(position)
    }

    /// Check every component of `position` against its extent.
    ///
    /// `position` must be in dimension order. A slice of the wrong length is
    /// reported as `Err(GridError::DimensionMismatch)`.
    pub fn check_bounds(&self, position: &[i64]) -> Result<(), GridError> {
        self.check_arity(position.len())?;
        for ((dim, &extent), &value) in self.extents.iter().zip(position) {
            if value < 0 || value as u64 >= extent as u64 {
                return Err(GridError::OutOfRange {
                    dim: label(dim),
                    value,
                    extent,
                });
            }
        }
        Ok(())
    }

    /// Check that a positional slice of length `len` has one slot per
    /// dimension.
    ///
    /// Returns `Err(GridError::DimensionMismatch)` otherwise, with the
    /// positional slots rendered as `#0`, `#1`, ...
    pub fn check_arity(&self, len: usize) -> Result<(), GridError> {
        if len != self.ndim() {
            return Err(GridError::DimensionMismatch {
                expected: self.extents.keys().map(label).collect(),
                found: (0..len).map(|i| format!("#{i}")).collect(),
            });
        }
        Ok(())
    }

    /// Whether `coord` has exactly this shape's dimensions and every
    /// component is within `[0, extent)`.
    pub fn contains(&self, coord: &Coord<D>) -> bool {
        self.position_of(coord)
            .is_ok_and(|p| self.check_bounds(&p).is_ok())
    }

    /// Build a named coordinate from positional components.
    pub fn coord_from(&self, position: &[i64]) -> Coord<D> {
        Coord::from_parts(self.extents.keys(), position)
    }

    fn mismatch(&self, coord: &Coord<D>) -> GridError {
        GridError::DimensionMismatch {
            expected: self.extents.keys().map(label).collect(),
            found: coord.dims().map(label).collect(),
        }
    }
}

impl<D: Dimension> PartialEq for Shape<D> {
    /// Shapes are equal when they list the same extents in the same order.
    fn eq(&self, other: &Self) -> bool {
        self.extents.len() == other.extents.len()
            && self.extents.iter().eq(other.extents.iter())
    }
}

impl<D: Dimension> Eq for Shape<D> {}

impl<D: fmt::Debug> fmt::Debug for Shape<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.extents.iter()).finish()
    }
}
