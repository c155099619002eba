//! Coordinate to linear-index codec.
//!
//! Mixed-radix positional encoding over a [`Shape`]'s dimension order. The
//! first dimension is the most significant digit and the last varies
//! fastest (row-major):
//!
//! ```text
//! index = sum_i coord[dim_i] * stride_i,   stride_i = prod_{j>i} extent_j
//! coord[dim_i] = (index / stride_i) % extent_i
//! ```
//!
//! [`encode`] and [`decode_into`] work on positional slices; [`linear_index`]
//! and [`grid_index`] are the named-coordinate entry points.

use dimgrid_core::{Coord, Dimension, GridError, Position, Shape};

/// Encode an in-range positional coordinate as a linear index.
///
/// `position` lists components in the shape's dimension order. Returns
/// `Err(GridError::OutOfRange)` if any component is outside `[0, extent)`.
pub fn encode<D: Dimension>(shape: &Shape<D>, position: &[i64]) -> Result<usize, GridError> {
    shape.check_bounds(position)?;
    let mut index = 0usize;
    for (&value, &stride) in position.iter().zip(shape.strides()) {
        index = (value as usize)
            .checked_mul(stride)
            .and_then(|term| index.checked_add(term))
            .ok_or_else(|| GridError::Overflow {
                reason: format!("linear index of {position:?} overflows usize"),
            })?;
    }
    Ok(index)
}

/// Decode `index` into `out`, one component per dimension.
///
/// Returns `Err(GridError::DimensionMismatch)` if `out` does not hold
/// exactly `ndim` entries, and `Err(GridError::IndexOutOfRange)` if
/// `index >= cell_count`. On error `out` is left untouched.
pub fn decode_into<D: Dimension>(
    shape: &Shape<D>,
    index: usize,
    out: &mut [i64],
) -> Result<(), GridError> {
    shape.check_arity(out.len())?;
    if index >= shape.cell_count() {
        return Err(GridError::IndexOutOfRange {
            index,
            cell_count: shape.cell_count(),
        });
    }
    for ((slot, &stride), extent) in out.iter_mut().zip(shape.strides()).zip(shape.extents()) {
        *slot = ((index / stride) % extent) as i64;
    }
    Ok(())
}

/// Decode `index` into a fresh [`Position`].
pub fn decode<D: Dimension>(shape: &Shape<D>, index: usize) -> Result<Position, GridError> {
    let mut position = Position::from_elem(0, shape.ndim());
    decode_into(shape, index, &mut position)?;
    Ok(position)
}

/// Linear index of a named coordinate.
///
/// # Examples
///
/// ```
/// use dimgrid_core::{Coord, Shape};
/// use dimgrid_space::linear_index;
///
/// let shape = Shape::new([("x", 100), ("y", 20)]).unwrap();
/// assert_eq!(linear_index(&shape, &Coord::from([("x", 1), ("y", 0)])).unwrap(), 20);
/// assert_eq!(linear_index(&shape, &Coord::from([("x", 10), ("y", 9)])).unwrap(), 209);
/// ```
pub fn linear_index<D: Dimension>(shape: &Shape<D>, coord: &Coord<D>) -> Result<usize, GridError> {
    let position = shape.position_of(coord)?;
    encode(shape, &position)
}

/// Named coordinate at a linear index. Exact inverse of [`linear_index`].
pub fn grid_index<D: Dimension>(shape: &Shape<D>, index: usize) -> Result<Coord<D>, GridError> {
    let position = decode(shape, index)?;
    Ok(shape.coord_from(&position))
}
