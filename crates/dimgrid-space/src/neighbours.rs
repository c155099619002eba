//! Moore-neighbourhood enumeration.

use crate::odometer::Odometer;
use dimgrid_core::{Coord, Dimension, GridError, Position, Shape};
use std::iter::FusedIterator;

/// Offsets applied per axis: cursor `k` maps to `k - 1`.
const OFFSETS_PER_AXIS: usize = 3;

/// Number of coordinates in the neighbourhood of an `ndim`-dimensional cell.
///
/// Returns `Err(GridError::Overflow)` if `3^ndim` does not fit in `usize`.
pub fn neighbourhood_size(ndim: usize) -> Result<usize, GridError> {
    u32::try_from(ndim)
        .ok()
        .and_then(|n| OFFSETS_PER_AXIS.checked_pow(n))
        .ok_or_else(|| GridError::Overflow {
            reason: format!("3^{ndim} neighbourhood size overflows usize"),
        })
}

/// Lazy iterator over the `3^D` coordinates around a center.
///
/// Any dimension count is accepted. When `3^D` does not fit in `usize` the
/// sequence is still produced lazily, but its length is unknown:
/// [`size_hint`](Iterator::size_hint) reports `(usize::MAX, None)` and
/// [`exact_len`](Self::exact_len) returns `None`.
///
/// Each component is offset independently by `-1`, `0` or `+1`, with the
/// same nesting as [`Cells`](crate::Cells): first dimension slowest, last
/// fastest. The center itself is included.
///
/// Results are **not** bounds-filtered. A center on the edge of the grid
/// yields components equal to `-1` or `extent`; callers that only want
/// in-range cells filter with [`Shape::contains`].
///
/// # Examples
///
/// ```
/// use dimgrid_core::{Coord, Shape};
/// use dimgrid_space::Neighbours;
///
/// let shape = Shape::new([("x", 3)]).unwrap();
/// let around: Vec<_> = Neighbours::new(&shape, &Coord::from([("x", 2)]))
///     .unwrap()
///     .collect();
/// assert_eq!(
///     around,
///     vec![
///         Coord::from([("x", 1)]),
///         Coord::from([("x", 2)]),
///         Coord::from([("x", 3)]),
///     ]
/// );
/// ```
#[derive(Clone, Debug)]
pub struct Neighbours<'a, D> {
    shape: &'a Shape<D>,
    center: Position,
    odometer: Odometer,
    remaining: Option<usize>,
}

impl<'a, D: Dimension> Neighbours<'a, D> {
    /// Start enumerating around `center`.
    ///
    /// `center` must carry exactly the shape's dimensions, but its values
    /// may lie outside the grid. Returns `Err(GridError::Overflow)` if a
    /// component is at `i64::MIN` or `i64::MAX`, where an offset would
    /// overflow.
    pub fn new(shape: &'a Shape<D>, center: &Coord<D>) -> Result<Self, GridError> {
        let center = shape.position_of(center)?;
        if let Some(&v) = center.iter().find(|&&v| v == i64::MIN || v == i64::MAX) {
            return Err(GridError::Overflow {
                reason: format!("neighbour offset of component {v} overflows i64"),
            });
        }
        let remaining = neighbourhood_size(shape.ndim()).ok();
        Ok(Self {
            shape,
            odometer: Odometer::new(std::iter::repeat_n(OFFSETS_PER_AXIS, center.len())),
            center,
            remaining,
        })
    }

    /// Coordinates still to be yielded, or `None` if `3^D` overflows
    /// `usize`.
    pub fn exact_len(&self) -> Option<usize> {
        self.remaining
    }
}

impl<D: Dimension> Iterator for Neighbours<'_, D> {
    type Item = Coord<D>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.odometer.is_done() {
            return None;
        }
        let mut coord = Coord::with_capacity(self.center.len());
        for ((dim, &base), &cursor) in self
            .shape
            .dims()
            .zip(&self.center)
            .zip(self.odometer.cursors())
        {
            coord.insert(dim.clone(), base + cursor as i64 - 1);
        }
        self.odometer.advance();
        if let Some(r) = self.remaining.as_mut() {
            *r -= 1;
        }
        Some(coord)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(r) => (r, Some(r)),
            None => (usize::MAX, None),
        }
    }
}

impl<D: Dimension> FusedIterator for Neighbours<'_, D> {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn around(shape: &Shape<&'static str>, center: &Coord<&'static str>) -> Vec<Coord<&'static str>> {
        Neighbours::new(shape, center).unwrap().collect()
    }

    #[test]
    fn one_dimension_includes_out_of_range() {
        let s = Shape::new([("x", 3)]).unwrap();
        let n = around(&s, &Coord::from([("x", 2)]));
        assert_eq!(
            n,
            vec![
                Coord::from([("x", 1)]),
                Coord::from([("x", 2)]),
                Coord::from([("x", 3)]),
            ]
        );
    }

    #[test]
    fn two_dimensions_nested_order() {
        let s = Shape::new([("x", 3), ("y", 3)]).unwrap();
        let n = around(&s, &Coord::from([("x", 1), ("y", 1)]));
        let mut expected = Vec::new();
        for x in 0..3 {
            for y in 0..3 {
                expected.push(Coord::from([("x", x), ("y", y)]));
            }
        }
        assert_eq!(n, expected);
    }

    #[test]
    fn corner_emits_negative_components() {
        let s = Shape::new([("x", 3), ("y", 3)]).unwrap();
        let n = around(&s, &Coord::from([("x", 0), ("y", 0)]));
        assert_eq!(n.len(), 9);
        assert_eq!(n[0], Coord::from([("x", -1), ("y", -1)]));
        assert_eq!(n.iter().filter(|c| s.contains(c)).count(), 4);
    }

    #[test]
    fn four_dimensions_count() {
        let s = Shape::new([("a", 2), ("b", 2), ("c", 2), ("d", 2)]).unwrap();
        let center = Coord::from([("a", 1), ("b", 1), ("c", 1), ("d", 1)]);
        let it = Neighbours::new(&s, &center).unwrap();
        assert_eq!(it.exact_len(), Some(81));
        assert_eq!(it.size_hint(), (81, Some(81)));
        assert_eq!(it.count(), 81);
    }

    #[test]
    fn many_dimensions_enumerate_lazily() {
        let s = Shape::new((0..41usize).map(|d| (d, 1))).unwrap();
        assert_eq!(s.cell_count(), 1);
        let center: Coord<usize> = (0..41).map(|d| (d, 0)).collect();
        let mut it = Neighbours::new(&s, &center).unwrap();
        assert_eq!(it.exact_len(), None);
        assert_eq!(it.size_hint(), (usize::MAX, None));

        let first = it.next().unwrap();
        assert!(first.iter().all(|(_, v)| v == -1));
        let second = it.next().unwrap();
        assert_eq!(second.get(&40), Some(0));
        assert!((0..40).all(|d| second.get(&d) == Some(-1)));
        let third = it.next().unwrap();
        assert_eq!(third.get(&40), Some(1));
    }

    #[test]
    fn debug_formats() {
        let s = Shape::new([("x", 3)]).unwrap();
        let it = Neighbours::new(&s, &Coord::from([("x", 1)])).unwrap();
        assert!(format!("{it:?}").starts_with("Neighbours"));
    }

    #[test]
    fn center_may_be_outside_grid() {
        let s = Shape::new([("x", 3)]).unwrap();
        let n = around(&s, &Coord::from([("x", 10)]));
        assert_eq!(n[2], Coord::from([("x", 11)]));
    }

    #[test]
    fn extreme_component_rejected() {
        let s = Shape::new([("x", 3)]).unwrap();
        let r = Neighbours::new(&s, &Coord::from([("x", i64::MAX)]));
        assert!(matches!(r, Err(GridError::Overflow { .. })));
        let r = Neighbours::new(&s, &Coord::from([("x", i64::MIN)]));
        assert!(matches!(r, Err(GridError::Overflow { .. })));
    }

    #[test]
    fn wrong_dimensions_rejected() {
        let s = Shape::new([("x", 3), ("y", 3)]).unwrap();
        let r = Neighbours::new(&s, &Coord::from([("x", 1)]));
        assert!(matches!(r, Err(GridError::DimensionMismatch { .. })));
    }

    #[test]
    fn neighbourhood_size_overflow() {
        assert_eq!(neighbourhood_size(0).unwrap(), 1);
        assert_eq!(neighbourhood_size(3).unwrap(), 27);
        assert!(matches!(
            neighbourhood_size(200),
            Err(GridError::Overflow { .. })
        ));
    }

    proptest! {
        #[test]
        fn count_is_three_to_the_d(
            extents in prop::collection::vec(1usize..5, 1..6),
            offset in -2i64..6,
        ) {
            let s = Shape::new(extents.iter().copied().enumerate()).unwrap();
            let center: Coord<usize> = (0..extents.len()).map(|d| (d, offset)).collect();
            let n: Vec<_> = Neighbours::new(&s, &center).unwrap().collect();
            prop_assert_eq!(n.len(), 3usize.pow(extents.len() as u32));
            for c in &n {
                for (_, v) in c.iter() {
                    prop_assert!((offset - 1..=offset + 1).contains(&v));
                }
            }
            prop_assert_eq!(&n[n.len() / 2], &center);
        }
    }
}
