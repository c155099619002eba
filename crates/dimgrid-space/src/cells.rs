//! Enumeration of every cell in a shape.

use crate::odometer::Odometer;
use dimgrid_core::{Coord, Dimension, Shape};
use std::iter::FusedIterator;

/// Lazy iterator over every in-range coordinate of a [`Shape`].
///
/// Order is nested: the first dimension is the outermost loop and the last
/// the innermost. The `n`-th item always has linear index `n`, so this
/// yields exactly what decoding `0..cell_count` with the codec would.
///
/// Each call to [`Cells::new`] starts from the beginning; nothing is shared
/// between iterators.
#[derive(Clone, Debug)]
pub struct Cells<'a, D> {
    shape: &'a Shape<D>,
    odometer: Odometer,
    next_index: usize,
}

impl<'a, D: Dimension> Cells<'a, D> {
    /// Start enumerating `shape` from its first cell.
    pub fn new(shape: &'a Shape<D>) -> Self {
        Self {
            shape,
            odometer: Odometer::new(shape.extents()),
            next_index: 0,
        }
    }

    /// Linear index of the next coordinate to be yielded.
    pub fn next_index(&self) -> usize {
        self.next_index
    }

    /// Pair each coordinate with its linear index.
    pub fn indexed(self) -> impl Iterator<Item = (usize, Coord<D>)> + 'a {
        let start = self.next_index;
        self.enumerate().map(move |(i, c)| (start + i, c))
    }
}

impl<D: Dimension> Iterator for Cells<'_, D> {
    type Item = Coord<D>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.odometer.is_done() {
            return None;
        }
        let mut coord = Coord::with_capacity(self.shape.ndim());
        for (dim, &cursor) in self.shape.dims().zip(self.odometer.cursors()) {
            coord.insert(dim.clone(), cursor as i64);
        }
        self.odometer.advance();
        self.next_index += 1;
        Some(coord)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.odometer.is_done() {
            0
        } else {
            self.shape.cell_count() - self.next_index
        };
        (remaining, Some(remaining))
    }
}

impl<D: Dimension> ExactSizeIterator for Cells<'_, D> {}

impl<D: Dimension> FusedIterator for Cells<'_, D> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{grid_index, linear_index};
    use proptest::prelude::*;

    #[test]
    fn one_dimension() {
        let s = Shape::new([("x", 3)]).unwrap();
        let cells: Vec<_> = Cells::new(&s).collect();
        assert_eq!(
            cells,
            vec![
                Coord::from([("x", 0)]),
                Coord::from([("x", 1)]),
                Coord::from([("x", 2)]),
            ]
        );
    }

    #[test]
    fn two_dimensions_last_fastest() {
        let s = Shape::new([("x", 2), ("y", 2)]).unwrap();
        let cells: Vec<_> = Cells::new(&s).collect();
        assert_eq!(
            cells,
            vec![
                Coord::from([("x", 0), ("y", 0)]),
                Coord::from([("x", 0), ("y", 1)]),
                Coord::from([("x", 1), ("y", 0)]),
                Coord::from([("x", 1), ("y", 1)]),
            ]
        );
    }

    #[test]
    fn yields_in_declared_dimension_order() {
        let s = Shape::new([("y", 2), ("x", 3)]).unwrap();
        let second = Cells::new(&s).nth(1).unwrap();
        assert_eq!(second, Coord::from([("y", 0), ("x", 1)]));
        assert_eq!(second.dims().copied().collect::<Vec<_>>(), vec!["y", "x"]);
    }

    #[test]
    fn exact_size_and_fused() {
        let s = Shape::new([("x", 2), ("y", 3)]).unwrap();
        let mut it = Cells::new(&s);
        assert_eq!(it.len(), 6);
        it.next();
        assert_eq!(it.len(), 5);
        assert_eq!(it.next_index(), 1);
        for _ in 0..5 {
            it.next();
        }
        assert_eq!(it.len(), 0);
        assert!(it.next().is_none());
        assert!(it.next().is_none());
    }

    #[test]
    fn debug_formats() {
        let s = Shape::new([("x", 2), ("y", 2)]).unwrap();
        let rendered = format!("{:?}", Cells::new(&s));
        assert!(rendered.starts_with("Cells"));
        assert!(rendered.contains("\"y\": 2"));
    }

    #[test]
    fn restartable() {
        let s = Shape::new([("x", 2), ("y", 3), ("z", 2)]).unwrap();
        let first: Vec<_> = Cells::new(&s).collect();
        let second: Vec<_> = Cells::new(&s).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn indexed_after_partial_consumption() {
        let s = Shape::new([("x", 4)]).unwrap();
        let mut it = Cells::new(&s);
        it.next();
        it.next();
        let rest: Vec<_> = it.indexed().map(|(i, _)| i).collect();
        assert_eq!(rest, vec![2, 3]);
    }

    proptest! {
        #[test]
        fn enumeration_matches_codec(extents in prop::collection::vec(1usize..6, 1..5)) {
            let s = Shape::new(extents.into_iter().enumerate()).unwrap();
            let mut count = 0;
            for (n, coord) in Cells::new(&s).indexed() {
                prop_assert_eq!(linear_index(&s, &coord).unwrap(), n);
                prop_assert_eq!(&grid_index(&s, n).unwrap(), &coord);
                count += 1;
            }
            prop_assert_eq!(count, s.cell_count());
        }
    }
}
