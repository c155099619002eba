//! Named coordinates.

use crate::dimension::Dimension;
use indexmap::IndexMap;
use smallvec::SmallVec;
use std::fmt;

/// Per-dimension component values laid out in a shape's dimension order.
///
/// This is the positional twin of [`Coord`]: the codec and enumerators work
/// on it directly and only build named coordinates at the API edge.
pub type Position = SmallVec<[i64; 4]>;

/// A mapping from each dimension to an integer component.
///
/// Components are `i64` so that neighbourhood offsets can step one past
/// either edge of the grid (`-1` or `extent`) without clamping.
///
/// Equality is map equality: two coordinates are equal when they assign the
/// same values to the same dimensions, whatever order they were built in.
///
/// # Examples
///
/// ```
/// use dimgrid_core::Coord;
///
/// let a = Coord::from([("x", 1), ("y", 2)]);
/// let b: Coord<&str> = [("y", 2), ("x", 1)].into_iter().collect();
/// assert_eq!(a, b);
/// assert_eq!(a.get(&"y"), Some(2));
/// assert_eq!(a.to_string(), "{\"x\": 1, \"y\": 2}");
/// ```
#[derive(Clone)]
pub struct Coord<D> {
    values: IndexMap<D, i64>,
}

impl<D: Dimension> Coord<D> {
    /// An empty coordinate.
    pub fn new() -> Self {
        Self {
            values: IndexMap::new(),
        }
    }

    /// An empty coordinate with room for `ndim` components.
    pub fn with_capacity(ndim: usize) -> Self {
        Self {
            values: IndexMap::with_capacity(ndim),
        }
    }

    /// Build a coordinate by pairing `dims` with `values` in order.
    ///
    /// Extra items on either side are ignored.
    pub fn from_parts<'a>(dims: impl IntoIterator<Item = &'a D>, values: &[i64]) -> Self
    where
        D: 'a,
    {
        let mut values_map = IndexMap::with_capacity(values.len());
        for (dim, &v) in dims.into_iter().zip(values) {
            values_map.insert(dim.clone(), v);
        }
        Self { values: values_map }
    }

    /// Component for `dim`, if present.
    pub fn get(&self, dim: &D) -> Option<i64> {
        self.values.get(dim).copied()
    }

    /// Set the component for `dim`, returning the previous value.
    ///
    /// A new dimension is appended after existing ones.
    pub fn insert(&mut self, dim: D, value: i64) -> Option<i64> {
        self.values.insert(dim, value)
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, dim: D, value: i64) -> Self {
        self.values.insert(dim, value);
        self
    }

    /// Whether `dim` has a component.
    pub fn contains_dim(&self, dim: &D) -> bool {
        self.values.contains_key(dim)
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the coordinate has no components.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Dimensions in insertion order.
    pub fn dims(&self) -> impl Iterator<Item = &D> + '_ {
        self.values.keys()
    }

    /// `(dimension, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&D, i64)> + '_ {
        self.values.iter().map(|(d, &v)| (d, v))
    }
}

impl<D: Dimension> Default for Coord<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Dimension> PartialEq for Coord<D> {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl<D: Dimension> Eq for Coord<D> {}

impl<D: Dimension> fmt::Debug for Coord<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.values.iter()).finish()
    }
}

impl<D: Dimension> fmt::Display for Coord<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (dim, value)) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{dim:?}: {value}")?;
        }
        write!(f, "}}")
    }
}

impl<D: Dimension> FromIterator<(D, i64)> for Coord<D> {
    fn from_iter<I: IntoIterator<Item = (D, i64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<D: Dimension, const N: usize> From<[(D, i64); N]> for Coord<D> {
    fn from(pairs: [(D, i64); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<'a, D: Dimension> IntoIterator for &'a Coord<D> {
    type Item = (&'a D, &'a i64);
    type IntoIter = indexmap::map::Iter<'a, D, i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_ignores_insertion_order() {
        let a = Coord::from([("x", 0), ("y", 1)]);
        let b = Coord::new().with("y", 1).with("x", 0);
        assert_eq!(a, b);
    }

    #[test]
    fn different_values_are_unequal() {
        let a = Coord::from([("x", 0), ("y", 1)]);
        let b = Coord::from([("x", 1), ("y", 0)]);
        assert_ne!(a, b);
    }

    #[test]
    fn missing_dim_is_unequal() {
        let a = Coord::from([("x", 0), ("y", 1)]);
        let b = Coord::from([("x", 0)]);
        assert_ne!(a, b);
    }

    #[test]
    fn insert_replaces_and_keeps_position() {
        let mut c = Coord::from([('a', 1), ('b', 2)]);
        assert_eq!(c.insert('a', 7), Some(1));
        assert_eq!(c.dims().copied().collect::<Vec<_>>(), vec!['a', 'b']);
        assert_eq!(c.get(&'a'), Some(7));
    }

    #[test]
    fn from_parts_zips_in_order() {
        let dims = ["x", "y", "z"];
        let c = Coord::from_parts(dims.iter(), &[4, -1, 9]);
        assert_eq!(c, Coord::from([("x", 4), ("y", -1), ("z", 9)]));
    }

    #[test]
    fn debug_and_display() {
        let c = Coord::from([("x", 2), ("y", -1)]);
        assert_eq!(format!("{c:?}"), "{\"x\": 2, \"y\": -1}");
        assert_eq!(c.to_string(), "{\"x\": 2, \"y\": -1}");
    }

    #[test]
    fn enum_dimensions() {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        enum Axis {
            Row,
            Col,
        }
        let c = Coord::from([(Axis::Row, 3), (Axis::Col, 4)]);
        assert_eq!(c.get(&Axis::Col), Some(4));
        assert_eq!(c.len(), 2);
    }
}
