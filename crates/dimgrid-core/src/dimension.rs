//! The [`Dimension`] key trait.

use std::fmt::Debug;
use std::hash::Hash;

/// A named grid axis.
///
/// Anything cloneable, hashable and printable works: `&'static str`,
/// `String`, `char`, or a caller-defined enum. Dimension order is never
/// derived from the key itself; it is fixed by the order in which a
/// [`Shape`](crate::Shape) receives its extents.
pub trait Dimension: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Dimension for T {}

/// Render a dimension for error messages.
pub(crate) fn label<D: Dimension>(dim: &D) -> String {
    format!("{dim:?}")
}
