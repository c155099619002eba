//! The `CellStore` trait.

use dimgrid_core::GridError;

/// Slot storage addressed by linear index.
///
/// A store has a fixed number of slots (`capacity`), each either empty or
/// holding one value. Every indexed method returns
/// `Err(GridError::IndexOutOfRange)` for `index >= capacity` and leaves the
/// store untouched in that case.
pub trait CellStore<T> {
    /// Number of addressable slots.
    fn capacity(&self) -> usize;

    /// Value in slot `index`, or `None` if the slot is empty.
    fn get(&self, index: usize) -> Result<Option<&T>, GridError>;

    /// Mutable access to slot `index`, or `None` if the slot is empty.
    fn get_mut(&mut self, index: usize) -> Result<Option<&mut T>, GridError>;

    /// Overwrite slot `index`, returning whatever it held before.
    fn insert(&mut self, index: usize, value: T) -> Result<Option<T>, GridError>;

    /// Empty slot `index`, returning whatever it held. Emptying an empty
    /// slot is a no-op that returns `Ok(None)`.
    fn remove(&mut self, index: usize) -> Result<Option<T>, GridError>;

    /// Number of non-empty slots.
    fn occupied(&self) -> usize;

    /// Empty every slot. Capacity is unchanged.
    fn clear(&mut self);

    /// Non-empty slots as `(index, value)`, in ascending index order.
    fn iter_occupied<'a>(&'a self) -> Box<dyn Iterator<Item = (usize, &'a T)> + 'a>
    where
        T: 'a;
}

/// Shared bounds check for store implementations.
pub(crate) fn check_index(index: usize, capacity: usize) -> Result<(), GridError> {
    if index >= capacity {
        return Err(GridError::IndexOutOfRange {
            index,
            cell_count: capacity,
        });
    }
    Ok(())
}
