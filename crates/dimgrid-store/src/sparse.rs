//! Sparse slot storage: only occupied cells take memory.

use crate::store::{check_index, CellStore};
use dimgrid_core::GridError;
use indexmap::IndexMap;

/// A map from linear index to value.
///
/// Slots absent from the map are empty. Memory scales with occupancy, not
/// cell count, which suits large grids that are mostly empty.
///
/// `insert` and `remove` are O(1); removal uses `swap_remove`, so map order
/// is not index order. [`iter_occupied`](CellStore::iter_occupied) restores
/// ascending order by collecting and sorting, which costs O(n log n) time
/// and O(n) memory per call in the number of occupied slots.
#[derive(Clone, Debug)]
pub struct SparseStore<T> {
    capacity: usize,
    values: IndexMap<usize, T>,
}

impl<T> SparseStore<T> {
    /// Create an empty store addressing `capacity` slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            values: IndexMap::new(),
        }
    }
}

impl<T> CellStore<T> for SparseStore<T> {
    fn capacity(&self) -> usize {
        self.capacity
    }

    fn get(&self, index: usize) -> Result<Option<&T>, GridError> {
        check_index(index, self.capacity)?;
        Ok(self.values.get(&index))
    }

    fn get_mut(&mut self, index: usize) -> Result<Option<&mut T>, GridError> {
        check_index(index, self.capacity)?;
        Ok(self.values.get_mut(&index))
    }

    fn insert(&mut self, index: usize, value: T) -> Result<Option<T>, GridError> {
        check_index(index, self.capacity)?;
        Ok(self.values.insert(index, value))
    }

    fn remove(&mut self, index: usize) -> Result<Option<T>, GridError> {
        check_index(index, self.capacity)?;
        // Order is restored on iteration, so O(1) swap removal is fine.
        Ok(self.values.swap_remove(&index))
    }

    fn occupied(&self) -> usize {
        self.values.len()
    }

    fn clear(&mut self) {
        log::trace!("clearing sparse store ({} occupied)", self.values.len());
        self.values.clear();
    }

    fn iter_occupied<'a>(&'a self) -> Box<dyn Iterator<Item = (usize, &'a T)> + 'a>
    where
        T: 'a,
    {
        // O(n log n) per call; see the type-level docs.
        let mut entries: Vec<(usize, &T)> = self.values.iter().map(|(&i, v)| (i, v)).collect();
        entries.sort_unstable_by_key(|&(i, _)| i);
        Box::new(entries.into_iter())
    }
}
