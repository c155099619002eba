//! Dense slot storage: one `Option<T>` per cell.

use crate::store::{check_index, CellStore};
use dimgrid_core::GridError;

/// A fixed-length vector of optional values, one per cell.
///
/// Allocated once to its final size; every slot starts empty. Memory is
/// proportional to the cell count regardless of occupancy.
#[derive(Clone, Debug)]
pub struct DenseStore<T> {
    slots: Vec<Option<T>>,
    occupied: usize,
}

impl<T> DenseStore<T> {
    /// Allocate `capacity` empty slots.
    ///
    /// Returns `Err(GridError::Overflow)` if the allocation cannot be made,
    /// rather than aborting the process.
    pub fn new(capacity: usize) -> Result<Self, GridError> {
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|e| GridError::Overflow {
                reason: format!("dense store of {capacity} slots cannot be allocated: {e}"),
            })?;
        slots.resize_with(capacity, || None);
        Ok(Self { slots, occupied: 0 })
    }
}

impl<T> CellStore<T> for DenseStore<T> {
    fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn get(&self, index: usize) -> Result<Option<&T>, GridError> {
        check_index(index, self.slots.len())?;
        Ok(self.slots[index].as_ref())
    }

    fn get_mut(&mut self, index: usize) -> Result<Option<&mut T>, GridError> {
        check_index(index, self.slots.len())?;
        Ok(self.slots[index].as_mut())
    }

    fn insert(&mut self, index: usize, value: T) -> Result<Option<T>, GridError> {
        check_index(index, self.slots.len())?;
        let prev = self.slots[index].replace(value);
        if prev.is_none() {
            self.occupied += 1;
        }
        Ok(prev)
    }

    fn remove(&mut self, index: usize) -> Result<Option<T>, GridError> {
        check_index(index, self.slots.len())?;
        let prev = self.slots[index].take();
        if prev.is_some() {
            self.occupied -= 1;
        }
        Ok(prev)
    }

    fn occupied(&self) -> usize {
        self.occupied
    }

    fn clear(&mut self) {
        log::trace!("clearing dense store ({} occupied)", self.occupied);
        self.slots.iter_mut().for_each(|s| *s = None);
        self.occupied = 0;
    }

    fn iter_occupied<'a>(&'a self) -> Box<dyn Iterator<Item = (usize, &'a T)> + 'a>
    where
        T: 'a,
    {
        Box::new(
            self.slots
                .iter()
                .enumerate()
                .filter_map(|(i, s)| s.as_ref().map(|v| (i, v))),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let s: DenseStore<u8> = DenseStore::new(4).unwrap();
        assert_eq!(s.capacity(), 4);
        assert_eq!(s.occupied(), 0);
        for i in 0..4 {
            assert_eq!(s.get(i).unwrap(), None);
        }
    }

    #[test]
    fn insert_get_remove() {
        let mut s = DenseStore::new(3).unwrap();
        assert_eq!(s.insert(1, "a").unwrap(), None);
        assert_eq!(s.insert(1, "b").unwrap(), Some("a"));
        assert_eq!(s.get(1).unwrap(), Some(&"b"));
        assert_eq!(s.occupied(), 1);
        assert_eq!(s.remove(1).unwrap(), Some("b"));
        assert_eq!(s.remove(1).unwrap(), None);
        assert_eq!(s.get(1).unwrap(), None);
        assert_eq!(s.occupied(), 0);
    }

    #[test]
    fn get_mut_updates_in_place() {
        let mut s = DenseStore::new(2).unwrap();
        s.insert(0, 10).unwrap();
        *s.get_mut(0).unwrap().unwrap() += 5;
        assert_eq!(s.get(0).unwrap(), Some(&15));
        assert!(s.get_mut(1).unwrap().is_none());
    }

    #[test]
    fn out_of_range_index() {
        let mut s = DenseStore::new(2).unwrap();
        assert_eq!(
            s.insert(2, 0),
            Err(GridError::IndexOutOfRange {
                index: 2,
                cell_count: 2
            })
        );
        assert!(s.get(5).is_err());
        assert!(s.remove(2).is_err());
        assert_eq!(s.occupied(), 0);
    }

    #[test]
    fn iter_occupied_ascending() {
        let mut s = DenseStore::new(5).unwrap();
        s.insert(3, 'c').unwrap();
        s.insert(0, 'a').unwrap();
        let items: Vec<_> = s.iter_occupied().collect();
        assert_eq!(items, vec![(0, &'a'), (3, &'c')]);
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut s = DenseStore::new(3).unwrap();
        s.insert(0, 1).unwrap();
        s.insert(2, 1).unwrap();
        s.clear();
        assert_eq!(s.occupied(), 0);
        assert_eq!(s.capacity(), 3);
        assert_eq!(s.iter_occupied().count(), 0);
    }

    #[test]
    fn impossible_allocation_is_an_error() {
        let r = DenseStore::<u64>::new(usize::MAX / 2);
        assert!(matches!(r, Err(GridError::Overflow { .. })));
    }
}
