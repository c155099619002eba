//! Runtime selection between dense and sparse storage.

use crate::dense::DenseStore;
use crate::sparse::SparseStore;
use crate::store::CellStore;
use dimgrid_core::GridError;
use std::fmt;

/// Which [`CellStore`] implementation backs a grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StorageKind {
    /// One slot per cell, allocated up front ([`DenseStore`]).
    #[default]
    Dense,
    /// Occupied cells only ([`SparseStore`]).
    Sparse,
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dense => write!(f, "dense"),
            Self::Sparse => write!(f, "sparse"),
        }
    }
}

/// A store of either kind, dispatched statically.
#[derive(Clone, Debug)]
pub enum Storage<T> {
    /// Dense backing.
    Dense(DenseStore<T>),
    /// Sparse backing.
    Sparse(SparseStore<T>),
}

impl<T> Storage<T> {
    /// Allocate a store of `kind` with `capacity` empty slots.
    pub fn new(kind: StorageKind, capacity: usize) -> Result<Self, GridError> {
        Ok(match kind {
            StorageKind::Dense => Self::Dense(DenseStore::new(capacity)?),
            StorageKind::Sparse => Self::Sparse(SparseStore::new(capacity)),
        })
    }

    /// The kind this store was built as.
    pub fn kind(&self) -> StorageKind {
        match self {
            Self::Dense(_) => StorageKind::Dense,
            Self::Sparse(_) => StorageKind::Sparse,
        }
    }

    fn inner(&self) -> &dyn CellStore<T> {
        match self {
            Self::Dense(s) => s,
            Self::Sparse(s) => s,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn CellStore<T> {
        match self {
            Self::Dense(s) => s,
            Self::Sparse(s) => s,
        }
    }
}

impl<T> CellStore<T> for Storage<T> {
    fn capacity(&self) -> usize {
        self.inner().capacity()
    }

    fn get(&self, index: usize) -> Result<Option<&T>, GridError> {
        self.inner().get(index)
    }

    fn get_mut(&mut self, index: usize) -> Result<Option<&mut T>, GridError> {
        self.inner_mut().get_mut(index)
    }

    fn insert(&mut self, index: usize, value: T) -> Result<Option<T>, GridError> {
        self.inner_mut().insert(index, value)
    }

    fn remove(&mut self, index: usize) -> Result<Option<T>, GridError> {
        self.inner_mut().remove(index)
    }

    fn occupied(&self) -> usize {
        self.inner().occupied()
    }

    fn clear(&mut self) {
        self.inner_mut().clear()
    }

    fn iter_occupied<'a>(&'a self) -> Box<dyn Iterator<Item = (usize, &'a T)> + 'a>
    where
        T: 'a,
    {
        match self {
            Self::Dense(s) => s.iter_occupied(),
            Self::Sparse(s) => s.iter_occupied(),
        }
    }
}
