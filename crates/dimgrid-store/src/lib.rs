//! Cell storage for dimgrid, keyed by linear index.
//!
//! # Backends
//!
//! - [`DenseStore`]: a `Vec<Option<T>>` sized to the cell count
//! - [`SparseStore`]: an `IndexMap<usize, T>` holding occupied cells only
//!
//! [`Storage`] wraps either behind one type, selected by [`StorageKind`].
//! All backends implement [`CellStore`] and agree on its contract: empty
//! slots read as `None`, out-of-range indices are errors, and occupied
//! iteration runs in ascending index order.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod dense;
pub mod kind;
pub mod sparse;
pub mod store;

pub use dense::DenseStore;
pub use kind::{Storage, StorageKind};
pub use sparse::SparseStore;
pub use store::CellStore;
