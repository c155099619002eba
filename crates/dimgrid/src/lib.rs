//! dimgrid: a generic N-dimensional grid over named dimensions.
//!
//! This is the top-level facade crate. It provides [`Grid`], which ties a
//! [`Shape`](types::Shape) to a backing store, and re-exports the public API
//! of the sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use dimgrid::prelude::*;
//!
//! let mut grid: Grid<&str, f32> = Grid::new([("x", 10), ("y", 100), ("z", 1000)]).unwrap();
//! assert_eq!(grid.cell_count(), 1_000_000);
//!
//! let c = Coord::from([("x", 1), ("y", 2), ("z", 3)]);
//! grid.set(&c, 0.5).unwrap();
//! assert_eq!(grid.get(&c).unwrap(), Some(&0.5));
//! assert_eq!(grid.to_index(&c).unwrap(), 1 * 100_000 + 2 * 1000 + 3);
//!
//! // 27 neighbours in 3D, center included, no bounds filtering.
//! assert_eq!(grid.neighbours(&c).unwrap().count(), 27);
//!
//! // Index math without a store.
//! let shape = Shape::new([("x", 100), ("y", 20)]).unwrap();
//! assert_eq!(linear_index(&shape, &Coord::from([("x", 10), ("y", 9)])).unwrap(), 209);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `dimgrid-core` | `Coord`, `Shape`, `Dimension`, `GridError` |
//! | [`space`] | `dimgrid-space` | codec, `Cells`, `Neighbours`, `Odometer` |
//! | [`store`] | `dimgrid-store` | `CellStore`, dense and sparse backends |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod grid;

pub use config::GridConfig;
pub use grid::Grid;

/// Core types (`dimgrid-core`).
pub use dimgrid_core as types;

/// Index math and enumeration (`dimgrid-space`).
pub use dimgrid_space as space;

/// Cell storage backends (`dimgrid-store`).
pub use dimgrid_store as store;

/// Common imports for typical usage.
///
/// ```rust
/// use dimgrid::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{Grid, GridConfig};
    pub use dimgrid_core::{Coord, Dimension, GridError, Shape};
    pub use dimgrid_space::{grid_index, linear_index, Cells, Neighbours};
    pub use dimgrid_store::StorageKind;
}
