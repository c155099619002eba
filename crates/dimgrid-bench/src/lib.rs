//! Benchmark profiles for dimgrid.
//!
//! - [`reference_grid`]: the one-million-cell `{x: 10, y: 100, z: 1000}` grid
//! - [`probe_coords`]: deterministic in-range coordinates for lookups

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use dimgrid::prelude::*;
use dimgrid_test_utils::fixtures;

/// The reference 1M-cell grid, filled with each cell's linear index.
pub fn reference_grid(storage: StorageKind) -> Grid<&'static str, u64> {
    let shape = fixtures::million();
    let config = GridConfig::new().with_storage(storage);
    let mut grid = Grid::from_shape(shape, config).expect("reference shape fits");
    for i in 0..grid.cell_count() {
        grid.set_index(i, i as u64).expect("index in range");
    }
    grid
}

/// `n` deterministic pseudo-random in-range coordinates of `shape`.
pub fn probe_coords<D: Dimension>(shape: &Shape<D>, n: usize) -> Vec<Coord<D>> {
    let cells = shape.cell_count() as u64;
    (0..n as u64)
        .map(|i| {
            let index = i.wrapping_mul(6364136223846793007) % cells;
            grid_index(shape, index as usize).expect("index below cell_count")
        })
        .collect()
}
