//! Criterion micro-benchmarks for grid storage.

use criterion::{criterion_group, criterion_main, Criterion};
use dimgrid::prelude::*;
use dimgrid_bench::{probe_coords, reference_grid};
use std::hint::black_box;

/// Benchmark: 1000 `get` calls against the filled 1M-cell grid, per backend.
fn bench_get_1k(c: &mut Criterion) {
    for kind in [StorageKind::Dense, StorageKind::Sparse] {
        let grid = reference_grid(kind);
        let coords = probe_coords(grid.shape(), 1000);

        c.bench_function(&format!("get_1k_{kind}"), |b| {
            b.iter(|| {
                for coord in &coords {
                    black_box(grid.get(coord).unwrap());
                }
            });
        });
    }
}

/// Benchmark: set then delete 1000 cells of an empty 1M-cell grid.
fn bench_set_delete_1k(c: &mut Criterion) {
    for kind in [StorageKind::Dense, StorageKind::Sparse] {
        let shape = dimgrid_test_utils::fixtures::million();
        let coords = probe_coords(&shape, 1000);
        let mut grid: Grid<_, u64> =
            Grid::from_shape(shape, GridConfig::new().with_storage(kind)).unwrap();

        c.bench_function(&format!("set_delete_1k_{kind}"), |b| {
            b.iter(|| {
                for (i, coord) in coords.iter().enumerate() {
                    grid.set(coord, i as u64).unwrap();
                }
                for coord in &coords {
                    black_box(grid.delete(coord).unwrap());
                }
            });
        });
    }
}

criterion_group!(benches, bench_get_1k, bench_set_delete_1k);
criterion_main!(benches);
