//! Codec and enumerator invariant checks.
//!
//! Each function walks every cell of a shape, so keep shapes small outside
//! of dedicated stress tests.

use dimgrid_core::{Coord, Dimension, Shape};
use dimgrid_space::{grid_index, linear_index, neighbourhood_size, Cells, Neighbours};
use indexmap::IndexSet;

/// Assert `to_coord(to_index(c)) == c` for every enumerated `c`.
pub fn assert_round_trip<D: Dimension>(shape: &Shape<D>) {
    for coord in Cells::new(shape) {
        let index = linear_index(shape, &coord)
            .unwrap_or_else(|e| panic!("linear_index({coord}) failed: {e}"));
        let back = grid_index(shape, index)
            .unwrap_or_else(|e| panic!("grid_index({index}) failed: {e}"));
        assert_eq!(back, coord, "round trip through index {index} changed {coord}");
    }
}

/// Assert enumerated indices are exactly `0..cell_count`, with no gaps or
/// repeats.
pub fn assert_bijection<D: Dimension>(shape: &Shape<D>) {
    let indices: IndexSet<usize> = Cells::new(shape)
        .map(|c| linear_index(shape, &c).expect("enumerated coord is in range"))
        .collect();
    assert_eq!(
        indices.len(),
        shape.cell_count(),
        "enumeration produced {} distinct indices for {} cells",
        indices.len(),
        shape.cell_count()
    );
    assert!(
        indices.iter().all(|&i| i < shape.cell_count()),
        "enumeration produced an index past {}",
        shape.cell_count()
    );
}

/// Assert the `n`-th enumerated coordinate has linear index `n`.
pub fn assert_enumeration_matches_index<D: Dimension>(shape: &Shape<D>) {
    let mut count = 0;
    for (n, coord) in Cells::new(shape).enumerate() {
        assert_eq!(
            linear_index(shape, &coord).expect("enumerated coord is in range"),
            n,
            "coord {coord} enumerated at position {n}"
        );
        count += 1;
    }
    assert_eq!(count, shape.cell_count(), "enumeration length != cell_count");
}

/// Assert two passes over the cells yield the same sequence.
pub fn assert_enumeration_deterministic<D: Dimension>(shape: &Shape<D>) {
    let a: Vec<Coord<D>> = Cells::new(shape).collect();
    let b: Vec<Coord<D>> = Cells::new(shape).collect();
    assert_eq!(a, b, "cell enumeration is non-deterministic");
}

/// Assert every cell has exactly `3^D` neighbours, all within one step.
pub fn assert_neighbour_count<D: Dimension>(shape: &Shape<D>) {
    let expected = neighbourhood_size(shape.ndim()).expect("3^D fits in usize");
    for center in Cells::new(shape) {
        let around: Vec<Coord<D>> = Neighbours::new(shape, &center)
            .expect("in-range center")
            .collect();
        assert_eq!(
            around.len(),
            expected,
            "{center} has {} neighbours, expected {expected}",
            around.len()
        );
        for nb in &around {
            for (dim, v) in nb.iter() {
                let c = center.get(dim).expect("same dimensions");
                assert!(
                    (v - c).abs() <= 1,
                    "neighbour {nb} is more than one step from {center}"
                );
            }
        }
    }
}

/// Run every check above on `shape`.
pub fn run_full_compliance<D: Dimension>(shape: &Shape<D>) {
    assert_round_trip(shape);
    assert_bijection(shape);
    assert_enumeration_matches_index(shape);
    assert_enumeration_deterministic(shape);
    assert_neighbour_count(shape);
}
