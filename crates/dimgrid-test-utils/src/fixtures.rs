//! Standard shapes for tests and benchmarks.

use dimgrid_core::Shape;

/// `{x: 3}`.
pub fn line3() -> Shape<&'static str> {
    Shape::new([("x", 3)]).expect("valid fixture")
}

/// `{x: 2, y: 2}`.
pub fn square2() -> Shape<&'static str> {
    Shape::new([("x", 2), ("y", 2)]).expect("valid fixture")
}

/// `{x: 3, y: 3}`.
pub fn square3() -> Shape<&'static str> {
    Shape::new([("x", 3), ("y", 3)]).expect("valid fixture")
}

/// `{x: 100, y: 20}`.
pub fn wide_2d() -> Shape<&'static str> {
    Shape::new([("x", 100), ("y", 20)]).expect("valid fixture")
}

/// `{x: 10, y: 100, z: 1000}`: one million cells.
pub fn million() -> Shape<&'static str> {
    Shape::new([("x", 10), ("y", 100), ("z", 1000)]).expect("valid fixture")
}

/// An `n`-dimensional hypercube of side `side`, dimensions named `d0..dn`.
pub fn cube(n: usize, side: usize) -> Shape<String> {
    Shape::new((0..n).map(|i| (format!("d{i}"), side))).expect("valid fixture")
}
