//! Index math and enumeration for dimgrid.
//!
//! Everything here is a pure function of a [`Shape`](dimgrid_core::Shape):
//!
//! - [`codec`]: coordinate to linear index and back ([`linear_index`],
//!   [`grid_index`])
//! - [`Cells`]: every in-range coordinate, in linear-index order
//! - [`Neighbours`]: the `3^D` coordinates around a center, unfiltered
//!
//! Both enumerators are driven by one mixed-radix [`Odometer`], so their
//! nesting order and the codec's stride layout cannot drift apart.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cells;
pub mod codec;
pub mod neighbours;
pub mod odometer;

pub use cells::Cells;
pub use codec::{decode, decode_into, encode, grid_index, linear_index};
pub use neighbours::{neighbourhood_size, Neighbours};
pub use odometer::Odometer;
