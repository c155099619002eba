//! Core types for dimgrid.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by the rest of the workspace: the [`Dimension`] key
//! trait, named [`Coord`]inates, the ordered [`Shape`] size descriptor, and
//! the [`GridError`] taxonomy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coord;
pub mod dimension;
pub mod error;
pub mod shape;

pub use coord::{Coord, Position};
pub use dimension::Dimension;
pub use error::GridError;
pub use shape::{Shape, MAX_CELLS};
