//! Test utilities for dimgrid development.
//!
//! - [`fixtures`]: the standard shapes used across test suites and benches
//! - [`compliance`]: reusable assertions for the codec and enumerator
//!   invariants

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod compliance;
pub mod fixtures;

pub use compliance::run_full_compliance;
