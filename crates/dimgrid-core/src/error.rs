//! Error types for grid construction, indexing and storage.

use std::error::Error;
use std::fmt;

/// Errors arising from grid construction, index math, or cell access.
///
/// Every variant is a deterministic precondition violation detected at the
/// API boundary. A call that returns an error leaves the grid untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A coordinate component lies outside `[0, extent)`.
    OutOfRange {
        /// The offending dimension, rendered with `Debug`.
        dim: String,
        /// The component value.
        value: i64,
        /// The dimension's extent.
        extent: usize,
    },
    /// A linear index lies outside `[0, cell_count)`.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Total cells in the grid.
        cell_count: usize,
    },
    /// An extent product, stride, index or offset exceeded its integer range,
    /// or the cell count exceeded the configured ceiling.
    Overflow {
        /// What overflowed.
        reason: String,
    },
    /// The size descriptor is unusable: a zero extent, a repeated
    /// dimension name, or no dimensions at all.
    MalformedSize {
        /// What went wrong.
        reason: String,
    },
    /// A coordinate's dimension set differs from the grid's.
    DimensionMismatch {
        /// The grid's dimensions, in order.
        expected: Vec<String>,
        /// The coordinate's dimensions, in insertion order.
        found: Vec<String>,
    },
    /// A grid configuration failed validation.
    InvalidConfig {
        /// What went wrong.
        reason: String,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { dim, value, extent } => {
                write!(f, "coordinate {dim}={value} out of range [0, {extent})")
            }
            Self::IndexOutOfRange { index, cell_count } => {
                write!(f, "linear index {index} out of range [0, {cell_count})")
            }
            Self::Overflow { reason } => write!(f, "overflow: {reason}"),
            Self::MalformedSize { reason } => write!(f, "malformed size: {reason}"),
            Self::DimensionMismatch { expected, found } => {
                write!(
                    f,
                    "dimension mismatch: expected [{}], found [{}]",
                    expected.join(", "),
                    found.join(", ")
                )
            }
            Self::InvalidConfig { reason } => write!(f, "invalid config: {reason}"),
        }
    }
}

impl Error for GridError {}
