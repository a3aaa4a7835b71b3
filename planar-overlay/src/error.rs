//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OverlayError {
    /// The geometry cannot take part in a set operation.
    #[error("geometry type is not supported by set operations: {0}")]
    UnsupportedGeometry(&'static str),
    /// The output container cannot hold fragments of the dimension the operands can produce.
    #[error("operands can produce fragments of dimension {required}, but the output holds only up to {capacity}")]
    OutputArity {
        /// Highest dimension the operands can produce.
        required: usize,
        /// Highest dimension the output can hold.
        capacity: usize,
    },
    /// An areal operand is not closed or not oriented canonically.
    #[error("areal operand must be corrected before the operation: {0}")]
    UncorrectedRing(&'static str),
    /// Geometry conversion error.
    #[error("invalid input geometry: {0}")]
    Conversion(String),
}
