//! Error types for the HyperLogLog++ core

use std::fmt;

/// Errors surfaced by the public constructor and merge operations.
///
/// These are the only failure paths the estimator has: out-of-range
/// precision, merging sketches of differing precision, and register-array
/// allocation failure. Every other internal consistency violation (a
/// register exceeding its theoretical bound, an out-of-range table index)
/// is a programmer error and is checked with `debug_assert!` rather than
/// surfaced here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SketchError {
    /// `precision` passed to [`crate::cardinality::HyperLogLog::try_new`]
    /// fell outside `[4, 18]`.
    InvalidPrecision {
        /// The rejected value.
        value: i32,
    },

    /// `merge` was called on two sketches with different precisions.
    PrecisionMismatch {
        /// Precision of the sketch being merged into.
        left: u8,
        /// Precision of the sketch being merged from.
        right: u8,
    },

    /// The register array could not be allocated.
    AllocationFailure {
        /// Number of registers (`2^precision`) the constructor attempted
        /// to allocate.
        requested_registers: usize,
    },
}

impl fmt::Display for SketchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SketchError::InvalidPrecision { value } => {
                write!(f, "invalid precision {value}: must be in range [4, 18]")
            }
            SketchError::PrecisionMismatch { left, right } => {
                write!(f, "precision mismatch: {left} vs {right}")
            }
            SketchError::AllocationFailure {
                requested_registers,
            } => {
                write!(f, "failed to allocate {requested_registers} registers")
            }
        }
    }
}

impl std::error::Error for SketchError {}

/// Result type alias for sketch operations.
pub type Result<T> = std::result::Result<T, SketchError>;
