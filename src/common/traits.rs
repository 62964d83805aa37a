//! Core traits implemented by the sketch

use super::error::SketchError;

/// Core trait for a probabilistic sketch.
///
/// # SOLID Principles
/// - **Single Responsibility**: focuses solely on update/estimate/reset.
/// - **Interface Segregation**: minimal interface, no serialization or
///   merge concerns (those live in [`Mergeable`]).
pub trait Sketch {
    /// The type of value this sketch is updated with.
    type Item;

    /// Update the sketch with a new item.
    fn update(&mut self, item: &Self::Item);

    /// Return the estimated cardinality.
    fn estimate(&self) -> f64;

    /// Return `true` if the sketch has never been updated.
    fn is_empty(&self) -> bool;
}

/// Trait for sketches that support merging two instances of equal shape.
///
/// # SOLID Principles
/// - **Interface Segregation**: a separate trait from [`Sketch`], since
///   not every sketch shape supports a meaningful merge.
pub trait Mergeable: Sketch {
    /// Merge `other` into `self`.
    ///
    /// # Errors
    /// Returns [`SketchError::PrecisionMismatch`] if the two sketches
    /// were constructed with different precisions.
    fn merge(&mut self, other: &Self) -> Result<(), SketchError>;
}
