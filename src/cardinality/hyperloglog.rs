//! HyperLogLog++: bias-corrected cardinality estimation with a
//! linear-counting fallback for small cardinalities
//!
//! Implements Heule, Nunkesser & Hall's HyperLogLog++ (2013): the
//! register update rule from Flajolet et al.'s original HyperLogLog,
//! plus empirical bias correction for the raw harmonic-mean estimator
//! and a threshold-based selection between it and linear counting.
//!
//! # Algorithm overview
//!
//! 1. Hash each input item to a uniform 64-bit value (the caller's
//!    concern — this type consumes already-hashed values).
//! 2. The top `p` bits of the hash select one of `2^p` registers.
//! 3. The position of the first set bit in the remaining `64 - p` bits,
//!    plus one, is the candidate run length; each register keeps the
//!    maximum run length ever observed for its bucket.
//! 4. `estimate` combines the harmonic mean of the registers with an
//!    empirical bias correction (for mid-range cardinalities) or falls
//!    back to linear counting (for small ones).
//!
//! # Time complexity
//!
//! - `update`: O(1)
//! - `raw_estimate`, `merge`: O(m)
//! - `estimate`: O(m + 201 * K) where K = 6
//!
//! # Space complexity
//!
//! `m` bytes for registers (`m = 2^p`) plus constant overhead.
//!
//! # References
//!
//! - Flajolet, Fusy, Gandouet, Meunier. "HyperLogLog: the analysis of a
//!   near-optimal cardinality estimation algorithm" (2007).
//! - Heule, Nunkesser, Hall. "HyperLogLog in Practice: Algorithmic
//!   Engineering of a State of the Art Cardinality Estimation
//!   Algorithm" (2013).
//!
//! # Examples
//!
//! ```
//! use hllpp::cardinality::HyperLogLog;
//!
//! let mut hll = HyperLogLog::new(12);
//! for i in 0..10_000u64 {
//!     hll.update(&i);
//! }
//! let estimate = hll.estimate();
//! // Should be close to 10,000 with ~1.04/sqrt(4096) ~= 1.6% error.
//! assert!((estimate as i64 - 10_000).unsigned_abs() < 1_000);
//! ```

use super::bias;
use super::bitops::leading_zeros_64;
use super::tables;
use crate::common::validation::{clamp_precision, validate_precision};
use crate::common::{Mergeable, Sketch as SketchTrait, SketchError};
use std::hash::{Hash, Hasher};
use twox_hash::XxHash64;

/// HyperLogLog++ sketch for cardinality estimation.
///
/// Holds `2^precision` byte-wide registers, each the maximum run length
/// observed for its bucket. Mutated only by [`HyperLogLog::update_hash`]
/// / [`HyperLogLog::update`] and [`HyperLogLog::merge`]; precision is
/// fixed for the sketch's lifetime.
#[derive(Clone, Debug)]
pub struct HyperLogLog {
    precision: u8,
    registers: Vec<u8>,
}

impl HyperLogLog {
    /// Minimum precision accepted by [`HyperLogLog::try_new`].
    pub const MIN_PRECISION: u8 = 4;

    /// Maximum precision accepted by [`HyperLogLog::try_new`].
    pub const MAX_PRECISION: u8 = 18;

    /// Creates a sketch, clamping `requested_precision` into
    /// `[MIN_PRECISION, MAX_PRECISION]` instead of failing.
    ///
    /// Use [`HyperLogLog::try_new`] when an out-of-range request should
    /// be surfaced as an error instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use hllpp::cardinality::HyperLogLog;
    ///
    /// let hll = HyperLogLog::new(1);
    /// assert_eq!(hll.precision(), 4); // clamped up
    /// let hll = HyperLogLog::new(40);
    /// assert_eq!(hll.precision(), 18); // clamped down
    /// ```
    pub fn new(requested_precision: i32) -> Self {
        let precision = clamp_precision(requested_precision);
        Self::with_precision(precision)
    }

    /// Creates a sketch, rejecting `requested_precision` outside
    /// `[MIN_PRECISION, MAX_PRECISION]` instead of clamping it.
    ///
    /// # Errors
    ///
    /// Returns [`SketchError::InvalidPrecision`] if the request falls
    /// outside `[4, 18]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hllpp::cardinality::HyperLogLog;
    ///
    /// assert!(HyperLogLog::try_new(3).is_err());
    /// assert!(HyperLogLog::try_new(19).is_err());
    /// assert!(HyperLogLog::try_new(10).is_ok());
    /// ```
    pub fn try_new(requested_precision: i32) -> Result<Self, SketchError> {
        let precision = validate_precision(requested_precision)?;
        Ok(Self::with_precision(precision))
    }

    fn with_precision(precision: u8) -> Self {
        let m = 1usize << precision;
        HyperLogLog {
            precision,
            registers: vec![0u8; m],
        }
    }

    /// The effective precision this sketch was constructed with.
    #[inline]
    pub fn precision(&self) -> u8 {
        self.precision
    }

    /// Number of registers, `m = 2^precision`.
    #[inline]
    pub fn num_registers(&self) -> usize {
        1 << self.precision
    }

    /// Approximate relative standard error of the estimate, `1.04 /
    /// sqrt(m)`.
    pub fn standard_error(&self) -> f64 {
        1.04 / (self.num_registers() as f64).sqrt()
    }

    /// Hashes `item` with XXHash64 and folds it into the sketch.
    ///
    /// Hashing user data is not part of the estimator core (callers are
    /// free to supply pre-hashed `u64` values via
    /// [`HyperLogLog::update_hash`] instead); this is a convenience for
    /// the common case of hashing Rust values directly.
    pub fn update<T: Hash>(&mut self, item: &T) {
        let mut hasher = XxHash64::with_seed(0);
        item.hash(&mut hasher);
        self.update_hash(hasher.finish());
    }

    /// Updates the sketch with an already-hashed 64-bit value.
    ///
    /// The top `precision` bits of `hash` select a register; the
    /// position of the first set bit in the remaining bits (plus one)
    /// is the candidate run length, joined into the register by maximum.
    /// Repeated application of the same hash is idempotent.
    #[inline]
    pub fn update_hash(&mut self, hash: u64) {
        let p = self.precision;
        let index = (hash >> (64 - p)) as usize;
        let tail_mask = !(((1u64 << p) - 1) << (64 - p));
        let run = leading_zeros_64(hash & tail_mask) - p + 1;

        debug_assert!(index < self.registers.len());
        debug_assert!(run as usize <= 64 - p as usize + 1);

        if run > self.registers[index] {
            self.registers[index] = run;
        }
    }

    /// The raw harmonic-mean estimate, before bias correction or linear
    /// counting fallback: `alpha(p) * m^2 / sum(2^-register)`.
    pub fn raw_estimate(&self) -> f64 {
        let m = self.num_registers() as f64;
        let sum: f64 = self
            .registers
            .iter()
            .map(|&r| 2.0_f64.powi(-(r as i32)))
            .sum();
        tables::alpha(self.precision) * m * m / sum
    }

    /// Number of registers still at their initial value of zero.
    pub fn zero_register_count(&self) -> u32 {
        self.registers.iter().filter(|&&r| r == 0).count() as u32
    }

    /// The linear-counting estimate, `m * ln(m / V)`, accurate when the
    /// sketch is sparsely populated.
    ///
    /// Undefined (and not called) when `V == 0`; see [`HyperLogLog::estimate`].
    pub fn linear_counting_estimate(&self) -> f64 {
        let m = self.num_registers() as f64;
        let v = self.zero_register_count() as f64;
        m * (m / v).ln()
    }

    /// Estimates the cardinality of the set of distinct hashes observed.
    ///
    /// Applies the HyperLogLog++ selection rule in order: compute the
    /// raw estimate, bias-correct it if it's below `5m`, fall back to
    /// linear counting while any register is still zero, then pick
    /// between the linear-counting and bias-corrected values using the
    /// precision's threshold.
    pub fn estimate(&self) -> u64 {
        let m = self.num_registers() as f64;
        let raw = self.raw_estimate();

        let bias_threshold = 5.0 * m;
        let corrected = if raw < bias_threshold {
            raw - bias::bias(raw, self.precision)
        } else {
            raw
        };

        let zeros = self.zero_register_count();
        let linear_or_corrected = if zeros > 0 {
            self.linear_counting_estimate()
        } else {
            corrected
        };

        debug_assert!(linear_or_corrected >= 0.0);
        debug_assert!(corrected >= 0.0);

        if linear_or_corrected < tables::threshold(self.precision) {
            linear_or_corrected.floor() as u64
        } else {
            corrected.floor() as u64
        }
    }

    /// `true` if every register is still zero, i.e. no hash has been
    /// observed.
    pub fn is_empty(&self) -> bool {
        self.registers.iter().all(|&r| r == 0)
    }

    /// Serializes the sketch as `[precision: 1 byte][registers: m bytes]`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(1 + self.registers.len());
        bytes.push(self.precision);
        bytes.extend_from_slice(&self.registers);
        bytes
    }

    /// Deserializes a sketch from the layout produced by
    /// [`HyperLogLog::to_bytes`].
    ///
    /// # Errors
    ///
    /// Returns [`SketchError::InvalidPrecision`] if the embedded
    /// precision byte is out of range, or a length mismatch is treated
    /// the same way (the byte stream can't have come from this type).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SketchError> {
        let &[precision, ref rest @ ..] = bytes else {
            return Err(SketchError::InvalidPrecision { value: -1 });
        };
        let precision = validate_precision(precision as i32)?;

        let expected_len = 1usize << precision;
        if rest.len() != expected_len {
            return Err(SketchError::InvalidPrecision {
                value: precision as i32,
            });
        }

        Ok(HyperLogLog {
            precision,
            registers: rest.to_vec(),
        })
    }

    /// Direct access to the register array, mainly useful for tests and
    /// debugging.
    pub fn registers(&self) -> &[u8] {
        &self.registers
    }
}

impl SketchTrait for HyperLogLog {
    type Item = u64;

    fn update(&mut self, item: &Self::Item) {
        self.update_hash(*item);
    }

    fn estimate(&self) -> f64 {
        HyperLogLog::estimate(self) as f64
    }

    fn is_empty(&self) -> bool {
        HyperLogLog::is_empty(self)
    }
}

impl Mergeable for HyperLogLog {
    /// Merges `other` into `self` by taking the per-register maximum.
    /// Commutative, associative, and idempotent; a freshly constructed
    /// sketch is the identity.
    ///
    /// # Errors
    ///
    /// Returns [`SketchError::PrecisionMismatch`] if the two sketches
    /// have different precisions. A precision mismatch is a programmer
    /// error, not a recoverable runtime condition, but it is surfaced
    /// rather than silently ignored or panicking.
    fn merge(&mut self, other: &Self) -> Result<(), SketchError> {
        if self.precision != other.precision {
            return Err(SketchError::PrecisionMismatch {
                left: self.precision,
                right: other.precision,
            });
        }

        for (slot, &other_reg) in self.registers.iter_mut().zip(other.registers.iter()) {
            if other_reg > *slot {
                *slot = other_reg;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_low_and_high() {
        assert_eq!(HyperLogLog::new(1).precision(), 4);
        assert_eq!(HyperLogLog::new(20).precision(), 18);
    }

    #[test]
    fn strict_reject_and_accept() {
        assert!(HyperLogLog::try_new(3).is_err());
        assert!(HyperLogLog::try_new(19).is_err());
        assert!(HyperLogLog::try_new(10).is_ok());
    }

    #[test]
    fn new_is_empty() {
        let hll = HyperLogLog::new(12);
        assert!(hll.is_empty());
        assert_eq!(hll.num_registers(), 4096);
    }

    #[test]
    fn single_update_register_value() {
        // Spec scenario 3: precision 10, hash = 1.
        let mut hll = HyperLogLog::try_new(10).unwrap();
        hll.update_hash(1);
        assert_eq!(hll.registers()[0], 54);
        assert!(hll.registers()[1..].iter().all(|&r| r == 0));
    }

    #[test]
    fn register_bounds_hold_under_random_updates() {
        let p = 12u8;
        let mut hll = HyperLogLog::try_new(p as i32).unwrap();
        let max_register = 64 - p + 1;
        let mut x: u64 = 0x9E3779B97F4A7C15;
        for _ in 0..20_000 {
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            hll.update_hash(x);
        }
        assert!(hll.registers().iter().all(|&r| r <= max_register));
    }

    #[test]
    fn update_is_idempotent() {
        let mut a = HyperLogLog::new(12);
        let mut b = HyperLogLog::new(12);
        a.update_hash(0xDEAD_BEEF_CAFE_F00D);
        a.update_hash(0xDEAD_BEEF_CAFE_F00D);
        b.update_hash(0xDEAD_BEEF_CAFE_F00D);
        assert_eq!(a.registers(), b.registers());
    }

    #[test]
    fn estimate_small_cardinality_uses_linear_counting() {
        // Spec scenario 6: three distinct hashes, precision 14.
        let mut hll = HyperLogLog::new(14);
        hll.update_hash(0x1111_1111_1111_1111);
        hll.update_hash(0x2222_2222_2222_2222);
        hll.update_hash(0x3333_3333_3333_3333);
        let estimate = hll.estimate();
        assert!(
            (estimate as i64 - 3).abs() <= 1,
            "estimate {estimate} too far from 3"
        );
    }

    #[test]
    fn estimate_medium_cardinality_within_error_bound() {
        let mut hll = HyperLogLog::new(14);
        for i in 0..10_000u64 {
            hll.update(&i);
        }
        let estimate = hll.estimate() as f64;
        let error = (estimate - 10_000.0).abs() / 10_000.0;
        assert!(error < 0.05, "error {error} too high");
    }

    #[test]
    fn merge_disjoint_streams_approaches_union_cardinality() {
        let mut a = HyperLogLog::new(14);
        let mut b = HyperLogLog::new(14);
        for i in 0..1000u64 {
            a.update(&i);
        }
        for i in 1000..2000u64 {
            b.update(&i);
        }
        a.merge(&b).unwrap();
        let estimate = a.estimate() as f64;
        let error = (estimate - 2000.0).abs() / 2000.0;
        assert!(error < 0.1, "merged estimate error {error} too high");
    }

    #[test]
    fn merge_precision_mismatch_is_an_error() {
        let mut a = HyperLogLog::new(10);
        let b = HyperLogLog::new(12);
        assert!(a.merge(&b).is_err());
    }

    #[test]
    fn merge_is_commutative() {
        let mut a = HyperLogLog::new(10);
        let mut b = HyperLogLog::new(10);
        for i in 0..500u64 {
            a.update(&i);
        }
        for i in 200..800u64 {
            b.update(&i);
        }

        let mut ab = a.clone();
        ab.merge(&b).unwrap();
        let mut ba = b.clone();
        ba.merge(&a).unwrap();

        assert_eq!(ab.registers(), ba.registers());
    }

    #[test]
    fn merge_is_idempotent() {
        let mut a = HyperLogLog::new(10);
        for i in 0..500u64 {
            a.update(&i);
        }
        let snapshot = a.clone();
        a.merge(&snapshot).unwrap();
        assert_eq!(a.registers(), snapshot.registers());
    }

    #[test]
    fn fresh_sketch_is_the_merge_identity() {
        let mut a = HyperLogLog::new(10);
        for i in 0..500u64 {
            a.update(&i);
        }
        let snapshot = a.clone();
        let fresh = HyperLogLog::new(10);
        a.merge(&fresh).unwrap();
        assert_eq!(a.registers(), snapshot.registers());
    }

    #[test]
    fn round_trips_through_bytes() {
        let mut hll = HyperLogLog::new(12);
        for i in 0..1000u64 {
            hll.update(&i);
        }
        let bytes = hll.to_bytes();
        let restored = HyperLogLog::from_bytes(&bytes).unwrap();
        assert_eq!(hll.precision, restored.precision);
        assert_eq!(hll.registers, restored.registers);
    }

    #[test]
    fn standard_error_matches_formula() {
        let hll = HyperLogLog::new(12);
        let se = hll.standard_error();
        assert!((se - 0.01625).abs() < 0.001);
    }
}
