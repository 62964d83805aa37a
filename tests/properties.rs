//! Property-based tests for the quantified invariants of the estimator.
//!
//! Each `proptest!` block corresponds to one of the testable properties:
//! precision clamping (P1), register bounds (P2), update idempotence
//! (P5), and the merge laws (P6).

use hllpp::cardinality::HyperLogLog;
use hllpp::Mergeable;
use proptest::prelude::*;

proptest! {
    /// P1: `new` always clamps into `[4, 18]`, never panics, and the
    /// resulting precision is exactly the clamped value.
    #[test]
    fn prop_new_clamps_into_range(requested in -100i32..200) {
        let hll = HyperLogLog::new(requested);
        let p = hll.precision();
        prop_assert!((4..=18).contains(&p));
        prop_assert_eq!(p, requested.clamp(4, 18) as u8);
    }

    /// P2: no register ever exceeds its theoretical bound `64 - p + 1`,
    /// regardless of how many hashes are folded in.
    #[test]
    fn prop_registers_stay_within_bound(
        precision in 4i32..=18,
        hashes in prop::collection::vec(any::<u64>(), 0..2000),
    ) {
        let mut hll = HyperLogLog::try_new(precision).unwrap();
        for hash in hashes {
            hll.update_hash(hash);
        }
        let max_register = 64 - precision as u32 + 1;
        prop_assert!(hll.registers().iter().all(|&r| (r as u32) <= max_register));
    }

    /// P5: updating with the same hash twice is the same as updating
    /// once.
    #[test]
    fn prop_update_is_idempotent(hash in any::<u64>()) {
        let mut once = HyperLogLog::new(12);
        let mut twice = HyperLogLog::new(12);
        once.update_hash(hash);
        twice.update_hash(hash);
        twice.update_hash(hash);
        prop_assert_eq!(once.registers(), twice.registers());
    }

    /// P6: merge is commutative.
    #[test]
    fn prop_merge_is_commutative(
        a_hashes in prop::collection::vec(any::<u64>(), 0..500),
        b_hashes in prop::collection::vec(any::<u64>(), 0..500),
    ) {
        let mut a = HyperLogLog::new(10);
        let mut b = HyperLogLog::new(10);
        for &h in &a_hashes {
            a.update_hash(h);
        }
        for &h in &b_hashes {
            b.update_hash(h);
        }

        let mut a_then_b = a.clone();
        a_then_b.merge(&b).unwrap();
        let mut b_then_a = b.clone();
        b_then_a.merge(&a).unwrap();

        prop_assert_eq!(a_then_b.registers(), b_then_a.registers());
    }

    /// P6: merge is idempotent — merging a sketch with itself changes
    /// nothing.
    #[test]
    fn prop_merge_is_idempotent(hashes in prop::collection::vec(any::<u64>(), 0..500)) {
        let mut a = HyperLogLog::new(10);
        for &h in &hashes {
            a.update_hash(h);
        }
        let snapshot = a.clone();
        a.merge(&snapshot).unwrap();
        prop_assert_eq!(a.registers(), snapshot.registers());
    }

    /// P6: a freshly constructed sketch is the merge identity.
    #[test]
    fn prop_fresh_sketch_is_merge_identity(hashes in prop::collection::vec(any::<u64>(), 0..500)) {
        let mut a = HyperLogLog::new(10);
        for &h in &hashes {
            a.update_hash(h);
        }
        let snapshot = a.clone();
        let fresh = HyperLogLog::new(10);
        a.merge(&fresh).unwrap();
        prop_assert_eq!(a.registers(), snapshot.registers());
    }

    /// Estimates are always representable as a non-negative integer and
    /// serialization round-trips preserve them exactly.
    #[test]
    fn prop_serialization_preserves_estimate(hashes in prop::collection::vec(any::<u64>(), 0..1000)) {
        let mut hll = HyperLogLog::new(11);
        for &h in &hashes {
            hll.update_hash(h);
        }
        let bytes = hll.to_bytes();
        let restored = HyperLogLog::from_bytes(&bytes).unwrap();
        prop_assert_eq!(hll.estimate(), restored.estimate());
    }
}
