//! Integration tests for HyperLogLog++ cardinality estimation
//!
//! Covers construction and validation, update/estimate, accuracy across
//! cardinalities, merge, serialization, and the `Sketch`/`Mergeable`
//! trait surface.

use hllpp::cardinality::HyperLogLog;
use hllpp::{Mergeable, Sketch};

mod construction {
    use super::*;

    #[test]
    fn new_clamps_instead_of_failing() {
        assert_eq!(HyperLogLog::new(1).precision(), 4);
        assert_eq!(HyperLogLog::new(40).precision(), 18);
        for p in 4..=18 {
            assert_eq!(HyperLogLog::new(p).precision(), p as u8);
        }
    }

    #[test]
    fn try_new_valid_precision() {
        for p in 4..=18 {
            let hll = HyperLogLog::try_new(p);
            assert!(hll.is_ok(), "precision {p} should be valid");
            let hll = hll.unwrap();
            assert_eq!(hll.precision(), p as u8);
            assert_eq!(hll.num_registers(), 1 << p);
        }
    }

    #[test]
    fn try_new_invalid_precision_low() {
        for p in -5..4 {
            assert!(HyperLogLog::try_new(p).is_err(), "precision {p} should be invalid");
        }
    }

    #[test]
    fn try_new_invalid_precision_high() {
        for p in 19..=25 {
            assert!(HyperLogLog::try_new(p).is_err(), "precision {p} should be invalid");
        }
    }

    #[test]
    fn new_is_empty() {
        let hll = HyperLogLog::new(12);
        assert!(hll.is_empty());
    }

    #[test]
    fn register_count() {
        assert_eq!(HyperLogLog::new(12).num_registers(), 4096);
        assert_eq!(HyperLogLog::new(14).num_registers(), 16384);
    }
}

mod basic_operations {
    use super::*;

    #[test]
    fn update_single() {
        let mut hll = HyperLogLog::new(12);
        hll.update(&"hello");
        assert!(!hll.is_empty());
    }

    #[test]
    fn update_multiple_types() {
        let mut hll = HyperLogLog::new(12);
        hll.update(&"string");
        hll.update(&42i32);
        hll.update(&314i64);
        hll.update(&vec![1, 2, 3]);
        assert!(!hll.is_empty());
    }

    #[test]
    fn update_hash() {
        let mut hll = HyperLogLog::new(12);
        hll.update_hash(0x123456789ABCDEF0);
        assert!(!hll.is_empty());
    }

    #[test]
    fn estimate_empty_is_zero() {
        let hll = HyperLogLog::new(12);
        assert_eq!(hll.estimate(), 0);
    }

    #[test]
    fn estimate_single_item() {
        let mut hll = HyperLogLog::new(12);
        hll.update(&1);
        let estimate = hll.estimate();
        assert!((0..=2).contains(&estimate), "single item estimate {estimate} should be ~1");
    }
}

mod accuracy {
    use super::*;

    fn relative_error(estimate: u64, actual: u64) -> f64 {
        (estimate as f64 - actual as f64).abs() / actual as f64
    }

    #[test]
    fn accuracy_100() {
        let mut hll = HyperLogLog::new(12);
        for i in 0..100u64 {
            hll.update(&i);
        }
        assert!(relative_error(hll.estimate(), 100) < 0.15);
    }

    #[test]
    fn accuracy_1000() {
        let mut hll = HyperLogLog::new(12);
        for i in 0..1000u64 {
            hll.update(&i);
        }
        assert!(relative_error(hll.estimate(), 1000) < 0.10);
    }

    #[test]
    fn accuracy_10000() {
        let mut hll = HyperLogLog::new(12);
        for i in 0..10_000u64 {
            hll.update(&i);
        }
        assert!(relative_error(hll.estimate(), 10_000) < 0.05);
    }

    #[test]
    fn accuracy_improves_with_precision() {
        let mut hll = HyperLogLog::new(14);
        for i in 0..10_000u64 {
            hll.update(&i);
        }
        assert!(relative_error(hll.estimate(), 10_000) < 0.03);
    }

    #[test]
    fn standard_error_precision_12() {
        let se = HyperLogLog::new(12).standard_error();
        assert!((se - 0.01625).abs() < 0.001);
    }

    #[test]
    fn standard_error_precision_14() {
        let se = HyperLogLog::new(14).standard_error();
        assert!((se - 0.00813).abs() < 0.001);
    }
}

mod duplicates {
    use super::*;

    #[test]
    fn duplicate_items_estimate_as_one() {
        let mut hll = HyperLogLog::new(12);
        for _ in 0..1000 {
            hll.update(&"same_item");
        }
        assert!(hll.estimate() <= 2, "estimate was {}", hll.estimate());
    }

    #[test]
    fn repeated_distinct_items() {
        let mut hll = HyperLogLog::new(12);
        for i in 0..100u64 {
            for _ in 0..10 {
                hll.update(&i);
            }
        }
        let error = (hll.estimate() as f64 - 100.0).abs() / 100.0;
        assert!(error < 0.15, "estimate {} too far from 100", hll.estimate());
    }
}

mod merge {
    use super::*;

    #[test]
    fn merge_disjoint() {
        let mut a = HyperLogLog::new(12);
        let mut b = HyperLogLog::new(12);
        for i in 0..500u64 {
            a.update(&i);
        }
        for i in 500..1000u64 {
            b.update(&i);
        }
        a.merge(&b).unwrap();
        let error = (a.estimate() as f64 - 1000.0).abs() / 1000.0;
        assert!(error < 0.10);
    }

    #[test]
    fn merge_overlapping() {
        let mut a = HyperLogLog::new(12);
        let mut b = HyperLogLog::new(12);
        for i in 0..1000u64 {
            a.update(&i);
        }
        for i in 500..1500u64 {
            b.update(&i);
        }
        a.merge(&b).unwrap();
        let error = (a.estimate() as f64 - 1500.0).abs() / 1500.0;
        assert!(error < 0.10);
    }

    #[test]
    fn merge_empty_does_not_change_estimate() {
        let mut a = HyperLogLog::new(12);
        let b = HyperLogLog::new(12);
        for i in 0..1000u64 {
            a.update(&i);
        }
        let before = a.estimate();
        a.merge(&b).unwrap();
        assert_eq!(before, a.estimate());
    }

    #[test]
    fn merge_into_empty() {
        let mut a = HyperLogLog::new(12);
        let mut b = HyperLogLog::new(12);
        for i in 0..1000u64 {
            b.update(&i);
        }
        a.merge(&b).unwrap();
        let error = (a.estimate() as f64 - 1000.0).abs() / 1000.0;
        assert!(error < 0.10);
    }

    #[test]
    fn merge_precision_mismatch_errs() {
        let mut a = HyperLogLog::new(10);
        let b = HyperLogLog::new(12);
        assert!(a.merge(&b).is_err());
    }

    #[test]
    fn merge_many_sketches() {
        let mut hlls: Vec<HyperLogLog> = (0..10).map(|_| HyperLogLog::new(12)).collect();
        for (idx, hll) in hlls.iter_mut().enumerate() {
            for i in 0..100u64 {
                hll.update(&(idx as u64 * 100 + i));
            }
        }
        let (first, rest) = hlls.split_at_mut(1);
        for hll in rest.iter() {
            first[0].merge(hll).unwrap();
        }
        let error = (first[0].estimate() as f64 - 1000.0).abs() / 1000.0;
        assert!(error < 0.10);
    }
}

mod serialization {
    use super::*;

    #[test]
    fn round_trips_through_bytes() {
        let mut hll = HyperLogLog::new(12);
        for i in 0..1000u64 {
            hll.update(&i);
        }
        let bytes = hll.to_bytes();
        let restored = HyperLogLog::from_bytes(&bytes).unwrap();
        assert_eq!(hll.precision(), restored.precision());
        assert_eq!(hll.registers(), restored.registers());
    }

    #[test]
    fn round_trips_when_empty() {
        let hll = HyperLogLog::new(12);
        let bytes = hll.to_bytes();
        let restored = HyperLogLog::from_bytes(&bytes).unwrap();
        assert!(restored.is_empty());
        assert_eq!(hll.precision(), restored.precision());
    }

    #[test]
    fn bytes_length_is_precision_plus_registers() {
        let hll = HyperLogLog::new(12);
        assert_eq!(hll.to_bytes().len(), 1 + 4096);
    }

    #[test]
    fn deserialize_rejects_invalid_precision_byte() {
        let bytes = vec![20u8; 5];
        assert!(HyperLogLog::from_bytes(&bytes).is_err());
    }

    #[test]
    fn deserialize_rejects_truncated_registers() {
        let bytes = vec![12u8];
        assert!(HyperLogLog::from_bytes(&bytes).is_err());
    }

    #[test]
    fn deserialize_rejects_empty_input() {
        assert!(HyperLogLog::from_bytes(&[]).is_err());
    }

    #[test]
    fn estimate_is_unchanged_by_round_trip() {
        let mut hll = HyperLogLog::new(12);
        for i in 0..5000u64 {
            hll.update(&i);
        }
        let before = hll.estimate();
        let bytes = hll.to_bytes();
        let restored = HyperLogLog::from_bytes(&bytes).unwrap();
        assert_eq!(before, restored.estimate());
    }
}

mod edge_cases {
    use super::*;

    #[test]
    fn large_cardinality() {
        let mut hll = HyperLogLog::new(14);
        for i in 0..200_000u64 {
            hll.update(&i);
        }
        let error = (hll.estimate() as f64 - 200_000.0).abs() / 200_000.0;
        assert!(error < 0.05, "error {error} too high for n=200000");
    }

    #[test]
    fn string_items() {
        let mut hll = HyperLogLog::new(12);
        for i in 0..1000u64 {
            hll.update(&format!("user_{i}"));
        }
        let error = (hll.estimate() as f64 - 1000.0).abs() / 1000.0;
        assert!(error < 0.10);
    }

    #[test]
    fn byte_array_items() {
        let mut hll = HyperLogLog::new(12);
        for i in 0u32..1000 {
            hll.update(&i.to_le_bytes());
        }
        let error = (hll.estimate() as f64 - 1000.0).abs() / 1000.0;
        assert!(error < 0.10);
    }

    #[test]
    fn minimum_precision_still_produces_an_estimate() {
        let mut hll = HyperLogLog::new(4);
        for i in 0..100u64 {
            hll.update(&i);
        }
        assert!(hll.estimate() > 0);
    }

    #[test]
    fn maximum_precision_is_very_accurate() {
        let mut hll = HyperLogLog::new(18);
        for i in 0..1000u64 {
            hll.update(&i);
        }
        let error = (hll.estimate() as f64 - 1000.0).abs() / 1000.0;
        assert!(error < 0.02, "max precision error {error} too high");
    }
}

mod sketch_trait {
    use super::*;

    #[test]
    fn sketch_update() {
        let mut hll = HyperLogLog::new(12);
        Sketch::update(&mut hll, &42u64);
        assert!(!hll.is_empty());
    }

    #[test]
    fn sketch_estimate() {
        let mut hll = HyperLogLog::new(12);
        for i in 0u64..1000 {
            Sketch::update(&mut hll, &i);
        }
        let error = (Sketch::estimate(&hll) - 1000.0).abs() / 1000.0;
        assert!(error < 0.10);
    }

    #[test]
    fn sketch_is_empty() {
        let hll = HyperLogLog::new(12);
        assert!(Sketch::is_empty(&hll));
    }
}
