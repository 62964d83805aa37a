//! k-nearest-neighbor search over a table of raw-estimate anchors

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A candidate neighbor ordered so that a max-heap pops the *farthest*
/// element first. Ties (equal distance) break by preferring to evict the
/// higher index, so that among equidistant anchors the lower index is
/// the one retained and, ultimately, reported first.
#[derive(PartialEq)]
struct Candidate {
    index: usize,
    distance: f64,
}

impl Eq for Candidate {}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .partial_cmp(&other.distance)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.index.cmp(&other.index))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find the up to `k` indices into `anchors` whose value is closest to
/// `probe`, writing them into `out[0..returned]` nearest-first (ties
/// broken by lower index), and returning `min(k, anchors.len())`.
///
/// Runs in `O(n log k)` using a bounded max-heap: each candidate is
/// pushed and, once the heap holds more than `k` elements, the single
/// farthest one is popped back off.
pub fn nearest_neighbors(anchors: &[f64], probe: f64, k: usize, out: &mut [usize]) -> usize {
    if k == 0 || anchors.is_empty() {
        return 0;
    }

    let mut heap: BinaryHeap<Candidate> = BinaryHeap::with_capacity(k + 1);
    for (index, &anchor) in anchors.iter().enumerate() {
        heap.push(Candidate {
            index,
            distance: (anchor - probe).abs(),
        });
        if heap.len() > k {
            heap.pop();
        }
    }

    let found = heap.len();
    let mut candidates: Vec<Candidate> = heap.into_vec();
    candidates.sort_by(|a, b| a.cmp(b));
    for (slot, candidate) in out.iter_mut().zip(candidates.iter()) {
        *slot = candidate.index;
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_anchors_returns_zero() {
        let mut out = [0usize; 4];
        assert_eq!(nearest_neighbors(&[], 5.0, 3, &mut out), 0);
    }

    #[test]
    fn zero_k_returns_zero() {
        let anchors = [1.0, 2.0, 3.0];
        let mut out = [0usize; 4];
        assert_eq!(nearest_neighbors(&anchors, 2.0, 0, &mut out), 0);
    }

    #[test]
    fn spec_scenario_four() {
        let anchors = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
        let mut out = [0usize; 5];
        let found = nearest_neighbors(&anchors, 5.0, 5, &mut out);
        assert_eq!(found, 5);
        assert_eq!(&out, &[4, 3, 5, 2, 6]);
    }

    #[test]
    fn k_larger_than_array_returns_all() {
        let anchors = [1.0, 2.0, 3.0];
        let mut out = [0usize; 10];
        assert_eq!(nearest_neighbors(&anchors, 2.0, 10, &mut out), 3);
    }

    #[test]
    fn ties_break_by_lower_index() {
        let anchors = [1.0, 3.0, 1.0, 3.0];
        let mut out = [0usize; 4];
        let found = nearest_neighbors(&anchors, 2.0, 4, &mut out);
        assert_eq!(found, 4);
        assert_eq!(&out, &[0, 1, 2, 3]);
    }

    #[test]
    fn results_are_ordered_by_increasing_distance() {
        let anchors = [10.0, 1.0, 20.0, 0.0, 15.0, 30.0];
        let probe = 12.0;
        let mut out = [0usize; 6];
        let found = nearest_neighbors(&anchors, probe, 6, &mut out);
        assert_eq!(found, 6);
        let mut last = -1.0f64;
        for &idx in &out[..found] {
            let d = (anchors[idx] - probe).abs();
            assert!(d >= last);
            last = d;
        }
    }
}
