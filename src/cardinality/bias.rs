//! Bias correction via k-nearest-neighbor interpolation over the
//! precision-indexed raw-estimate anchor table

use super::nearest_neighbor::nearest_neighbors;
use super::tables;

/// Number of neighbors averaged by the bias lookup, fixed to match the
/// published HLL++ reference implementation.
const K: usize = 6;

/// Interpolate the empirical bias for a raw estimate `raw` at precision
/// `p`.
///
/// Finds up to [`K`] nearest neighbors of `raw` in the precision's
/// raw-estimate anchor row and returns the arithmetic mean of their
/// corresponding bias values. Returns `0.0` if the anchor row is empty,
/// which avoids unstable linear interpolation at the table's endpoints
/// and tolerates non-uniform anchor spacing.
pub fn bias(raw: f64, p: u8) -> f64 {
    let anchors = tables::raw_estimate_row(p);
    if anchors.is_empty() {
        return 0.0;
    }
    let biases = tables::bias_row(p);
    debug_assert_eq!(anchors.len(), biases.len());

    let mut indices = [0usize; K];
    let found = nearest_neighbors(anchors, raw, K, &mut indices);
    if found == 0 {
        return 0.0;
    }

    let sum: f64 = indices[..found].iter().map(|&i| biases[i]).sum();
    sum / found as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bias_is_finite_across_the_anchor_range() {
        for p in 4..=18u8 {
            let anchors = tables::raw_estimate_row(p);
            for &raw in anchors.iter().step_by(17) {
                assert!(bias(raw, p).is_finite());
            }
        }
    }

    #[test]
    fn bias_matches_the_single_anchor_when_probe_is_exact() {
        let anchors = tables::raw_estimate_row(10);
        let biases = tables::bias_row(10);
        // K=6 neighbors are averaged, so we just check the result lands
        // within the spread of the six closest anchors' biases.
        let probe = anchors[50];
        let got = bias(probe, 10);
        let lo = biases[45..=55].iter().cloned().fold(f64::MAX, f64::min);
        let hi = biases[45..=55].iter().cloned().fold(f64::MIN, f64::max);
        assert!(got >= lo - 1e-9 && got <= hi + 1e-9);
    }
}
