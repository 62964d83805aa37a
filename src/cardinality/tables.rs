//! Precision-indexed empirical constants: alpha, threshold, raw-estimate
//! anchors, and bias values.
//!
//! The tables are plain `const` data (see [`tables_data`]) so lookup is
//! zero-cost and initialization requires no runtime computation, per the
//! "Global tables" design note: store large precision-indexed constants
//! at module scope rather than building them on first use.

mod tables_data;

use tables_data::{BIAS_DATA, RAW_ESTIMATE_DATA, THRESHOLD_DATA};

const MIN_PRECISION: u8 = 4;
const MAX_PRECISION: u8 = 18;

fn row_index(p: u8) -> usize {
    assert!(
        (MIN_PRECISION..=MAX_PRECISION).contains(&p),
        "precision {p} out of range [4, 18]"
    );
    (p - MIN_PRECISION) as usize
}

/// Empirical alpha constant used to scale the harmonic-mean raw estimate.
///
/// Panics if `p` is outside `[4, 18]` — callers validate precision at
/// construction, so reaching this with an invalid value is a programmer
/// error.
pub fn alpha(p: u8) -> f64 {
    row_index(p); // validates range, matching threshold()/valid_len() below
    let m = (1u64 << p) as f64;
    match p {
        4 => 0.673,
        5 => 0.697,
        6 => 0.709,
        _ => 0.7213 / (1.0 + 1.079 / m),
    }
}

/// The cutoff between linear counting and the bias-corrected raw estimate
/// for precision `p`.
pub fn threshold(p: u8) -> f64 {
    THRESHOLD_DATA[row_index(p)]
}

/// Length of the non-zero prefix of `RAW_ESTIMATE_DATA[p]`: the index of
/// the first zero, or 201 if the row has no sentinel.
///
/// Computed once per row rather than rescanned on every estimate call,
/// per the "Sentinel-terminated tables" design note.
pub fn valid_len(p: u8) -> usize {
    let row = &RAW_ESTIMATE_DATA[row_index(p)];
    row.iter()
        .skip(1)
        .position(|&v| v == 0.0)
        .map_or(row.len(), |i| i + 1)
}

/// The raw-estimate anchor row for precision `p`, truncated to its valid
/// length.
pub fn raw_estimate_row(p: u8) -> &'static [f64] {
    &RAW_ESTIMATE_DATA[row_index(p)][..valid_len(p)]
}

/// The bias row for precision `p`, truncated to the same valid length as
/// [`raw_estimate_row`].
pub fn bias_row(p: u8) -> &'static [f64] {
    &BIAS_DATA[row_index(p)][..valid_len(p)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_matches_published_small_precision_constants() {
        assert_eq!(alpha(4), 0.673);
        assert_eq!(alpha(5), 0.697);
        assert_eq!(alpha(6), 0.709);
    }

    #[test]
    fn alpha_formula_for_larger_precisions() {
        for p in 7..=18u8 {
            let m = (1u64 << p) as f64;
            let expected = 0.7213 / (1.0 + 1.079 / m);
            assert!((alpha(p) - expected).abs() < 1e-9);
        }
    }

    #[test]
    #[should_panic]
    fn alpha_panics_below_range() {
        alpha(3);
    }

    #[test]
    #[should_panic]
    fn alpha_panics_above_range() {
        alpha(19);
    }

    #[test]
    fn raw_estimate_rows_are_strictly_increasing() {
        for p in 4..=18u8 {
            let row = raw_estimate_row(p);
            for pair in row.windows(2) {
                assert!(
                    pair[0] < pair[1],
                    "row for p={p} is not strictly increasing at {pair:?}"
                );
            }
        }
    }

    #[test]
    fn raw_estimate_and_bias_rows_have_equal_length() {
        for p in 4..=18u8 {
            assert_eq!(raw_estimate_row(p).len(), bias_row(p).len());
        }
    }

    #[test]
    fn threshold_is_defined_for_every_precision() {
        for p in 4..=18u8 {
            assert!(threshold(p) > 0.0);
        }
    }
}
