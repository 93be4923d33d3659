//! # Nearest-Sample Lookup
//!
//! Resolves a cursor coordinate on the x axis to the sample under it. Called
//! once per pointer move, so it stays allocation-free: a binary search when the
//! series is sorted (always the case for a sorted record, since both transforms
//! are monotonic), otherwise a linear scan.
//!
//! Ties between two equidistant samples resolve to the lower index.

use crate::BcaError;

/// Index of the sample whose `x` is closest to `query`.
///
/// A NaN query compares as infinitely far from every sample and resolves to
/// index 0.
///
/// # Example
/// ```
/// use bca_lib::nearest::nearest;
///
/// assert_eq!(nearest(&[0.0, 1.0, 2.0, 3.0], 1.6).unwrap(), 2);
/// assert_eq!(nearest(&[0.0, 1.0, 2.0, 3.0], 1.5).unwrap(), 1);
/// ```
pub fn nearest(x: &[f64], query: f64) -> Result<usize, BcaError> {
    if x.is_empty() {
        return Err(BcaError::EmptyInput);
    }
    if query.is_nan() {
        return Ok(0);
    }

    if is_sorted(x) {
        Ok(nearest_sorted(x, query))
    } else {
        Ok(nearest_scan(x, query))
    }
}

fn is_sorted(x: &[f64]) -> bool {
    x.windows(2).all(|w| w[0] <= w[1])
}

/// Binary search over a non-decreasing, non-empty slice.
fn nearest_sorted(x: &[f64], query: f64) -> usize {
    // first index with x >= query
    let upper = x.partition_point(|&v| v < query);
    if upper == 0 {
        return 0;
    }
    if upper == x.len() {
        return first_of_run(x, x.len() - 1);
    }

    let lower = upper - 1;
    if x[upper] - query < query - x[lower] {
        upper
    } else {
        first_of_run(x, lower)
    }
}

/// Lowest index holding the same value as `x[idx]` in a sorted slice.
fn first_of_run(x: &[f64], idx: usize) -> usize {
    let value = x[idx];
    x[..idx].partition_point(|&v| v < value)
}

fn nearest_scan(x: &[f64], query: f64) -> usize {
    let mut best = 0;
    let mut best_distance = f64::INFINITY;
    for (i, &v) in x.iter().enumerate() {
        let distance = (v - query).abs();
        // strict comparison keeps the lower index on ties
        if distance < best_distance {
            best = i;
            best_distance = distance;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nearest_basic() {
        let x = [0.0, 1.0, 2.0, 3.0];
        assert_eq!(nearest(&x, 1.6).unwrap(), 2);
        assert_eq!(nearest(&x, 1.4).unwrap(), 1);
        assert_eq!(nearest(&x, -5.0).unwrap(), 0);
        assert_eq!(nearest(&x, 100.0).unwrap(), 3);
    }

    #[test]
    fn test_exact_hit_returns_that_index() {
        let x = [0.0, 0.5, 1.7, 2.2, 9.0];
        for (k, &v) in x.iter().enumerate() {
            assert_eq!(nearest(&x, v).unwrap(), k);
        }
    }

    #[test]
    fn test_tie_resolves_to_lower_index() {
        assert_eq!(nearest(&[0.0, 1.0, 2.0, 3.0], 2.5).unwrap(), 2);
        // unsorted path
        assert_eq!(nearest(&[3.0, 1.0, 2.0], 1.5).unwrap(), 1);
        assert_eq!(nearest(&[2.0, 1.0], 1.5).unwrap(), 0);
    }

    #[test]
    fn test_duplicates_resolve_to_first() {
        let x = [0.0, 1.0, 1.0, 1.0, 4.0];
        assert_eq!(nearest(&x, 1.2).unwrap(), 1);
        assert_eq!(nearest(&x, 0.9).unwrap(), 1);
        assert_eq!(nearest(&[2.0, 2.0, 2.0], 10.0).unwrap(), 0);
    }

    #[test]
    fn test_unsorted_scan() {
        let x = [5.0, 0.0, 3.0, 1.0];
        assert_eq!(nearest(&x, 2.8).unwrap(), 2);
        assert_eq!(nearest(&x, 0.2).unwrap(), 1);
    }

    #[test]
    fn test_empty_is_error() {
        assert_eq!(nearest(&[], 1.0), Err(BcaError::EmptyInput));
    }

    #[test]
    fn test_nan_query() {
        assert_eq!(nearest(&[1.0, 2.0], f64::NAN).unwrap(), 0);
    }

    #[test]
    fn test_single_sample() {
        assert_eq!(nearest(&[42.0], -1.0).unwrap(), 0);
    }
}
