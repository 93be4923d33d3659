//! # Time Transforms
//!
//! Maps dimensionless shut-in time `tD` onto the coordinate a before-closure
//! plot is drawn against. Both transforms are pointwise, length-preserving and
//! monotonic on `tD ≥ 0`, so a sorted record stays sorted.
//!
//! ## Square-Root Time
//! `x = sqrt(tD)`. Linearizes pressure decline dominated by fluid leak-off
//! from a fracture of constant area.
//!
//! ## G-Function
//! `x = 16/(3π) · ((1 + tD)^1.5 − tD^1.5 − 1)`, the low-efficiency form of the
//! Nolte G-function. It is 0 at `tD = 0` and increases with `tD`.

use crate::{AnalysisMode, BcaError};
use std::f64::consts::PI;

/// Leading constant of the G-function, `16 / (3π)`.
const G_SCALE: f64 = 16.0 / (3.0 * PI);

/// Transform a whole elapsed-time sequence for the given mode.
///
/// Fails on the first sample that is negative or non-finite; no partial output is
/// returned.
///
/// # Example
/// ```
/// use bca_lib::{transform::transform, AnalysisMode};
///
/// let x = transform(AnalysisMode::SquareRootTime, &[0.0, 1.0, 4.0]).unwrap();
/// assert_eq!(x, vec![0.0, 1.0, 2.0]);
/// ```
pub fn transform(mode: AnalysisMode, elapsed: &[f64]) -> Result<Vec<f64>, BcaError> {
    let point = match mode {
        AnalysisMode::SquareRootTime => square_root_time,
        AnalysisMode::GFunction => g_function,
    };

    elapsed
        .iter()
        .enumerate()
        .map(|(index, &t)| {
            if !t.is_finite() || t < 0.0 {
                return Err(BcaError::Domain { index, value: t });
            }
            Ok(point(t))
        })
        .collect()
}

/// Square-root time for a single non-negative `tD`.
pub fn square_root_time(t: f64) -> f64 {
    t.sqrt()
}

/// G-function time for a single non-negative `tD`.
pub fn g_function(t: f64) -> f64 {
    G_SCALE * ((1.0 + t).powf(1.5) - t.powf(1.5) - 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_root_time_values() {
        let x = transform(AnalysisMode::SquareRootTime, &[0.0, 1.0, 4.0, 9.0, 16.0]).unwrap();
        assert_eq!(x, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_g_function_zero_at_origin() {
        assert_eq!(g_function(0.0), 0.0);
        let x = transform(AnalysisMode::GFunction, &[0.0]).unwrap();
        assert_eq!(x, vec![0.0]);
    }

    #[test]
    fn test_g_function_known_value() {
        // tD = 1: 16/(3π) · (2^1.5 − 2)
        let expected = 16.0 / (3.0 * PI) * (2.0_f64.powf(1.5) - 2.0);
        assert!((g_function(1.0) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_g_function_increasing() {
        let t: Vec<f64> = (0..200).map(|i| i as f64 * 0.05).collect();
        let g = transform(AnalysisMode::GFunction, &t).unwrap();
        for pair in g.windows(2) {
            assert!(pair[1] > pair[0], "G must increase: {} then {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_negative_time_is_domain_error() {
        for mode in [AnalysisMode::SquareRootTime, AnalysisMode::GFunction] {
            let err = transform(mode, &[0.0, 1.0, -0.5]).unwrap_err();
            assert_eq!(err, BcaError::Domain { index: 2, value: -0.5 });
        }
    }

    #[test]
    fn test_nan_time_is_domain_error() {
        let err = transform(AnalysisMode::GFunction, &[f64::NAN]).unwrap_err();
        assert!(matches!(err, BcaError::Domain { index: 0, .. }));
    }

    #[test]
    fn test_infinite_time_is_domain_error() {
        for mode in [AnalysisMode::SquareRootTime, AnalysisMode::GFunction] {
            for t in [f64::INFINITY, f64::NEG_INFINITY] {
                let err = transform(mode, &[0.0, t]).unwrap_err();
                assert_eq!(err, BcaError::Domain { index: 1, value: t });
            }
        }
    }

    #[test]
    fn test_empty_input_transforms_to_empty() {
        assert!(transform(AnalysisMode::SquareRootTime, &[]).unwrap().is_empty());
    }
}
