//! # Before-Closure Analysis Core Library
//!
//! This library provides the numerical core of Before-Closure Analysis (BCA) for
//! Diagnostic Fracture Injection Tests (DFIT). Given a shut-in pressure record
//! against dimensionless elapsed time, it produces the three series a BCA chart
//! displays: transformed time, the smoothed pressure derivative, and the
//! log-derivative.
//!
//! ## Design Philosophy
//!
//! ### Pure Computation
//! - **No shared state**: Every operation is a function of its inputs, so calls are
//!   re-entrant and safe from any thread
//! - **Total recompute**: Changing the analysis mode or the window means computing the
//!   series again from the raw record; results are never patched in place
//! - **No partial results**: [`analysis::compute`] either returns a full
//!   [`TransformedSeries`] or an error
//!
//! ### Data Flow
//! 1. **Transform**: elapsed time → `x` (square-root time or G-function)
//! 2. **Differentiate**: windowed least-squares slope of pressure against `x` → `dx`
//! 3. **Log-derivative**: `xdx[i] = x[i] * dx[i]`
//! 4. **Readout**: [`nearest::nearest`] maps a cursor coordinate back to a sample index
//!
//! ## Core Types
//!
//! - [`AnalysisMode`]: Which time transform drives the analysis
//! - [`TransformedSeries`]: The three index-aligned output series
//! - [`record::ShutInRecord`]: The raw elapsed-time / pressure record

use serde::{Deserialize, Serialize};

// Module declarations
pub mod analysis;
pub mod closure;
pub mod config;
pub mod derivative;
pub mod error;
pub mod nearest;
pub mod record;
pub mod report;
pub mod synthetic;
pub mod transform;

pub use error::BcaError;

/// Default half-width of the smoothing window, in samples.
pub const DEFAULT_WINDOW_HALF_WIDTH: usize = 15;

/// Time coordinate used for a before-closure analysis.
///
/// The two modes are not convertible into each other: switching mode means
/// transforming the raw elapsed time again.
///
/// # Example
/// ```
/// use bca_lib::AnalysisMode;
///
/// let mode = AnalysisMode::default();
/// assert_eq!(mode, AnalysisMode::GFunction);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisMode {
    /// `x = sqrt(tD)`
    SquareRootTime,
    /// `x = 16/(3π) · ((1+tD)^1.5 − tD^1.5 − 1)`
    #[default]
    GFunction,
}

/// Transformed time, derivative and log-derivative for one record and mode.
///
/// All three vectors have the length of the record they were computed from.
/// `x` is non-decreasing whenever the elapsed time was.
///
/// # Example
/// ```
/// use bca_lib::{analysis, AnalysisMode};
///
/// let series = analysis::compute(
///     AnalysisMode::SquareRootTime,
///     &[0.0, 1.0, 4.0, 9.0, 16.0],
///     &[100.0, 90.0, 80.0, 70.0, 60.0],
///     1,
/// )
/// .unwrap();
///
/// assert_eq!(series.x, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
/// assert_eq!(series.len(), 5);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransformedSeries {
    /// Mode the series was computed for
    pub mode: AnalysisMode,
    /// Transformed time
    pub x: Vec<f64>,
    /// Smoothed dp/dx
    pub dx: Vec<f64>,
    /// Log-derivative x·dp/dx
    pub xdx: Vec<f64>,
}

impl TransformedSeries {
    /// Number of samples in each of the three series.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}
