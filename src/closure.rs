//! # Closure Pick
//!
//! On a G-function or square-root-time plot the log-derivative of a normal
//! leak-off decline follows a straight line through the origin until the
//! fracture closes. An interpreter picks the closure sample where the
//! log-derivative departs from that line; this module turns a picked index into
//! the closure marker and the origin line drawn through it.

use crate::{BcaError, TransformedSeries};
use serde::{Deserialize, Serialize};

/// Closure sample chosen on a log-derivative curve.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClosurePick {
    pub index: usize,
    /// Transformed time at closure
    pub x: f64,
    /// Closure pressure
    pub pressure: f64,
    /// Log-derivative at closure
    pub xdx: f64,
    /// Slope of the line through the origin and `(x, xdx)`; 0 when `x` is 0
    pub origin_slope: f64,
}

impl ClosurePick {
    /// End points of the straight line through the origin, from 0 to `x_end`.
    pub fn origin_line(&self, x_end: f64) -> [(f64, f64); 2] {
        [(0.0, 0.0), (x_end, self.origin_slope * x_end)]
    }
}

/// Build the closure pick at `index` of `series`.
///
/// `pressure` is the record the series was computed from.
///
/// # Example
/// ```
/// use bca_lib::{analysis::compute, closure::pick_closure, AnalysisMode};
///
/// let pressure = [100.0, 90.0, 80.0, 70.0, 60.0];
/// let series = compute(AnalysisMode::SquareRootTime, &[0.0, 1.0, 4.0, 9.0, 16.0], &pressure, 1)
///     .unwrap();
/// let pick = pick_closure(&series, &pressure, 2).unwrap();
///
/// assert_eq!(pick.pressure, 80.0);
/// assert_eq!(pick.origin_slope, -10.0);
/// ```
pub fn pick_closure(
    series: &TransformedSeries,
    pressure: &[f64],
    index: usize,
) -> Result<ClosurePick, BcaError> {
    let len = series.len().min(pressure.len());
    if index >= len {
        return Err(BcaError::IndexOutOfRange { index, len });
    }

    let x = series.x[index];
    let xdx = series.xdx[index];
    let origin_slope = if x == 0.0 { 0.0 } else { xdx / x };

    Ok(ClosurePick {
        index,
        x,
        pressure: pressure[index],
        xdx,
        origin_slope,
    })
}
