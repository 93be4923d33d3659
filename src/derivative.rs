//! # Smoothed Derivative
//!
//! Estimates `dy/dx` at every sample as the least-squares slope of the points in
//! a symmetric index window around it. Differentiating raw gauge pressure with a
//! two-point secant amplifies noise; fitting a line over `2w + 1` points trades
//! some resolution of sharp curvature for a stable estimate.
//!
//! ## Window Rules
//! - Sample `i` uses indices `[i − w, i + w]` clipped to the series. Near the ends
//!   the window shrinks; nothing is padded or extrapolated.
//! - `w = 0` is the secant through the immediate neighbours `i − 1` and `i + 1`;
//!   the end samples use their single adjacent pair.
//! - A window with fewer than two distinct x values has slope 0. Repeated
//!   timestamps near shut-in are normal in field data and are not an error.

/// Inclusive index bounds `[left, right]` of one local fit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    pub left: usize,
    pub right: usize,
}

impl Window {
    /// Window of half-width `half_width` centered on `idx`, clipped to `[0, n)`.
    ///
    /// `n` must be at least 1.
    pub fn centered(idx: usize, half_width: usize, n: usize) -> Self {
        debug_assert!(n > 0 && idx < n);
        Self {
            left: idx.saturating_sub(half_width),
            right: idx.saturating_add(half_width).min(n - 1),
        }
    }

    pub fn len(&self) -> usize {
        if self.left <= self.right {
            self.right - self.left + 1
        } else {
            0
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Smoothed derivative of `y` with respect to `x`.
///
/// `x` and `y` must be index-aligned and of equal length; the output has that
/// length. Mismatched inputs trip a debug assertion and are truncated to the
/// shorter one in release builds. The result is deterministic and finite for
/// finite input.
///
/// # Example
/// ```
/// use bca_lib::derivative::smooth_derivative;
///
/// let x = [0.0, 1.0, 2.0, 3.0, 4.0];
/// let y = [100.0, 90.0, 80.0, 70.0, 60.0];
/// let dy = smooth_derivative(&x, &y, 1);
/// assert_eq!(dy[2], -10.0);
/// ```
pub fn smooth_derivative(x: &[f64], y: &[f64], half_width: usize) -> Vec<f64> {
    debug_assert_eq!(x.len(), y.len(), "x and y must be index-aligned");
    let n = x.len().min(y.len());

    if half_width == 0 {
        return (0..n)
            .map(|i| secant(x, y, Window::centered(i, 1, n)))
            .collect();
    }

    (0..n)
        .map(|i| local_slope(x, y, Window::centered(i, half_width, n)))
        .collect()
}

/// Slope of the line through the two end points of `window`, or 0 when they
/// share an x value.
fn secant(x: &[f64], y: &[f64], window: Window) -> f64 {
    let run = x[window.right] - x[window.left];
    if window.len() < 2 || run == 0.0 {
        return 0.0;
    }
    (y[window.right] - y[window.left]) / run
}

/// Least-squares slope of `y` on `x` over one window, or 0 when degenerate.
fn local_slope(x: &[f64], y: &[f64], window: Window) -> f64 {
    let xs = &x[window.left..=window.right];
    let ys = &y[window.left..=window.right];

    let (x_min, x_max) = xs
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    if xs.len() < 2 || x_min == x_max {
        return 0.0;
    }

    // Both sums are shifted by the first point; the slope is unchanged and a
    // flat window yields exactly zero.
    let x0 = xs[0];
    let y0 = ys[0];
    let count = xs.len() as f64;
    let x_mean = xs.iter().map(|&v| v - x0).sum::<f64>() / count;

    let (sxy, sxx) = xs
        .iter()
        .zip(ys)
        .fold((0.0, 0.0), |(sxy, sxx), (&xv, &yv)| {
            let dx = xv - x0 - x_mean;
            (sxy + dx * (yv - y0), sxx + dx * dx)
        });

    if sxx == 0.0 {
        0.0
    } else {
        sxy / sxx
    }
}
