//! # Synthetic Pressure Decline
//!
//! Deterministic stand-in for a recorded DFIT shut-in, used by the demo binary,
//! tests and benchmarks when no field record is at hand.
//!
//! ## Model Characteristics
//! - **Time grid**: `samples` points of `tD` evenly spaced on `[0, max_dimensionless_time]`
//! - **Before closure**: pressure falls linearly in G from the ISIP
//!   (normal leak-off, log-derivative on a line through the origin)
//! - **After closure**: the decline continues linearly in G with a different slope
//! - **Noise**: a fixed sinusoid, so runs are reproducible and no RNG is needed
//!
//! The model is a diagnostic fixture, not a reservoir simulator.

use crate::{record::ShutInRecord, transform::g_function};
use serde::{Deserialize, Serialize};

/// Shape of the synthetic decline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyntheticParams {
    /// Number of samples
    pub samples: usize,
    /// Last dimensionless shut-in time
    pub max_dimensionless_time: f64,
    /// Instantaneous shut-in pressure (psi)
    pub isip: f64,
    /// G-function time of fracture closure
    pub closure_g: f64,
    /// psi per unit G before closure
    pub pre_closure_slope: f64,
    /// psi per unit G after closure
    pub post_closure_slope: f64,
    /// Peak amplitude of the superimposed noise (psi)
    pub noise_amplitude: f64,
}

impl Default for SyntheticParams {
    fn default() -> Self {
        SyntheticParams {
            samples: 400,
            max_dimensionless_time: 8.0,
            isip: 6200.0,
            closure_g: 3.0,
            pre_closure_slope: 180.0,
            post_closure_slope: 90.0,
            noise_amplitude: 1.5,
        }
    }
}

/// Generate the synthetic shut-in record described by `params`.
pub fn decline(params: &SyntheticParams) -> ShutInRecord {
    let n = params.samples;
    let step = if n > 1 {
        params.max_dimensionless_time / (n - 1) as f64
    } else {
        0.0
    };

    let elapsed: Vec<f64> = (0..n).map(|i| i as f64 * step).collect();
    let pressure: Vec<f64> = elapsed
        .iter()
        .enumerate()
        .map(|(i, &t)| pressure_at(params, g_function(t)) + noise(params, i))
        .collect();

    ShutInRecord::from_aligned(elapsed, pressure)
}

/// Noise-free pressure at G-function time `g`.
fn pressure_at(params: &SyntheticParams, g: f64) -> f64 {
    if g <= params.closure_g {
        params.isip - params.pre_closure_slope * g
    } else {
        params.isip
            - params.pre_closure_slope * params.closure_g
            - params.post_closure_slope * (g - params.closure_g)
    }
}

fn noise(params: &SyntheticParams, i: usize) -> f64 {
    params.noise_amplitude * (i as f64 * 1.7).sin()
}
