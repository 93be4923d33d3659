//! Error type shared by every analysis operation.

use thiserror::Error;

/// Errors raised by the before-closure analysis pipeline.
///
/// Every error is returned synchronously from the offending call; nothing is
/// retried internally. Degenerate numerics (a smoothing window with a single
/// distinct x) are not errors and resolve to a zero derivative instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BcaError {
    /// Elapsed time outside the transform's domain (negative or non-finite)
    #[error("elapsed time {value} at index {index} is outside the transform domain")]
    Domain { index: usize, value: f64 },

    /// Elapsed-time and pressure sequences differ in length
    #[error("elapsed time has {elapsed} samples but pressure has {pressure}")]
    ShapeMismatch { elapsed: usize, pressure: usize },

    /// Lookup against an empty series
    #[error("no samples to search")]
    EmptyInput,

    /// Pumping duration used to make time dimensionless is not positive
    #[error("pump time must be positive")]
    InvalidPumpTime,

    /// Sample index beyond the end of the series
    #[error("index {index} out of range for {len} samples")]
    IndexOutOfRange { index: usize, len: usize },
}
