//! # Before-Closure Series
//!
//! Puts the pipeline together: transform elapsed time, differentiate pressure
//! against the transformed time, and form the log-derivative.
//!
//! [`compute`] is the stateless entry point. [`BcaSession`] wraps it for a
//! presentation layer that holds one record at a time, switches modes and
//! windows, and asks for cursor readouts.

use crate::{
    derivative::smooth_derivative, nearest::nearest, record::ShutInRecord, transform::transform,
    AnalysisMode, BcaError, TransformedSeries,
};
use log::debug;
use serde::{Deserialize, Serialize};

/// Compute the `(x, dx, xdx)` triple for one record and mode.
///
/// Always a full recompute from the raw arrays. Either every series is filled
/// or an error is returned.
///
/// # Errors
/// - [`BcaError::ShapeMismatch`] when the two inputs differ in length
/// - [`BcaError::Domain`] when an elapsed time is negative or NaN
pub fn compute(
    mode: AnalysisMode,
    elapsed: &[f64],
    pressure: &[f64],
    half_width: usize,
) -> Result<TransformedSeries, BcaError> {
    if elapsed.len() != pressure.len() {
        return Err(BcaError::ShapeMismatch {
            elapsed: elapsed.len(),
            pressure: pressure.len(),
        });
    }

    let x = transform(mode, elapsed)?;
    let dx = smooth_derivative(&x, pressure, half_width);
    let xdx = x.iter().zip(&dx).map(|(&xv, &d)| xv * d).collect();

    debug!(
        "computed {:?} series: {} samples, half-width {}",
        mode,
        x.len(),
        half_width
    );

    Ok(TransformedSeries { mode, x, dx, xdx })
}

/// Compute the series for a validated record.
pub fn compute_record(
    mode: AnalysisMode,
    record: &ShutInRecord,
    half_width: usize,
) -> Result<TransformedSeries, BcaError> {
    compute(mode, record.elapsed(), record.pressure(), half_width)
}

/// Values at the sample nearest to a cursor position.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CursorReadout {
    pub index: usize,
    pub x: f64,
    pub pressure: f64,
    pub dx: f64,
    pub xdx: f64,
}

impl CursorReadout {
    /// Readout at a known index of `series`.
    pub fn at(
        series: &TransformedSeries,
        pressure: &[f64],
        index: usize,
    ) -> Result<Self, BcaError> {
        let len = series.len().min(pressure.len());
        if index >= len {
            return Err(BcaError::IndexOutOfRange { index, len });
        }
        Ok(Self {
            index,
            x: series.x[index],
            pressure: pressure[index],
            dx: series.dx[index],
            xdx: series.xdx[index],
        })
    }
}

/// One record under analysis, with its current mode, window and results.
///
/// Every change of record, mode or window drops the previous series and the
/// cursor, then recomputes from the raw record. If the recompute fails the
/// session holds no series until a later change succeeds.
///
/// # Example
/// ```
/// use bca_lib::{analysis::BcaSession, record::ShutInRecord, AnalysisMode};
///
/// let record = ShutInRecord::new(
///     vec![0.0, 1.0, 4.0, 9.0, 16.0],
///     vec![100.0, 90.0, 80.0, 70.0, 60.0],
/// )
/// .unwrap();
/// let mut session = BcaSession::new(record, AnalysisMode::SquareRootTime, 1).unwrap();
///
/// let readout = session.cursor(1.9).unwrap();
/// assert_eq!(readout.index, 2);
/// assert_eq!(readout.xdx, -20.0);
/// ```
#[derive(Clone, Debug)]
pub struct BcaSession {
    record: ShutInRecord,
    mode: AnalysisMode,
    half_width: usize,
    series: Option<TransformedSeries>,
    last_cursor: Option<CursorReadout>,
}

impl BcaSession {
    pub fn new(
        record: ShutInRecord,
        mode: AnalysisMode,
        half_width: usize,
    ) -> Result<Self, BcaError> {
        let mut session = Self {
            record,
            mode,
            half_width,
            series: None,
            last_cursor: None,
        };
        session.recompute()?;
        Ok(session)
    }

    /// Switch analysis mode. The old series is discarded, never converted.
    pub fn set_mode(&mut self, mode: AnalysisMode) -> Result<&TransformedSeries, BcaError> {
        self.mode = mode;
        self.recompute()
    }

    pub fn set_window(&mut self, half_width: usize) -> Result<&TransformedSeries, BcaError> {
        self.half_width = half_width;
        self.recompute()
    }

    pub fn replace_record(
        &mut self,
        record: ShutInRecord,
    ) -> Result<&TransformedSeries, BcaError> {
        self.record = record;
        self.recompute()
    }

    /// Resolve a cursor coordinate and remember the readout.
    pub fn cursor(&mut self, query: f64) -> Result<CursorReadout, BcaError> {
        let series = self.series.as_ref().ok_or(BcaError::EmptyInput)?;
        let index = nearest(&series.x, query)?;
        let readout = CursorReadout::at(series, self.record.pressure(), index)?;
        self.last_cursor = Some(readout);
        Ok(readout)
    }

    pub fn series(&self) -> Option<&TransformedSeries> {
        self.series.as_ref()
    }

    pub fn last_cursor(&self) -> Option<&CursorReadout> {
        self.last_cursor.as_ref()
    }

    pub fn record(&self) -> &ShutInRecord {
        &self.record
    }

    pub fn mode(&self) -> AnalysisMode {
        self.mode
    }

    pub fn window(&self) -> usize {
        self.half_width
    }

    fn recompute(&mut self) -> Result<&TransformedSeries, BcaError> {
        self.series = None;
        self.last_cursor = None;
        let series = compute_record(self.mode, &self.record, self.half_width)?;
        Ok(self.series.insert(series))
    }
}
