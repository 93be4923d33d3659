//! # Shut-In Record
//!
//! The raw input of an analysis session: dimensionless elapsed shut-in time and
//! the pressure measured at each instant, index-aligned.
//!
//! Records are usually logged against wall-clock time. [`ShutInRecord::from_timestamps`]
//! converts those instants to dimensionless time `tD = (t − t_shut_in) / t_pump`,
//! the form the time transforms expect.

use crate::BcaError;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Elapsed time and pressure samples, validated to equal length.
///
/// Values are stored as given; a negative elapsed time is only rejected when
/// the record is transformed. Deserialization goes through [`ShutInRecord::new`],
/// so serialized records with mismatched arrays are refused.
///
/// # Example
/// ```
/// use bca_lib::record::ShutInRecord;
///
/// let record = ShutInRecord::new(vec![0.0, 0.5, 1.0], vec![5200.0, 5100.0, 5040.0]).unwrap();
/// assert_eq!(record.len(), 3);
///
/// assert!(ShutInRecord::new(vec![0.0], vec![]).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawShutInRecord")]
pub struct ShutInRecord {
    elapsed: Vec<f64>,
    pressure: Vec<f64>,
}

/// Unvalidated wire form of [`ShutInRecord`].
#[derive(Deserialize)]
struct RawShutInRecord {
    elapsed: Vec<f64>,
    pressure: Vec<f64>,
}

impl TryFrom<RawShutInRecord> for ShutInRecord {
    type Error = BcaError;

    fn try_from(raw: RawShutInRecord) -> Result<Self, Self::Error> {
        Self::new(raw.elapsed, raw.pressure)
    }
}

impl ShutInRecord {
    pub fn new(elapsed: Vec<f64>, pressure: Vec<f64>) -> Result<Self, BcaError> {
        if elapsed.len() != pressure.len() {
            return Err(BcaError::ShapeMismatch {
                elapsed: elapsed.len(),
                pressure: pressure.len(),
            });
        }
        Ok(Self { elapsed, pressure })
    }

    /// Record from vectors already known to be index-aligned.
    pub(crate) fn from_aligned(elapsed: Vec<f64>, pressure: Vec<f64>) -> Self {
        debug_assert_eq!(elapsed.len(), pressure.len());
        Self { elapsed, pressure }
    }

    /// Build a record from gauge timestamps.
    ///
    /// `shut_in` is the instant pumping stopped and `pump_time` the duration of
    /// the injection; each timestamp becomes `(t − shut_in) / pump_time`.
    pub fn from_timestamps(
        times: &[DateTime<Utc>],
        pressure: Vec<f64>,
        shut_in: DateTime<Utc>,
        pump_time: Duration,
    ) -> Result<Self, BcaError> {
        let pump_secs = duration_secs(pump_time);
        if pump_secs <= 0.0 {
            return Err(BcaError::InvalidPumpTime);
        }

        let elapsed = times
            .iter()
            .map(|&t| duration_secs(t - shut_in) / pump_secs)
            .collect();
        Self::new(elapsed, pressure)
    }

    /// Dimensionless elapsed shut-in time.
    pub fn elapsed(&self) -> &[f64] {
        &self.elapsed
    }

    /// Shut-in pressure.
    pub fn pressure(&self) -> &[f64] {
        &self.pressure
    }

    pub fn len(&self) -> usize {
        self.elapsed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elapsed.is_empty()
    }
}

fn duration_secs(d: Duration) -> f64 {
    match d.num_microseconds() {
        Some(us) => us as f64 / 1e6,
        // beyond ~292k years microseconds overflow; millisecond precision is plenty
        None => d.num_milliseconds() as f64 / 1e3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_shape_mismatch() {
        let err = ShutInRecord::new(vec![0.0, 1.0], vec![1.0]).unwrap_err();
        assert_eq!(
            err,
            BcaError::ShapeMismatch {
                elapsed: 2,
                pressure: 1
            }
        );
    }

    #[test]
    fn test_deserialize_rejects_mismatched_arrays() {
        let err = serde_json::from_str::<ShutInRecord>(r#"{"elapsed":[0.0,1.0],"pressure":[1.0]}"#)
            .unwrap_err();
        assert!(err.is_data(), "expected a data error, got {err}");
        assert!(err.to_string().contains("2 samples but pressure has 1"), "{err}");
    }

    #[test]
    fn test_deserialize_valid_record() {
        let record = ShutInRecord::new(vec![0.0, 0.5], vec![5200.0, 5100.0]).unwrap();
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"elapsed":[0.0,0.5],"pressure":[5200.0,5100.0]}"#);
        let back: ShutInRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_single_sample_is_stored() {
        let record = ShutInRecord::new(vec![0.0], vec![4000.0]).unwrap();
        assert_eq!(record.len(), 1);
        assert!(!record.is_empty());
    }

    #[test]
    fn test_from_timestamps_dimensionless() {
        let shut_in = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let times = [
            shut_in,
            shut_in + Duration::minutes(15),
            shut_in + Duration::minutes(30),
            shut_in + Duration::hours(2),
        ];
        let record = ShutInRecord::from_timestamps(
            &times,
            vec![6000.0, 5800.0, 5700.0, 5400.0],
            shut_in,
            Duration::minutes(30),
        )
        .unwrap();
        assert_eq!(record.elapsed(), &[0.0, 0.5, 1.0, 4.0]);
        assert_eq!(record.pressure()[3], 5400.0);
    }

    #[test]
    fn test_from_timestamps_rejects_zero_pump_time() {
        let t = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let err = ShutInRecord::from_timestamps(&[t], vec![1.0], t, Duration::zero()).unwrap_err();
        assert_eq!(err, BcaError::InvalidPumpTime);
    }

    #[test]
    fn test_sample_before_shut_in_is_kept() {
        let shut_in = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let record = ShutInRecord::from_timestamps(
            &[shut_in - Duration::minutes(10)],
            vec![1.0],
            shut_in,
            Duration::minutes(10),
        )
        .unwrap();
        assert_eq!(record.elapsed(), &[-1.0]);
    }
}
