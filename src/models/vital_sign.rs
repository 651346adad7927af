use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Blood pressure measurement in mmHg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BloodPressure {
    pub systolic: u16,
    pub diastolic: u16,
}

/// A single timestamped vital-signs snapshot.
///
/// Readings are append-only; list order is insertion order and is assumed
/// chronological.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VitalReading {
    pub date: NaiveDate,
    pub blood_pressure: BloodPressure,
    /// Beats per minute.
    pub heart_rate: u16,
    /// Degrees Fahrenheit.
    pub temperature: f64,
    /// Kilograms.
    pub weight: f64,
}
