//! Reference ranges for vital signs.
//!
//! A vital inside its normal range is healthy; beyond a critical bound it
//! scores zero. Defaults hold the canonical clinical set; seed data may
//! override any of them.

use serde::{Deserialize, Serialize};

/// Inclusive healthy interval for one vital sign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VitalRange {
    pub min: f64,
    pub max: f64,
}

/// Bounds beyond which a vital sign scores zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CriticalBounds {
    pub critical_low: f64,
    pub critical_high: f64,
}

/// Normal ranges for both blood pressure components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BloodPressureRanges {
    pub systolic: VitalRange,
    pub diastolic: VitalRange,
}

/// Critical bounds for both blood pressure components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BloodPressureBounds {
    pub systolic: CriticalBounds,
    pub diastolic: CriticalBounds,
}

/// Healthy intervals for all scored vitals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalRanges {
    pub heart_rate: VitalRange,
    pub temperature: VitalRange,
    pub blood_pressure: BloodPressureRanges,
}

/// Zero-score bounds for all scored vitals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CriticalRanges {
    pub heart_rate: CriticalBounds,
    pub temperature: CriticalBounds,
    pub blood_pressure: BloodPressureBounds,
}

impl Default for NormalRanges {
    fn default() -> Self {
        Self {
            heart_rate: VitalRange { min: 60.0, max: 100.0 },
            temperature: VitalRange { min: 97.0, max: 99.0 },
            blood_pressure: BloodPressureRanges {
                systolic: VitalRange { min: 90.0, max: 120.0 },
                diastolic: VitalRange { min: 60.0, max: 80.0 },
            },
        }
    }
}

impl Default for CriticalRanges {
    fn default() -> Self {
        Self {
            heart_rate: CriticalBounds { critical_low: 50.0, critical_high: 120.0 },
            temperature: CriticalBounds { critical_low: 95.0, critical_high: 102.0 },
            blood_pressure: BloodPressureBounds {
                systolic: CriticalBounds { critical_low: 70.0, critical_high: 180.0 },
                diastolic: CriticalBounds { critical_low: 40.0, critical_high: 110.0 },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_hold_canonical_set() {
        let normal = NormalRanges::default();
        assert_eq!(normal.blood_pressure.systolic.min, 90.0);
        assert_eq!(normal.blood_pressure.systolic.max, 120.0);
        assert_eq!(normal.heart_rate.min, 60.0);
        assert_eq!(normal.temperature.max, 99.0);

        let critical = CriticalRanges::default();
        assert_eq!(critical.blood_pressure.systolic.critical_high, 180.0);
        assert_eq!(critical.heart_rate.critical_low, 50.0);
        assert_eq!(critical.temperature.critical_high, 102.0);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let normal: NormalRanges = serde_json::from_str(
            r#"{"heart_rate": {"min": 55.0, "max": 105.0}}"#,
        )
        .unwrap();
        assert_eq!(normal.heart_rate.min, 55.0);
        // Unspecified fields keep the canonical values.
        assert_eq!(normal.temperature.min, 97.0);
        assert_eq!(normal.blood_pressure.diastolic.max, 80.0);
    }
}
