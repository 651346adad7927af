//! Wellness scoring — pure derivations from a patient's vital readings.
//!
//! Each vital maps to a 0–100 sub-score against its normal and critical
//! ranges; sub-scores combine into a weighted overall score, which in turn
//! classifies a risk tier and (across the two most recent readings) a
//! short-term trend.

use serde::Serialize;

use crate::models::patient::Patient;
use crate::models::ranges::{CriticalBounds, CriticalRanges, NormalRanges, VitalRange};
use crate::models::vital_sign::VitalReading;

// ═══════════════════════════════════════════════════════════
// Constants
// ═══════════════════════════════════════════════════════════

/// Component weights of the overall score. Blood pressure dominates.
const WEIGHT_SYSTOLIC: f64 = 0.30;
const WEIGHT_DIASTOLIC: f64 = 0.30;
const WEIGHT_HEART_RATE: f64 = 0.25;
const WEIGHT_TEMPERATURE: f64 = 0.15;

/// Overall-score change below which the trend reads as stable.
const TREND_THRESHOLD: f64 = 5.0;

// ═══════════════════════════════════════════════════════════
// Types
// ═══════════════════════════════════════════════════════════

/// Per-vital sub-scores for one reading, each in [0, 100].
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ComponentScores {
    pub systolic: f64,
    pub diastolic: f64,
    pub heart_rate: f64,
    pub temperature: f64,
}

impl ComponentScores {
    /// Weighted composite, unrounded.
    pub fn weighted(&self) -> f64 {
        self.systolic * WEIGHT_SYSTOLIC
            + self.diastolic * WEIGHT_DIASTOLIC
            + self.heart_rate * WEIGHT_HEART_RATE
            + self.temperature * WEIGHT_TEMPERATURE
    }

    /// Averaged blood-pressure score for display.
    pub fn blood_pressure(&self) -> u8 {
        ((self.systolic + self.diastolic) / 2.0).round() as u8
    }
}

/// Short-term direction of the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Improving,
    Declining,
    Stable,
}

/// Risk classification of an overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Excellent,
    Good,
    AtRisk,
    Critical,
}

impl RiskTier {
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => Self::Excellent,
            60..=79 => Self::Good,
            40..=59 => Self::AtRisk,
            _ => Self::Critical,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent Health",
            Self::Good => "Good Health",
            Self::AtRisk => "At Risk",
            Self::Critical => "Critical Alert",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Excellent => "All vitals are within optimal ranges",
            Self::Good => "Minor vitals require attention",
            Self::AtRisk => "Multiple vitals need monitoring",
            Self::Critical => "Immediate medical intervention required",
        }
    }
}

// ═══════════════════════════════════════════════════════════
// Scoring
// ═══════════════════════════════════════════════════════════

/// Score a single vital value against its ranges, in [0, 100].
///
/// The inclusive in-range check is evaluated first, so a value exactly on
/// a range edge scores 100. Strictly outside, the score ramps linearly
/// from 50 at the range edge down to 0 at the critical bound.
pub fn vital_score(value: f64, normal: VitalRange, critical: CriticalBounds) -> f64 {
    if value >= normal.min && value <= normal.max {
        return 100.0;
    }

    if value < normal.min {
        if value <= critical.critical_low {
            return 0.0;
        }
        (50.0 * (value - critical.critical_low) / (normal.min - critical.critical_low)).max(0.0)
    } else {
        if value >= critical.critical_high {
            return 0.0;
        }
        (50.0 * (critical.critical_high - value) / (critical.critical_high - normal.max)).max(0.0)
    }
}

/// Sub-scores for every weighted vital of one reading.
pub fn component_scores(
    reading: &VitalReading,
    normal: &NormalRanges,
    critical: &CriticalRanges,
) -> ComponentScores {
    ComponentScores {
        systolic: vital_score(
            f64::from(reading.blood_pressure.systolic),
            normal.blood_pressure.systolic,
            critical.blood_pressure.systolic,
        ),
        diastolic: vital_score(
            f64::from(reading.blood_pressure.diastolic),
            normal.blood_pressure.diastolic,
            critical.blood_pressure.diastolic,
        ),
        heart_rate: vital_score(f64::from(reading.heart_rate), normal.heart_rate, critical.heart_rate),
        temperature: vital_score(reading.temperature, normal.temperature, critical.temperature),
    }
}

/// Overall wellness score for one reading, rounded to [0, 100].
pub fn overall_score(
    reading: &VitalReading,
    normal: &NormalRanges,
    critical: &CriticalRanges,
) -> u8 {
    component_scores(reading, normal, critical).weighted().round() as u8
}

/// Trend classification from the two most recent readings.
///
/// A pure function of exactly those two entries; with fewer than two the
/// trend defaults to stable.
pub fn trend(patient: &Patient, normal: &NormalRanges, critical: &CriticalRanges) -> Trend {
    let (latest, previous) = match (patient.latest_vitals(), patient.previous_vitals()) {
        (Some(latest), Some(previous)) => (latest, previous),
        _ => return Trend::Stable,
    };

    let diff = component_scores(latest, normal, critical).weighted()
        - component_scores(previous, normal, critical).weighted();

    if diff > TREND_THRESHOLD {
        Trend::Improving
    } else if diff < -TREND_THRESHOLD {
        Trend::Declining
    } else {
        Trend::Stable
    }
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::PatientStatus;
    use crate::models::vital_sign::BloodPressure;
    use chrono::NaiveDate;

    fn normal() -> NormalRanges {
        NormalRanges::default()
    }

    fn critical() -> CriticalRanges {
        CriticalRanges::default()
    }

    fn reading(systolic: u16, diastolic: u16, heart_rate: u16, temperature: f64) -> VitalReading {
        VitalReading {
            date: NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
            blood_pressure: BloodPressure { systolic, diastolic },
            heart_rate,
            temperature,
            weight: 72.0,
        }
    }

    fn patient_with_vitals(vitals: Vec<VitalReading>) -> Patient {
        Patient {
            id: "P001".into(),
            name: "Test Patient".into(),
            age: 54,
            gender: "Male".into(),
            blood_type: "O+".into(),
            allergies: Vec::new(),
            emergency_contact: "N/A".into(),
            admission_date: NaiveDate::from_ymd_opt(2025, 7, 20).unwrap(),
            room: "101A".into(),
            status: PatientStatus::Monitoring,
            vitals,
            medications: Vec::new(),
            appointments: Vec::new(),
        }
    }

    // --- vital_score ---

    #[test]
    fn inside_normal_range_scores_100() {
        let range = VitalRange { min: 90.0, max: 120.0 };
        let bounds = CriticalBounds { critical_low: 70.0, critical_high: 180.0 };
        assert_eq!(vital_score(105.0, range, bounds), 100.0);
    }

    #[test]
    fn range_edges_score_100() {
        let range = VitalRange { min: 90.0, max: 120.0 };
        let bounds = CriticalBounds { critical_low: 70.0, critical_high: 180.0 };
        // Inclusive on both ends — the in-range branch wins over the ramp.
        assert_eq!(vital_score(90.0, range, bounds), 100.0);
        assert_eq!(vital_score(120.0, range, bounds), 100.0);
    }

    #[test]
    fn critical_bounds_score_zero() {
        let range = VitalRange { min: 90.0, max: 120.0 };
        let bounds = CriticalBounds { critical_low: 70.0, critical_high: 180.0 };
        assert_eq!(vital_score(70.0, range, bounds), 0.0);
        assert_eq!(vital_score(180.0, range, bounds), 0.0);
        // Beyond the bounds stays pinned at zero.
        assert_eq!(vital_score(60.0, range, bounds), 0.0);
        assert_eq!(vital_score(200.0, range, bounds), 0.0);
    }

    #[test]
    fn ramp_is_linear_from_50() {
        let range = VitalRange { min: 90.0, max: 120.0 };
        let bounds = CriticalBounds { critical_low: 70.0, critical_high: 180.0 };
        // Low side: 80 is halfway between 70 and 90 → 25.
        assert_eq!(vital_score(80.0, range, bounds), 25.0);
        // High side: 150 is halfway between 120 and 180 → 25.
        assert_eq!(vital_score(150.0, range, bounds), 25.0);
    }

    #[test]
    fn score_is_monotonic_away_from_range() {
        let range = VitalRange { min: 60.0, max: 100.0 };
        let bounds = CriticalBounds { critical_low: 50.0, critical_high: 120.0 };
        // Descending below the range never increases the score.
        let mut last = 100.0;
        for value in (40..60).rev().map(f64::from) {
            let score = vital_score(value, range, bounds);
            assert!(score <= last, "score rose at {value}");
            last = score;
        }
        // Ascending above the range never increases the score.
        let mut last = 100.0;
        for value in (101..130).map(f64::from) {
            let score = vital_score(value, range, bounds);
            assert!(score <= last, "score rose at {value}");
            last = score;
        }
    }

    // --- overall_score ---

    #[test]
    fn all_normal_vitals_score_100() {
        let r = reading(120, 80, 72, 98.6);
        assert_eq!(overall_score(&r, &normal(), &critical()), 100);
        assert_eq!(RiskTier::from_score(100), RiskTier::Excellent);
    }

    #[test]
    fn critical_systolic_drops_overall_to_70() {
        // Systolic 185 ≥ critical-high 180 → component 0; the rest stay 100.
        let r = reading(185, 80, 72, 98.6);
        let scores = component_scores(&r, &normal(), &critical());
        assert_eq!(scores.systolic, 0.0);
        assert_eq!(scores.diastolic, 100.0);
        assert_eq!(scores.heart_rate, 100.0);
        assert_eq!(scores.temperature, 100.0);
        assert_eq!(overall_score(&r, &normal(), &critical()), 70);
        assert_eq!(RiskTier::from_score(70), RiskTier::Good);
    }

    #[test]
    fn weighted_composite_matches_formula() {
        // Systolic 150 → 25; diastolic 95 → 25; heart rate 110 → 25;
        // temperature 100.5 → 25.
        let r = reading(150, 95, 110, 100.5);
        let scores = component_scores(&r, &normal(), &critical());
        assert_eq!(scores.systolic, 25.0);
        assert_eq!(scores.diastolic, 25.0);
        assert_eq!(scores.heart_rate, 25.0);
        assert_eq!(scores.temperature, 25.0);
        assert_eq!(overall_score(&r, &normal(), &critical()), 25);
    }

    #[test]
    fn blood_pressure_display_score_averages_components() {
        let r = reading(185, 80, 72, 98.6);
        let scores = component_scores(&r, &normal(), &critical());
        assert_eq!(scores.blood_pressure(), 50);
    }

    // --- trend ---

    #[test]
    fn trend_stable_with_fewer_than_two_readings() {
        let patient = patient_with_vitals(vec![reading(120, 80, 72, 98.6)]);
        assert_eq!(trend(&patient, &normal(), &critical()), Trend::Stable);

        let empty = patient_with_vitals(Vec::new());
        assert_eq!(trend(&empty, &normal(), &critical()), Trend::Stable);
    }

    #[test]
    fn trend_improving_when_score_rises() {
        // 185 systolic (overall 70) then all-normal (overall 100).
        let patient =
            patient_with_vitals(vec![reading(185, 80, 72, 98.6), reading(120, 80, 72, 98.6)]);
        assert_eq!(trend(&patient, &normal(), &critical()), Trend::Improving);
    }

    #[test]
    fn trend_declining_when_score_falls() {
        let patient =
            patient_with_vitals(vec![reading(120, 80, 72, 98.6), reading(185, 80, 72, 98.6)]);
        assert_eq!(trend(&patient, &normal(), &critical()), Trend::Declining);
    }

    #[test]
    fn trend_stable_within_threshold() {
        // Two all-normal readings: both score 100, diff 0.
        let patient =
            patient_with_vitals(vec![reading(119, 79, 70, 98.5), reading(120, 80, 72, 98.6)]);
        assert_eq!(trend(&patient, &normal(), &critical()), Trend::Stable);
    }

    #[test]
    fn trend_ignores_older_entries() {
        let mut patient =
            patient_with_vitals(vec![reading(185, 80, 72, 98.6), reading(120, 80, 72, 98.6)]);
        let before = trend(&patient, &normal(), &critical());

        // Prepending an even older reading must not change the trend.
        patient.vitals.insert(0, reading(100, 70, 65, 97.5));
        assert_eq!(trend(&patient, &normal(), &critical()), before);
    }

    // --- risk tiers ---

    #[test]
    fn risk_tier_boundaries() {
        assert_eq!(RiskTier::from_score(100), RiskTier::Excellent);
        assert_eq!(RiskTier::from_score(80), RiskTier::Excellent);
        assert_eq!(RiskTier::from_score(79), RiskTier::Good);
        assert_eq!(RiskTier::from_score(60), RiskTier::Good);
        assert_eq!(RiskTier::from_score(59), RiskTier::AtRisk);
        assert_eq!(RiskTier::from_score(40), RiskTier::AtRisk);
        assert_eq!(RiskTier::from_score(39), RiskTier::Critical);
        assert_eq!(RiskTier::from_score(0), RiskTier::Critical);
    }

    #[test]
    fn risk_tier_labels() {
        assert_eq!(RiskTier::Excellent.label(), "Excellent Health");
        assert_eq!(RiskTier::Critical.description(), "Immediate medical intervention required");
    }
}
