//! Vital-sign entry validation.
//!
//! Every field is checked against plausible physiological bounds before a
//! reading is accepted. The whole input is validated in one pass and all
//! failures are reported together, so a form can surface per-field
//! messages. A failed validation never produces a reading.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::vital_sign::{BloodPressure, VitalReading};

// ═══════════════════════════════════════════════════════════
// Bounds
// ═══════════════════════════════════════════════════════════

const SYSTOLIC_MIN: u16 = 50;
const SYSTOLIC_MAX: u16 = 250;
const DIASTOLIC_MIN: u16 = 30;
const DIASTOLIC_MAX: u16 = 150;
const HEART_RATE_MIN: u16 = 30;
const HEART_RATE_MAX: u16 = 200;
const TEMPERATURE_MIN: f64 = 90.0;
const TEMPERATURE_MAX: f64 = 110.0;
const WEIGHT_MIN: f64 = 20.0;
const WEIGHT_MAX: f64 = 300.0;

// ═══════════════════════════════════════════════════════════
// Types
// ═══════════════════════════════════════════════════════════

/// Raw vital-sign entry, validated into a `VitalReading`.
#[derive(Debug, Clone, Deserialize)]
pub struct VitalInput {
    pub date: NaiveDate,
    pub systolic: u16,
    pub diastolic: u16,
    pub heart_rate: u16,
    pub temperature: f64,
    pub weight: f64,
}

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// All validation failures for one submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Messages for one field, for form display.
    pub fn for_field(&self, field: &str) -> Vec<&str> {
        self.errors
            .iter()
            .filter(|e| e.field == field)
            .map(|e| e.message.as_str())
            .collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for error in &self.errors {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", error.field, error.message)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ═══════════════════════════════════════════════════════════
// Validation
// ═══════════════════════════════════════════════════════════

impl VitalInput {
    /// Check all fields, returning the accepted reading or every failure.
    pub fn validate(self) -> Result<VitalReading, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if !(SYSTOLIC_MIN..=SYSTOLIC_MAX).contains(&self.systolic) {
            errors.push(
                "systolic",
                format!("Systolic BP must be between {SYSTOLIC_MIN}-{SYSTOLIC_MAX} mmHg"),
            );
        }
        if !(DIASTOLIC_MIN..=DIASTOLIC_MAX).contains(&self.diastolic) {
            errors.push(
                "diastolic",
                format!("Diastolic BP must be between {DIASTOLIC_MIN}-{DIASTOLIC_MAX} mmHg"),
            );
        }
        if self.systolic <= self.diastolic {
            errors.push("systolic", "Systolic must be higher than diastolic");
        }

        if !(HEART_RATE_MIN..=HEART_RATE_MAX).contains(&self.heart_rate) {
            errors.push(
                "heart_rate",
                format!("Heart rate must be between {HEART_RATE_MIN}-{HEART_RATE_MAX} bpm"),
            );
        }

        if !(TEMPERATURE_MIN..=TEMPERATURE_MAX).contains(&self.temperature) {
            errors.push(
                "temperature",
                format!("Temperature must be between {TEMPERATURE_MIN}-{TEMPERATURE_MAX}°F"),
            );
        }

        if !(WEIGHT_MIN..=WEIGHT_MAX).contains(&self.weight) {
            errors.push(
                "weight",
                format!("Weight must be between {WEIGHT_MIN}-{WEIGHT_MAX} kg"),
            );
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(VitalReading {
            date: self.date,
            blood_pressure: BloodPressure {
                systolic: self.systolic,
                diastolic: self.diastolic,
            },
            heart_rate: self.heart_rate,
            temperature: self.temperature,
            weight: self.weight,
        })
    }
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
