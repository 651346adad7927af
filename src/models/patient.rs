use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::appointment::Appointment;
use super::enums::PatientStatus;
use super::medication::Medication;
use super::vital_sign::VitalReading;

/// A patient record: identity, placement and the three clinical
/// collections. Owned exclusively by the store and mutated only through
/// store operations; patients are never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    /// Seed-assigned identifier, e.g. "P001".
    pub id: String,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub blood_type: String,
    pub allergies: Vec<String>,
    pub emergency_contact: String,
    pub admission_date: NaiveDate,
    pub room: String,
    pub status: PatientStatus,
    #[serde(default)]
    pub vitals: Vec<VitalReading>,
    #[serde(default)]
    pub medications: Vec<Medication>,
    #[serde(default)]
    pub appointments: Vec<Appointment>,
}

impl Patient {
    /// Most recent vital reading, if any.
    pub fn latest_vitals(&self) -> Option<&VitalReading> {
        self.vitals.last()
    }

    /// Second-most-recent reading, for trend comparison.
    pub fn previous_vitals(&self) -> Option<&VitalReading> {
        self.vitals.len().checked_sub(2).and_then(|i| self.vitals.get(i))
    }
}
