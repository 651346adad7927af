use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{Frequency, MedicationStatus};

/// A prescribed medication with its dosing schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Medication {
    pub id: Uuid,
    pub name: String,
    pub dosage: String,
    pub frequency: Frequency,
    pub instructions: String,
    pub prescribed_by: String,
    pub prescribed_date: NaiveDate,
    pub status: MedicationStatus,
    /// Generated once at creation for a fixed window; entries flip their
    /// `taken` flag in place but are never added or removed afterwards.
    pub schedule: Vec<ScheduleEntry>,
}

/// One planned dose in a medication schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub taken: bool,
}

/// Input for adding a medication. Id, status, prescribed date and schedule
/// are filled in by the store.
#[derive(Debug, Clone, Deserialize)]
pub struct NewMedication {
    pub name: String,
    pub dosage: String,
    pub frequency: Frequency,
    pub instructions: String,
    pub prescribed_by: String,
}
