use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::AppointmentStatus;

/// A scheduled, completed or cancelled appointment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub doctor: String,
    pub specialty: String,
    /// Free text ("Video Consultation", "Annual Checkup", ...); see
    /// `appointment::classify_type` for the broad kind.
    pub appointment_type: String,
    pub status: AppointmentStatus,
    pub location: String,
    pub notes: String,
}

impl Appointment {
    /// Start instant of the appointment.
    pub fn start(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }
}
