//! Appointment helpers — kind classification and scheduling windows.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::models::appointment::Appointment;
use crate::models::enums::AppointmentStatus;

/// Hours ahead within which a scheduled appointment counts as upcoming.
pub const UPCOMING_WINDOW_HOURS: f64 = 24.0;

/// Broad appointment kind derived from the free-text type, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentKind {
    Video,
    Phone,
    Checkup,
    Other,
}

/// Classify a free-text appointment type by keyword.
pub fn classify_type(appointment_type: &str) -> AppointmentKind {
    let type_str = appointment_type.to_lowercase();
    if type_str.contains("video") || type_str.contains("virtual") {
        return AppointmentKind::Video;
    }
    if type_str.contains("phone") || type_str.contains("call") {
        return AppointmentKind::Phone;
    }
    if type_str.contains("checkup") || type_str.contains("consultation") {
        return AppointmentKind::Checkup;
    }
    AppointmentKind::Other
}

/// Fractional hours from `now` until the appointment start. Negative once
/// the start has passed.
pub fn hours_until(appointment: &Appointment, now: NaiveDateTime) -> f64 {
    (appointment.start() - now).num_minutes() as f64 / 60.0
}

/// Whether a scheduled appointment starts within the upcoming window.
pub fn is_upcoming(appointment: &Appointment, now: NaiveDateTime) -> bool {
    if appointment.status != AppointmentStatus::Scheduled {
        return false;
    }
    let hours = hours_until(appointment, now);
    hours > 0.0 && hours <= UPCOMING_WINDOW_HOURS
}
