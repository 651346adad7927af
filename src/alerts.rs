//! Smart alerts — regenerated from current state on every evaluation.
//!
//! Three alert sources: critical vitals on the latest reading, overdue
//! medication doses, and appointments starting within the next day.
//! Nothing is persisted; dismissal is tracked client-side by exact message
//! text, so an alert reappears as soon as its message changes.

use std::collections::HashSet;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::appointment;
use crate::medications;
use crate::models::enums::{AlertCategory, AlertSeverity};
use crate::models::patient::Patient;
use crate::models::ranges::CriticalRanges;

/// A single alert for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub severity: AlertSeverity,
    pub message: String,
    pub category: AlertCategory,
}

/// Evaluate all alert conditions for a patient at `now`.
pub fn evaluate_alerts(
    patient: &Patient,
    critical: &CriticalRanges,
    now: NaiveDateTime,
) -> Vec<Alert> {
    let mut alerts = Vec::new();

    if let Some(latest) = patient.latest_vitals() {
        if f64::from(latest.blood_pressure.systolic)
            > critical.blood_pressure.systolic.critical_high
        {
            alerts.push(Alert {
                severity: AlertSeverity::Critical,
                message: "Critical: Systolic BP dangerously high".into(),
                category: AlertCategory::Vitals,
            });
        }
        if f64::from(latest.heart_rate) > critical.heart_rate.critical_high {
            alerts.push(Alert {
                severity: AlertSeverity::Critical,
                message: "Critical: Heart rate dangerously elevated".into(),
                category: AlertCategory::Vitals,
            });
        }
        if latest.temperature > critical.temperature.critical_high {
            alerts.push(Alert {
                severity: AlertSeverity::Critical,
                message: "Critical: High fever detected".into(),
                category: AlertCategory::Vitals,
            });
        }
    }

    for medication in &patient.medications {
        let missed = medications::missed_doses(&medication.schedule, now);
        if missed > 0 {
            alerts.push(Alert {
                severity: AlertSeverity::Warning,
                message: format!(
                    "Medication overdue: {} ({missed} missed doses)",
                    medication.name
                ),
                category: AlertCategory::Medication,
            });
        }
    }

    for apt in &patient.appointments {
        if appointment::is_upcoming(apt, now) {
            let hours = appointment::hours_until(apt, now).round() as i64;
            alerts.push(Alert {
                severity: AlertSeverity::Info,
                message: format!(
                    "Upcoming appointment: {} with {} in {hours} hours",
                    apt.appointment_type, apt.doctor
                ),
                category: AlertCategory::Appointment,
            });
        }
    }

    tracing::debug!(patient = %patient.id, count = alerts.len(), "Evaluated alerts");
    alerts
}

/// Client-side alert dismissal, keyed by exact message text.
///
/// A dismissed alert stays hidden until its regenerated message changes.
#[derive(Debug, Default)]
pub struct DismissedAlerts {
    messages: HashSet<String>,
}

impl DismissedAlerts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dismiss(&mut self, message: &str) {
        self.messages.insert(message.to_string());
    }

    pub fn is_dismissed(&self, message: &str) -> bool {
        self.messages.contains(message)
    }

    /// Drop dismissed alerts from an evaluation result.
    pub fn visible(&self, alerts: Vec<Alert>) -> Vec<Alert> {
        alerts
            .into_iter()
            .filter(|alert| !self.messages.contains(&alert.message))
            .collect()
    }
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
