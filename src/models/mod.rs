pub mod appointment;
pub mod enums;
pub mod medication;
pub mod patient;
pub mod ranges;
pub mod vital_sign;

pub use appointment::Appointment;
pub use enums::*;
pub use medication::{Medication, NewMedication, ScheduleEntry};
pub use patient::Patient;
pub use ranges::{CriticalBounds, CriticalRanges, NormalRanges, VitalRange};
pub use vital_sign::{BloodPressure, VitalReading};
