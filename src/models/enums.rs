use crate::error::StoreError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern.
/// The serde form is pinned to the same string as `as_str`, so seed JSON
/// and display strings never diverge.
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = StoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(StoreError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(PatientStatus {
    Critical => "critical",
    Monitoring => "monitoring",
    Stable => "stable",
    Unknown => "unknown",
});

str_enum!(MedicationStatus {
    Active => "active",
    Paused => "paused",
    Discontinued => "discontinued",
});

str_enum!(Frequency {
    OnceDaily => "Once daily",
    TwiceDaily => "Twice daily",
    ThreeTimesDaily => "Three times daily",
    AsNeeded => "As needed",
});

str_enum!(AppointmentStatus {
    Scheduled => "scheduled",
    Completed => "completed",
    Cancelled => "cancelled",
});

str_enum!(Section {
    Overview => "overview",
    Vitals => "vitals",
    Medications => "medications",
    Appointments => "appointments",
});

str_enum!(AlertSeverity {
    Critical => "critical",
    Warning => "warning",
    Info => "info",
});

str_enum!(AlertCategory {
    Vitals => "vitals",
    Medication => "medication",
    Appointment => "appointment",
    Trend => "trend",
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn patient_status_round_trip() {
        for (variant, s) in [
            (PatientStatus::Critical, "critical"),
            (PatientStatus::Monitoring, "monitoring"),
            (PatientStatus::Stable, "stable"),
            (PatientStatus::Unknown, "unknown"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(PatientStatus::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn frequency_round_trip() {
        for (variant, s) in [
            (Frequency::OnceDaily, "Once daily"),
            (Frequency::TwiceDaily, "Twice daily"),
            (Frequency::ThreeTimesDaily, "Three times daily"),
            (Frequency::AsNeeded, "As needed"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(Frequency::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn section_round_trip() {
        for (variant, s) in [
            (Section::Overview, "overview"),
            (Section::Vitals, "vitals"),
            (Section::Medications, "medications"),
            (Section::Appointments, "appointments"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(Section::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn serde_form_matches_as_str() {
        let json = serde_json::to_string(&Frequency::TwiceDaily).unwrap();
        assert_eq!(json, "\"Twice daily\"");
        let back: Frequency = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Frequency::TwiceDaily);

        let json = serde_json::to_string(&AppointmentStatus::Scheduled).unwrap();
        assert_eq!(json, "\"scheduled\"");
    }

    #[test]
    fn invalid_enum_returns_error() {
        assert!(PatientStatus::from_str("discharged").is_err());
        assert!(Frequency::from_str("hourly").is_err());
        assert!(Section::from_str("").is_err());
    }
}
