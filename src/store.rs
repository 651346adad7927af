//! Patient store — the single source of truth for patient data and
//! dashboard selection state.
//!
//! The store is an explicit value owned by the embedding application and
//! handed to consumers, never a global. All mutations go through its
//! methods; a mutation targeting a missing patient, medication or
//! appointment reports `StoreError::NotFound` instead of silently doing
//! nothing. The filtered view is recomputed on every read, never cached.

use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;

use crate::error::StoreError;
use crate::medications::generate_schedule;
use crate::models::appointment::Appointment;
use crate::models::enums::{AppointmentStatus, MedicationStatus, Section};
use crate::models::medication::{Medication, NewMedication};
use crate::models::patient::Patient;
use crate::models::ranges::{CriticalRanges, NormalRanges};
use crate::models::vital_sign::VitalReading;
use crate::seed::SeedData;
use crate::vitals::VitalInput;

/// Records of the active section after search filtering. The overview
/// section has no record list.
#[derive(Debug, PartialEq)]
pub enum SectionRecords<'a> {
    Overview,
    Vitals(Vec<&'a VitalReading>),
    Medications(Vec<&'a Medication>),
    Appointments(Vec<&'a Appointment>),
}

impl SectionRecords<'_> {
    /// Number of records in the view.
    pub fn len(&self) -> usize {
        match self {
            Self::Overview => 0,
            Self::Vitals(records) => records.len(),
            Self::Medications(records) => records.len(),
            Self::Appointments(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub struct PatientStore {
    patients: Vec<Patient>,
    normal_ranges: NormalRanges,
    critical_ranges: CriticalRanges,
    selected_patient_id: Option<String>,
    active_section: Section,
    search_query: String,
}

impl PatientStore {
    /// Build a store from seed data. The first seeded patient starts
    /// selected, matching the dashboard's initial view.
    pub fn from_seed(seed: SeedData) -> Self {
        let selected_patient_id = seed.patients.first().map(|p| p.id.clone());
        tracing::info!(patients = seed.patients.len(), "Patient store initialised");
        Self {
            patients: seed.patients,
            normal_ranges: seed.normal_ranges,
            critical_ranges: seed.critical_ranges,
            selected_patient_id,
            active_section: Section::Overview,
            search_query: String::new(),
        }
    }

    // ── Read access ─────────────────────────────────────────

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn normal_ranges(&self) -> &NormalRanges {
        &self.normal_ranges
    }

    pub fn critical_ranges(&self) -> &CriticalRanges {
        &self.critical_ranges
    }

    pub fn active_section(&self) -> Section {
        self.active_section
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn selected_patient_id(&self) -> Option<&str> {
        self.selected_patient_id.as_deref()
    }

    /// The currently selected patient; `None` is the empty state
    /// dependent views must handle.
    pub fn selected_patient(&self) -> Option<&Patient> {
        let id = self.selected_patient_id.as_deref()?;
        self.patients.iter().find(|p| p.id == id)
    }

    pub fn patient(&self, id: &str) -> Option<&Patient> {
        self.patients.iter().find(|p| p.id == id)
    }

    fn patient_mut(&mut self, id: &str) -> Result<&mut Patient, StoreError> {
        self.patients
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::not_found("patient", id))
    }

    // ── Selection state ─────────────────────────────────────

    /// Point the dashboard at a patient. An unknown id clears the
    /// selection (dependent views see the empty state) and is reported.
    pub fn select_patient(&mut self, id: &str) -> Result<(), StoreError> {
        if self.patients.iter().any(|p| p.id == id) {
            self.selected_patient_id = Some(id.to_string());
            Ok(())
        } else {
            self.selected_patient_id = None;
            Err(StoreError::not_found("patient", id))
        }
    }

    /// Switch the collection in view. UI state only; no effect on data.
    pub fn set_active_section(&mut self, section: Section) {
        self.active_section = section;
    }

    /// Set the free-text filter applied on every read of the view.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    // ── Mutations ───────────────────────────────────────────

    /// Validate and append a vital reading. Validation failures never
    /// mutate the patient.
    pub fn add_vital_reading(
        &mut self,
        patient_id: &str,
        input: VitalInput,
    ) -> Result<(), StoreError> {
        let patient = self.patient_mut(patient_id)?;
        let reading = input.validate()?;
        tracing::debug!(patient = patient_id, date = %reading.date, "Vital reading added");
        patient.vitals.push(reading);
        Ok(())
    }

    /// Flip one schedule entry's taken flag by positional index.
    pub fn set_medication_dose_taken(
        &mut self,
        patient_id: &str,
        medication_id: &Uuid,
        schedule_index: usize,
        taken: bool,
    ) -> Result<(), StoreError> {
        let medication = Self::medication_mut(self.patient_mut(patient_id)?, medication_id)?;
        let entry = medication
            .schedule
            .get_mut(schedule_index)
            .ok_or_else(|| StoreError::not_found("schedule entry", schedule_index))?;
        entry.taken = taken;
        tracing::debug!(
            patient = patient_id,
            medication = %medication_id,
            index = schedule_index,
            taken,
            "Dose flag updated"
        );
        Ok(())
    }

    /// Flip the schedule entry identified by its date and time. Immune to
    /// positional-index drift.
    pub fn set_dose_taken_at(
        &mut self,
        patient_id: &str,
        medication_id: &Uuid,
        date: NaiveDate,
        time: NaiveTime,
        taken: bool,
    ) -> Result<(), StoreError> {
        let medication = Self::medication_mut(self.patient_mut(patient_id)?, medication_id)?;
        let entry = medication
            .schedule
            .iter_mut()
            .find(|entry| entry.date == date && entry.time == time)
            .ok_or_else(|| StoreError::not_found("schedule entry", format!("{date} {time}")))?;
        entry.taken = taken;
        Ok(())
    }

    /// Build and append a medication: fresh id, active status, schedule
    /// generated from `prescribed_date`. Returns the new id.
    pub fn add_medication(
        &mut self,
        patient_id: &str,
        new: NewMedication,
        prescribed_date: NaiveDate,
    ) -> Result<Uuid, StoreError> {
        let patient = self.patient_mut(patient_id)?;
        let id = Uuid::new_v4();
        let medication = Medication {
            id,
            schedule: generate_schedule(new.frequency, prescribed_date),
            name: new.name,
            dosage: new.dosage,
            frequency: new.frequency,
            instructions: new.instructions,
            prescribed_by: new.prescribed_by,
            prescribed_date,
            status: MedicationStatus::Active,
        };
        tracing::debug!(patient = patient_id, medication = %id, "Medication added");
        patient.medications.push(medication);
        Ok(id)
    }

    /// Append a fully-formed appointment.
    pub fn add_appointment(
        &mut self,
        patient_id: &str,
        appointment: Appointment,
    ) -> Result<(), StoreError> {
        let patient = self.patient_mut(patient_id)?;
        tracing::debug!(patient = patient_id, appointment = %appointment.id, "Appointment added");
        patient.appointments.push(appointment);
        Ok(())
    }

    /// Update an appointment's status in place.
    pub fn set_appointment_status(
        &mut self,
        patient_id: &str,
        appointment_id: &Uuid,
        status: AppointmentStatus,
    ) -> Result<(), StoreError> {
        let patient = self.patient_mut(patient_id)?;
        let appointment = patient
            .appointments
            .iter_mut()
            .find(|a| a.id == *appointment_id)
            .ok_or_else(|| StoreError::not_found("appointment", appointment_id))?;
        appointment.status = status;
        Ok(())
    }

    fn medication_mut<'a>(
        patient: &'a mut Patient,
        medication_id: &Uuid,
    ) -> Result<&'a mut Medication, StoreError> {
        patient
            .medications
            .iter_mut()
            .find(|m| m.id == *medication_id)
            .ok_or_else(|| StoreError::not_found("medication", medication_id))
    }

    // ── Derived views ───────────────────────────────────────

    /// Records of the active section for the selected patient, filtered by
    /// the search query. Recomputed per call; order is insertion order.
    pub fn filtered_records(&self) -> SectionRecords<'_> {
        let query = self.search_query.trim().to_lowercase();
        let patient = self.selected_patient();

        match self.active_section {
            Section::Overview => SectionRecords::Overview,
            Section::Vitals => SectionRecords::Vitals(match patient {
                Some(p) => p
                    .vitals
                    .iter()
                    .filter(|v| {
                        query.is_empty() || v.date.format("%Y-%m-%d").to_string().contains(&query)
                    })
                    .collect(),
                None => Vec::new(),
            }),
            Section::Medications => SectionRecords::Medications(match patient {
                Some(p) => p
                    .medications
                    .iter()
                    .filter(|m| {
                        query.is_empty()
                            || contains_ci(&m.name, &query)
                            || contains_ci(&m.prescribed_by, &query)
                            || contains_ci(&m.instructions, &query)
                    })
                    .collect(),
                None => Vec::new(),
            }),
            Section::Appointments => SectionRecords::Appointments(match patient {
                Some(p) => p
                    .appointments
                    .iter()
                    .filter(|a| {
                        query.is_empty()
                            || contains_ci(&a.doctor, &query)
                            || contains_ci(&a.specialty, &query)
                            || contains_ci(&a.appointment_type, &query)
                            || contains_ci(&a.notes, &query)
                    })
                    .collect(),
                None => Vec::new(),
            }),
        }
    }

    /// Patients matching a free-text term over name, room, status and age.
    pub fn search_patients(&self, term: &str) -> Vec<&Patient> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return self.patients.iter().collect();
        }
        self.patients
            .iter()
            .filter(|p| {
                contains_ci(&p.name, &term)
                    || contains_ci(&p.room, &term)
                    || p.status.as_str().contains(&term)
                    || p.age.to_string().contains(&term)
            })
            .collect()
    }
}

/// Case-insensitive substring match; `needle` must already be lowercase.
fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
