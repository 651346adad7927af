//! Seed data — the initial dataset consumed once at startup.
//!
//! A seed document carries the patient roster plus optional overrides for
//! the normal/critical reference ranges; missing range fields fall back to
//! the canonical defaults. The seed's format is this crate's only external
//! interface.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::patient::Patient;
use crate::models::ranges::{CriticalRanges, NormalRanges};

/// Initial dataset for a `PatientStore`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedData {
    pub patients: Vec<Patient>,
    #[serde(default)]
    pub normal_ranges: NormalRanges,
    #[serde(default)]
    pub critical_ranges: CriticalRanges,
}

#[derive(Debug, Error)]
#[error("seed data is not valid JSON: {0}")]
pub struct SeedError(#[from] serde_json::Error);

impl SeedData {
    /// Parse a seed document from JSON.
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        let seed = serde_json::from_str(json)?;
        Ok(seed)
    }

    /// Bundled demo dataset for development and examples.
    pub fn demo() -> Self {
        Self::from_json(include_str!("../data/demo_patients.json"))
            .expect("bundled demo data is valid")
    }
}
