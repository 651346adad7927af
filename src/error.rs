//! Error taxonomy for store operations.
//!
//! Mutations targeting a missing patient/medication/appointment report
//! `NotFound` instead of silently doing nothing, so callers and tests can
//! distinguish "applied" from "ignored". Nothing here is fatal.

use thiserror::Error;

use crate::vitals::ValidationErrors;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },

    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),
}

impl StoreError {
    /// Shorthand for the common lookup-miss case.
    pub fn not_found(entity_type: &str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
        }
    }
}

impl From<ValidationErrors> for StoreError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}
