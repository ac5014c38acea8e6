//! Insurance domain error types

use thiserror::Error;

/// Errors raised by insurance domain operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InsuranceError {
    #[error("Unknown application step code: {0}")]
    UnknownStep(u8),

    #[error("Application is missing required sections: {}", missing.join(", "))]
    IncompleteApplication { missing: Vec<String> },
}
