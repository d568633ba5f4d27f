//! Failure taxonomy for the user record lifecycle.

use serde_json::json;
use thiserror::Error;

use super::{FieldViolation, UserRecordId};
use crate::domain::Error;

/// Every failure a user record operation can report.
///
/// Each internal failure maps to exactly one variant where it is first
/// detected; callers pass it through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserRecordError {
    #[error("user input failed validation ({} violation(s))", violations.len())]
    ValidationFailed { violations: Vec<FieldViolation> },
    #[error("user {id} not found")]
    NotFound { id: UserRecordId },
    #[error("storage failure: {message}")]
    StorageFailure { message: String },
    #[error("address lookup failed: {message}")]
    LookupFailed { message: String },
}

impl UserRecordError {
    pub fn validation_failed(violations: Vec<FieldViolation>) -> Self {
        Self::ValidationFailed { violations }
    }

    pub fn not_found(id: UserRecordId) -> Self {
        Self::NotFound { id }
    }

    pub fn storage_failure(message: impl Into<String>) -> Self {
        Self::StorageFailure {
            message: message.into(),
        }
    }

    pub fn lookup_failed(message: impl Into<String>) -> Self {
        Self::LookupFailed {
            message: message.into(),
        }
    }
}

impl From<UserRecordError> for Error {
    fn from(value: UserRecordError) -> Self {
        match value {
            UserRecordError::ValidationFailed { violations } => {
                let violations: Vec<_> = violations
                    .iter()
                    .map(|violation| {
                        json!({
                            "field": violation.field.as_str(),
                            "code": violation.kind.code(),
                            "message": violation.message(),
                        })
                    })
                    .collect();
                Error::invalid_request("user input failed validation")
                    .with_details(json!({ "violations": violations }))
            }
            UserRecordError::NotFound { .. } => Error::not_found(value.to_string()),
            // Redacted by the HTTP adapter; kept here for logging.
            UserRecordError::StorageFailure { .. } => Error::internal(value.to_string()),
            UserRecordError::LookupFailed { .. } => Error::lookup_failed(value.to_string()),
        }
    }
}
