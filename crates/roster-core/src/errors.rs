use thiserror::Error;

use crate::model::EmployeeId;
use crate::rules::ValidationErrors;

/// Result type alias using RosterError
pub type Result<T> = std::result::Result<T, RosterError>;

/// Error taxonomy for directory operations
///
/// Validation failures are recoverable: the caller re-prompts with the
/// per-field messages. A missing identifier on update or delete indicates a
/// stale reference held by the caller and is propagated, never swallowed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RosterError {
    /// Submitted fields failed validation; no mutation was performed
    #[error("validation failed for {} field(s)", .errors.len())]
    Validation { errors: ValidationErrors },

    /// No record has the given identifier
    #[error("employee not found: {id}")]
    EmployeeNotFound { id: EmployeeId },

    /// Serialization error (JSON encoding/decoding)
    #[error("serialization error: {message}")]
    Serialization { message: String },
}

impl RosterError {
    /// The per-field messages of a validation failure, if that is what this is
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            RosterError::Validation { errors } => Some(errors),
            _ => None,
        }
    }
}

/// Conversion from serde_json::Error to RosterError
impl From<serde_json::Error> for RosterError {
    fn from(err: serde_json::Error) -> Self {
        RosterError::Serialization {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::FieldName;

    #[test]
    fn test_validation_display_counts_fields() {
        let mut errors = ValidationErrors::new();
        errors.insert(FieldName::FirstName, "First name is required".to_string());
        errors.insert(FieldName::Email, "Email is required".to_string());

        let err = RosterError::Validation { errors };
        assert_eq!(err.to_string(), "validation failed for 2 field(s)");
    }

    #[test]
    fn test_not_found_display_carries_id() {
        let err = RosterError::EmployeeNotFound { id: 42 };
        assert_eq!(err.to_string(), "employee not found: 42");
    }
}
