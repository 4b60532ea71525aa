//! Field rules and uniqueness checks for submitted employee drafts.
//!
//! The validator is pure: it inspects a draft against the existing records
//! and returns a field→message map. An empty map means the draft is valid.
//! All applicable errors are collected in one pass, never fail-fast, so the
//! form layer can display every problem at once.

pub mod email;
pub mod validation;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

pub use email::is_valid_email;
pub use validation::validate;

/// The validatable fields of a submitted draft
///
/// `as_str` yields the camelCase field ids the form layer keys its inline
/// error slots by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    FirstName,
    LastName,
    Email,
    Department,
    Role,
}

impl FieldName {
    /// The field id used by the form layer
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::FirstName => "firstName",
            FieldName::LastName => "lastName",
            FieldName::Email => "email",
            FieldName::Department => "department",
            FieldName::Role => "role",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field→message mapping produced by [`validate`]
///
/// Backed by a BTreeMap so iteration order is deterministic. At most one
/// message per field; a later check for the same field overwrites an earlier
/// one, matching the form's single inline error slot per input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    errors: BTreeMap<FieldName, String>,
}

impl ValidationErrors {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }

    /// Record a message for a field, replacing any earlier one
    pub fn insert(&mut self, field: FieldName, message: String) {
        self.errors.insert(field, message);
    }

    /// Get the message for a field, if any
    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Whether a field has a recorded message
    pub fn contains(&self, field: FieldName) -> bool {
        self.errors.contains_key(&field)
    }

    /// Iterate fields and messages in field order
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.errors.iter().map(|(f, m)| (*f, m.as_str()))
    }

    /// Number of fields with messages
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// True when the draft passed every check
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_overwrites_earlier_message() {
        let mut errors = ValidationErrors::new();
        errors.insert(FieldName::Email, "first".to_string());
        errors.insert(FieldName::Email, "second".to_string());

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(FieldName::Email), Some("second"));
    }

    #[test]
    fn test_iteration_is_field_ordered() {
        let mut errors = ValidationErrors::new();
        errors.insert(FieldName::Role, "r".to_string());
        errors.insert(FieldName::FirstName, "f".to_string());

        let fields: Vec<FieldName> = errors.iter().map(|(f, _)| f).collect();
        assert_eq!(fields, vec![FieldName::FirstName, FieldName::Role]);
    }
}
