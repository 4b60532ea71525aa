use once_cell::sync::Lazy;
use regex_lite::Regex;

use super::email::is_valid_email;
use super::{FieldName, ValidationErrors};
use crate::model::{Employee, EmployeeDraft, EmployeeId};

/// Maximum total length of an email address.
pub const MAX_EMAIL_LEN: usize = 254;

/// Minimum length of a first or last name, after trimming.
pub const MIN_NAME_LEN: usize = 2;

/// Letters, whitespace, hyphens, and apostrophes.
static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z\s'-]+$").expect("name pattern compiles"));

/// Validate a submitted draft against the existing records
///
/// Returns a field→message mapping; an empty mapping means the draft is
/// valid. Checks are evaluated independently per field so the caller sees
/// every problem at once:
///
/// - first/last name: required, at least [`MIN_NAME_LEN`] characters after
///   trimming, and only letters, spaces, hyphens, or apostrophes
/// - email: required, shape-valid (see [`is_valid_email`]), and at most
///   [`MAX_EMAIL_LEN`] characters
/// - department, role: required (non-empty, checked verbatim; these come
///   from fixed selects and are never trimmed)
/// - uniqueness: a shape-valid email must not match any existing record's
///   email case-insensitively, excluding the record being edited
///   (`exclude_id`); a duplicate replaces any earlier email message
///
/// `exclude_id` is `Some(id)` when editing record `id`, `None` when adding.
pub fn validate(
    draft: &EmployeeDraft,
    exclude_id: Option<EmployeeId>,
    existing: &[Employee],
) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    check_name(&mut errors, FieldName::FirstName, "First", &draft.first_name);
    check_name(&mut errors, FieldName::LastName, "Last", &draft.last_name);

    let email = draft.email.trim();
    if email.is_empty() {
        errors.insert(FieldName::Email, "Email is required".to_string());
    } else if !is_valid_email(email) {
        errors.insert(
            FieldName::Email,
            "Please enter a valid email address (e.g., user@example.com)".to_string(),
        );
    } else if email.len() > MAX_EMAIL_LEN {
        errors.insert(
            FieldName::Email,
            format!("Email address is too long (maximum {} characters)", MAX_EMAIL_LEN),
        );
    }

    if draft.department.is_empty() {
        errors.insert(FieldName::Department, "Department is required".to_string());
    }

    if draft.role.is_empty() {
        errors.insert(FieldName::Role, "Role is required".to_string());
    }

    // Uniqueness runs whenever the shape is acceptable and wins over any
    // earlier email message.
    if !email.is_empty() && is_valid_email(email) {
        let taken = existing
            .iter()
            .any(|e| e.email.eq_ignore_ascii_case(email) && Some(e.id) != exclude_id);
        if taken {
            errors.insert(
                FieldName::Email,
                "This email address is already registered to another employee".to_string(),
            );
        }
    }

    errors
}

fn check_name(errors: &mut ValidationErrors, field: FieldName, label: &str, value: &str) {
    let value = value.trim();
    if value.is_empty() {
        errors.insert(field, format!("{} name is required", label));
    } else if value.chars().count() < MIN_NAME_LEN {
        errors.insert(
            field,
            format!("{} name must be at least {} characters", label, MIN_NAME_LEN),
        );
    } else if !NAME_PATTERN.is_match(value) {
        errors.insert(
            field,
            format!(
                "{} name can only contain letters, spaces, hyphens, and apostrophes",
                label
            ),
        );
    }
}
