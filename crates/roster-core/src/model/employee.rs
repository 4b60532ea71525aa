use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::draft::EmployeeDraft;

/// Identifier assigned to an employee record.
///
/// Identifiers are positive, unique within a store, and immutable once
/// assigned. The next identifier is always derived from the current maximum
/// (see `Store::next_id`), never from a separate counter.
pub type EmployeeId = u32;

/// Employee - one person's stored directory attributes
///
/// Records are created by the mutation service after validation, updated in
/// place (identifier preserved), and removed by identifier. The serialized
/// shape uses camelCase keys so the rendering layer sees
/// `{id, firstName, lastName, email, department, role}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Unique identifier (assigned by the store, immutable)
    pub id: EmployeeId,

    /// Given name
    pub first_name: String,

    /// Family name
    pub last_name: String,

    /// Contact email, unique across the directory (case-insensitive)
    pub email: String,

    /// Department name; drawn from a fixed set in practice but stored as
    /// free text
    pub department: String,

    /// Job role within the department
    pub role: String,

    /// Timestamp when this record was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when this record was last updated
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    /// Create a new Employee with the given identifier and field values
    pub fn new(
        id: EmployeeId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        department: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            department: department.into(),
            role: role.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Build a record from a submitted field set
    pub fn from_draft(id: EmployeeId, draft: EmployeeDraft) -> Self {
        Self::new(
            id,
            draft.first_name,
            draft.last_name,
            draft.email,
            draft.department,
            draft.role,
        )
    }

    /// Replace the mutable fields with a submitted field set
    ///
    /// The identifier and `created_at` are preserved; `updated_at` is
    /// refreshed.
    pub fn apply_draft(&mut self, draft: EmployeeDraft) {
        self.first_name = draft.first_name;
        self.last_name = draft.last_name;
        self.email = draft.email;
        self.department = draft.department;
        self.role = draft.role;
        self.updated_at = Utc::now();
    }

    /// Display name, "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
