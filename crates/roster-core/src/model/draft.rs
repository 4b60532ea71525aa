use serde::{Deserialize, Serialize};

/// The field set a form submission hands to the mutation service
///
/// A draft carries everything an [`Employee`](super::Employee) has except the
/// identifier, which the store assigns on insert. Drafts are validated before
/// any mutation; see `rules::validate`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
    pub role: String,
}

impl EmployeeDraft {
    /// Normalize the draft the way the submission boundary does
    ///
    /// First name, last name, and email are trimmed. Department and role come
    /// from fixed selects and are kept verbatim.
    pub fn normalized(&self) -> Self {
        Self {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            department: self.department.clone(),
            role: self.role.clone(),
        }
    }
}
