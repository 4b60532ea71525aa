use roster_core::{EmployeeDraft, Store};

/// Create a store initialized with the ten seed records
#[allow(dead_code)]
pub fn seeded_store() -> Store {
    Store::seeded()
}

/// Build a valid draft with the given names and email
#[allow(dead_code)]
pub fn draft(first: &str, last: &str, email: &str) -> EmployeeDraft {
    EmployeeDraft {
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: email.to_string(),
        department: "Engineering".to_string(),
        role: "Developer".to_string(),
    }
}
