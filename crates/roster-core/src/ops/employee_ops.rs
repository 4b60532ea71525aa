use super::store::Store;
use crate::errors::{Result, RosterError};
use crate::model::{Employee, EmployeeDraft, EmployeeId};
use crate::rules::validation;

/// Create a new employee from a submitted draft
///
/// The draft is normalized (names and email trimmed) and validated against
/// the existing records with no exclusion. On success the record receives
/// `store.next_id()` and is appended; the created record is returned.
///
/// # Errors
///
/// Returns `Validation` with the per-field messages if the draft fails any
/// check. The store is untouched on failure.
pub fn add_employee(store: &mut Store, draft: EmployeeDraft) -> Result<Employee> {
    let draft = draft.normalized();
    let errors = validation::validate(&draft, None, store.employees());
    if !errors.is_empty() {
        return Err(RosterError::Validation { errors });
    }

    let employee = Employee::from_draft(store.next_id(), draft);
    store.insert(employee.clone());
    tracing::debug!(op = "add_employee", id = employee.id, "employee created");
    Ok(employee)
}

/// Replace an existing employee's fields with a submitted draft
///
/// Existence is checked before validation, so a stale identifier surfaces as
/// `EmployeeNotFound` regardless of the draft's content. The identifier,
/// position, and creation timestamp are preserved; `updated_at` is
/// refreshed. Returns the updated record.
///
/// # Errors
///
/// * `EmployeeNotFound` - no record has this identifier (caller holds a
///   stale reference; this is not a validation outcome)
/// * `Validation` - the draft failed field checks; the store is untouched
pub fn update_employee(store: &mut Store, id: EmployeeId, draft: EmployeeDraft) -> Result<Employee> {
    if !store.contains(id) {
        return Err(RosterError::EmployeeNotFound { id });
    }

    let draft = draft.normalized();
    let errors = validation::validate(&draft, Some(id), store.employees());
    if !errors.is_empty() {
        return Err(RosterError::Validation { errors });
    }

    let employee = store
        .get_mut(id)
        .ok_or(RosterError::EmployeeNotFound { id })?;
    employee.apply_draft(draft);
    let updated = employee.clone();
    tracing::debug!(op = "update_employee", id = updated.id, "employee updated");
    Ok(updated)
}

/// Remove an employee by identifier and return the removed record
///
/// Unconditional once invoked; any confirmation step belongs to the caller.
///
/// # Errors
///
/// Returns `EmployeeNotFound` if no record has this identifier. The store
/// is unchanged on failure.
pub fn delete_employee(store: &mut Store, id: EmployeeId) -> Result<Employee> {
    let removed = store.remove(id)?;
    tracing::debug!(op = "delete_employee", id = removed.id, "employee deleted");
    Ok(removed)
}
