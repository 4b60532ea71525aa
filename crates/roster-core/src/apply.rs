//! Functional-boundary apply function
//!
//! `apply()` is the single entry point for atomic directory mutations in the
//! functional style: it takes ownership of the current state, executes one
//! command, and returns a new valid state. Either the whole command succeeds
//! or nothing changed (the ops layer never mutates on a validation failure),
//! and invalid input comes back as typed errors, never a panic.

use crate::commands::{Command, CommandOutcome};
use crate::errors::Result;
use crate::ops::{employee_ops, Store};

/// Apply a command to a store, returning the new state and the touched record
///
/// # Errors
///
/// * `Validation` - the submitted draft failed field checks
/// * `EmployeeNotFound` - update or delete named a missing identifier
///
/// # Example
///
/// ```
/// use roster_core::{apply::apply, Command, EmployeeDraft, Store};
///
/// let store = Store::new();
/// let cmd = Command::EmployeeAdd {
///     draft: EmployeeDraft {
///         first_name: "Ada".to_string(),
///         last_name: "Lovelace".to_string(),
///         email: "ada@company.com".to_string(),
///         department: "Engineering".to_string(),
///         role: "Developer".to_string(),
///     },
/// };
///
/// let (store, outcome) = apply(store, cmd).unwrap();
/// assert_eq!(store.len(), 1);
/// assert_eq!(outcome.employee().id, 1);
/// ```
pub fn apply(mut store: Store, cmd: Command) -> Result<(Store, CommandOutcome)> {
    match cmd {
        Command::EmployeeAdd { draft } => {
            let employee = employee_ops::add_employee(&mut store, draft)?;
            Ok((store, CommandOutcome::Added(employee)))
        }

        Command::EmployeeUpdate { id, draft } => {
            let employee = employee_ops::update_employee(&mut store, id, draft)?;
            Ok((store, CommandOutcome::Updated(employee)))
        }

        Command::EmployeeDelete { id } => {
            let employee = employee_ops::delete_employee(&mut store, id)?;
            Ok((store, CommandOutcome::Deleted(employee)))
        }
    }
}
