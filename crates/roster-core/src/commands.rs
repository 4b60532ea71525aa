//! Command types for the directory's mutation operations
//!
//! Commands are processed by the [`apply`](crate::apply::apply) function,
//! which takes ownership of the current store state, executes the command,
//! and returns a new valid state together with the affected record.

use crate::model::{Employee, EmployeeDraft, EmployeeId};

/// One mutation of the directory
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Create a record from a submitted draft
    EmployeeAdd { draft: EmployeeDraft },

    /// Replace the fields of the record with this identifier
    EmployeeUpdate { id: EmployeeId, draft: EmployeeDraft },

    /// Remove the record with this identifier
    EmployeeDelete { id: EmployeeId },
}

/// The record a successfully applied command touched
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    Added(Employee),
    Updated(Employee),
    Deleted(Employee),
}

impl CommandOutcome {
    /// The touched record, whichever way it was touched
    pub fn employee(&self) -> &Employee {
        match self {
            CommandOutcome::Added(e) | CommandOutcome::Updated(e) | CommandOutcome::Deleted(e) => e,
        }
    }
}
