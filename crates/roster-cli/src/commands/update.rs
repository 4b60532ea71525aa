//! Update command
//!
//! Usage: roster update ID [--first-name X] [--last-name X] [--email X]
//!        [--department X] [--role X]
//!
//! Omitted fields keep the record's current values, the way the edit form
//! pre-populates its inputs.

use clap::Args;
use roster_core::{EmployeeDraft, EmployeeId, Result, RosterError};
use roster_engine::Directory;

use super::print_field_errors;

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Identifier of the employee to update
    pub id: EmployeeId,

    /// New given name
    #[arg(long)]
    pub first_name: Option<String>,

    /// New family name
    #[arg(long)]
    pub last_name: Option<String>,

    /// New contact email (must stay unique in the directory)
    #[arg(long)]
    pub email: Option<String>,

    /// New department
    #[arg(long)]
    pub department: Option<String>,

    /// New job role
    #[arg(long)]
    pub role: Option<String>,
}

/// Execute update command
pub fn execute(args: UpdateArgs) -> Result<()> {
    let mut directory = Directory::seeded();

    let current = directory
        .get(args.id)
        .ok_or(RosterError::EmployeeNotFound { id: args.id })?
        .clone();

    let draft = EmployeeDraft {
        first_name: args.first_name.unwrap_or(current.first_name),
        last_name: args.last_name.unwrap_or(current.last_name),
        email: args.email.unwrap_or(current.email),
        department: args.department.unwrap_or(current.department),
        role: args.role.unwrap_or(current.role),
    };

    match directory.update(args.id, draft) {
        Ok(employee) => {
            println!("Updated employee #{}: {}", employee.id, employee.full_name());
            Ok(())
        }
        Err(err) => {
            if let RosterError::Validation { errors } = &err {
                print_field_errors(errors);
            }
            Err(err)
        }
    }
}
