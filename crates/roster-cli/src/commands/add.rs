//! Add command
//!
//! Usage: roster add --first-name X --last-name X --email X
//!        --department X --role X
//!
//! Omitted fields are submitted empty so the validator reports them.

use clap::Args;
use roster_core::{EmployeeDraft, Result, RosterError};
use roster_engine::Directory;

use super::print_field_errors;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Given name
    #[arg(long, default_value = "")]
    pub first_name: String,

    /// Family name
    #[arg(long, default_value = "")]
    pub last_name: String,

    /// Contact email (must be unique in the directory)
    #[arg(long, default_value = "")]
    pub email: String,

    /// Department (see `roster list --departments`)
    #[arg(long, default_value = "")]
    pub department: String,

    /// Job role
    #[arg(long, default_value = "")]
    pub role: String,
}

/// Execute add command
pub fn execute(args: AddArgs) -> Result<()> {
    let mut directory = Directory::seeded();

    let draft = EmployeeDraft {
        first_name: args.first_name,
        last_name: args.last_name,
        email: args.email,
        department: args.department,
        role: args.role,
    };

    match directory.add(draft) {
        Ok(employee) => {
            println!(
                "Added employee #{}: {} ({} employees total)",
                employee.id,
                employee.full_name(),
                directory.employees().len()
            );
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
