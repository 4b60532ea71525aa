//! Delete command
//!
//! Usage: roster delete ID
//!
//! Deletion is unconditional; the confirmation prompt belongs to the
//! interactive front end, not the directory.

use clap::Args;
use roster_core::{EmployeeId, Result};
use roster_engine::Directory;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Identifier of the employee to delete
    pub id: EmployeeId,
}

/// Execute delete command
pub fn execute(args: DeleteArgs) -> Result<()> {
    let mut directory = Directory::seeded();

    let removed = directory.remove(args.id)?;
    println!(
        "Deleted employee #{}: {} ({} employees remain)",
        removed.id,
        removed.full_name(),
        directory.employees().len()
    );
    Ok(())
}
