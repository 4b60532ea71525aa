//! CLI subcommands and shared rendering helpers.

pub mod add;
pub mod delete;
pub mod filter;
pub mod list;
pub mod search;
pub mod update;

use roster_core::{Employee, Result, SortKey, ValidationErrors};

/// Parse a `--sort` value into a sort key
pub fn parse_sort_key(s: &str) -> std::result::Result<SortKey, String> {
    SortKey::parse(s).ok_or_else(|| {
        format!(
            "unknown sort key {:?} (expected firstName, lastName, email, department, or role)",
            s
        )
    })
}

/// Print a record sequence as text cards, or as JSON when requested
///
/// An empty sequence renders the explicit no-results state.
pub fn print_employees(employees: &[Employee], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(employees)?);
        return Ok(());
    }

    if employees.is_empty() {
        println!("No employees found");
        println!("Try adjusting your search or filter criteria.");
        return Ok(());
    }

    for employee in employees {
        println!("#{} {}", employee.id, employee.full_name());
        println!("  Email:      {}", employee.email);
        println!("  Department: {}", employee.department);
        println!("  Role:       {}", employee.role);
    }
    println!("{} employee(s)", employees.len());
    Ok(())
}

/// Print per-field validation messages, one per line
pub fn print_field_errors(errors: &ValidationErrors) {
    eprintln!("Invalid employee submission:");
    for (field, message) in errors.iter() {
        eprintln!("  {}: {}", field, message);
    }
}
