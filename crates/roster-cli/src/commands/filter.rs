//! Filter command
//!
//! Usage: roster filter [--first-name X] [--department X] [--role X]
//!        [--sort KEY] [--json]

use clap::Args;
use roster_core::{FilterCriteria, Result, SortKey};
use roster_engine::{Directory, DirectoryView};

use super::{parse_sort_key, print_employees};

#[derive(Debug, Args)]
pub struct FilterArgs {
    /// First-name substring (case-insensitive)
    #[arg(long)]
    pub first_name: Option<String>,

    /// Exact department (see `roster list --departments`)
    #[arg(long)]
    pub department: Option<String>,

    /// Role substring (case-insensitive)
    #[arg(long)]
    pub role: Option<String>,

    /// Sort by field (firstName, lastName, email, department, role)
    #[arg(long, value_parser = parse_sort_key)]
    pub sort: Option<SortKey>,

    /// Emit JSON instead of text cards
    #[arg(long)]
    pub json: bool,
}

/// Execute filter command
pub fn execute(args: FilterArgs) -> Result<()> {
    let directory = Directory::seeded();

    let criteria = FilterCriteria {
        first_name: args.first_name,
        department: args.department,
        role: args.role,
    };

    let mut view = DirectoryView::filtered(criteria);
    if let Some(key) = args.sort {
        view = view.with_sort(key);
    }

    print_employees(&directory.visible(&view), args.json)
}
