//! List command
//!
//! Usage: roster list [--sort KEY] [--departments] [--json]

use clap::Args;
use roster_core::{Result, SortKey};
use roster_engine::{Directory, DirectoryView};

use super::{parse_sort_key, print_employees};

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Sort by field (firstName, lastName, email, department, role)
    #[arg(long, value_parser = parse_sort_key)]
    pub sort: Option<SortKey>,

    /// List the distinct departments instead of the employees
    #[arg(long)]
    pub departments: bool,

    /// Emit JSON instead of text cards
    #[arg(long)]
    pub json: bool,
}

/// Execute list command
pub fn execute(args: ListArgs) -> Result<()> {
    let directory = Directory::seeded();

    if args.departments {
        for department in directory.departments() {
            println!("{}", department);
        }
        return Ok(());
    }

    let mut view = DirectoryView::all();
    if let Some(key) = args.sort {
        view = view.with_sort(key);
    }

    print_employees(&directory.visible(&view), args.json)
}
