//! Search command
//!
//! Usage: roster search TEXT [--sort KEY] [--json]

use clap::Args;
use roster_core::{Result, SortKey};
use roster_engine::{Directory, DirectoryView};

use super::{parse_sort_key, print_employees};

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Text matched against first name, last name, and email
    pub text: String,

    /// Sort by field (firstName, lastName, email, department, role)
    #[arg(long, value_parser = parse_sort_key)]
    pub sort: Option<SortKey>,

    /// Emit JSON instead of text cards
    #[arg(long)]
    pub json: bool,
}

/// Execute search command
pub fn execute(args: SearchArgs) -> Result<()> {
    let directory = Directory::seeded();

    let mut view = DirectoryView::searching(args.text);
    if let Some(key) = args.sort {
        view = view.with_sort(key);
    }

    print_employees(&directory.visible(&view), args.json)
}
