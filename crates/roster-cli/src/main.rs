//! Roster CLI
//!
//! Command-line front end for the employee directory. Every invocation
//! operates on the fixed seed records (the directory is in-memory by
//! design), which makes this a convenient harness for exercising the query
//! and mutation paths end to end.

use clap::{Parser, Subcommand};
use roster_core::logging::{self, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "roster")]
#[command(about = "Roster - Employee directory", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List employees
    List(commands::list::ListArgs),
    /// Search employees by name or email
    Search(commands::search::SearchArgs),
    /// Filter employees by first name, department, and role
    Filter(commands::filter::FilterArgs),
    /// Add an employee
    Add(commands::add::AddArgs),
    /// Update an employee
    Update(commands::update::UpdateArgs),
    /// Delete an employee
    Delete(commands::delete::DeleteArgs),
}

fn main() {
    logging::init(log_profile());

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::List(args) => commands::list::execute(args),
        Commands::Search(args) => commands::search::execute(args),
        Commands::Filter(args) => commands::filter::execute(args),
        Commands::Add(args) => commands::add::execute(args),
        Commands::Update(args) => commands::update::execute(args),
        Commands::Delete(args) => commands::delete::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn log_profile() -> Profile {
    match std::env::var("ROSTER_LOG_PROFILE").as_deref() {
        Ok("production") => Profile::Production,
        _ => Profile::Development,
    }
}
