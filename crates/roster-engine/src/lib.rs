//! Roster Engine - Orchestration layer
//!
//! Wraps the core record store behind the [`Directory`] facade the event and
//! rendering layers talk to, and carries the explicit per-view state
//! ([`DirectoryView`]) in place of ambient globals.

pub mod directory;

pub use directory::{Directory, DirectoryView};
