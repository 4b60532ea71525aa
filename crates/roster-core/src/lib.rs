//! Roster Core - In-memory employee directory kernel
//!
//! This crate provides the data structures and operations behind the
//! directory:
//! - Employee model and submitted-draft types
//! - Record store with max-derived identifier assignment
//! - Pure query pipeline: search, filter, and stable case-insensitive sort
//! - Field validator collecting per-field messages, including email shape
//!   and case-insensitive uniqueness
//! - Mutation service with validate-then-mutate create/update/delete
//! - Functional-boundary command application
//!
//! All state lives in memory for the process lifetime; a persistence layer
//! is out of scope.

pub mod apply;
pub mod commands;
pub mod errors;
pub mod logging;
pub mod model;
pub mod ops;
pub mod queries;
pub mod rules;
pub mod seed;

// Re-export commonly used types
pub use commands::{Command, CommandOutcome};
pub use errors::{Result, RosterError};
pub use model::{Employee, EmployeeDraft, EmployeeId};
pub use ops::Store;
pub use queries::{FilterCriteria, QueryMode, SortKey};
pub use rules::{FieldName, ValidationErrors};
