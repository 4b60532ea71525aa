pub mod draft;
pub mod employee;

pub use draft::EmployeeDraft;
pub use employee::{Employee, EmployeeId};
