//! Fixed seed records used to initialize the directory at process start.

use crate::model::Employee;

/// The ten seed records, identifiers 1 through 10
pub fn seed_employees() -> Vec<Employee> {
    vec![
        Employee::new(
            1,
            "John",
            "Doe",
            "john.doe@company.com",
            "Engineering",
            "Senior Developer",
        ),
        Employee::new(
            2,
            "Jane",
            "Smith",
            "jane.smith@company.com",
            "Marketing",
            "Marketing Manager",
        ),
        Employee::new(
            3,
            "Mike",
            "Johnson",
            "mike.johnson@company.com",
            "Sales",
            "Sales Representative",
        ),
        Employee::new(
            4,
            "Alice",
            "Williams",
            "alice.williams@company.com",
            "HR",
            "Manager",
        ),
        Employee::new(5, "Bob", "Brown", "bob.brown@company.com", "IT", "Developer"),
        Employee::new(
            6,
            "Charlie",
            "Lee",
            "charlie.lee@company.com",
            "Finance",
            "Analyst",
        ),
        Employee::new(
            7,
            "Diana",
            "Davis",
            "diana.davis@company.com",
            "Engineering",
            "Developer",
        ),
        Employee::new(
            8,
            "Edward",
            "Wilson",
            "edward.wilson@company.com",
            "Marketing",
            "Specialist",
        ),
        Employee::new(
            9,
            "Fiona",
            "Garcia",
            "fiona.garcia@company.com",
            "Sales",
            "Manager",
        ),
        Employee::new(
            10,
            "George",
            "Martinez",
            "george.martinez@company.com",
            "HR",
            "Coordinator",
        ),
    ]
}
