//! Read-only query operations over the directory
//!
//! Every function here is a pure view derivation: input slices are never
//! mutated and output is always a freshly allocated sequence, so callers can
//! re-run queries freely after any mutation.

use crate::model::Employee;

/// Criteria for the advanced filter entry point
///
/// Each criterion is optional; `None` (or an empty string) matches
/// everything. Non-empty criteria must all match: first name by
/// case-insensitive substring, department exactly, role by case-insensitive
/// substring.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring of the first name
    pub first_name: Option<String>,

    /// Exact department value
    pub department: Option<String>,

    /// Case-insensitive substring of the role
    pub role: Option<String>,
}

impl FilterCriteria {
    /// Whether no criterion constrains the result
    pub fn is_empty(&self) -> bool {
        fn blank(c: &Option<String>) -> bool {
            c.as_deref().map_or(true, str::is_empty)
        }
        blank(&self.first_name) && blank(&self.department) && blank(&self.role)
    }

    /// Whether a record satisfies every non-empty criterion
    pub fn matches(&self, employee: &Employee) -> bool {
        let first_name_ok = match self.first_name.as_deref() {
            Some(f) if !f.is_empty() => employee
                .first_name
                .to_lowercase()
                .contains(&f.to_lowercase()),
            _ => true,
        };
        let department_ok = match self.department.as_deref() {
            Some(d) if !d.is_empty() => employee.department == d,
            _ => true,
        };
        let role_ok = match self.role.as_deref() {
            Some(r) if !r.is_empty() => employee.role.to_lowercase().contains(&r.to_lowercase()),
            _ => true,
        };
        first_name_ok && department_ok && role_ok
    }
}

/// The string field a sorted view orders by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    FirstName,
    LastName,
    Email,
    Department,
    Role,
}

impl SortKey {
    /// Parse the camelCase field name used by the view layer (kebab-case and
    /// snake_case spellings are accepted for CLI convenience)
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "firstName" | "first-name" | "first_name" => Some(SortKey::FirstName),
            "lastName" | "last-name" | "last_name" => Some(SortKey::LastName),
            "email" => Some(SortKey::Email),
            "department" => Some(SortKey::Department),
            "role" => Some(SortKey::Role),
            _ => None,
        }
    }

    /// The camelCase field name
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::FirstName => "firstName",
            SortKey::LastName => "lastName",
            SortKey::Email => "email",
            SortKey::Department => "department",
            SortKey::Role => "role",
        }
    }

    fn field<'a>(&self, employee: &'a Employee) -> &'a str {
        match self {
            SortKey::FirstName => &employee.first_name,
            SortKey::LastName => &employee.last_name,
            SortKey::Email => &employee.email,
            SortKey::Department => &employee.department,
            SortKey::Role => &employee.role,
        }
    }
}

/// How a view narrows the record set
///
/// Search and the advanced filter are separate variants: the two UI entry
/// points each start from the full record set and do not compose, and the
/// enum makes expressing "both" impossible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum QueryMode {
    /// Every record, unfiltered
    #[default]
    All,
    /// Quick-search text matched against names and email
    Search(String),
    /// Advanced filter criteria
    Filter(FilterCriteria),
}

/// Select records matching the search text
///
/// Empty or whitespace-only text selects everything. Otherwise the trimmed,
/// lower-cased text must be a substring of the first name, last name, or
/// email (OR across the three, all compared lower-cased).
pub fn search(employees: &[Employee], text: &str) -> Vec<Employee> {
    let term = text.trim().to_lowercase();
    if term.is_empty() {
        return employees.to_vec();
    }
    employees
        .iter()
        .filter(|e| {
            e.first_name.to_lowercase().contains(&term)
                || e.last_name.to_lowercase().contains(&term)
                || e.email.to_lowercase().contains(&term)
        })
        .cloned()
        .collect()
}

/// Select records satisfying every non-empty filter criterion
pub fn filter(employees: &[Employee], criteria: &FilterCriteria) -> Vec<Employee> {
    employees
        .iter()
        .filter(|e| criteria.matches(e))
        .cloned()
        .collect()
}

/// Order records ascending by the keyed field, case-insensitively
///
/// The sort is stable: records whose keys compare equal keep their relative
/// order.
pub fn sort(employees: &[Employee], key: SortKey) -> Vec<Employee> {
    let mut sorted = employees.to_vec();
    sorted.sort_by(|a, b| {
        key.field(a)
            .to_lowercase()
            .cmp(&key.field(b).to_lowercase())
    });
    sorted
}

/// Derive a full view: apply the query mode, then the optional sort
pub fn run_query(
    employees: &[Employee],
    mode: &QueryMode,
    sort_key: Option<SortKey>,
) -> Vec<Employee> {
    let selected = match mode {
        QueryMode::All => employees.to_vec(),
        QueryMode::Search(text) => search(employees, text),
        QueryMode::Filter(criteria) => filter(employees, criteria),
    };
    match sort_key {
        Some(key) => sort(&selected, key),
        None => selected,
    }
}

/// Distinct departments present in the records, sorted
///
/// Feeds the filter dropdown in the view layer.
pub fn departments(employees: &[Employee]) -> Vec<String> {
    let mut departments: Vec<String> = employees.iter().map(|e| e.department.clone()).collect();
    departments.sort();
    departments.dedup();
    departments
}
