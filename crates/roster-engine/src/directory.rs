//! The directory facade and its per-view query state.

use roster_core::ops::employee_ops;
use roster_core::queries;
use roster_core::{
    Employee, EmployeeDraft, EmployeeId, FilterCriteria, QueryMode, Result, RosterError, SortKey,
    Store,
};

/// Request-scoped view state: how one rendering of the directory narrows and
/// orders the records
///
/// Views are plain values handed to [`Directory::visible`] and are never
/// stored on the directory itself. Each constructor mirrors one UI entry
/// point and starts from the full record set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryView {
    pub mode: QueryMode,
    pub sort: Option<SortKey>,
}

impl DirectoryView {
    /// Everything, unfiltered
    pub fn all() -> Self {
        Self::default()
    }

    /// The quick-search entry point
    pub fn searching(text: impl Into<String>) -> Self {
        Self {
            mode: QueryMode::Search(text.into()),
            sort: None,
        }
    }

    /// The advanced-filter entry point
    pub fn filtered(criteria: FilterCriteria) -> Self {
        Self {
            mode: QueryMode::Filter(criteria),
            sort: None,
        }
    }

    /// Order the view by a field
    pub fn with_sort(mut self, key: SortKey) -> Self {
        self.sort = Some(key);
        self
    }
}

/// Facade over the record store for the event and rendering layers
///
/// Reads go through [`visible`](Directory::visible) with an explicit view;
/// writes run the validate-then-mutate operations and emit structured
/// tracing events.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    store: Store,
}

impl Directory {
    /// An empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// A directory initialized with the ten seed records
    pub fn seeded() -> Self {
        Self {
            store: Store::seeded(),
        }
    }

    /// Wrap an existing store
    pub fn from_store(store: Store) -> Self {
        Self { store }
    }

    /// All records in insertion order
    pub fn employees(&self) -> &[Employee] {
        self.store.employees()
    }

    /// One record by identifier
    pub fn get(&self, id: EmployeeId) -> Option<&Employee> {
        self.store.get(id)
    }

    /// Derive the record sequence a view should render
    ///
    /// Pure with respect to the store; safe to call repeatedly. An empty
    /// result is the "no employees found" state.
    pub fn visible(&self, view: &DirectoryView) -> Vec<Employee> {
        queries::run_query(self.store.employees(), &view.mode, view.sort)
    }

    /// Distinct departments for the filter dropdown
    pub fn departments(&self) -> Vec<String> {
        queries::departments(self.store.employees())
    }

    /// Create a record from a submitted draft
    ///
    /// # Errors
    ///
    /// Returns `Validation` with per-field messages; the store is unchanged.
    pub fn add(&mut self, draft: EmployeeDraft) -> Result<Employee> {
        match employee_ops::add_employee(&mut self.store, draft) {
            Ok(employee) => {
                tracing::info!(
                    component = module_path!(),
                    op = "add",
                    id = employee.id,
                    "employee added"
                );
                Ok(employee)
            }
            Err(err) => {
                log_rejection("add", &err);
                Err(err)
            }
        }
    }

    /// Replace a record's fields from a submitted draft
    ///
    /// # Errors
    ///
    /// * `EmployeeNotFound` - the identifier is stale
    /// * `Validation` - the draft failed field checks
    pub fn update(&mut self, id: EmployeeId, draft: EmployeeDraft) -> Result<Employee> {
        match employee_ops::update_employee(&mut self.store, id, draft) {
            Ok(employee) => {
                tracing::info!(
                    component = module_path!(),
                    op = "update",
                    id = employee.id,
                    "employee updated"
                );
                Ok(employee)
            }
            Err(err) => {
                log_rejection("update", &err);
                Err(err)
            }
        }
    }

    /// Remove a record by identifier, returning it
    ///
    /// # Errors
    ///
    /// Returns `EmployeeNotFound` if the identifier is stale.
    pub fn remove(&mut self, id: EmployeeId) -> Result<Employee> {
        match employee_ops::delete_employee(&mut self.store, id) {
            Ok(employee) => {
                tracing::info!(
                    component = module_path!(),
                    op = "delete",
                    id = employee.id,
                    "employee deleted"
                );
                Ok(employee)
            }
            Err(err) => {
                log_rejection("delete", &err);
                Err(err)
            }
        }
    }
}

fn log_rejection(op: &str, err: &RosterError) {
    match err {
        RosterError::Validation { errors } => {
            tracing::debug!(
                component = module_path!(),
                op = op,
                fields = errors.len(),
                "submission rejected"
            );
        }
        RosterError::EmployeeNotFound { id } => {
            tracing::warn!(
                component = module_path!(),
                op = op,
                id = id,
                "stale employee reference"
            );
        }
        other => {
            tracing::error!(component = module_path!(), op = op, error = %other, "operation failed");
        }
    }
}
