pub mod employee_queries;

pub use employee_queries::{
    departments, filter, run_query, search, sort, FilterCriteria, QueryMode, SortKey,
};
