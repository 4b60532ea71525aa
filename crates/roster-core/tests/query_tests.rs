mod common;

use common::seeded_store;
use proptest::prelude::*;
use roster_core::queries::{filter, run_query, search, sort, FilterCriteria, QueryMode, SortKey};
use roster_core::Employee;

// ===== SEARCH =====

#[test]
fn test_search_matches_first_last_or_email() {
    let store = seeded_store();

    // "son" hits the Johnson/Wilson last names and their email addresses.
    let hits = search(store.employees(), "son");
    assert!(hits.iter().all(|e| {
        e.first_name.to_lowercase().contains("son")
            || e.last_name.to_lowercase().contains("son")
            || e.email.to_lowercase().contains("son")
    }));
    assert!(!hits.is_empty());

    // Email-only hit: the seed emails all contain "@company.com".
    let hits = search(store.employees(), "@company.com");
    assert_eq!(hits.len(), store.len());
}

#[test]
fn test_search_does_not_mutate_store_order() {
    let store = seeded_store();
    let _ = search(store.employees(), "jane");
    let ids: Vec<u32> = store.employees().iter().map(|e| e.id).collect();
    assert_eq!(ids, (1..=10).collect::<Vec<u32>>());
}

// ===== FILTER =====

#[test]
fn test_filter_entry_point_with_all_three_criteria() {
    let store = seeded_store();
    let criteria = FilterCriteria {
        first_name: Some("d".to_string()),
        department: Some("Engineering".to_string()),
        role: Some("developer".to_string()),
    };

    let hits = filter(store.employees(), &criteria);
    // Diana Davis is the only Engineering developer with a "d" first name.
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 7);
}

// ===== SORT =====

#[test]
fn test_sort_orders_every_key_non_decreasing() {
    let store = seeded_store();
    for key in [
        SortKey::FirstName,
        SortKey::LastName,
        SortKey::Email,
        SortKey::Department,
        SortKey::Role,
    ] {
        let sorted = sort(store.employees(), key);
        assert_eq!(sorted.len(), store.len());
        for pair in sorted.windows(2) {
            let a = field(&pair[0], key).to_lowercase();
            let b = field(&pair[1], key).to_lowercase();
            assert!(a <= b, "{:?} out of order: {:?} > {:?}", key, a, b);
        }
    }
}

fn field(employee: &Employee, key: SortKey) -> &str {
    match key {
        SortKey::FirstName => &employee.first_name,
        SortKey::LastName => &employee.last_name,
        SortKey::Email => &employee.email,
        SortKey::Department => &employee.department,
        SortKey::Role => &employee.role,
    }
}

// ===== MODE + SORT COMPOSITION =====

#[test]
fn test_run_query_modes_are_mutually_exclusive_paths() {
    let store = seeded_store();

    let all = run_query(store.employees(), &QueryMode::All, None);
    assert_eq!(all.len(), store.len());

    let searched = run_query(
        store.employees(),
        &QueryMode::Search("manager".to_string()),
        None,
    );
    // "manager" matches nothing in names/emails of the seed set.
    assert!(searched.is_empty());

    let filtered = run_query(
        store.employees(),
        &QueryMode::Filter(FilterCriteria {
            role: Some("manager".to_string()),
            ..Default::default()
        }),
        Some(SortKey::LastName),
    );
    let last_names: Vec<&str> = filtered.iter().map(|e| e.last_name.as_str()).collect();
    assert_eq!(last_names, vec!["Garcia", "Smith", "Williams"]);
}

// ===== PROPERTIES =====

fn arbitrary_employees() -> impl Strategy<Value = Vec<Employee>> {
    proptest::collection::vec(
        ("[A-Za-z]{2,8}", "[A-Za-z]{2,8}", "[a-z]{1,8}"),
        1..12,
    )
    .prop_map(|people| {
        people
            .into_iter()
            .enumerate()
            .map(|(i, (first, last, local))| {
                Employee::new(
                    i as u32 + 1,
                    first,
                    last,
                    format!("{}{}@company.com", local, i),
                    "Engineering",
                    "Developer",
                )
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_search_hits_contain_the_term(
        employees in arbitrary_employees(),
        term in "[a-zA-Z]{1,4}",
    ) {
        let needle = term.trim().to_lowercase();
        for hit in search(&employees, &term) {
            prop_assert!(
                hit.first_name.to_lowercase().contains(&needle)
                    || hit.last_name.to_lowercase().contains(&needle)
                    || hit.email.to_lowercase().contains(&needle)
            );
        }
    }

    #[test]
    fn prop_search_misses_do_not_contain_the_term(
        employees in arbitrary_employees(),
        term in "[a-zA-Z]{1,4}",
    ) {
        let needle = term.trim().to_lowercase();
        let hits = search(&employees, &term);
        for employee in &employees {
            if !hits.iter().any(|h| h.id == employee.id) {
                prop_assert!(
                    !employee.first_name.to_lowercase().contains(&needle)
                        && !employee.last_name.to_lowercase().contains(&needle)
                        && !employee.email.to_lowercase().contains(&needle)
                );
            }
        }
    }

    #[test]
    fn prop_sort_is_non_decreasing_and_length_preserving(
        employees in arbitrary_employees(),
    ) {
        let sorted = sort(&employees, SortKey::FirstName);
        prop_assert_eq!(sorted.len(), employees.len());
        for pair in sorted.windows(2) {
            prop_assert!(
                pair[0].first_name.to_lowercase() <= pair[1].first_name.to_lowercase()
            );
        }
    }
}
