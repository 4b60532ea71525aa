use roster_core::rules::FieldName;
use roster_core::{EmployeeDraft, FilterCriteria, RosterError, SortKey};
use roster_engine::{Directory, DirectoryView};

fn draft(first: &str, last: &str, email: &str) -> EmployeeDraft {
    EmployeeDraft {
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: email.to_string(),
        department: "Engineering".to_string(),
        role: "Developer".to_string(),
    }
}

#[test]
fn test_seeded_directory_renders_all_records() {
    let directory = Directory::seeded();
    let visible = directory.visible(&DirectoryView::all());
    assert_eq!(visible.len(), 10);
    assert_eq!(visible[0].full_name(), "John Doe");
}

#[test]
fn test_search_and_filter_are_separate_entry_points() {
    let directory = Directory::seeded();

    let searched = directory.visible(&DirectoryView::searching("garcia"));
    assert_eq!(searched.len(), 1);
    assert_eq!(searched[0].id, 9);

    let filtered = directory.visible(&DirectoryView::filtered(FilterCriteria {
        department: Some("HR".to_string()),
        ..Default::default()
    }));
    let ids: Vec<u32> = filtered.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![4, 10]);
}

#[test]
fn test_view_sort_orders_the_entry_points_output() {
    let directory = Directory::seeded();

    let view = DirectoryView::searching("a").with_sort(SortKey::FirstName);
    let visible = directory.visible(&view);
    for pair in visible.windows(2) {
        assert!(pair[0].first_name.to_lowercase() <= pair[1].first_name.to_lowercase());
    }
}

#[test]
fn test_mutations_are_visible_to_later_views() {
    let mut directory = Directory::seeded();

    let created = directory.add(draft("Hana", "Kobayashi", "hana.k@company.com")).unwrap();
    assert_eq!(created.id, 11);
    assert_eq!(directory.visible(&DirectoryView::all()).len(), 11);

    directory
        .update(created.id, draft("Hana", "Sato", "hana.k@company.com"))
        .unwrap();
    assert_eq!(directory.get(created.id).unwrap().last_name, "Sato");

    directory.remove(created.id).unwrap();
    assert_eq!(directory.visible(&DirectoryView::all()).len(), 10);
    assert!(directory.get(created.id).is_none());
}

#[test]
fn test_rejected_submission_surfaces_field_errors() {
    let mut directory = Directory::seeded();

    let result = directory.add(draft("Nina", "Patel", "john.doe@company.com"));
    match result {
        Err(RosterError::Validation { errors }) => {
            assert!(errors.contains(FieldName::Email));
        }
        other => panic!("Expected validation error, got {:?}", other),
    }
    assert_eq!(directory.employees().len(), 10);
}

#[test]
fn test_remove_with_stale_id_propagates_not_found() {
    let mut directory = Directory::seeded();
    assert_eq!(
        directory.remove(99),
        Err(RosterError::EmployeeNotFound { id: 99 })
    );
}

#[test]
fn test_departments_feed_the_filter_dropdown() {
    let directory = Directory::seeded();
    assert_eq!(
        directory.departments(),
        vec!["Engineering", "Finance", "HR", "IT", "Marketing", "Sales"]
    );
}
