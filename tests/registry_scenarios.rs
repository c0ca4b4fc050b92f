//! Registry behaviour tests
//! Run with: cargo test --test registry_scenarios

use classroom_manager::application::errors::RegistryError;
use classroom_manager::application::services::{ClassroomRegistry, Listing};

#[test]
fn test_enrolling_twice_is_idempotent() {
    let mut registry = ClassroomRegistry::new();
    registry.add_classroom("Math").unwrap();

    registry.add_student("S1", "Math").unwrap();
    let after_first = registry.clone();
    registry.add_student("S1", "Math").unwrap();

    assert_eq!(registry, after_first);
    assert_eq!(registry.student("S1").unwrap().enrollment_count(), 1);
    assert_eq!(
        registry.list_students("Math").unwrap(),
        Listing::Items(vec!["S1".to_string()])
    );
}

#[test]
fn test_added_classroom_is_listed_exactly_once() {
    let mut registry = ClassroomRegistry::new();
    for name in ["Math", "Art", "History of Science"] {
        registry.add_classroom(name).unwrap();
        let listing = registry.list_classrooms();
        let count = listing.items().iter().filter(|n| n.as_str() == name).count();
        assert_eq!(count, 1, "{} should appear once", name);
    }

    let _ = registry.add_classroom("Math");
    assert_eq!(registry.list_classrooms().items().len(), 3);
}

#[test]
fn test_removing_unknown_classroom_leaves_state_unchanged() {
    let mut registry = ClassroomRegistry::new();
    registry.add_classroom("Math").unwrap();
    registry.add_student("S1", "Math").unwrap();
    registry.schedule_assignment("Math", "HW1").unwrap();
    let before = registry.clone();

    assert_eq!(
        registry.remove_classroom("Physics"),
        Err(RegistryError::NotFound("Physics".to_string()))
    );
    assert_eq!(registry, before);
}

#[test]
fn test_remove_drops_assignments_but_keeps_students() {
    let mut registry = ClassroomRegistry::new();
    registry.add_classroom("Math").unwrap();
    registry.add_student("S1", "Math").unwrap();
    registry.schedule_assignment("Math", "HW1").unwrap();

    registry.remove_classroom("Math").unwrap();

    assert_eq!(registry.list_classrooms(), Listing::Empty);
    assert!(registry.student("S1").is_some());
    assert_eq!(
        registry.list_assignments("Math"),
        Err(RegistryError::NotFound("Math".to_string()))
    );
}

#[test]
fn test_submit_requires_every_precondition() {
    let mut registry = ClassroomRegistry::new();
    registry.add_classroom("Math").unwrap();
    registry.add_classroom("Art").unwrap();
    registry.add_student("S1", "Math").unwrap();
    registry.add_student("S2", "Art").unwrap();
    registry.schedule_assignment("Math", "HW1").unwrap();
    let before = registry.clone();

    assert_eq!(
        registry.submit_assignment("S1", "Physics", "HW1"),
        Err(RegistryError::NotFound("Physics".to_string()))
    );
    assert_eq!(
        registry.submit_assignment("S1", "Math", "HW2"),
        Err(RegistryError::AssignmentNotFound {
            class_name: "Math".to_string(),
            details: "HW2".to_string(),
        })
    );
    // Known student, wrong classroom
    assert_eq!(
        registry.submit_assignment("S2", "Math", "HW1"),
        Err(RegistryError::NotEnrolled {
            student_id: "S2".to_string(),
            class_name: "Math".to_string(),
        })
    );
    // Unknown student
    assert!(matches!(
        registry.submit_assignment("S3", "Math", "HW1"),
        Err(RegistryError::NotEnrolled { .. })
    ));
    assert_eq!(registry, before);

    assert_eq!(registry.submit_assignment("S1", "Math", "HW1"), Ok(()));
    assert_eq!(registry.submission_status("S1", "Math", "HW1"), Ok(true));
}

#[test]
fn test_math_homework_scenario() {
    let mut registry = ClassroomRegistry::new();
    registry.add_classroom("Math").unwrap();
    registry.add_student("S1", "Math").unwrap();
    registry.schedule_assignment("Math", "HW1").unwrap();

    registry.submit_assignment("S1", "Math", "HW1").unwrap();
    let hw1 = registry.classroom("Math").unwrap().find_assignment("HW1").unwrap();
    assert!(hw1.is_submitted("S1"));

    assert!(matches!(
        registry.submit_assignment("S2", "Math", "HW1"),
        Err(RegistryError::NotEnrolled { .. })
    ));
    let hw1 = registry.classroom("Math").unwrap().find_assignment("HW1").unwrap();
    assert!(!hw1.is_submitted("S2"));
    assert_eq!(hw1.submission_count(), 1);
}

#[test]
fn test_empty_classroom_listing_differs_from_missing_classroom() {
    let mut registry = ClassroomRegistry::new();
    registry.add_classroom("Math").unwrap();

    assert_eq!(registry.list_students("Math"), Ok(Listing::Empty));
    assert_eq!(
        registry.list_students("Physics"),
        Err(RegistryError::NotFound("Physics".to_string()))
    );
}

#[test]
fn test_duplicate_details_resolve_to_first_assignment() {
    let mut registry = ClassroomRegistry::new();
    registry.add_classroom("Math").unwrap();
    registry.add_student("S1", "Math").unwrap();
    let first = registry.schedule_assignment("Math", "HW1").unwrap();
    let second = registry.schedule_assignment("Math", "HW1").unwrap();
    assert_ne!(first, second);

    registry.submit_assignment("S1", "Math", "HW1").unwrap();

    let assignments = registry.classroom("Math").unwrap().assignments();
    assert_eq!(assignments.len(), 2);
    assert_eq!(assignments[0].id(), first);
    assert!(assignments[0].is_submitted("S1"));
    assert!(!assignments[1].is_submitted("S1"));
}
