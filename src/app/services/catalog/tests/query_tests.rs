//! Tests for point lookup and ordered traversal

use crate::app::models::CourseRecord;
use crate::app::services::catalog::CourseCatalog;

fn create_test_catalog() -> CourseCatalog {
    let mut catalog = CourseCatalog::new();

    // Inserted deliberately out of order
    catalog.insert(CourseRecord::new(
        "MATH201",
        "Discrete Mathematics",
        Vec::new(),
    ));
    catalog.insert(CourseRecord::new(
        "CSCI300",
        "Advanced Programming",
        vec!["CSCI200".to_string()],
    ));
    catalog.insert(CourseRecord::new(
        "CSCI100",
        "Introduction to Computer Science",
        Vec::new(),
    ));
    catalog.insert(CourseRecord::new(
        "CSCI200",
        "Data Structures",
        vec!["CSCI100".to_string()],
    ));

    catalog
}

#[test]
fn test_find_present_course() {
    let catalog = create_test_catalog();

    let record = catalog.find("CSCI300").unwrap();
    assert_eq!(record.id, "CSCI300");
    assert_eq!(record.name, "Advanced Programming");
    assert_eq!(record.prerequisites, vec!["CSCI200"]);
}

#[test]
fn test_find_absent_course_is_none_not_error() {
    let catalog = create_test_catalog();

    assert!(catalog.find("CSCI999").is_none());
    assert!(!catalog.contains_course("CSCI999"));
}

#[test]
fn test_find_is_case_sensitive() {
    let catalog = create_test_catalog();

    // The index itself never normalizes case; that is the caller's choice
    assert!(catalog.find("csci300").is_none());
    assert!(catalog.find("CSCI300").is_some());
}

#[test]
fn test_courses_in_order_is_sorted() {
    let catalog = create_test_catalog();

    let ids: Vec<&String> = catalog.courses_in_order().map(|(id, _)| id).collect();
    assert_eq!(ids, vec!["CSCI100", "CSCI200", "CSCI300", "MATH201"]);
}

#[test]
fn test_ordering_invariant_survives_overwrites() {
    let mut catalog = create_test_catalog();

    catalog.insert(CourseRecord::new("CSCI200", "Data Structures II", Vec::new()));
    catalog.insert(CourseRecord::new("ART101", "Drawing", Vec::new()));

    let ids: Vec<&String> = catalog.course_ids();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);

    // Length equals distinct ids, not insert count
    assert_eq!(catalog.course_count(), 5);
}

#[test]
fn test_empty_catalog_queries() {
    let catalog = CourseCatalog::new();

    assert!(catalog.is_empty());
    assert!(catalog.find("CSCI100").is_none());
    assert_eq!(catalog.courses_in_order().count(), 0);
    assert!(catalog.course_ids().is_empty());
}

#[test]
fn test_overwrite_replaces_record_entirely() {
    let mut catalog = CourseCatalog::new();

    catalog.insert(CourseRecord::new(
        "CS101",
        "Intro",
        vec!["CS100".to_string()],
    ));
    let displaced = catalog.insert(CourseRecord::new("CS101", "Introduction", Vec::new()));

    assert!(displaced.is_some());
    assert_eq!(displaced.unwrap().name, "Intro");

    // No merge of prerequisite lists
    let record = catalog.find("CS101").unwrap();
    assert_eq!(record.name, "Introduction");
    assert!(record.prerequisites.is_empty());
}
