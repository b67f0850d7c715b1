// Unit tests for the catalog filter through the public API

#[path = "../fixtures/mod.rs"]
mod fixtures;

use std::sync::Arc;

use fixtures::sample_catalog;
use pretty_assertions::assert_eq;
use test_case::test_case;
use timetable_planner::models::filter::FilterCriteria;
use timetable_planner::models::lecture::{Catalog, Lecture};
use timetable_planner::services::filter::{filter_lectures, LectureFilter, Predicate, DEFAULT_ORDER};
use timetable_planner::utils::schedule_parser::DescriptorParser;

fn two_lecture_catalog() -> Catalog {
    Catalog::new(vec![
        Lecture::new("CS201", "Data Structures", "3", "CS", 2).with_schedule("Mon1~2(101)"),
        Lecture::new("BIO101", "Biology", "3", "Biology", 1).with_schedule("Wed3~4(202)"),
    ])
}

fn ids(lectures: &[Arc<Lecture>]) -> Vec<&str> {
    lectures.iter().map(|lecture| lecture.id.as_str()).collect()
}

#[test]
fn test_query_by_id() {
    let catalog = two_lecture_catalog();
    let criteria = FilterCriteria::builder().query("cs").build();
    let result = filter_lectures(catalog.lectures(), &criteria, &DescriptorParser);
    assert_eq!(ids(&result), vec!["CS201"]);
}

#[test]
fn test_day_selection() {
    let catalog = two_lecture_catalog();
    let criteria = FilterCriteria::builder().days(["Wed"]).build();
    let result = filter_lectures(catalog.lectures(), &criteria, &DescriptorParser);
    assert_eq!(ids(&result), vec!["BIO101"]);
}

#[test]
fn test_conflicting_grade_and_major() {
    let catalog = two_lecture_catalog();
    let criteria = FilterCriteria::builder().grades([2]).majors(["Biology"]).build();
    assert!(filter_lectures(catalog.lectures(), &criteria, &DescriptorParser).is_empty());
}

#[test_case(FilterCriteria::builder().times([19]).build(), vec!["ART110"] ; "evening slot")]
#[test_case(FilterCriteria::builder().days(["Mon", "Tue"]).build(), vec!["CS201", "BIO101"] ; "any selected day")]
#[test_case(FilterCriteria::builder().credits(2).build(), vec!["ART110", "GE100"] ; "credits prefix")]
#[test_case(FilterCriteria::builder().days(["Mon"]).times([3]).build(), vec!["CS201"] ; "day and time checked separately")]
#[test_case(FilterCriteria::builder().grades([1]).query("writ").build(), vec!["GE100"] ; "unscheduled lecture by text")]
#[test_case(FilterCriteria::builder().days(["Thu"]).majors(["ART"]).build(), vec!["ART110"] ; "liberal arts partition")]
fn test_sample_catalog(criteria: FilterCriteria, expected: Vec<&str>) {
    let catalog = sample_catalog();
    let result = filter_lectures(catalog.lectures(), &criteria, &DescriptorParser);
    assert_eq!(ids(&result), expected);
}

#[test]
fn test_unscheduled_lecture_never_matches_day_or_time() {
    let catalog = sample_catalog();
    let writing = catalog.find("GE100").unwrap();
    let criteria = FilterCriteria::builder().days(["Mon", "Tue", "Wed", "Thu", "Fri"]).build();

    assert!(!LectureFilter::new(&criteria, &DescriptorParser).matches(writing));
}

#[test]
fn test_reversed_order_gives_same_result() {
    let catalog = sample_catalog();
    let criteria = FilterCriteria::builder()
        .grades([1, 2])
        .days(["Mon", "Tue", "Thu"])
        .times([1, 5, 20])
        .credits(3)
        .build();

    let mut reversed: Vec<Predicate> = DEFAULT_ORDER.to_vec();
    reversed.reverse();
    let forward = LectureFilter::new(&criteria, &DescriptorParser);
    let backward = LectureFilter::with_order(&criteria, &DescriptorParser, &reversed);

    for lecture in catalog.lectures() {
        assert_eq!(forward.matches(lecture), backward.matches(lecture), "{}", lecture.id);
    }
}
