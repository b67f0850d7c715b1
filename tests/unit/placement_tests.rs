// Unit tests for grid placement through the public API
// Covers day/time moves, bounds rejection and structural sharing

#[path = "../fixtures/mod.rs"]
mod fixtures;

use std::sync::Arc;

use egui::Vec2;
use fixtures::{entry, lectures, two_tables};
use test_case::test_case;
use timetable_planner::models::settings::GridConfig;
use timetable_planner::models::table::INITIAL_TABLE_ID;
use timetable_planner::services::diagnostics::{Diagnostic, Reduction};
use timetable_planner::services::placement::{DragIdentifier, PlacementEngine};

const W: f32 = 80.0;
const H: f32 = 30.0;

fn engine() -> PlacementEngine {
    PlacementEngine::new(GridConfig::default())
}

fn first_entry() -> DragIdentifier {
    DragIdentifier::new(INITIAL_TABLE_ID, 0)
}

#[test_case("Tue", vec![3, 4], 2.0 * W, 0.0, "Thu", vec![3, 4] ; "two days right")]
#[test_case("Fri", vec![3, 4], -4.0 * W, 0.0, "Mon", vec![3, 4] ; "back to monday")]
#[test_case("Mon", vec![1, 2], 0.0, 2.0 * H, "Mon", vec![3, 4] ; "two slots down")]
#[test_case("Wed", vec![22, 23], W, H, "Thu", vec![23, 24] ; "diagonal to last slot")]
#[test_case("Mon", vec![5], W + 10.0, H + 29.0, "Tue", vec![6] ; "partial cells floor")]
fn test_successful_moves(day: &str, range: Vec<u8>, dx: f32, dy: f32, expected_day: &str, expected_range: Vec<u8>) {
    let lecture = Arc::new(lectures::data_structures());
    let before = two_tables(vec![entry(&lecture, day, range)]);

    let reduction = engine().commit_drag(&before, &first_entry(), Vec2::new(dx, dy));
    assert!(reduction.is_changed());
    let after = reduction.apply(&before);

    let moved = &after.get(INITIAL_TABLE_ID).unwrap().entries()[0];
    assert_eq!(moved.day, expected_day);
    assert_eq!(moved.range, expected_range);
    assert!(Arc::ptr_eq(&moved.lecture, &lecture));
}

#[test_case("Mon", vec![1], -W, 0.0, Diagnostic::DayOutOfBounds(-1) ; "left of monday")]
#[test_case("Fri", vec![1], W, 0.0, Diagnostic::DayOutOfBounds(5) ; "right of friday")]
#[test_case("Mon", vec![1], 0.0, -H, Diagnostic::TimeOutOfBounds(vec![0]) ; "above first slot")]
#[test_case("Mon", vec![23, 24], 0.0, H, Diagnostic::TimeOutOfBounds(vec![24, 25]) ; "below last slot")]
fn test_rejected_moves(day: &str, range: Vec<u8>, dx: f32, dy: f32, expected: Diagnostic) {
    let lecture = Arc::new(lectures::data_structures());
    let before = two_tables(vec![entry(&lecture, day, range)]);

    let reduction = engine().commit_drag(&before, &first_entry(), Vec2::new(dx, dy));
    assert_eq!(reduction.diagnostic(), Some(&expected));
    assert!(reduction.apply(&before).ptr_eq(&before));
}

#[test]
fn test_only_target_table_gets_new_reference() {
    let lecture = Arc::new(lectures::data_structures());
    let before = two_tables(vec![
        entry(&lecture, "Mon", vec![1, 2]),
        entry(&lecture, "Wed", vec![3]),
    ]);

    let after = engine()
        .commit_drag(&before, &first_entry(), Vec2::new(W, 0.0))
        .apply(&before);

    let old_table = before.get(INITIAL_TABLE_ID).unwrap();
    let new_table = after.get(INITIAL_TABLE_ID).unwrap();
    assert!(!new_table.ptr_eq(old_table));
    assert!(!Arc::ptr_eq(&new_table.entries()[0], &old_table.entries()[0]));
    assert!(Arc::ptr_eq(&new_table.entries()[1], &old_table.entries()[1]));
    assert!(after
        .get("schedule-2")
        .unwrap()
        .ptr_eq(before.get("schedule-2").unwrap()));
}

#[test]
fn test_overlapping_drop_is_allowed() {
    let lecture = Arc::new(lectures::data_structures());
    let before = two_tables(vec![
        entry(&lecture, "Mon", vec![1, 2]),
        entry(&lecture, "Tue", vec![1, 2]),
    ]);

    let after = engine()
        .commit_drag(&before, &first_entry(), Vec2::new(W, 0.0))
        .apply(&before);

    let table = after.get(INITIAL_TABLE_ID).unwrap();
    assert_eq!(table.entries()[0].day, "Tue");
    assert_eq!(table.entries()[1].day, "Tue");
}

#[test]
fn test_encoded_identifier_from_drag_library() {
    let lecture = Arc::new(lectures::data_structures());
    let before = two_tables(vec![entry(&lecture, "Mon", vec![1])]);

    let after = engine()
        .commit_encoded(&before, &first_entry().encode(), Vec2::new(0.0, H))
        .apply(&before);
    assert_eq!(after.get(INITIAL_TABLE_ID).unwrap().entries()[0].range, vec![2]);

    let rejected = engine().commit_encoded(&before, "schedule-1:zero", Vec2::new(0.0, H));
    assert!(matches!(rejected, Reduction::Rejected(Diagnostic::MalformedReference(_))));
}
