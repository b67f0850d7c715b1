// Property-based tests for filtering and incremental reveal

#[path = "../fixtures/mod.rs"]
mod fixtures;

use std::sync::Arc;
use std::time::{Duration, Instant};

use fixtures::generated_catalog;
use proptest::prelude::*;
use proptest::sample::subsequence;
use timetable_planner::models::filter::FilterCriteria;
use timetable_planner::models::settings::SearchConfig;
use timetable_planner::services::filter::{LectureFilter, Predicate, DEFAULT_ORDER};
use timetable_planner::services::session::{SearchSession, SearchTarget};
use timetable_planner::utils::schedule_parser::DescriptorParser;

fn criteria_strategy() -> impl Strategy<Value = FilterCriteria> {
    (
        prop_oneof![Just(String::new()), Just("gen".to_string()), Just("1".to_string())],
        subsequence(vec![1u8, 2, 3, 4], 0..=4),
        subsequence(vec!["Mon", "Tue", "Wed", "Thu", "Fri"], 0..=5),
        subsequence((1u8..=24).collect::<Vec<_>>(), 0..=4),
        subsequence(vec!["CS", "BIO", "ART"], 0..=3),
        proptest::option::of(1u32..=3),
    )
        .prop_map(|(query, grades, days, times, majors, credits)| {
            let builder = FilterCriteria::builder()
                .query(query)
                .grades(grades)
                .days(days)
                .times(times)
                .majors(majors);
            match credits {
                Some(credits) => builder.credits(credits).build(),
                None => builder.build(),
            }
        })
}

proptest! {
    /// Property: predicate order never changes which lectures survive
    #[test]
    fn prop_filter_order_independent(
        criteria in criteria_strategy(),
        order in Just(DEFAULT_ORDER.to_vec()).prop_shuffle(),
    ) {
        let catalog = generated_catalog(120);
        let default_filter = LectureFilter::new(&criteria, &DescriptorParser);
        let shuffled: Vec<Predicate> = order;
        let shuffled_filter = LectureFilter::with_order(&criteria, &DescriptorParser, &shuffled);

        for lecture in catalog.lectures() {
            prop_assert_eq!(default_filter.matches(lecture), shuffled_filter.matches(lecture));
        }
    }

    /// Property: the visible window is always min(count, page * size) and the
    /// page never passes the last page
    #[test]
    fn prop_visible_window_invariant(
        count in 0..450usize,
        triggers in 0..8usize,
        criteria in criteria_strategy(),
    ) {
        let start = Instant::now();
        let config = SearchConfig::default();
        let mut search = SearchSession::new(generated_catalog(count), Arc::new(DescriptorParser), &config);
        search.open(SearchTarget::table("schedule-1"), start);
        search.set_criteria(criteria, start);

        let ready = start + Duration::from_millis(config.observer_delay_ms);
        let ticket = search.poll(ready);
        prop_assert!(ticket.is_some());

        for _ in 0..triggers {
            if let Some(ticket) = ticket {
                search.on_sentinel_visible(ticket);
            }
            prop_assert!(search.page() <= search.last_page());
            prop_assert_eq!(
                search.visible().len(),
                search.result_count().min(search.page() * config.page_size)
            );
        }
    }
}

#[test]
fn test_reveal_250_results() {
    let start = Instant::now();
    let mut search = SearchSession::new(generated_catalog(250), Arc::new(DescriptorParser), &SearchConfig::default());
    search.open(SearchTarget::table("schedule-1"), start);
    assert_eq!(search.visible().len(), 100);

    let ticket = search.poll(start + Duration::from_millis(300)).unwrap();
    assert!(search.on_sentinel_visible(ticket));
    assert_eq!(search.visible().len(), 200);
    assert!(search.on_sentinel_visible(ticket));
    assert_eq!(search.visible().len(), 250);
    assert!(!search.on_sentinel_visible(ticket));
    assert_eq!(search.visible().len(), 250);
}
