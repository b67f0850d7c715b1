//! Catalog filter engine.
//!
//! Criteria are evaluated as independent predicates. Their order changes only
//! how much work a rejected lecture costs, never which lectures survive.

use std::sync::Arc;

use crate::models::filter::FilterCriteria;
use crate::models::lecture::Lecture;
use crate::models::schedule::ScheduleFragment;
use crate::utils::schedule_parser::ScheduleParser;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Predicate {
    Text,
    Grade,
    Major,
    Credits,
    Day,
    Time,
}

/// Cheap field checks first, schedule parsing last.
pub const DEFAULT_ORDER: [Predicate; 6] = [
    Predicate::Text,
    Predicate::Grade,
    Predicate::Major,
    Predicate::Credits,
    Predicate::Day,
    Predicate::Time,
];

/// Predicates of one criteria set bound to a schedule parser.
pub struct LectureFilter<'a, P: ScheduleParser + ?Sized> {
    criteria: &'a FilterCriteria,
    parser: &'a P,
    order: &'a [Predicate],
    query: String,
}

impl<'a, P: ScheduleParser + ?Sized> LectureFilter<'a, P> {
    pub fn new(criteria: &'a FilterCriteria, parser: &'a P) -> Self {
        Self::with_order(criteria, parser, &DEFAULT_ORDER)
    }

    pub fn with_order(criteria: &'a FilterCriteria, parser: &'a P, order: &'a [Predicate]) -> Self {
        Self {
            criteria,
            parser,
            order,
            query: criteria.query.to_lowercase(),
        }
    }

    /// True when the lecture passes every predicate.
    pub fn matches(&self, lecture: &Lecture) -> bool {
        // Parsed at most once per lecture, and only if a day/time predicate asks.
        let mut fragments: Option<Vec<ScheduleFragment>> = None;

        self.order.iter().all(|predicate| match predicate {
            Predicate::Text => self.matches_text(lecture),
            Predicate::Grade => {
                self.criteria.grades.is_empty() || self.criteria.grades.contains(&lecture.grade)
            }
            Predicate::Major => {
                self.criteria.majors.is_empty() || self.criteria.majors.contains(&lecture.major)
            }
            Predicate::Credits => match self.criteria.credit_prefix() {
                None => true,
                Some(credits) => lecture.credits.starts_with(&credits.to_string()),
            },
            Predicate::Day => {
                self.criteria.days.is_empty()
                    || self
                        .fragments(lecture, &mut fragments)
                        .iter()
                        .any(|fragment| self.criteria.days.contains(&fragment.day))
            }
            Predicate::Time => {
                self.criteria.times.is_empty()
                    || self.fragments(lecture, &mut fragments).iter().any(|fragment| {
                        fragment
                            .range
                            .iter()
                            .any(|slot| self.criteria.times.contains(slot))
                    })
            }
        })
    }

    fn matches_text(&self, lecture: &Lecture) -> bool {
        self.query.is_empty()
            || lecture.id.to_lowercase().contains(&self.query)
            || lecture.title.to_lowercase().contains(&self.query)
    }

    fn fragments<'f>(
        &self,
        lecture: &Lecture,
        cache: &'f mut Option<Vec<ScheduleFragment>>,
    ) -> &'f [ScheduleFragment] {
        cache.get_or_insert_with(|| {
            if lecture.has_schedule() {
                self.parser.parse(&lecture.schedule)
            } else {
                Vec::new()
            }
        })
    }
}

/// Lectures passing every predicate of `criteria`, in catalog order.
pub fn filter_lectures<P: ScheduleParser + ?Sized>(
    lectures: &[Arc<Lecture>],
    criteria: &FilterCriteria,
    parser: &P,
) -> Vec<Arc<Lecture>> {
    if criteria.is_unrestricted() {
        return lectures.to_vec();
    }

    let filter = LectureFilter::new(criteria, parser);
    lectures
        .iter()
        .filter(|lecture| filter.matches(lecture))
        .cloned()
        .collect()
}
