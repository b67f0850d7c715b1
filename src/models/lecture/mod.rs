// Lecture module
// Catalog records as fetched from the lecture partitions

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A single lecture from the catalog. Never mutated after it is fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lecture {
    pub id: String,
    pub title: String,
    /// Free-form credits string, e.g. `"3"` or `"3(2)"`.
    pub credits: String,
    pub major: String,
    pub grade: u8,
    /// Raw schedule descriptor; empty when the lecture has no fixed slot.
    #[serde(default)]
    pub schedule: String,
}

impl Lecture {
    /// Create a lecture with an empty schedule descriptor
    ///
    /// # Examples
    /// ```
    /// use timetable_planner::models::lecture::Lecture;
    ///
    /// let lecture = Lecture::new("CS201", "Data Structures", "3", "CS", 2)
    ///     .with_schedule("Mon1~2(101)");
    /// assert_eq!(lecture.schedule, "Mon1~2(101)");
    /// ```
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        credits: impl Into<String>,
        major: impl Into<String>,
        grade: u8,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            credits: credits.into(),
            major: major.into(),
            grade,
            schedule: String::new(),
        }
    }

    /// Set the raw schedule descriptor
    pub fn with_schedule(mut self, schedule: impl Into<String>) -> Self {
        self.schedule = schedule.into();
        self
    }

    pub fn has_schedule(&self) -> bool {
        !self.schedule.trim().is_empty()
    }
}

/// The in-memory lecture catalog: both partitions concatenated in fetch order.
#[derive(Debug, Clone)]
pub struct Catalog {
    lectures: Arc<[Arc<Lecture>]>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Catalog {
    pub fn new(lectures: Vec<Lecture>) -> Self {
        Self {
            lectures: lectures.into_iter().map(Arc::new).collect(),
        }
    }

    /// Concatenate partitions in the given order.
    pub fn from_partitions(partitions: Vec<Vec<Lecture>>) -> Self {
        Self::new(partitions.into_iter().flatten().collect())
    }

    pub fn lectures(&self) -> &[Arc<Lecture>] {
        &self.lectures
    }

    pub fn len(&self) -> usize {
        self.lectures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lectures.is_empty()
    }

    /// First lecture with the given id.
    pub fn find(&self, id: &str) -> Option<&Arc<Lecture>> {
        self.lectures.iter().find(|lecture| lecture.id == id)
    }

    /// Distinct majors in first-seen order.
    pub fn majors(&self) -> Vec<String> {
        let majors: IndexSet<&str> = self
            .lectures
            .iter()
            .map(|lecture| lecture.major.as_str())
            .collect();
        majors.into_iter().map(String::from).collect()
    }
}
