// Schedule module
// Parsed schedule fragments and the entries placed on a timetable grid

use std::sync::Arc;

use crate::models::lecture::Lecture;

/// First valid time-slot index on the vertical grid axis.
pub const MIN_TIME_SLOT: u8 = 1;
/// Last valid time-slot index on the vertical grid axis.
pub const MAX_TIME_SLOT: u8 = 24;

pub fn is_valid_slot(slot: i64) -> bool {
    (i64::from(MIN_TIME_SLOT)..=i64::from(MAX_TIME_SLOT)).contains(&slot)
}

/// One `day + contiguous range + room` piece of a raw schedule descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleFragment {
    pub day: String,
    /// Ascending, contiguous time-slot indices.
    pub range: Vec<u8>,
    pub room: String,
}

impl ScheduleFragment {
    pub fn new(day: impl Into<String>, range: Vec<u8>, room: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            range,
            room: room.into(),
        }
    }

    pub fn covers(&self, slot: u8) -> bool {
        self.range.contains(&slot)
    }
}

/// A lecture fragment placed on a table.
///
/// Entries are replaced, never edited: a successful drag builds a new entry
/// and leaves every other entry's `Arc` untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub day: String,
    pub range: Vec<u8>,
    pub room: String,
    pub lecture: Arc<Lecture>,
}

impl ScheduleEntry {
    pub fn from_fragment(fragment: ScheduleFragment, lecture: Arc<Lecture>) -> Self {
        Self {
            day: fragment.day,
            range: fragment.range,
            room: fragment.room,
            lecture,
        }
    }

    /// Copy of this entry moved to another day and range.
    pub fn moved_to(&self, day: impl Into<String>, range: Vec<u8>) -> Self {
        Self {
            day: day.into(),
            range,
            room: self.room.clone(),
            lecture: Arc::clone(&self.lecture),
        }
    }

    /// True when the entry sits on `day` and its range includes `slot`.
    pub fn occupies(&self, day: &str, slot: u8) -> bool {
        self.day == day && self.range.contains(&slot)
    }

    pub fn first_slot(&self) -> Option<u8> {
        self.range.first().copied()
    }
}
