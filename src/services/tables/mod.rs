//! Table collection manager: add, duplicate and remove timetables and entries.
//!
//! Every operation builds a new collection and leaves untouched tables on
//! their existing reference.

use std::sync::Arc;

use crate::models::lecture::Lecture;
use crate::models::schedule::ScheduleEntry;
use crate::models::table::{TableId, TimetableCollection};
use crate::services::diagnostics::{Diagnostic, Reduction};
use crate::utils::schedule_parser::ScheduleParser;

const TABLE_ID_PREFIX: &str = "schedule-";

#[derive(Debug, Clone, Default)]
pub struct TableManager {
    last_suffix: u64,
}

impl TableManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next `schedule-<n>` key not present in `collection`.
    pub fn fresh_id(&mut self, collection: &TimetableCollection) -> TableId {
        loop {
            self.last_suffix += 1;
            let candidate = format!("{}{}", TABLE_ID_PREFIX, self.last_suffix);
            if !collection.contains(&candidate) {
                return TableId::from(candidate);
            }
        }
    }

    /// Copy `table_id` under a fresh key appended after the existing tables.
    /// The copy holds the same entries but is its own sequence.
    pub fn duplicate(&mut self, collection: &TimetableCollection, table_id: &str) -> Reduction {
        let Some(source) = collection.get(table_id) else {
            return Reduction::Rejected(Diagnostic::EmptyTargetTable(TableId::from(table_id)))
                .logged("duplicate table");
        };

        let copy = source.detached_copy();
        let new_id = self.fresh_id(collection);
        log::debug!("Duplicating table {} as {}", table_id, new_id);
        Reduction::Changed(collection.with_table(new_id, copy)).logged("duplicate table")
    }

    /// Drop `table_id`. Keeping at least one table is the caller's job.
    pub fn remove(&self, collection: &TimetableCollection, table_id: &str) -> Reduction {
        if !collection.contains(table_id) {
            return Reduction::Rejected(Diagnostic::EmptyTargetTable(TableId::from(table_id)))
                .logged("remove table");
        }

        Reduction::Changed(collection.without_table(table_id)).logged("remove table")
    }

    /// Append one entry per parsed schedule fragment of `lecture`.
    pub fn add_from_lecture<P: ScheduleParser + ?Sized>(
        &self,
        collection: &TimetableCollection,
        table_id: &str,
        lecture: &Arc<Lecture>,
        parser: &P,
    ) -> Reduction {
        let Some(table) = collection.get(table_id) else {
            return Reduction::Rejected(Diagnostic::EmptyTargetTable(TableId::from(table_id)))
                .logged("add lecture");
        };

        let entries: Vec<ScheduleEntry> = parser
            .parse(&lecture.schedule)
            .into_iter()
            .map(|fragment| ScheduleEntry::from_fragment(fragment, Arc::clone(lecture)))
            .collect();

        if entries.is_empty() {
            log::info!("Lecture {} has no schedule to place", lecture.id);
            return Reduction::Unchanged;
        }

        let table = table.with_appended(entries);
        Reduction::Changed(collection.with_table(TableId::from(table_id), table))
            .logged("add lecture")
    }

    /// Remove every entry on `day` whose range includes `slot`.
    pub fn remove_at(
        &self,
        collection: &TimetableCollection,
        table_id: &str,
        day: &str,
        slot: u8,
    ) -> Reduction {
        let Some(table) = collection.get(table_id) else {
            return Reduction::Rejected(Diagnostic::EmptyTargetTable(TableId::from(table_id)))
                .logged("remove schedule");
        };

        match table.without(|entry| entry.occupies(day, slot)) {
            Some(table) => Reduction::Changed(collection.with_table(TableId::from(table_id), table))
                .logged("remove schedule"),
            None => Reduction::Unchanged,
        }
    }
}
