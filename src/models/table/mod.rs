// Table module
// Timetables and the collection of timetables, shared structurally

use indexmap::IndexMap;
use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

use crate::models::schedule::ScheduleEntry;

/// Key of the table created for a fresh session.
pub const INITIAL_TABLE_ID: &str = "schedule-1";

/// Unique key of one timetable within a collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TableId(String);

impl TableId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for TableId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TableId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for TableId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Ordered schedule entries of one timetable.
///
/// Cloning is cheap and keeps pointer identity, which consumers use as a
/// staleness check.
#[derive(Debug, Clone)]
pub struct TableState {
    entries: Arc<[Arc<ScheduleEntry>]>,
}

impl TableState {
    pub fn new(entries: Vec<ScheduleEntry>) -> Self {
        Self::from_shared(entries.into_iter().map(Arc::new).collect())
    }

    pub fn from_shared(entries: Vec<Arc<ScheduleEntry>>) -> Self {
        Self {
            entries: entries.into(),
        }
    }

    pub fn entries(&self) -> &[Arc<ScheduleEntry>] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&Arc<ScheduleEntry>> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn ptr_eq(&self, other: &TableState) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }

    /// New sequence with `index` swapped for `entry`; other slots keep their `Arc`.
    pub fn with_replaced(&self, index: usize, entry: ScheduleEntry) -> Self {
        let mut entries = self.entries.to_vec();
        if let Some(slot) = entries.get_mut(index) {
            *slot = Arc::new(entry);
        }
        Self::from_shared(entries)
    }

    pub fn with_appended(&self, extra: Vec<ScheduleEntry>) -> Self {
        let entries = self
            .entries
            .iter()
            .cloned()
            .chain(extra.into_iter().map(Arc::new))
            .collect();
        Self { entries }
    }

    /// Shallow per-entry copy: a new sequence holding the same entry `Arc`s.
    pub fn detached_copy(&self) -> Self {
        Self {
            entries: self.entries.iter().cloned().collect(),
        }
    }

    /// Sequence without the entries matching `remove`, or `None` when nothing matched.
    pub fn without<F>(&self, mut remove: F) -> Option<Self>
    where
        F: FnMut(&ScheduleEntry) -> bool,
    {
        let kept: Vec<Arc<ScheduleEntry>> = self
            .entries
            .iter()
            .filter(|entry| !remove(entry))
            .cloned()
            .collect();
        if kept.len() == self.entries.len() {
            return None;
        }
        Some(Self::from_shared(kept))
    }
}

impl Default for TableState {
    fn default() -> Self {
        Self::from_shared(Vec::new())
    }
}

impl PartialEq for TableState {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

/// Every timetable of a session, keyed by table id in insertion order.
///
/// Mutations build a new map; only the changed table's [`TableState`] is new,
/// every other table keeps its prior reference.
#[derive(Debug, Clone)]
pub struct TimetableCollection {
    tables: Arc<IndexMap<TableId, TableState>>,
}

impl TimetableCollection {
    pub fn new(tables: IndexMap<TableId, TableState>) -> Self {
        Self {
            tables: Arc::new(tables),
        }
    }

    /// Collection holding one empty table under [`INITIAL_TABLE_ID`].
    pub fn with_initial_table() -> Self {
        let mut tables = IndexMap::new();
        tables.insert(TableId::from(INITIAL_TABLE_ID), TableState::default());
        Self::new(tables)
    }

    pub fn get(&self, table_id: &str) -> Option<&TableState> {
        self.tables.get(table_id)
    }

    pub fn contains(&self, table_id: &str) -> bool {
        self.tables.contains_key(table_id)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn table_ids(&self) -> impl Iterator<Item = &TableId> {
        self.tables.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TableId, &TableState)> {
        self.tables.iter()
    }

    pub fn ptr_eq(&self, other: &TimetableCollection) -> bool {
        Arc::ptr_eq(&self.tables, &other.tables)
    }

    /// New collection with `table_id` set to `table`. Existing keys keep
    /// their position, new keys are appended.
    pub fn with_table(&self, table_id: TableId, table: TableState) -> Self {
        let mut tables = (*self.tables).clone();
        tables.insert(table_id, table);
        Self::new(tables)
    }

    /// New collection with `table_id` omitted. The current map is never edited.
    pub fn without_table(&self, table_id: &str) -> Self {
        let mut tables = (*self.tables).clone();
        tables.shift_remove(table_id);
        Self::new(tables)
    }
}

impl Default for TimetableCollection {
    fn default() -> Self {
        Self::with_initial_table()
    }
}

impl PartialEq for TimetableCollection {
    fn eq(&self, other: &Self) -> bool {
        self.tables == other.tables
    }
}
