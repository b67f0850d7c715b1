use egui::{Pos2, Rect, Vec2};
use std::sync::Arc;
use std::time::Instant;

use super::search::{SearchSession, SearchTarget};
use crate::models::lecture::Catalog;
use crate::models::settings::PlannerConfig;
use crate::models::table::{TableId, TimetableCollection};
use crate::services::diagnostics::{Diagnostic, Reduction};
use crate::services::placement::{DragIdentifier, DragSession, PlacementEngine};
use crate::services::tables::TableManager;
use crate::utils::schedule_parser::{DescriptorParser, ScheduleParser};

/// Parser shared by the search filter and the table manager.
pub type SharedParser = Arc<dyn ScheduleParser + Send + Sync>;

/// Single source of truth for a planning session.
///
/// The collection is only ever replaced through [`commit`](Self::commit), so
/// comparing references is a valid staleness check for consumers.
pub struct PlannerSession {
    collection: TimetableCollection,
    tables: TableManager,
    placement: PlacementEngine,
    drag: DragSession,
    search: SearchSession,
    parser: SharedParser,
}

impl PlannerSession {
    pub fn new(config: &PlannerConfig, catalog: Catalog) -> Self {
        Self::with_parser(config, catalog, Arc::new(DescriptorParser))
    }

    pub fn with_parser(config: &PlannerConfig, catalog: Catalog, parser: SharedParser) -> Self {
        Self {
            collection: TimetableCollection::with_initial_table(),
            tables: TableManager::new(),
            placement: PlacementEngine::new(config.grid.clone()),
            drag: DragSession::new(config.grid.activation_distance),
            search: SearchSession::new(catalog, Arc::clone(&parser), &config.search),
            parser,
        }
    }

    pub fn collection(&self) -> &TimetableCollection {
        &self.collection
    }

    pub fn search(&self) -> &SearchSession {
        &self.search
    }

    pub fn search_mut(&mut self) -> &mut SearchSession {
        &mut self.search
    }

    pub fn drag(&self) -> &DragSession {
        &self.drag
    }

    pub fn placement(&self) -> &PlacementEngine {
        &self.placement
    }

    /// Apply a reducer result. `Ok(true)` when the collection was replaced.
    pub fn commit(&mut self, reduction: Reduction) -> Result<bool, Diagnostic> {
        match reduction {
            Reduction::Changed(next) => {
                self.collection = next;
                Ok(true)
            }
            Reduction::Unchanged => Ok(false),
            Reduction::Rejected(diagnostic) => Err(diagnostic),
        }
    }

    /// False when only one table is left.
    pub fn can_remove_table(&self) -> bool {
        self.collection.len() > 1
    }

    /// Duplicate a table and return the new table's id.
    pub fn duplicate_table(&mut self, table_id: &str) -> Result<TableId, Diagnostic> {
        let reduction = self.tables.duplicate(&self.collection, table_id);
        self.commit(reduction)?;
        self.collection
            .table_ids()
            .last()
            .cloned()
            .ok_or_else(|| Diagnostic::EmptyTargetTable(TableId::from(table_id)))
    }

    pub fn remove_table(&mut self, table_id: &str) -> Result<bool, Diagnostic> {
        if !self.can_remove_table() {
            log::warn!("Refusing to remove {}: it is the last table", table_id);
            return Ok(false);
        }
        let reduction = self.tables.remove(&self.collection, table_id);
        self.commit(reduction)
    }

    pub fn remove_at(&mut self, table_id: &str, day: &str, slot: u8) -> Result<bool, Diagnostic> {
        let reduction = self.tables.remove_at(&self.collection, table_id, day, slot);
        self.commit(reduction)
    }

    pub fn open_search(&mut self, target: SearchTarget, now: Instant) -> Result<(), Diagnostic> {
        if !self.collection.contains(target.table_id.as_str()) {
            return Err(Diagnostic::EmptyTargetTable(target.table_id));
        }
        self.search.open(target, now);
        Ok(())
    }

    pub fn close_search(&mut self) {
        self.search.close();
    }

    /// Add the picked lecture to the search's target table and close the search.
    pub fn add_lecture(&mut self, lecture_id: &str) -> Result<bool, Diagnostic> {
        let Some((table_id, lecture)) = self.search.choose(lecture_id) else {
            if self.search.is_open() {
                return Err(Diagnostic::MalformedReference(format!(
                    "lecture {} is not in the catalog",
                    lecture_id
                )));
            }
            log::debug!("Ignoring pick of {} with no search open", lecture_id);
            return Ok(false);
        };

        let reduction = self.tables.add_from_lecture(
            &self.collection,
            table_id.as_str(),
            &lecture,
            &*self.parser,
        );
        let changed = self.commit(reduction)?;
        self.search.close();
        Ok(changed)
    }

    pub fn press_entry(&mut self, identifier: DragIdentifier, pointer: Pos2) {
        self.drag.press(identifier, pointer);
    }

    pub fn drag_motion(&mut self, pointer: Pos2, container: Option<Rect>, dragged: Option<Rect>) -> Option<Vec2> {
        self.drag.motion(&self.placement, pointer, container, dragged)
    }

    pub fn release_drag(&mut self) -> Result<bool, Diagnostic> {
        let reduction = self.drag.release(&self.placement, &self.collection);
        self.commit(reduction)
    }

    pub fn cancel_drag(&mut self) {
        self.drag.cancel();
    }
}
