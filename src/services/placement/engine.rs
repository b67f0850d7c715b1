use egui::Vec2;

use super::coordinates::cell_delta;
use super::drag::DragIdentifier;
use crate::models::schedule::is_valid_slot;
use crate::models::settings::GridConfig;
use crate::models::table::TimetableCollection;
use crate::services::diagnostics::{Diagnostic, Reduction};

/// Turns a finished drag into a validated day/time move of one entry.
#[derive(Debug, Clone)]
pub struct PlacementEngine {
    grid: GridConfig,
}

impl PlacementEngine {
    pub fn new(grid: GridConfig) -> Self {
        Self { grid }
    }

    pub fn grid(&self) -> &GridConfig {
        &self.grid
    }

    /// Move the entry named by `identifier` by the cells `delta` crosses.
    ///
    /// Only the target table and the moved entry get new references. No
    /// overlap check is made against other entries.
    pub fn commit_drag(
        &self,
        collection: &TimetableCollection,
        identifier: &DragIdentifier,
        delta: Vec2,
    ) -> Reduction {
        self.place(collection, identifier, delta)
            .logged("drag commit")
    }

    /// Same as [`commit_drag`](Self::commit_drag) for an identifier still in
    /// its string form from the drag library.
    pub fn commit_encoded(
        &self,
        collection: &TimetableCollection,
        raw_identifier: &str,
        delta: Vec2,
    ) -> Reduction {
        if delta == Vec2::ZERO {
            return Reduction::Unchanged;
        }

        match DragIdentifier::decode(raw_identifier) {
            Ok(identifier) => self.commit_drag(collection, &identifier, delta),
            Err(diagnostic) => Reduction::Rejected(diagnostic).logged("drag commit"),
        }
    }

    fn place(
        &self,
        collection: &TimetableCollection,
        identifier: &DragIdentifier,
        delta: Vec2,
    ) -> Reduction {
        if delta == Vec2::ZERO {
            return Reduction::Unchanged;
        }

        let Some(table) = collection.get(identifier.table_id.as_str()) else {
            return Reduction::Rejected(Diagnostic::MalformedReference(format!(
                "table {} does not exist",
                identifier.table_id
            )));
        };

        let Some(entry) = table.get(identifier.index) else {
            return Reduction::Rejected(Diagnostic::MalformedReference(format!(
                "table {} has no schedule at index {}",
                identifier.table_id, identifier.index
            )));
        };

        let Some(current_day) = self.grid.day_index(&entry.day) else {
            return Reduction::Rejected(Diagnostic::InvalidDayValue(entry.day.clone()));
        };

        let (move_days, move_slots) = cell_delta(&self.grid, delta);
        if move_days == 0 && move_slots == 0 {
            return Reduction::Unchanged;
        }

        let new_day_index = (current_day as i64).saturating_add(move_days);
        if new_day_index < 0 || new_day_index >= self.grid.day_count() as i64 {
            return Reduction::Rejected(Diagnostic::DayOutOfBounds(new_day_index));
        }

        let new_range: Vec<i64> = entry
            .range
            .iter()
            .map(|&slot| i64::from(slot).saturating_add(move_slots))
            .collect();
        if !new_range.iter().all(|&slot| is_valid_slot(slot)) {
            return Reduction::Rejected(Diagnostic::TimeOutOfBounds(new_range));
        }

        let day = self.grid.days[new_day_index as usize].clone();
        let range = new_range.into_iter().map(|slot| slot as u8).collect();
        let moved = entry.moved_to(day, range);

        let table = table.with_replaced(identifier.index, moved);
        Reduction::Changed(collection.with_table(identifier.table_id.clone(), table))
    }
}
