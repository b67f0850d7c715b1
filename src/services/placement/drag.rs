use egui::{Pos2, Rect, Vec2};
use std::fmt;
use std::str::FromStr;

use super::coordinates::snap_transform;
use super::engine::PlacementEngine;
use crate::models::table::{TableId, TimetableCollection};
use crate::services::diagnostics::{Diagnostic, Reduction};

/// Names the schedule entry being dragged: a table and a position in it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DragIdentifier {
    pub table_id: TableId,
    pub index: usize,
}

impl DragIdentifier {
    pub fn new(table_id: impl Into<TableId>, index: usize) -> Self {
        Self {
            table_id: table_id.into(),
            index,
        }
    }

    /// String form handed to drag libraries, `"<table>:<index>"`.
    pub fn encode(&self) -> String {
        self.to_string()
    }

    /// Parse the string form. The index is taken after the last `:` so table
    /// ids may themselves contain colons.
    pub fn decode(raw: &str) -> Result<Self, Diagnostic> {
        let (table_id, index) = raw
            .rsplit_once(':')
            .ok_or_else(|| Diagnostic::MalformedReference(format!("{:?} has no index", raw)))?;

        if table_id.is_empty() {
            return Err(Diagnostic::MalformedReference(format!(
                "{:?} has no table id",
                raw
            )));
        }

        let index = index.parse::<usize>().map_err(|_| {
            Diagnostic::MalformedReference(format!("{:?} has a non-numeric index", raw))
        })?;

        Ok(Self::new(table_id, index))
    }
}

impl fmt::Display for DragIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.table_id, self.index)
    }
}

impl FromStr for DragIdentifier {
    type Err = Diagnostic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DragPhase {
    Idle,
    /// Pointer is down on an entry but has not travelled far enough to drag.
    Pressed {
        identifier: DragIdentifier,
        origin: Pos2,
    },
    Dragging {
        identifier: DragIdentifier,
        origin: Pos2,
        /// Last snapped transform; becomes the drag delta on release.
        transform: Vec2,
    },
}

/// State of the one drag a grid can have in flight.
#[derive(Clone, Debug)]
pub struct DragSession {
    phase: DragPhase,
    activation_distance: f32,
}

impl DragSession {
    pub fn new(activation_distance: f32) -> Self {
        Self {
            phase: DragPhase::Idle,
            activation_distance,
        }
    }

    pub fn phase(&self) -> &DragPhase {
        &self.phase
    }

    pub fn press(&mut self, identifier: DragIdentifier, pointer: Pos2) {
        if self.phase != DragPhase::Idle {
            log::debug!("Discarding unfinished drag before pressing {}", identifier);
        }
        self.phase = DragPhase::Pressed {
            identifier,
            origin: pointer,
        };
    }

    /// Feed a pointer position. Returns the snapped transform to render while
    /// dragging, or `None` when no drag is active yet.
    pub fn motion(
        &mut self,
        engine: &PlacementEngine,
        pointer: Pos2,
        container: Option<Rect>,
        dragged: Option<Rect>,
    ) -> Option<Vec2> {
        let (identifier, origin) = match &self.phase {
            DragPhase::Idle => return None,
            DragPhase::Pressed { identifier, origin } => {
                if (pointer - *origin).length() < self.activation_distance {
                    return None;
                }
                (identifier.clone(), *origin)
            }
            DragPhase::Dragging {
                identifier, origin, ..
            } => (identifier.clone(), *origin),
        };

        let transform = snap_transform(engine.grid(), pointer - origin, container, dragged);
        self.phase = DragPhase::Dragging {
            identifier,
            origin,
            transform,
        };
        Some(transform)
    }

    /// End the drag and commit its last snapped transform.
    pub fn release(
        &mut self,
        engine: &PlacementEngine,
        collection: &TimetableCollection,
    ) -> Reduction {
        match std::mem::replace(&mut self.phase, DragPhase::Idle) {
            DragPhase::Dragging {
                identifier,
                transform,
                ..
            } => engine.commit_drag(collection, &identifier, transform),
            DragPhase::Pressed { .. } | DragPhase::Idle => Reduction::Unchanged,
        }
    }

    pub fn cancel(&mut self) {
        self.phase = DragPhase::Idle;
    }

    pub fn active_identifier(&self) -> Option<&DragIdentifier> {
        match &self.phase {
            DragPhase::Dragging { identifier, .. } => Some(identifier),
            _ => None,
        }
    }

    /// True while an entry of `table_id` is being dragged.
    pub fn is_dragging_table(&self, table_id: &str) -> bool {
        self.active_identifier()
            .is_some_and(|identifier| identifier.table_id.as_str() == table_id)
    }
}
