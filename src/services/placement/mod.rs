//! Grid placement: pointer drags snapped to cells and committed as
//! day/time moves of a single schedule entry.

mod coordinates;
mod drag;
mod engine;

pub use coordinates::{cell_delta, snap_transform};
pub use drag::{DragIdentifier, DragPhase, DragSession};
pub use engine::PlacementEngine;
