//! Explicit state containers the host drives with input events.

mod planner;
mod search;

pub use planner::{PlannerSession, SharedParser};
pub use search::{SearchSession, SearchTarget};
