//! Typed outcomes of the timetable reducers.
//!
//! Every reducer hands back a [`Reduction`] instead of logging and returning the
//! old state, so callers can branch on what happened.

use thiserror::Error;

use crate::models::table::{TableId, TimetableCollection};

/// Why a reducer left the collection as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    #[error("malformed schedule reference: {0}")]
    MalformedReference(String),

    #[error("day {0:?} is not a recognized day label")]
    InvalidDayValue(String),

    #[error("day index {0} is outside the grid")]
    DayOutOfBounds(i64),

    #[error("time range {0:?} leaves the valid slot range")]
    TimeOutOfBounds(Vec<i64>),

    #[error("no table with id {0}")]
    EmptyTargetTable(TableId),
}

/// Result of one reducer invocation over a [`TimetableCollection`].
#[must_use]
#[derive(Debug, Clone)]
pub enum Reduction {
    /// A new collection; only the touched table has a new reference.
    Changed(TimetableCollection),
    /// Nothing to do, the current collection stands.
    Unchanged,
    /// The operation was refused; the current collection stands.
    Rejected(Diagnostic),
}

impl Reduction {
    /// Next collection. Anything but `Changed` hands back `current` itself,
    /// so pointer equality holds.
    pub fn apply(self, current: &TimetableCollection) -> TimetableCollection {
        match self {
            Reduction::Changed(next) => next,
            Reduction::Unchanged | Reduction::Rejected(_) => current.clone(),
        }
    }

    pub fn is_changed(&self) -> bool {
        matches!(self, Reduction::Changed(_))
    }

    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            Reduction::Rejected(diagnostic) => Some(diagnostic),
            _ => None,
        }
    }

    /// Log a rejection at `warn` and pass the reduction through.
    pub(crate) fn logged(self, operation: &str) -> Self {
        match &self {
            Reduction::Rejected(diagnostic) => log::warn!("{} rejected: {}", operation, diagnostic),
            Reduction::Unchanged => log::debug!("{} left the collection unchanged", operation),
            Reduction::Changed(_) => log::debug!("{} committed", operation),
        }
        self
    }
}
