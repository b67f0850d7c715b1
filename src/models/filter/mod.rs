// Filter module
// Search criteria applied to the lecture catalog

use std::collections::BTreeSet;

/// Current set of search predicates. Empty sets and an empty query place no restriction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against lecture id or title.
    pub query: String,
    pub grades: BTreeSet<u8>,
    pub days: BTreeSet<String>,
    pub times: BTreeSet<u8>,
    pub majors: BTreeSet<String>,
    /// Matched as a prefix of the lecture's credits string. `Some(0)` places
    /// no restriction, same as `None`.
    pub credits: Option<u32>,
}

impl FilterCriteria {
    pub fn builder() -> FilterCriteriaBuilder {
        FilterCriteriaBuilder::default()
    }

    /// True when no predicate restricts the catalog.
    pub fn is_unrestricted(&self) -> bool {
        self.query.is_empty()
            && self.grades.is_empty()
            && self.days.is_empty()
            && self.times.is_empty()
            && self.majors.is_empty()
            && self.credit_prefix().is_none()
    }

    /// Credits value to match on, with zero treated as unset.
    pub fn credit_prefix(&self) -> Option<u32> {
        self.credits.filter(|&credits| credits != 0)
    }

    /// Day or time predicates need the parsed schedule.
    pub fn needs_schedule(&self) -> bool {
        !self.days.is_empty() || !self.times.is_empty()
    }

    /// Selected time slots in ascending order.
    pub fn sorted_times(&self) -> Vec<u8> {
        self.times.iter().copied().collect()
    }
}

/// Builder for criteria with only some predicates set
#[derive(Debug, Default)]
pub struct FilterCriteriaBuilder {
    criteria: FilterCriteria,
}

impl FilterCriteriaBuilder {
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.criteria.query = query.into();
        self
    }

    pub fn grades(mut self, grades: impl IntoIterator<Item = u8>) -> Self {
        self.criteria.grades = grades.into_iter().collect();
        self
    }

    pub fn days<S: Into<String>>(mut self, days: impl IntoIterator<Item = S>) -> Self {
        self.criteria.days = days.into_iter().map(Into::into).collect();
        self
    }

    pub fn times(mut self, times: impl IntoIterator<Item = u8>) -> Self {
        self.criteria.times = times.into_iter().collect();
        self
    }

    pub fn majors<S: Into<String>>(mut self, majors: impl IntoIterator<Item = S>) -> Self {
        self.criteria.majors = majors.into_iter().map(Into::into).collect();
        self
    }

    pub fn credits(mut self, credits: u32) -> Self {
        self.criteria.credits = Some(credits);
        self
    }

    pub fn build(self) -> FilterCriteria {
        self.criteria
    }
}
