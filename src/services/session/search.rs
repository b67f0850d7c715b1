use std::sync::Arc;
use std::time::{Duration, Instant};

use super::planner::SharedParser;
use crate::models::filter::FilterCriteria;
use crate::models::lecture::{Catalog, Lecture};
use crate::models::settings::SearchConfig;
use crate::models::table::TableId;
use crate::services::filter::filter_lectures;
use crate::services::pagination::{ObserverTicket, Paginator, VisibilityObserver};

/// Table the search was opened for, optionally from a clicked grid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTarget {
    pub table_id: TableId,
    pub day: Option<String>,
    pub time: Option<u8>,
}

impl SearchTarget {
    pub fn table(table_id: impl Into<TableId>) -> Self {
        Self {
            table_id: table_id.into(),
            day: None,
            time: None,
        }
    }

    pub fn cell(table_id: impl Into<TableId>, day: impl Into<String>, time: u8) -> Self {
        Self {
            table_id: table_id.into(),
            day: Some(day.into()),
            time: Some(time),
        }
    }
}

/// Lecture search state: criteria, memoized results and the reveal window.
pub struct SearchSession {
    catalog: Catalog,
    parser: SharedParser,
    criteria: FilterCriteria,
    filtered: Arc<[Arc<Lecture>]>,
    paginator: Paginator,
    observer: VisibilityObserver,
    target: Option<SearchTarget>,
}

impl SearchSession {
    pub fn new(catalog: Catalog, parser: SharedParser, config: &SearchConfig) -> Self {
        let filtered: Arc<[Arc<Lecture>]> = catalog.lectures().to_vec().into();
        let mut paginator = Paginator::new(config.page_size);
        paginator.reset(filtered.len());

        Self {
            catalog,
            parser,
            criteria: FilterCriteria::default(),
            filtered,
            paginator,
            observer: VisibilityObserver::new(Duration::from_millis(config.observer_delay_ms)),
            target: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }

    pub fn target(&self) -> Option<&SearchTarget> {
        self.target.as_ref()
    }

    /// Open for `target`. Day and time criteria are set from the target cell
    /// (or cleared); the other criteria carry over from the last search.
    pub fn open(&mut self, target: SearchTarget, now: Instant) {
        let mut criteria = self.criteria.clone();
        criteria.days = target.day.iter().cloned().collect();
        criteria.times = target.time.into_iter().collect();

        log::debug!("Opening search for table {}", target.table_id);
        self.target = Some(target);

        if criteria != self.criteria {
            self.criteria = criteria;
            self.refilter();
        } else {
            self.paginator.reset(self.filtered.len());
        }
        self.observer.schedule(now);
    }

    /// Close and drop the sentinel observer, pending or not.
    pub fn close(&mut self) {
        self.target = None;
        self.observer.disconnect();
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn set_catalog(&mut self, catalog: Catalog, now: Instant) {
        self.catalog = catalog;
        self.refilter();
        self.reattach(now);
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn set_query(&mut self, query: impl Into<String>, now: Instant) -> bool {
        let query = query.into();
        self.update_criteria(now, |criteria| criteria.query = query)
    }

    pub fn set_credits(&mut self, credits: Option<u32>, now: Instant) -> bool {
        self.update_criteria(now, |criteria| criteria.credits = credits)
    }

    pub fn set_grades(&mut self, grades: impl IntoIterator<Item = u8>, now: Instant) -> bool {
        let grades = grades.into_iter().collect();
        self.update_criteria(now, |criteria| criteria.grades = grades)
    }

    pub fn set_days<S: Into<String>>(&mut self, days: impl IntoIterator<Item = S>, now: Instant) -> bool {
        let days = days.into_iter().map(Into::into).collect();
        self.update_criteria(now, |criteria| criteria.days = days)
    }

    pub fn set_times(&mut self, times: impl IntoIterator<Item = u8>, now: Instant) -> bool {
        let times = times.into_iter().collect();
        self.update_criteria(now, |criteria| criteria.times = times)
    }

    pub fn set_majors<S: Into<String>>(&mut self, majors: impl IntoIterator<Item = S>, now: Instant) -> bool {
        let majors = majors.into_iter().map(Into::into).collect();
        self.update_criteria(now, |criteria| criteria.majors = majors)
    }

    /// Replace all criteria at once.
    pub fn set_criteria(&mut self, criteria: FilterCriteria, now: Instant) -> bool {
        self.update_criteria(now, |current| *current = criteria)
    }

    fn update_criteria<F>(&mut self, now: Instant, change: F) -> bool
    where
        F: FnOnce(&mut FilterCriteria),
    {
        let mut next = self.criteria.clone();
        change(&mut next);
        if next == self.criteria {
            return false;
        }

        self.criteria = next;
        self.refilter();
        self.reattach(now);
        true
    }

    fn refilter(&mut self) {
        self.filtered = filter_lectures(self.catalog.lectures(), &self.criteria, &*self.parser).into();
        self.paginator.reset(self.filtered.len());
        log::debug!("Search matched {} lectures", self.filtered.len());
    }

    fn reattach(&mut self, now: Instant) {
        if self.is_open() {
            self.observer.schedule(now);
        }
    }

    /// Shared result list; the `Arc` changes only when the criteria do.
    pub fn filtered(&self) -> &Arc<[Arc<Lecture>]> {
        &self.filtered
    }

    pub fn result_count(&self) -> usize {
        self.filtered.len()
    }

    pub fn visible(&self) -> &[Arc<Lecture>] {
        self.paginator.visible(&self.filtered)
    }

    pub fn page(&self) -> usize {
        self.paginator.page()
    }

    pub fn last_page(&self) -> usize {
        self.paginator.last_page()
    }

    /// Majors offered by the catalog, for the majors filter options.
    pub fn majors(&self) -> Vec<String> {
        self.catalog.majors()
    }

    pub fn sorted_times(&self) -> Vec<u8> {
        self.criteria.sorted_times()
    }

    /// Attach the sentinel observer once its delay has passed.
    pub fn poll(&mut self, now: Instant) -> Option<ObserverTicket> {
        self.observer.poll(now)
    }

    /// Sentinel came into view. Callbacks from a detached observer are ignored.
    pub fn on_sentinel_visible(&mut self, ticket: ObserverTicket) -> bool {
        if !self.observer.accepts(ticket) {
            log::debug!("Ignoring sentinel callback from stale observer {:?}", ticket);
            return false;
        }
        self.paginator.advance()
    }

    /// Target table and catalog lecture for a user pick. `None` when the
    /// search is closed or the lecture is unknown.
    pub fn choose(&self, lecture_id: &str) -> Option<(TableId, Arc<Lecture>)> {
        let target = self.target.as_ref()?;
        let lecture = self.catalog.find(lecture_id)?;
        Some((target.table_id.clone(), Arc::clone(lecture)))
    }
}
