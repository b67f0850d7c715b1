//! Incremental reveal of filtered results.
//!
//! [`Paginator`] keeps the growing prefix window. [`VisibilityObserver`] tracks
//! the sentinel observer that grows it, so a callback from an observer that was
//! torn down cannot move a window it no longer belongs to.

use std::time::{Duration, Instant};

/// Window over a result list that only ever grows until it is reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    page: usize,
    page_size: usize,
    total: usize,
}

impl Paginator {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            total: 0,
        }
    }

    /// Start over at page 1 for a result list of `total` items.
    pub fn reset(&mut self, total: usize) {
        self.page = 1;
        self.total = total;
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// `ceil(total / page_size)`, never below 1.
    pub fn last_page(&self) -> usize {
        self.total.div_ceil(self.page_size).max(1)
    }

    /// Grow the window by one page. Returns false once the last page is shown.
    pub fn advance(&mut self) -> bool {
        if self.page >= self.last_page() {
            return false;
        }
        self.page += 1;
        true
    }

    pub fn visible_len(&self) -> usize {
        self.total.min(self.page.saturating_mul(self.page_size))
    }

    /// The visible prefix of `items`.
    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..self.visible_len().min(items.len())]
    }
}

/// Token naming one attachment of the sentinel observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObserverPhase {
    Disconnected,
    /// Attachment is waiting for the result list to settle.
    Pending {
        ticket: ObserverTicket,
        ready_at: Instant,
    },
    Observing {
        ticket: ObserverTicket,
    },
}

#[derive(Debug, Clone)]
pub struct VisibilityObserver {
    phase: ObserverPhase,
    delay: Duration,
    next_ticket: u64,
}

impl VisibilityObserver {
    pub fn new(delay: Duration) -> Self {
        Self {
            phase: ObserverPhase::Disconnected,
            delay,
            next_ticket: 0,
        }
    }

    pub fn phase(&self) -> ObserverPhase {
        self.phase
    }

    /// Tear down any current attachment and schedule a fresh one.
    pub fn schedule(&mut self, now: Instant) -> ObserverTicket {
        self.next_ticket += 1;
        let ticket = ObserverTicket(self.next_ticket);
        self.phase = ObserverPhase::Pending {
            ticket,
            ready_at: now + self.delay,
        };
        ticket
    }

    /// Attach a pending observer whose delay has elapsed. Returns the ticket
    /// that became active, if any.
    pub fn poll(&mut self, now: Instant) -> Option<ObserverTicket> {
        match self.phase {
            ObserverPhase::Pending { ticket, ready_at } if now >= ready_at => {
                self.phase = ObserverPhase::Observing { ticket };
                Some(ticket)
            }
            _ => None,
        }
    }

    /// Cancels a pending attachment too.
    pub fn disconnect(&mut self) {
        self.phase = ObserverPhase::Disconnected;
    }

    /// True only for the ticket of the attachment currently observing.
    pub fn accepts(&self, ticket: ObserverTicket) -> bool {
        matches!(self.phase, ObserverPhase::Observing { ticket: current } if current == ticket)
    }
}
