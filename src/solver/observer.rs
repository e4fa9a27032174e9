//! Search observers
//!
//! The solver reports every occupancy change to an observer so a renderer can
//! follow the search. Observers cannot influence the search itself.

use crate::core::Position;

/// Receives occupancy notifications at the board mutation points
pub trait SearchObserver {
    /// A cell was claimed by the current path
    fn on_occupy(&mut self, row: usize, col: usize);

    /// A cell was released on backtrack
    fn on_release(&mut self, row: usize, col: usize);
}

/// Observer that ignores everything; the solver's default
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {
    #[inline]
    fn on_occupy(&mut self, _row: usize, _col: usize) {}

    #[inline]
    fn on_release(&mut self, _row: usize, _col: usize) {}
}

impl<O: SearchObserver + ?Sized> SearchObserver for &mut O {
    #[inline]
    fn on_occupy(&mut self, row: usize, col: usize) {
        (**self).on_occupy(row, col);
    }

    #[inline]
    fn on_release(&mut self, row: usize, col: usize) {
        (**self).on_release(row, col);
    }
}

/// A single occupancy change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEvent {
    Occupy(Position),
    Release(Position),
}

impl SearchEvent {
    #[must_use]
    pub const fn position(self) -> Position {
        match self {
            Self::Occupy(pos) | Self::Release(pos) => pos,
        }
    }
}

/// Observer that records events, optionally capped
///
/// Searches on dense boards emit millions of events; the cap keeps memory
/// bounded for replay. Events past the cap are counted but not stored.
#[derive(Debug, Clone, Default)]
pub struct SearchTrace {
    events: Vec<SearchEvent>,
    limit: Option<usize>,
    dropped: usize,
}

impl SearchTrace {
    /// Record every event
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record at most `limit` events
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn events(&self) -> &[SearchEvent] {
        &self.events
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of events seen after the cap was reached
    #[must_use]
    pub const fn dropped(&self) -> usize {
        self.dropped
    }

    #[must_use]
    pub const fn is_truncated(&self) -> bool {
        self.dropped > 0
    }

    fn record(&mut self, event: SearchEvent) {
        if self.limit.is_some_and(|limit| self.events.len() >= limit) {
            self.dropped += 1;
        } else {
            self.events.push(event);
        }
    }
}

impl SearchObserver for SearchTrace {
    fn on_occupy(&mut self, row: usize, col: usize) {
        self.record(SearchEvent::Occupy((row, col)));
    }

    fn on_release(&mut self, row: usize, col: usize) {
        self.record(SearchEvent::Release((row, col)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_records_in_order() {
        let mut trace = SearchTrace::new();
        trace.on_occupy(0, 0);
        trace.on_occupy(0, 1);
        trace.on_release(0, 1);
        trace.on_release(0, 0);

        assert_eq!(
            trace.events(),
            &[
                SearchEvent::Occupy((0, 0)),
                SearchEvent::Occupy((0, 1)),
                SearchEvent::Release((0, 1)),
                SearchEvent::Release((0, 0)),
            ]
        );
        assert!(!trace.is_truncated());
    }

    #[test]
    fn trace_limit_counts_dropped() {
        let mut trace = SearchTrace::with_limit(2);
        trace.on_occupy(1, 1);
        trace.on_occupy(1, 2);
        trace.on_release(1, 2);
        trace.on_release(1, 1);

        assert_eq!(trace.len(), 2);
        assert_eq!(trace.dropped(), 2);
        assert!(trace.is_truncated());
    }

    #[test]
    fn forwarding_through_mut_ref() {
        fn notify<O: SearchObserver>(mut observer: O) {
            observer.on_occupy(2, 3);
        }

        let mut trace = SearchTrace::new();
        notify(&mut trace);
        assert_eq!(trace.events()[0].position(), (2, 3));
    }
}
