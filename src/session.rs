//! Search-session state around a [`GroupAdder`].
//!
//! A session owns the group list and the consumption cursor for one search.
//! The search collaborator calls [`FeedSession::on_results`] every time a
//! page arrives (always with the full result list seen so far) and
//! [`FeedSession::on_loading_finished`] when a fetch settles, which tells it
//! whether to request the next page.
//!
//! The cursor only advances past results that actually landed in a group.
//! Results that could not fill the next shape stay pending and are packed by
//! a later call, either once enough results arrive or at end of stream.
//!
//! ```text
//! begin_search ─→ on_results(page 1) ─→ on_loading_finished ─→ FetchMore
//!                 on_results(page 2) ─→ on_loading_finished ─→ Full | Done
//! ```

use tracing::info;

use crate::grouping::{GroupAdder, MaxGroups};
use crate::types::{GroupList, placed_items};

/// Group limit for search result feeds that load sequentially.
pub const DEFAULT_SEARCH_MAX_GROUPS: usize = 10;
/// Group limit for the short rails on the home screen.
pub const HOME_RAIL_MAX_GROUPS: usize = 3;

/// What the search collaborator should do after a fetch settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextStep {
    /// The source has no more pages.
    Done,
    /// A limited feed is below its group limit; fetch the next page now.
    FetchMore,
    /// A limited feed has reached its group limit.
    Full,
    /// An unlimited feed waits for the user to scroll.
    Idle,
}

#[derive(Debug, Clone)]
pub struct FeedSession<A, T> {
    adder: A,
    groups: GroupList<T>,
    consumed: usize,
}

impl<A: GroupAdder, T: Clone> FeedSession<A, T> {
    pub fn new(adder: A) -> Self {
        Self {
            adder,
            groups: Vec::new(),
            consumed: 0,
        }
    }

    /// Drop all groups and rewind the cursor for a new keyword, filter, or
    /// category.
    pub fn begin_search(&mut self) {
        self.groups.clear();
        self.consumed = 0;
    }

    /// Pack newly arrived results. `results` is the whole list seen so far in
    /// this search, not just the latest page.
    pub fn on_results(&mut self, results: &[T], end_reached: bool) -> &GroupList<T> {
        let groups = std::mem::take(&mut self.groups);
        self.groups = self
            .adder
            .add_groups(results, self.consumed, end_reached, groups);
        self.consumed = placed_items(&self.groups);
        info!(
            results = results.len(),
            groups = self.groups.len(),
            placed = self.consumed,
            end_reached,
            "results packed"
        );
        &self.groups
    }

    /// Decide the next fetch once loading settles.
    ///
    /// A limited feed keeps fetching while it is below its limit, even before
    /// the first group has formed, and reports `Full` at the limit.
    pub fn on_loading_finished(&self, end_reached: bool) -> NextStep {
        if end_reached {
            return NextStep::Done;
        }
        match self.adder.max_groups() {
            MaxGroups::Unlimited => NextStep::Idle,
            limit if limit.allows_another(self.groups.len()) => NextStep::FetchMore,
            MaxGroups::Limit(_) => NextStep::Full,
        }
    }

    pub fn groups(&self) -> &GroupList<T> {
        &self.groups
    }

    pub fn into_groups(self) -> GroupList<T> {
        self.groups
    }

    /// Number of leading results already placed in groups.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Results from `results` that are not yet in any group.
    pub fn pending<'a>(&self, results: &'a [T]) -> &'a [T] {
        results.get(self.consumed..).unwrap_or(&[])
    }

    pub fn has_results(&self) -> bool {
        !self.groups.is_empty()
    }
}

/// Progress report from [`run_feed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedEvent {
    PageArrived {
        page: usize,
        results: usize,
        groups: usize,
        placed: usize,
        end_reached: bool,
    },
    Stopped(NextStep),
}

/// Drive a session over an in-memory result set served `page_size` results
/// at a time, following the session's [`NextStep`] decisions.
///
/// An [`NextStep::Idle`] feed is treated as if the user kept scrolling, so
/// unlimited feeds are paged to the end. Returns the last step taken.
pub fn run_feed<A, T, F>(
    session: &mut FeedSession<A, T>,
    results: &[T],
    page_size: usize,
    mut on_event: F,
) -> NextStep
where
    A: GroupAdder,
    T: Clone,
    F: FnMut(&FeedEvent),
{
    let page_size = page_size.max(1);
    let mut seen = 0;
    let mut page = 0;

    loop {
        seen = (seen + page_size).min(results.len());
        page += 1;
        let end_reached = seen == results.len();
        let groups = session.on_results(&results[..seen], end_reached);
        on_event(&FeedEvent::PageArrived {
            page,
            results: seen,
            groups: groups.len(),
            placed: placed_items(groups),
            end_reached,
        });

        match session.on_loading_finished(end_reached) {
            NextStep::FetchMore | NextStep::Idle => continue,
            step => {
                on_event(&FeedEvent::Stopped(step));
                return step;
            }
        }
    }
}
