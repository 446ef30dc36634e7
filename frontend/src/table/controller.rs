//! Table state machine.
//!
//! ```text
//! Idle ──┐
//! Loaded ├─ query change / trigger bump ─▶ Loading ─ ok ─▶ Loaded
//! Errored┘                                    └──── err ─▶ Errored
//! ```
//!
//! Every transition into `Loading` hands out a [`FetchTicket`] tagged with a
//! sequence number. [`TableController::resolve`] only applies the result of
//! the newest ticket, so a slow response for an older query can never
//! overwrite a newer one. The controller does no I/O itself.

use super::query::{PageResult, QueryState};
use super::refetch::RefetchTrigger;
use crate::api::ApiError;

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<R> {
    Idle,
    Loading,
    Loaded(PageResult<R>),
    Errored(String),
}

impl<R> ViewState<R> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn page(&self) -> Option<&PageResult<R>> {
        match self {
            ViewState::Loaded(page) => Some(page),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Errored(message) => Some(message),
            _ => None,
        }
    }
}

/// A request the caller must execute and report back through
/// [`TableController::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub query: QueryState,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    /// The latest fetch failed; carries the message shown inline.
    Failed(String),
    Stale,
    /// The requested page no longer exists, e.g. after deleting the last
    /// row of the last page. The caller runs the returned ticket for the
    /// new last page.
    Clamped(FetchTicket),
}

/// Read-only copy of a controller, cheap enough to hand to views.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSnapshot<R> {
    pub query: QueryState,
    pub state: ViewState<R>,
}

impl<R> TableSnapshot<R> {
    pub fn has_previous_page(&self) -> bool {
        self.query.page_index > 0
    }

    pub fn has_next_page(&self) -> bool {
        self.state
            .page()
            .map(|page| self.query.page_index + 1 < page.total_pages)
            .unwrap_or(false)
    }

    pub fn total_pages(&self) -> Option<usize> {
        self.state.page().map(|page| page.total_pages)
    }

    /// Serial number of the `index`-th row on the current page, counted
    /// across all pages.
    pub fn row_number(&self, index: usize) -> usize {
        self.query.page_index * self.query.page_size + index + 1
    }

    pub fn sort_indicator(&self, key: &str) -> Option<&'static str> {
        (self.query.sort_key == key).then(|| self.query.sort_direction.indicator())
    }
}

pub struct TableController<R> {
    query: QueryState,
    state: ViewState<R>,
    next_seq: u64,
    in_flight: Option<u64>,
    trigger: RefetchTrigger,
    seen_trigger: u64,
}

impl<R: Clone> TableController<R> {
    pub fn new(query: QueryState, trigger: RefetchTrigger) -> Self {
        let seen_trigger = trigger.current();
        Self {
            query,
            state: ViewState::Idle,
            next_seq: 0,
            in_flight: None,
            trigger,
            seen_trigger,
        }
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn state(&self) -> &ViewState<R> {
        &self.state
    }

    pub fn trigger(&self) -> &RefetchTrigger {
        &self.trigger
    }

    pub fn snapshot(&self) -> TableSnapshot<R> {
        TableSnapshot {
            query: self.query.clone(),
            state: self.state.clone(),
        }
    }

    /// First load. Later loads come from query changes or the trigger.
    pub fn load(&mut self) -> FetchTicket {
        self.issue()
    }

    pub fn set_page(&mut self, index: usize) -> Option<FetchTicket> {
        if self.query.page_index == index {
            return None;
        }
        self.query.page_index = index;
        Some(self.issue())
    }

    pub fn next_page(&mut self) -> Option<FetchTicket> {
        if !self.snapshot_has_next() {
            return None;
        }
        self.set_page(self.query.page_index + 1)
    }

    pub fn previous_page(&mut self) -> Option<FetchTicket> {
        let index = self.query.page_index.checked_sub(1)?;
        self.set_page(index)
    }

    /// Changes the page size and returns to the first page.
    pub fn set_page_size(&mut self, size: usize) -> Option<FetchTicket> {
        let size = size.max(1);
        if self.query.page_size == size && self.query.page_index == 0 {
            return None;
        }
        self.query.page_size = size;
        self.query.page_index = 0;
        Some(self.issue())
    }

    /// Re-selecting the current key flips the direction; any other key
    /// starts ascending.
    pub fn set_sort(&mut self, key: &str) -> FetchTicket {
        if self.query.sort_key == key {
            self.query.sort_direction = self.query.sort_direction.toggled();
        } else {
            self.query.sort_key = key.to_string();
            self.query.sort_direction = Default::default();
        }
        self.issue()
    }

    /// Applies an already debounced search term.
    pub fn set_search(&mut self, term: &str) -> Option<FetchTicket> {
        if self.query.search_term == term {
            return None;
        }
        self.query.search_term = term.to_string();
        Some(self.issue())
    }

    /// Reloads the current query without changing it.
    pub fn refetch(&mut self) -> FetchTicket {
        self.trigger.bump();
        self.seen_trigger = self.trigger.current();
        self.issue()
    }

    /// Picks up trigger increments made elsewhere, e.g. by a mutation.
    pub fn sync_trigger(&mut self) -> Option<FetchTicket> {
        let current = self.trigger.current();
        if current == self.seen_trigger {
            return None;
        }
        self.seen_trigger = current;
        Some(self.issue())
    }

    pub fn resolve(
        &mut self,
        ticket: &FetchTicket,
        result: Result<PageResult<R>, ApiError>,
    ) -> Resolution {
        if self.in_flight != Some(ticket.seq) {
            log::debug!(
                "discarding stale page response #{} (latest is {:?})",
                ticket.seq,
                self.in_flight
            );
            return Resolution::Stale;
        }
        self.in_flight = None;
        match result {
            Ok(page) if self.is_past_last_page(&page) => {
                log::debug!(
                    "page {} is past the last page {}, stepping back",
                    self.query.page_number(),
                    page.total_pages
                );
                self.query.page_index = page.total_pages - 1;
                Resolution::Clamped(self.issue())
            }
            Ok(page) => {
                self.state = ViewState::Loaded(page);
                Resolution::Applied
            }
            Err(error) => {
                log::warn!("page fetch #{} failed: {}", ticket.seq, error);
                let message = error.user_message();
                self.state = ViewState::Errored(message.clone());
                Resolution::Failed(message)
            }
        }
    }

    fn is_past_last_page(&self, page: &PageResult<R>) -> bool {
        page.is_empty() && page.total_pages > 0 && self.query.page_index >= page.total_pages
    }

    fn snapshot_has_next(&self) -> bool {
        self.state
            .page()
            .map(|page| self.query.page_index + 1 < page.total_pages)
            .unwrap_or(false)
    }

    fn issue(&mut self) -> FetchTicket {
        self.next_seq += 1;
        self.in_flight = Some(self.next_seq);
        self.state = ViewState::Loading;
        log::debug!(
            "fetch #{} page={} size={} sort={} {} search={:?}",
            self.next_seq,
            self.query.page_number(),
            self.query.page_size,
            self.query.sort_key,
            self.query.sort_direction.as_str(),
            self.query.search()
        );
        FetchTicket {
            seq: self.next_seq,
            query: self.query.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::GENERIC_ERROR_MESSAGE;
    use crate::table::query::SortDirection;

    fn controller() -> TableController<&'static str> {
        TableController::new(QueryState::new(10, "name"), RefetchTrigger::new())
    }

    fn loaded(ctl: &mut TableController<&'static str>, records: Vec<&'static str>, pages: usize) {
        let ticket = ctl.load();
        ctl.resolve(&ticket, Ok(PageResult::new(records, pages)));
    }

    #[test]
    fn starts_idle_with_default_query() {
        let ctl = controller();
        assert_eq!(ctl.state(), &ViewState::Idle);
        assert_eq!(ctl.query(), &QueryState::new(10, "name"));
    }

    #[test]
    fn load_then_success_moves_to_loaded() {
        let mut ctl = controller();
        let ticket = ctl.load();
        assert!(ctl.state().is_loading());
        assert_eq!(ticket.query.page_index, 0);

        let outcome = ctl.resolve(&ticket, Ok(PageResult::new(vec!["basic"], 1)));
        assert_eq!(outcome, Resolution::Applied);
        assert_eq!(ctl.state().page().map(|p| p.records.clone()), Some(vec!["basic"]));
    }

    #[test]
    fn failure_discards_previous_page() {
        let mut ctl = controller();
        loaded(&mut ctl, vec!["basic"], 1);

        let ticket = ctl.refetch();
        let outcome = ctl.resolve(&ticket, Err(ApiError::server("Database unavailable")));
        assert_eq!(outcome, Resolution::Failed("Database unavailable".into()));
        assert_eq!(ctl.state(), &ViewState::Errored("Database unavailable".into()));
        assert!(ctl.state().page().is_none());

        let ticket = ctl.refetch();
        ctl.resolve(&ticket, Ok(PageResult::new(vec!["hra"], 1)));
        assert!(ctl.state().error().is_none());
    }

    #[test]
    fn transport_failure_shows_generic_message() {
        let mut ctl = controller();
        let ticket = ctl.load();
        let outcome = ctl.resolve(
            &ticket,
            Err(ApiError::network(
                "Request failed: error sending request for url (http://127.0.0.1:1/api/payroll/salary-components?page=1)",
            )),
        );
        assert_eq!(outcome, Resolution::Failed(GENERIC_ERROR_MESSAGE.into()));
        assert_eq!(ctl.state().error(), Some(GENERIC_ERROR_MESSAGE));
    }

    #[test]
    fn stale_failure_is_not_reported() {
        let mut ctl = controller();
        let first = ctl.set_page(1).unwrap();
        let second = ctl.set_page(2).unwrap();
        assert_eq!(
            ctl.resolve(&first, Err(ApiError::server("Database unavailable"))),
            Resolution::Stale
        );
        assert_eq!(
            ctl.resolve(&second, Ok(PageResult::new(vec!["page-3"], 3))),
            Resolution::Applied
        );
        assert!(ctl.state().error().is_none());
    }

    #[test]
    fn empty_page_past_the_end_steps_back_to_last_page() {
        let mut ctl = controller();
        let ticket = ctl.set_page(2).unwrap();
        ctl.resolve(&ticket, Ok(PageResult::new(vec!["only-row"], 3)));

        // The only row on page 3 was deleted; the server now has two pages.
        ctl.trigger().bump();
        let ticket = ctl.sync_trigger().unwrap();
        let outcome = ctl.resolve(&ticket, Ok(PageResult::new(vec![], 2)));
        let Resolution::Clamped(retry) = outcome else {
            panic!("expected a clamped retry, got {:?}", outcome);
        };
        assert_eq!(retry.query.page_index, 1);
        assert!(ctl.state().is_loading());

        assert_eq!(
            ctl.resolve(&retry, Ok(PageResult::new(vec!["x"], 2))),
            Resolution::Applied
        );
        assert!(!ctl.snapshot().has_next_page());
    }

    #[test]
    fn empty_table_is_not_clamped() {
        let mut ctl = controller();
        let ticket = ctl.load();
        assert_eq!(
            ctl.resolve(&ticket, Ok(PageResult::new(vec![], 0))),
            Resolution::Applied
        );
        let ticket = ctl.set_page(1).unwrap();
        assert_eq!(
            ctl.resolve(&ticket, Ok(PageResult::new(vec!["a"], 1))),
            Resolution::Applied
        );
    }

    #[test]
    fn last_value_per_field_wins_and_each_change_issues_one_request() {
        let mut ctl = controller();
        let mut tickets = Vec::new();
        tickets.extend(ctl.set_page(1));
        tickets.push(ctl.set_sort("type"));
        tickets.extend(ctl.set_search("allow"));
        tickets.extend(ctl.set_page(2));
        tickets.extend(ctl.set_search("allowance"));

        assert_eq!(tickets.len(), 5);
        let last = tickets.last().unwrap();
        assert_eq!(&last.query, ctl.query());
        assert_eq!(ctl.query().page_index, 2);
        assert_eq!(ctl.query().sort_key, "type");
        assert_eq!(ctl.query().search_term, "allowance");
    }

    #[test]
    fn unchanged_values_issue_no_request() {
        let mut ctl = controller();
        assert!(ctl.set_page(0).is_none());
        assert!(ctl.set_search("").is_none());
        assert!(ctl.set_page_size(10).is_none());
        assert!(ctl.previous_page().is_none());
        assert_eq!(ctl.state(), &ViewState::Idle);
    }

    #[test]
    fn sort_toggles_on_same_key_and_resets_on_new_key() {
        let mut ctl = controller();
        ctl.set_sort("name");
        assert_eq!(ctl.query().sort_direction, SortDirection::Desc);
        ctl.set_sort("name");
        assert_eq!(ctl.query().sort_direction, SortDirection::Asc);

        ctl.set_sort("name");
        ctl.set_sort("type");
        assert_eq!(ctl.query().sort_key, "type");
        assert_eq!(ctl.query().sort_direction, SortDirection::Asc);
    }

    #[test]
    fn page_size_change_resets_page() {
        let mut ctl = controller();
        ctl.set_page(4);
        let ticket = ctl.set_page_size(25).unwrap();
        assert_eq!(ticket.query.page_index, 0);
        assert_eq!(ticket.query.page_size, 25);
    }

    #[test]
    fn stale_response_is_discarded_in_either_arrival_order() {
        for late_first in [true, false] {
            let mut ctl = controller();
            let first = ctl.set_page(1).unwrap();
            let second = ctl.set_page(2).unwrap();

            let stale = Ok(PageResult::new(vec!["page-2"], 5));
            let fresh = Ok(PageResult::new(vec!["page-3"], 5));
            if late_first {
                assert_eq!(ctl.resolve(&second, fresh), Resolution::Applied);
                assert_eq!(ctl.resolve(&first, stale), Resolution::Stale);
            } else {
                assert_eq!(ctl.resolve(&first, stale), Resolution::Stale);
                assert!(ctl.state().is_loading());
                assert_eq!(ctl.resolve(&second, fresh), Resolution::Applied);
            }
            assert_eq!(
                ctl.state().page().map(|p| p.records.clone()),
                Some(vec!["page-3"])
            );
        }
    }

    #[test]
    fn external_trigger_bump_is_picked_up_once() {
        let trigger = RefetchTrigger::new();
        let mut ctl: TableController<&str> =
            TableController::new(QueryState::new(10, "name"), trigger.clone());
        assert!(ctl.sync_trigger().is_none());

        trigger.bump();
        let ticket = ctl.sync_trigger().expect("bump should refetch");
        assert_eq!(&ticket.query, ctl.query());
        assert!(ctl.sync_trigger().is_none());
    }

    #[test]
    fn refetch_keeps_query_and_bumps_trigger() {
        let mut ctl = controller();
        ctl.set_page(3);
        let before = ctl.query().clone();
        let ticket = ctl.refetch();
        assert_eq!(ticket.query, before);
        assert_eq!(ctl.trigger().current(), 1);
        assert!(ctl.sync_trigger().is_none());
    }

    #[test]
    fn last_page_reports_no_further_pages() {
        let mut ctl = controller();
        let ticket = ctl.set_page(2).unwrap();
        assert_eq!(ticket.query.page_number(), 3);
        ctl.resolve(&ticket, Ok(PageResult::new(vec!["a", "b", "c", "d", "e"], 3)));

        let snapshot = ctl.snapshot();
        assert!(!snapshot.has_next_page());
        assert!(snapshot.has_previous_page());
        assert!(ctl.next_page().is_none());
        assert_eq!(snapshot.row_number(0), 21);
    }

    #[test]
    fn next_page_requires_loaded_page_with_room() {
        let mut ctl = controller();
        assert!(ctl.next_page().is_none());
        loaded(&mut ctl, vec!["a"], 2);
        let ticket = ctl.next_page().unwrap();
        assert_eq!(ticket.query.page_index, 1);
    }

    #[test]
    fn sort_indicator_marks_only_the_active_column() {
        let mut ctl = controller();
        ctl.set_sort("name");
        let snapshot = ctl.snapshot();
        assert_eq!(snapshot.sort_indicator("name"), Some(" ▼"));
        assert_eq!(snapshot.sort_indicator("type"), None);
    }
}
