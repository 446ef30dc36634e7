use super::controller::{FetchTicket, Resolution, TableController, TableSnapshot};
use super::query::QueryState;
use super::refetch::RefetchTrigger;
use super::source::ListSource;
use std::cell::RefCell;
use std::rc::Rc;

/// Connects a [`TableController`] to a [`ListSource`]. Each operation
/// updates the controller synchronously, then awaits the fetch it issued.
/// The controller is never borrowed across an await point, so overlapping
/// operations interleave freely and the controller drops stale results.
pub struct TableView<S: ListSource> {
    controller: Rc<RefCell<TableController<S::Record>>>,
    source: Rc<S>,
}

impl<S: ListSource> Clone for TableView<S> {
    fn clone(&self) -> Self {
        Self {
            controller: self.controller.clone(),
            source: self.source.clone(),
        }
    }
}

impl<S: ListSource> TableView<S> {
    pub fn new(source: S, query: QueryState, trigger: RefetchTrigger) -> Self {
        Self {
            controller: Rc::new(RefCell::new(TableController::new(query, trigger))),
            source: Rc::new(source),
        }
    }

    pub fn snapshot(&self) -> TableSnapshot<S::Record> {
        self.controller.borrow().snapshot()
    }

    pub fn trigger(&self) -> RefetchTrigger {
        self.controller.borrow().trigger().clone()
    }

    /// Runs `change` against the controller and returns the ticket it issued.
    pub fn begin(
        &self,
        change: impl FnOnce(&mut TableController<S::Record>) -> Option<FetchTicket>,
    ) -> Option<FetchTicket> {
        change(&mut self.controller.borrow_mut())
    }

    /// Fetches `ticket` and applies the result. A clamped page is fetched
    /// again at its new index; the index only ever moves down, so this ends.
    pub async fn run(&self, mut ticket: FetchTicket) -> Resolution {
        loop {
            let result = self.source.fetch_page(&ticket.query).await;
            let resolution = self.controller.borrow_mut().resolve(&ticket, result);
            match resolution {
                Resolution::Clamped(next) => ticket = next,
                other => return other,
            }
        }
    }

    async fn drive(&self, ticket: Option<FetchTicket>) -> Option<Resolution> {
        match ticket {
            Some(ticket) => Some(self.run(ticket).await),
            None => None,
        }
    }

    pub async fn load(&self) -> Option<Resolution> {
        let ticket = self.begin(|ctl| Some(ctl.load()));
        self.drive(ticket).await
    }

    pub async fn set_page(&self, index: usize) -> Option<Resolution> {
        let ticket = self.begin(|ctl| ctl.set_page(index));
        self.drive(ticket).await
    }

    pub async fn set_page_size(&self, size: usize) -> Option<Resolution> {
        let ticket = self.begin(|ctl| ctl.set_page_size(size));
        self.drive(ticket).await
    }

    pub async fn set_sort(&self, key: &str) -> Option<Resolution> {
        let ticket = self.begin(|ctl| Some(ctl.set_sort(key)));
        self.drive(ticket).await
    }

    pub async fn set_search(&self, term: &str) -> Option<Resolution> {
        let ticket = self.begin(|ctl| ctl.set_search(term));
        self.drive(ticket).await
    }

    pub async fn refetch(&self) -> Option<Resolution> {
        let ticket = self.begin(|ctl| Some(ctl.refetch()));
        self.drive(ticket).await
    }

    pub async fn sync_trigger(&self) -> Option<Resolution> {
        let ticket = self.begin(|ctl| ctl.sync_trigger());
        self.drive(ticket).await
    }
}
