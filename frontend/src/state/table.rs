use crate::debounce::Debouncer;
use crate::mutation::{Notification, Notifier};
use crate::state::toast::use_notifier;
use crate::table::{
    FetchTicket, ListSource, QueryState, RefetchTrigger, Resolution, TableController,
    TableSnapshot, TableView,
};
use crate::utils::timer::{BrowserTimers, TimerScheduler};
use leptos::*;
use std::rc::Rc;
use std::time::Duration;

/// How a table reports a failed fetch besides its inline error panel.
#[derive(Clone)]
pub struct FailureReport {
    pub notifier: Rc<dyn Notifier>,
    /// Toast title, e.g. "Failed to load salary components".
    pub title: &'static str,
}

/// Publishes the controller's snapshot after every transition and drives
/// fetches on the browser event loop.
struct Driver<S: ListSource> {
    view: TableView<S>,
    snapshot: RwSignal<TableSnapshot<S::Record>>,
    failures: FailureReport,
}

impl<S: ListSource> Clone for Driver<S> {
    fn clone(&self) -> Self {
        Self {
            view: self.view.clone(),
            snapshot: self.snapshot,
            failures: self.failures.clone(),
        }
    }
}

impl<S: ListSource + 'static> Driver<S> {
    fn dispatch(
        &self,
        change: impl FnOnce(&mut TableController<S::Record>) -> Option<FetchTicket>,
    ) {
        let ticket = self.view.begin(change);
        self.snapshot.set(self.view.snapshot());
        let Some(ticket) = ticket else {
            return;
        };
        let driver = self.clone();
        spawn_local(async move {
            let resolution = driver.view.run(ticket).await;
            driver.snapshot.try_set(driver.view.snapshot());
            if let Resolution::Failed(message) = resolution {
                driver.failures.notifier.notify(
                    Notification::error(driver.failures.title).with_description(message),
                );
            }
        });
    }
}

/// Reactive handle on a server-paginated table.
pub struct TableHandle<S: ListSource> {
    driver: Driver<S>,
    search_input: RwSignal<String>,
    search: Debouncer<String>,
}

impl<S: ListSource> Clone for TableHandle<S> {
    fn clone(&self) -> Self {
        Self {
            driver: self.driver.clone(),
            search_input: self.search_input,
            search: self.search.clone(),
        }
    }
}

impl<S: ListSource + 'static> TableHandle<S> {
    pub fn new(
        source: S,
        query: QueryState,
        trigger: RefetchTrigger,
        scheduler: Rc<dyn TimerScheduler>,
        debounce: Duration,
        failures: FailureReport,
    ) -> Self {
        let view = TableView::new(source, query, trigger);
        let driver = Driver {
            snapshot: create_rw_signal(view.snapshot()),
            view,
            failures,
        };
        let settle_driver = driver.clone();
        let search = Debouncer::new(scheduler, debounce, move |term: String| {
            settle_driver.dispatch(|ctl| ctl.set_search(&term));
        });
        Self {
            driver,
            search_input: create_rw_signal(String::new()),
            search,
        }
    }

    pub fn snapshot(&self) -> Signal<TableSnapshot<S::Record>> {
        self.driver.snapshot.into()
    }

    /// What the user has typed, ahead of the debounced search term.
    pub fn search_input(&self) -> Signal<String> {
        self.search_input.into()
    }

    pub fn trigger(&self) -> RefetchTrigger {
        self.driver.view.trigger()
    }

    pub fn load(&self) {
        self.driver.dispatch(|ctl| Some(ctl.load()));
    }

    pub fn set_page(&self, index: usize) {
        self.driver.dispatch(|ctl| ctl.set_page(index));
    }

    pub fn next_page(&self) {
        self.driver.dispatch(|ctl| ctl.next_page());
    }

    pub fn previous_page(&self) {
        self.driver.dispatch(|ctl| ctl.previous_page());
    }

    pub fn set_page_size(&self, size: usize) {
        self.driver.dispatch(|ctl| ctl.set_page_size(size));
    }

    pub fn set_sort(&self, key: &str) {
        self.driver.dispatch(|ctl| Some(ctl.set_sort(key)));
    }

    pub fn on_search_input(&self, raw: String) {
        self.search_input.set(raw.clone());
        self.search.observe(raw);
    }

    pub fn refetch(&self) {
        self.driver.dispatch(|ctl| Some(ctl.refetch()));
    }

    /// Reloads if the shared trigger moved since the last fetch.
    pub fn sync_trigger(&self) {
        self.driver.dispatch(|ctl| ctl.sync_trigger());
    }

    pub fn teardown(&self) {
        self.search.teardown();
    }
}

/// Creates a table bound to the current reactive owner. The first page is
/// requested once `enabled` turns true, which lets callers hold the fetch
/// until the session's permissions are known. Failed fetches raise an error
/// toast titled `failure_title`. The search timer is cancelled on cleanup.
pub fn use_table<S: ListSource + 'static>(
    source: S,
    query: QueryState,
    trigger: RefetchTrigger,
    debounce: Duration,
    enabled: Signal<bool>,
    failure_title: &'static str,
) -> TableHandle<S> {
    let failures = FailureReport {
        notifier: use_notifier(),
        title: failure_title,
    };
    let table = TableHandle::new(
        source,
        query,
        trigger,
        Rc::new(BrowserTimers),
        debounce,
        failures,
    );
    let loader = table.clone();
    create_effect(move |loaded: Option<bool>| {
        if loaded == Some(true) {
            return true;
        }
        if enabled.get() {
            loader.load();
            return true;
        }
        false
    });
    let cleanup = table.clone();
    on_cleanup(move || cleanup.teardown());
    table
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::ApiError;
    use crate::mutation::testing::RecordingNotifier;
    use crate::mutation::NotificationKind;
    use crate::table::PageResult;
    use crate::test_support::clock::ManualScheduler;
    use std::cell::RefCell;

    #[derive(Clone, Default)]
    struct RecordingSource {
        requests: Rc<RefCell<Vec<QueryState>>>,
    }

    impl ListSource for RecordingSource {
        type Record = String;

        async fn fetch_page(&self, query: &QueryState) -> Result<PageResult<String>, ApiError> {
            self.requests.borrow_mut().push(query.clone());
            if query.search_term == "boom" {
                return Err(ApiError::server("Database unavailable"));
            }
            Ok(PageResult::new(vec![query.search_term.clone()], 1))
        }
    }

    fn failures(notifier: &Rc<RecordingNotifier>) -> FailureReport {
        FailureReport {
            notifier: notifier.clone(),
            title: "Failed to load salary components",
        }
    }

    async fn settle() {
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test]
    async fn typing_settles_into_a_single_search_request() {
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let runtime = create_runtime();
                let clock = ManualScheduler::new();
                let source = RecordingSource::default();
                let requests = source.requests.clone();
                let table = TableHandle::new(
                    source,
                    QueryState::new(10, "name"),
                    RefetchTrigger::new(),
                    Rc::new(clock.clone()),
                    Duration::from_millis(500),
                    failures(&Rc::new(RecordingNotifier::default())),
                );

                for raw in ["b", "ba", "basic"] {
                    table.on_search_input(raw.to_string());
                    clock.advance(Duration::from_millis(200));
                }
                assert_eq!(table.search_input().get_untracked(), "basic");
                assert!(requests.borrow().is_empty());

                clock.advance(Duration::from_millis(300));
                assert!(table.snapshot().get_untracked().state.is_loading());
                settle().await;

                assert_eq!(requests.borrow().len(), 1);
                assert_eq!(requests.borrow()[0].search_term, "basic");
                let snapshot = table.snapshot().get_untracked();
                assert_eq!(
                    snapshot.state.page().map(|page| page.records.clone()),
                    Some(vec!["basic".to_string()])
                );
                runtime.dispose();
            })
            .await;
    }

    #[tokio::test]
    async fn teardown_drops_unsettled_search() {
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let runtime = create_runtime();
                let clock = ManualScheduler::new();
                let source = RecordingSource::default();
                let requests = source.requests.clone();
                let table = TableHandle::new(
                    source,
                    QueryState::new(10, "name"),
                    RefetchTrigger::new(),
                    Rc::new(clock.clone()),
                    Duration::from_millis(500),
                    failures(&Rc::new(RecordingNotifier::default())),
                );

                table.on_search_input("hra".to_string());
                table.teardown();
                clock.advance(Duration::from_secs(1));
                settle().await;

                assert!(requests.borrow().is_empty());
                assert_eq!(clock.pending(), 0);
                runtime.dispose();
            })
            .await;
    }

    #[tokio::test]
    async fn mutation_bump_is_picked_up_by_sync() {
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let runtime = create_runtime();
                let source = RecordingSource::default();
                let requests = source.requests.clone();
                let trigger = RefetchTrigger::new();
                let table = TableHandle::new(
                    source,
                    QueryState::new(10, "name"),
                    trigger.clone(),
                    Rc::new(ManualScheduler::new()),
                    Duration::from_millis(500),
                    failures(&Rc::new(RecordingNotifier::default())),
                );

                table.load();
                settle().await;
                table.sync_trigger();
                settle().await;
                assert_eq!(requests.borrow().len(), 1);

                trigger.bump();
                table.sync_trigger();
                settle().await;
                assert_eq!(requests.borrow().len(), 2);
                runtime.dispose();
            })
            .await;
    }

    #[tokio::test]
    async fn failed_fetch_raises_one_error_toast() {
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let runtime = create_runtime();
                let clock = ManualScheduler::new();
                let notifier = Rc::new(RecordingNotifier::default());
                let table = TableHandle::new(
                    RecordingSource::default(),
                    QueryState::new(10, "name"),
                    RefetchTrigger::new(),
                    Rc::new(clock.clone()),
                    Duration::from_millis(500),
                    failures(&notifier),
                );

                table.load();
                settle().await;
                assert!(notifier.seen.borrow().is_empty());

                table.on_search_input("boom".to_string());
                clock.advance(Duration::from_millis(500));
                settle().await;

                let snapshot = table.snapshot().get_untracked();
                assert_eq!(snapshot.state.error(), Some("Database unavailable"));
                let seen = notifier.seen.borrow();
                assert_eq!(seen.len(), 1);
                assert_eq!(seen[0].kind, NotificationKind::Error);
                assert_eq!(seen[0].message, "Failed to load salary components");
                assert_eq!(seen[0].description.as_deref(), Some("Database unavailable"));
                drop(seen);
                runtime.dispose();
            })
            .await;
    }
}
