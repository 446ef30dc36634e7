//! Debounced text input.
//!
//! Each [`Debouncer::observe`] call restarts the quiet window. The value is
//! only handed to the settle callback once the window passes with no further
//! input. The pending timer is cancelled before a new one is armed, on
//! [`Debouncer::teardown`], and when the last handle is dropped.

use crate::utils::timer::{TimerHandle, TimerScheduler};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

pub struct Debouncer<T> {
    state: Rc<RefCell<DebounceState<T>>>,
    scheduler: Rc<dyn TimerScheduler>,
    delay: Duration,
    on_settle: Rc<dyn Fn(T)>,
}

struct DebounceState<T> {
    timer: Option<TimerHandle>,
    // Handle of a timer that already fired. Released on the next `observe`
    // rather than from inside its own callback.
    spent: Option<TimerHandle>,
    latest: Option<T>,
    settled: Option<T>,
    torn_down: bool,
}

impl<T> Clone for Debouncer<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            scheduler: self.scheduler.clone(),
            delay: self.delay,
            on_settle: self.on_settle.clone(),
        }
    }
}

impl<T: Clone + 'static> Debouncer<T> {
    pub fn new(
        scheduler: Rc<dyn TimerScheduler>,
        delay: Duration,
        on_settle: impl Fn(T) + 'static,
    ) -> Self {
        Self {
            state: Rc::new(RefCell::new(DebounceState {
                timer: None,
                spent: None,
                latest: None,
                settled: None,
                torn_down: false,
            })),
            scheduler,
            delay,
            on_settle: Rc::new(on_settle),
        }
    }

    pub fn observe(&self, value: T) {
        let (previous, spent) = {
            let mut state = self.state.borrow_mut();
            if state.torn_down {
                return;
            }
            state.latest = Some(value);
            (state.timer.take(), state.spent.take())
        };
        if let Some(timer) = previous {
            timer.cancel();
        }
        drop(spent);

        let weak = Rc::downgrade(&self.state);
        let on_settle = self.on_settle.clone();
        let handle = self.scheduler.schedule(
            self.delay,
            Box::new(move || {
                let Some(state) = weak.upgrade() else {
                    return;
                };
                let value = {
                    let mut state = state.borrow_mut();
                    if state.torn_down {
                        return;
                    }
                    state.spent = state.timer.take();
                    let value = state.latest.take();
                    if let Some(value) = &value {
                        state.settled = Some(value.clone());
                    }
                    value
                };
                if let Some(value) = value {
                    on_settle(value);
                }
            }),
        );
        self.state.borrow_mut().timer = Some(handle);
    }

    /// Last value that made it through the quiet window.
    pub fn settled(&self) -> Option<T> {
        self.state.borrow().settled.clone()
    }

    pub fn is_pending(&self) -> bool {
        self.state.borrow().timer.is_some()
    }

    /// Cancels any pending timer; later `observe` calls are ignored.
    pub fn teardown(&self) {
        let timer = {
            let mut state = self.state.borrow_mut();
            state.torn_down = true;
            state.latest = None;
            state.timer.take()
        };
        if let Some(timer) = timer {
            timer.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::clock::ManualScheduler;
    use std::cell::RefCell;

    const QUIET: Duration = Duration::from_millis(500);

    fn recording_debouncer(
        clock: &ManualScheduler,
    ) -> (Debouncer<String>, Rc<RefCell<Vec<(Duration, String)>>>) {
        let emitted = Rc::new(RefCell::new(Vec::new()));
        let sink = emitted.clone();
        let timer_clock = clock.clone();
        let debouncer = Debouncer::new(
            Rc::new(clock.clone()),
            QUIET,
            move |value: String| sink.borrow_mut().push((timer_clock.now(), value)),
        );
        (debouncer, emitted)
    }

    #[test]
    fn burst_of_input_emits_only_the_last_value_once() {
        let clock = ManualScheduler::new();
        let (debouncer, emitted) = recording_debouncer(&clock);

        debouncer.observe("h".to_string());
        clock.advance(Duration::from_millis(100));
        debouncer.observe("ho".to_string());
        clock.advance(Duration::from_millis(300));
        debouncer.observe("hou".to_string());
        clock.advance(Duration::from_millis(499));
        assert!(emitted.borrow().is_empty());

        clock.advance(Duration::from_millis(1));
        assert_eq!(
            emitted.borrow().as_slice(),
            &[(Duration::from_millis(900), "hou".to_string())]
        );
        assert_eq!(debouncer.settled().as_deref(), Some("hou"));

        clock.advance(Duration::from_secs(5));
        assert_eq!(emitted.borrow().len(), 1);
    }

    #[test]
    fn previous_timer_is_cancelled_before_rescheduling() {
        let clock = ManualScheduler::new();
        let (debouncer, _emitted) = recording_debouncer(&clock);

        debouncer.observe("a".to_string());
        debouncer.observe("ab".to_string());
        debouncer.observe("abc".to_string());

        assert_eq!(clock.scheduled_total(), 3);
        assert_eq!(clock.pending(), 1);
        assert!(debouncer.is_pending());
    }

    #[test]
    fn separate_quiet_windows_emit_each_value() {
        let clock = ManualScheduler::new();
        let (debouncer, emitted) = recording_debouncer(&clock);

        debouncer.observe("basic".to_string());
        clock.advance(QUIET);
        debouncer.observe("hra".to_string());
        clock.advance(QUIET);

        let values: Vec<String> = emitted.borrow().iter().map(|(_, v)| v.clone()).collect();
        assert_eq!(values, vec!["basic".to_string(), "hra".to_string()]);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn teardown_prevents_late_emission() {
        let clock = ManualScheduler::new();
        let (debouncer, emitted) = recording_debouncer(&clock);

        debouncer.observe("pending".to_string());
        debouncer.teardown();
        assert_eq!(clock.pending(), 0);

        clock.advance(Duration::from_secs(1));
        debouncer.observe("ignored".to_string());
        clock.advance(Duration::from_secs(1));
        assert!(emitted.borrow().is_empty());
    }

    #[test]
    fn dropping_every_handle_cancels_the_timer() {
        let clock = ManualScheduler::new();
        let (debouncer, emitted) = recording_debouncer(&clock);

        debouncer.observe("gone".to_string());
        drop(debouncer);
        assert_eq!(clock.pending(), 0);

        clock.advance(Duration::from_secs(1));
        assert!(emitted.borrow().is_empty());
    }
}
