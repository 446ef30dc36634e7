use crate::utils::timer::{TimerHandle, TimerScheduler};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

/// Deterministic timer source for host tests. Nothing fires until
/// [`ManualScheduler::advance`] moves the clock past a timer's deadline.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    inner: Rc<Inner>,
}

#[derive(Default)]
struct Inner {
    now: Cell<Duration>,
    timers: RefCell<Vec<Scheduled>>,
    scheduled: Cell<usize>,
}

struct Scheduled {
    due: Duration,
    cancelled: Rc<Cell<bool>>,
    callback: Box<dyn FnOnce()>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.inner.now.get()
    }

    /// Timers that are scheduled, not yet fired and not cancelled.
    pub fn pending(&self) -> usize {
        self.inner
            .timers
            .borrow()
            .iter()
            .filter(|timer| !timer.cancelled.get())
            .count()
    }

    /// Total number of timers ever scheduled.
    pub fn scheduled_total(&self) -> usize {
        self.inner.scheduled.get()
    }

    pub fn advance(&self, by: Duration) {
        let target = self.inner.now.get() + by;
        loop {
            let next = {
                let mut timers = self.inner.timers.borrow_mut();
                timers.retain(|timer| !timer.cancelled.get());
                let due_index = timers
                    .iter()
                    .enumerate()
                    .filter(|(_, timer)| timer.due <= target)
                    .min_by_key(|(_, timer)| timer.due)
                    .map(|(index, _)| index);
                due_index.map(|index| timers.remove(index))
            };
            match next {
                Some(timer) => {
                    self.inner.now.set(timer.due);
                    timer.cancelled.set(true);
                    (timer.callback)();
                }
                None => break,
            }
        }
        self.inner.now.set(target);
    }
}

impl TimerScheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerHandle {
        let cancelled = Rc::new(Cell::new(false));
        self.inner.timers.borrow_mut().push(Scheduled {
            due: self.inner.now.get() + delay,
            cancelled: cancelled.clone(),
            callback,
        });
        self.inner.scheduled.set(self.inner.scheduled.get() + 1);
        TimerHandle::new(move || cancelled.set(true))
    }
}
