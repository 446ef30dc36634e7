use std::time::Duration;

/// Source of one-shot timers. The browser implementation sits on
/// `setTimeout`; tests drive a manual clock instead.
pub trait TimerScheduler {
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerHandle;
}

/// Cancels its timer when dropped.
#[must_use = "dropping the handle cancels the timer"]
pub struct TimerHandle {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl TimerHandle {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for TimerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerHandle")
            .field("armed", &self.cancel.is_some())
            .finish()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimers;

impl TimerScheduler for BrowserTimers {
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerHandle {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        let timeout = gloo_timers::callback::Timeout::new(millis, callback);
        // Dropping a gloo `Timeout` clears the pending browser timer.
        TimerHandle::new(move || drop(timeout))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn handle_runs_cancel_exactly_once() {
        let count = Rc::new(Cell::new(0));
        let counter = count.clone();
        let handle = TimerHandle::new(move || counter.set(counter.get() + 1));
        handle.cancel();
        assert_eq!(count.get(), 1);

        let counter = count.clone();
        drop(TimerHandle::new(move || counter.set(counter.get() + 1)));
        assert_eq!(count.get(), 2);
    }
}
