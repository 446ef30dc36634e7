use crate::mutation::{Notification, Notifier};
use crate::utils::timer::{BrowserTimers, TimerHandle, TimerScheduler};
use leptos::*;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};
use std::time::Duration;

pub const TOAST_LIFETIME: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// Visible notifications, each dismissed automatically after
/// [`TOAST_LIFETIME`] or earlier by the user.
#[derive(Clone)]
pub struct ToastQueue {
    toasts: RwSignal<Vec<Toast>>,
    inner: Rc<Inner>,
}

struct Inner {
    scheduler: Rc<dyn TimerScheduler>,
    lifetime: Duration,
    next_id: Cell<u64>,
    timers: RefCell<HashMap<u64, TimerHandle>>,
    // Handles of timers that already fired, released on the next push.
    spent: RefCell<Vec<TimerHandle>>,
}

impl ToastQueue {
    pub fn new(scheduler: Rc<dyn TimerScheduler>, lifetime: Duration) -> Self {
        Self {
            toasts: create_rw_signal(Vec::new()),
            inner: Rc::new(Inner {
                scheduler,
                lifetime,
                next_id: Cell::new(0),
                timers: RefCell::new(HashMap::new()),
                spent: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn toasts(&self) -> Signal<Vec<Toast>> {
        self.toasts.into()
    }

    pub fn push(&self, notification: Notification) -> u64 {
        self.inner.spent.borrow_mut().clear();

        let id = self.inner.next_id.get().wrapping_add(1);
        self.inner.next_id.set(id);
        self.toasts.update(|toasts| toasts.push(Toast { id, notification }));

        let weak: Weak<Inner> = Rc::downgrade(&self.inner);
        let toasts = self.toasts;
        let handle = self.inner.scheduler.schedule(
            self.inner.lifetime,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    let fired = inner.timers.borrow_mut().remove(&id);
                    inner.spent.borrow_mut().extend(fired);
                }
                toasts.try_update(|toasts| toasts.retain(|toast| toast.id != id));
            }),
        );
        self.inner.timers.borrow_mut().insert(id, handle);
        id
    }

    pub fn dismiss(&self, id: u64) {
        let timer = self.inner.timers.borrow_mut().remove(&id);
        if let Some(timer) = timer {
            timer.cancel();
        }
        self.toasts.update(|toasts| toasts.retain(|toast| toast.id != id));
    }

    /// Cancels every pending dismiss timer.
    pub fn teardown(&self) {
        let timers: Vec<_> = self.inner.timers.borrow_mut().drain().collect();
        for (_, timer) in timers {
            timer.cancel();
        }
        self.inner.spent.borrow_mut().clear();
    }
}

impl Notifier for ToastQueue {
    fn notify(&self, notification: Notification) {
        log::debug!("toast {:?}: {}", notification.kind, notification.message);
        self.push(notification);
    }
}

/// Installs the app-wide toast queue backed by browser timers.
pub fn provide_toasts() -> ToastQueue {
    let queue = ToastQueue::new(Rc::new(BrowserTimers), TOAST_LIFETIME);
    provide_context(queue.clone());
    let for_cleanup = queue.clone();
    on_cleanup(move || for_cleanup.teardown());
    queue
}

pub fn use_toasts() -> ToastQueue {
    use_context::<ToastQueue>()
        .unwrap_or_else(|| ToastQueue::new(Rc::new(BrowserTimers), TOAST_LIFETIME))
}

pub fn use_notifier() -> Rc<dyn Notifier> {
    Rc::new(use_toasts())
}
