use std::cell::Cell;
use std::rc::Rc;

/// Shared counter whose increments ask a table to reload its current query.
#[derive(Debug, Clone, Default)]
pub struct RefetchTrigger {
    count: Rc<Cell<u64>>,
}

impl RefetchTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bump(&self) -> u64 {
        let next = self.count.get().wrapping_add(1);
        self.count.set(next);
        next
    }

    pub fn current(&self) -> u64 {
        self.count.get()
    }
}
