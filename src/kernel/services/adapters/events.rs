use crate::kernel::services::ports::{ClickEventSource, ListenerId};
use rustc_hash::FxHashSet;
use std::cell::{Cell, RefCell};

/// In-process click listener bookkeeping.
///
/// The host forwards clicks to whoever holds a registration; this only
/// tracks which registrations are live.
#[derive(Debug, Default)]
pub struct ClickListenerRegistry {
    next_id: Cell<u64>,
    active: RefCell<FxHashSet<ListenerId>>,
}

impl ClickListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_count(&self) -> usize {
        self.active.borrow().len()
    }

    pub fn is_active(&self, id: ListenerId) -> bool {
        self.active.borrow().contains(&id)
    }
}

impl ClickEventSource for ClickListenerRegistry {
    fn add_click_listener(&self) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.active.borrow_mut().insert(id);
        id
    }

    fn remove_click_listener(&self, id: ListenerId) {
        if !self.active.borrow_mut().remove(&id) {
            tracing::warn!(listener = id.0, "removing unknown click listener");
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/events.rs"]
mod tests;
