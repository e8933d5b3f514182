use std::fmt;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Process-wide click listener registration.
pub trait ClickEventSource {
    fn add_click_listener(&self) -> ListenerId;

    fn remove_click_listener(&self, id: ListenerId);
}

/// A held click listener. Dropping it removes the listener.
pub struct ClickSubscription {
    source: Rc<dyn ClickEventSource>,
    id: ListenerId,
}

impl ClickSubscription {
    pub fn acquire(source: Rc<dyn ClickEventSource>) -> Self {
        let id = source.add_click_listener();
        tracing::debug!(listener = id.0, "click listener acquired");
        Self { source, id }
    }

    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl Drop for ClickSubscription {
    fn drop(&mut self) {
        self.source.remove_click_listener(self.id);
        tracing::debug!(listener = self.id.0, "click listener released");
    }
}

impl fmt::Debug for ClickSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClickSubscription")
            .field("id", &self.id)
            .finish()
    }
}
