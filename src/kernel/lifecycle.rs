//! Mount state of the bridge.
//!
//! ```text
//! Detached --mount--> Attaching --widget_ready--> Attached
//!     ^                   |                           |
//!     +------unmount------+-----------unmount---------+
//! ```

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    #[default]
    Detached,
    /// Mounted, waiting for the widget to finish initializing.
    Attaching,
    Attached,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    Mount,
    WidgetReady,
    Unmount,
}

impl Lifecycle {
    pub fn label(self) -> &'static str {
        match self {
            Self::Detached => "detached",
            Self::Attaching => "attaching",
            Self::Attached => "attached",
        }
    }

    /// The state `event` leads to, or `None` if it is not valid here.
    pub fn next(self, event: LifecycleEvent) -> Option<Lifecycle> {
        match (self, event) {
            (Self::Detached, LifecycleEvent::Mount) => Some(Self::Attaching),
            (Self::Attaching, LifecycleEvent::WidgetReady) => Some(Self::Attached),
            (Self::Attaching | Self::Attached, LifecycleEvent::Unmount) => Some(Self::Detached),
            _ => None,
        }
    }

    pub fn is_mounted(self) -> bool {
        !matches!(self, Self::Detached)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/lifecycle.rs"]
mod tests;
