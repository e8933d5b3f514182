//! Headless reconciliation core (props -> widget mutations).

pub mod annotations;
pub mod bridge;
pub mod lifecycle;
pub mod markers;
pub mod model;
pub mod options;
pub mod resize;
pub mod services;
pub mod timer;
pub mod undo;

pub use bridge::{
    BridgeCallbacks, ChangeCallback, Collaborators, LoadCallback, ReconcileResult, StateBridge,
};
pub use lifecycle::{Lifecycle, LifecycleEvent};
pub use markers::MarkerSync;
pub use model::{
    Annotation, BridgeProps, Document, EditorOptions, ErrorAnnotation, GoToLine, LineRange,
    Marker, MarkerLineUpdate, MarkerMap, Severity,
};
pub use resize::ResizeCoordinator;
pub use timer::{TimerKey, TimerQueue};
pub use undo::should_reset_undo;
