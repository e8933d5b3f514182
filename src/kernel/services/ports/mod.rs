//! Service ports: collaborator contracts the bridge drives.

pub mod clock;
pub mod config;
pub mod events;
pub mod layout;
pub mod placer;
pub mod plugins;
pub mod widget;

pub use clock::Clock;
pub use config::BridgeConfig;
pub use events::{ClickEventSource, ClickSubscription, ListenerId};
pub use layout::LayoutProbe;
pub use placer::{LineUpdateCallback, MarkerDisposer, MarkerPlacer};
pub use plugins::{run_plugins, EditorPlugin, PluginContext};
pub use widget::EditorWidget;
