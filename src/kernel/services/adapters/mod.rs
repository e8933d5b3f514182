//! Service adapters: concrete collaborators for hosts and tests.

pub mod clock;
pub mod config;
pub mod events;
pub mod layout;
pub mod paths;
pub mod plugins;
pub mod recording;

pub use clock::{ManualClock, SystemClock};
pub use config::{ConfigError, ConfigService};
pub use events::ClickListenerRegistry;
pub use layout::SharedLayout;
pub use paths::{ensure_log_dir, get_log_dir, LOG_DIR_ENV};
pub use plugins::OptionsPlugin;
pub use recording::{RecordingPlacer, RecordingWidget, WidgetCall, CHAR_WIDTH_PX};
