//! Scripted bridge sessions against the recording widget.
//!
//! A script is a JSON document:
//!
//! ```json
//! {
//!   "width": 640,
//!   "props": { "document": { "id": "a", "value": "" } },
//!   "steps": [
//!     { "op": "mount" },
//!     { "op": "ready" },
//!     { "op": "update", "props": { "document": { "id": "a", "value": "foo:" } } },
//!     { "op": "advance", "ms": 100 },
//!     { "op": "unmount" }
//!   ]
//! }
//! ```

use crate::kernel::services::adapters::{
    ClickListenerRegistry, ManualClock, OptionsPlugin, RecordingPlacer, RecordingWidget,
    SharedLayout, WidgetCall,
};
use crate::kernel::services::ports::{BridgeConfig, EditorPlugin};
use crate::kernel::{
    BridgeCallbacks, BridgeProps, Collaborators, LoadCallback, MarkerLineUpdate, ReconcileResult,
    StateBridge,
};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::path::{Path, PathBuf};
use std::rc::Rc;

#[derive(Debug, Clone, Deserialize)]
pub struct ReplayScript {
    #[serde(default)]
    pub config: Option<BridgeConfig>,
    #[serde(default)]
    pub props: BridgeProps,
    /// Initial container width.
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub plugins: Vec<OptionsPlugin>,
    pub steps: Vec<ReplayStep>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ReplayStep {
    Mount,
    Ready,
    Update { props: BridgeProps },
    /// The user types; the buffer becomes `text`.
    Edit { text: String },
    Click,
    /// Changes the container width without telling anyone.
    SetWidth { width: Option<f64> },
    /// Changes the container width and signals it directly.
    Resize { width: f64 },
    Advance { ms: u64 },
    Unmount,
}

#[derive(Debug, Default, Serialize)]
pub struct ReplayReport {
    pub calls: Vec<WidgetCall>,
    pub cycles: Vec<ReconcileResult>,
    pub changes: Vec<String>,
    pub line_updates: Vec<MarkerLineUpdate>,
    /// Documents the widget reported as loaded, in order.
    pub loads: Vec<String>,
    pub final_text: String,
    pub listeners_live: usize,
}

#[derive(Debug)]
pub enum ReplayError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplayError::Io { path, source } => {
                write!(f, "Cannot read script {}: {}", path.display(), source)
            }
            ReplayError::Parse(e) => write!(f, "Invalid script: {}", e),
        }
    }
}

impl std::error::Error for ReplayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReplayError::Io { source, .. } => Some(source),
            ReplayError::Parse(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for ReplayError {
    fn from(e: serde_json::Error) -> Self {
        ReplayError::Parse(e)
    }
}

pub fn parse_script(data: &str) -> Result<ReplayScript, ReplayError> {
    Ok(serde_json::from_str(data)?)
}

pub fn load_script(path: &Path) -> Result<ReplayScript, ReplayError> {
    let data = std::fs::read_to_string(path).map_err(|source| ReplayError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_script(&data)
}

/// Runs `script` to completion. `config` overrides the script's own config.
pub fn run(script: ReplayScript, config: Option<BridgeConfig>) -> ReplayReport {
    let config = config.or(script.config).unwrap_or_default();

    let clock = Rc::new(ManualClock::new());
    let events = Rc::new(ClickListenerRegistry::new());
    let layout = SharedLayout::new(script.width);
    let widget = RecordingWidget::new();
    widget.set_layout_width(script.width);

    let plugins = script
        .plugins
        .into_iter()
        .map(|p| Box::new(p) as Box<dyn EditorPlugin<RecordingWidget>>)
        .collect();

    let collab = Collaborators {
        placer: Box::new(RecordingPlacer),
        plugins,
        layout: Box::new(layout.clone()),
        events: events.clone(),
        clock: clock.clone(),
    };

    let changes = Rc::new(RefCell::new(Vec::new()));
    let line_updates = Rc::new(RefCell::new(Vec::new()));
    let loads = Rc::new(RefCell::new(Vec::new()));

    let mut bridge = StateBridge::new(config, script.props, collab);
    bridge.set_callbacks(BridgeCallbacks {
        on_change: {
            let changes = changes.clone();
            Rc::new(move |text: &str| changes.borrow_mut().push(text.to_string()))
        },
        on_marker_line_update: {
            let line_updates = line_updates.clone();
            Rc::new(move |update: MarkerLineUpdate| line_updates.borrow_mut().push(update))
        },
        on_load: Some({
            let loads = loads.clone();
            let on_load: LoadCallback<RecordingWidget> =
                Rc::new(move |_: &mut RecordingWidget, props: &BridgeProps| {
                    loads.borrow_mut().push(props.document.id.to_string())
                });
            on_load
        }),
    });

    let mut cycles = Vec::new();
    for (index, step) in script.steps.into_iter().enumerate() {
        tracing::debug!(index, ?step, "replay step");
        match step {
            ReplayStep::Mount => bridge.mount(),
            ReplayStep::Ready => bridge.widget_ready(widget.clone()),
            ReplayStep::Update { props } => cycles.push(bridge.update(props)),
            ReplayStep::Edit { text } => {
                let text = widget.user_edit(&text);
                bridge.content_changed(&text);
            }
            ReplayStep::Click => bridge.on_click(),
            ReplayStep::SetWidth { width } => {
                layout.set_width(width);
                widget.set_layout_width(width);
            }
            ReplayStep::Resize { width } => {
                layout.set_width(Some(width));
                widget.set_layout_width(Some(width));
                bridge.container_resized(width);
            }
            ReplayStep::Advance { ms } => {
                clock.advance_ms(ms);
                bridge.tick();
            }
            ReplayStep::Unmount => bridge.unmount(),
        }
    }
    drop(bridge);

    let changes = changes.take();
    let line_updates = line_updates.take();
    let loads = loads.take();
    ReplayReport {
        calls: widget.take_calls(),
        cycles,
        changes,
        line_updates,
        loads,
        final_text: widget.text(),
        listeners_live: events.active_count(),
    }
}

#[cfg(test)]
#[path = "../tests/unit/replay.rs"]
mod tests;
