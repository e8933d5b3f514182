use crate::kernel::model::EditorOptions;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;

pub const DEFAULT_CONTAINER_ID: &str = "editor-wrapper";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Delay between a click and the width re-measure.
    pub resize_settle_ms: u64,
    /// Delay between a committed cycle and the undo history reset.
    pub undo_reset_delay_ms: u64,
    pub container_id: String,
    /// Applied once at attach, before the props options.
    pub widget_defaults: EditorOptions,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            resize_settle_ms: 40,
            undo_reset_delay_ms: 100,
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            widget_defaults: default_widget_options(),
        }
    }
}

impl BridgeConfig {
    pub fn resize_settle(&self) -> Duration {
        Duration::from_millis(self.resize_settle_ms)
    }

    pub fn undo_reset_delay(&self) -> Duration {
        Duration::from_millis(self.undo_reset_delay_ms)
    }
}

fn default_widget_options() -> EditorOptions {
    EditorOptions::new()
        .with("mode", "yaml")
        .with("theme", "tomorrow_night_eighties")
        .with("tabSize", 2)
        .with("fontSize", 14)
        .with("useSoftTabs", true)
        .with("useWrapMode", true)
        .with("displayIndentGuides", true)
        .with("foldStyle", "markbeginandend")
        .with("cursorStyle", "smooth")
        .with("wrapBehavioursEnabled", true)
        .with("highlightActiveLine", json!(true))
}
