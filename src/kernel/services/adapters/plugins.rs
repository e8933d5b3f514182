use crate::kernel::model::{BridgeProps, EditorOptions};
use crate::kernel::services::ports::{EditorPlugin, EditorWidget, PluginContext};
use serde::Deserialize;

/// Turns on a fixed set of widget options when the widget becomes ready,
/// e.g. the autocompletion and snippet switches language tooling needs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OptionsPlugin {
    pub name: String,
    #[serde(default)]
    pub options: EditorOptions,
}

impl OptionsPlugin {
    pub fn new(name: impl Into<String>, options: EditorOptions) -> Self {
        Self {
            name: name.into(),
            options,
        }
    }

    pub fn language_tools() -> Self {
        Self::new(
            "language-tools",
            EditorOptions::new()
                .with("enableBasicAutocompletion", true)
                .with("enableLiveAutocompletion", true)
                .with("enableSnippets", true),
        )
    }
}

impl<W: EditorWidget> EditorPlugin<W> for OptionsPlugin {
    fn name(&self) -> &str {
        &self.name
    }

    fn install(&self, widget: &mut W, _props: &BridgeProps, ctx: &PluginContext<'_>) {
        if self.options.is_empty() {
            return;
        }
        widget.set_options(&self.options);
        tracing::debug!(
            plugin = %self.name,
            document = ctx.document_id,
            "plugin options applied"
        );
    }
}
