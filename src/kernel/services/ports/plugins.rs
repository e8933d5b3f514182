use crate::kernel::model::BridgeProps;
use serde_json::Value;

/// Extra data plugins get at ready time.
#[derive(Debug, Clone, Copy)]
pub struct PluginContext<'a> {
    pub document_id: &'a str,
    pub spec_object: &'a Value,
}

/// Language tooling that augments the widget once it is ready.
pub trait EditorPlugin<W> {
    fn name(&self) -> &str;

    fn install(&self, widget: &mut W, props: &BridgeProps, ctx: &PluginContext<'_>);
}

/// Runs every plugin in order against a freshly ready widget.
pub fn run_plugins<W>(
    widget: &mut W,
    props: &BridgeProps,
    plugins: &[Box<dyn EditorPlugin<W>>],
    ctx: &PluginContext<'_>,
) {
    for plugin in plugins {
        tracing::debug!(plugin = plugin.name(), "installing editor plugin");
        plugin.install(widget, props, ctx);
    }
}
