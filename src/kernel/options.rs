//! Pushes an [`EditorOptions`] map into the widget.

use super::model::EditorOptions;
use super::services::ports::EditorWidget;

/// Read-only state the widget ends up in for `options`.
pub fn resolved_read_only(options: &EditorOptions) -> bool {
    options.read_only().unwrap_or(false)
}

pub fn sync_options<W: EditorWidget>(widget: Option<&mut W>, options: &EditorOptions) {
    let Some(widget) = widget else {
        return;
    };

    let rest = options.without_read_only();
    widget.set_options(&rest);

    let read_only = resolved_read_only(options);
    widget.set_read_only(read_only);

    tracing::debug!(options = rest.len(), read_only, "editor options synced");
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/options.rs"]
mod tests;
