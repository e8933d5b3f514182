//! Container width tracking.
//!
//! There is no guaranteed resize signal, so the bridge re-measures shortly
//! after clicks as well as on explicit resize notifications. Best effort.

use super::services::ports::EditorWidget;

#[derive(Debug, Default)]
pub struct ResizeCoordinator {
    width: Option<f64>,
}

impl ResizeCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(&self) -> Option<f64> {
        self.width
    }

    pub fn record(&mut self, width: Option<f64>) {
        self.width = width;
    }

    /// Compares `measured` against the recorded width and re-lays-out the
    /// widget when it moved. Returns whether the width changed.
    pub fn remeasure<W: EditorWidget>(
        &mut self,
        widget: Option<&mut W>,
        measured: Option<f64>,
    ) -> bool {
        if measured == self.width {
            return false;
        }

        if let Some(widget) = widget {
            widget.resize();
            let wrap_limit = widget.wrap_limit();
            widget.set_print_margin_column(wrap_limit);
            tracing::debug!(?measured, wrap_limit, "widget resized");
        }
        self.width = measured;
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/resize.rs"]
mod tests;
