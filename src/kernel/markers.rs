//! Owns the single live [`MarkerDisposer`].

use super::model::MarkerMap;
use super::services::ports::{LineUpdateCallback, MarkerDisposer, MarkerPlacer};

pub struct MarkerSync<W> {
    disposer: Option<MarkerDisposer<W>>,
    placements: u64,
}

impl<W> Default for MarkerSync<W> {
    fn default() -> Self {
        Self {
            disposer: None,
            placements: 0,
        }
    }
}

impl<W> MarkerSync<W> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_live(&self) -> bool {
        self.disposer.is_some()
    }

    /// Total number of placer calls so far.
    pub fn placements(&self) -> u64 {
        self.placements
    }

    /// Runs the live disposer, if any.
    pub fn dispose(&mut self, widget: Option<&mut W>) {
        let Some(disposer) = self.disposer.take() else {
            return;
        };
        match widget {
            Some(widget) => disposer.dispose(widget),
            None => tracing::warn!("dropping marker disposer without a widget"),
        }
    }

    /// Disposes the previous placement, then places `markers` afresh.
    pub fn apply(
        &mut self,
        widget: Option<&mut W>,
        markers: &MarkerMap,
        placer: &mut dyn MarkerPlacer<W>,
        on_line_update: LineUpdateCallback,
    ) {
        let Some(widget) = widget else {
            return;
        };

        self.dispose(Some(&mut *widget));

        self.disposer = Some(placer.place(widget, markers, on_line_update));
        self.placements += 1;
        tracing::debug!(count = markers.len(), "markers placed");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/markers.rs"]
mod tests;
