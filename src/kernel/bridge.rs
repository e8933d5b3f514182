//! Top-level reconciler between the external store and the widget.
//!
//! One [`StateBridge::update`] call is one reconciliation cycle:
//!
//! 1. receive: annotation, marker and option sync, go-to-line, undo decision
//! 2. render: push the document value unless it matches the echo
//! 3. commit: schedule the undo reset, re-place markers
//!
//! Delayed work (re-measure after a click, undo reset) sits in a
//! [`TimerQueue`] and runs from [`StateBridge::tick`].

use super::annotations::sync_annotations;
use super::lifecycle::{Lifecycle, LifecycleEvent};
use super::markers::MarkerSync;
use super::model::{BridgeProps, MarkerLineUpdate};
use super::options::sync_options;
use super::resize::ResizeCoordinator;
use super::services::ports::{
    run_plugins, BridgeConfig, ClickEventSource, ClickSubscription, Clock, EditorPlugin,
    EditorWidget, LayoutProbe, LineUpdateCallback, MarkerPlacer, PluginContext,
};
use super::timer::TimerQueue;
use super::undo::should_reset_undo;
use serde::Serialize;
use std::fmt;
use std::rc::Rc;
use std::time::Instant;

pub type ChangeCallback = Rc<dyn Fn(&str)>;
pub type LoadCallback<W> = Rc<dyn Fn(&mut W, &BridgeProps)>;

/// Outbound notifications. Missing ones are no-ops.
pub struct BridgeCallbacks<W> {
    pub on_change: ChangeCallback,
    pub on_marker_line_update: LineUpdateCallback,
    /// Hands the host the live widget once it is fully synced.
    pub on_load: Option<LoadCallback<W>>,
}

impl<W> Default for BridgeCallbacks<W> {
    fn default() -> Self {
        Self {
            on_change: Rc::new(|_: &str| {}),
            on_marker_line_update: Rc::new(|_: MarkerLineUpdate| {}),
            on_load: None,
        }
    }
}

impl<W> Clone for BridgeCallbacks<W> {
    fn clone(&self) -> Self {
        Self {
            on_change: self.on_change.clone(),
            on_marker_line_update: self.on_marker_line_update.clone(),
            on_load: self.on_load.clone(),
        }
    }
}

impl<W> fmt::Debug for BridgeCallbacks<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BridgeCallbacks")
            .field("on_load", &self.on_load.is_some())
            .finish_non_exhaustive()
    }
}

/// Everything outside the widget the bridge talks to.
pub struct Collaborators<W> {
    pub placer: Box<dyn MarkerPlacer<W>>,
    pub plugins: Vec<Box<dyn EditorPlugin<W>>>,
    pub layout: Box<dyn LayoutProbe>,
    pub events: Rc<dyn ClickEventSource>,
    pub clock: Rc<dyn Clock>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Deferred {
    Remeasure,
    UndoReset,
}

/// What one reconciliation cycle did to the widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReconcileResult {
    pub annotations_synced: bool,
    pub markers_synced: bool,
    pub options_synced: bool,
    pub went_to_line: bool,
    pub value_pushed: bool,
    pub undo_reset_scheduled: bool,
}

pub struct StateBridge<W: EditorWidget> {
    config: BridgeConfig,
    lifecycle: Lifecycle,
    widget: Option<W>,
    /// Snapshot of the props seen by the last cycle.
    props: BridgeProps,
    /// Last value pushed into, or reported by, the widget.
    last_pushed: String,
    pending_undo_reset: bool,
    markers: MarkerSync<W>,
    resize: ResizeCoordinator,
    timers: TimerQueue<Deferred>,
    click: Option<ClickSubscription>,
    callbacks: BridgeCallbacks<W>,
    collab: Collaborators<W>,
}

impl<W: EditorWidget> StateBridge<W> {
    pub fn new(config: BridgeConfig, props: BridgeProps, collab: Collaborators<W>) -> Self {
        let last_pushed = props.document.value.clone();
        Self {
            config,
            lifecycle: Lifecycle::Detached,
            widget: None,
            props,
            last_pushed,
            pending_undo_reset: false,
            markers: MarkerSync::new(),
            resize: ResizeCoordinator::new(),
            timers: TimerQueue::new(),
            click: None,
            callbacks: BridgeCallbacks::default(),
            collab,
        }
    }

    pub fn set_callbacks(&mut self, callbacks: BridgeCallbacks<W>) {
        self.callbacks = callbacks;
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn widget(&self) -> Option<&W> {
        self.widget.as_ref()
    }

    pub fn props(&self) -> &BridgeProps {
        &self.props
    }

    pub fn last_pushed(&self) -> &str {
        &self.last_pushed
    }

    pub fn recorded_width(&self) -> Option<f64> {
        self.resize.width()
    }

    pub fn is_listening(&self) -> bool {
        self.click.is_some()
    }

    pub fn markers_live(&self) -> bool {
        self.markers.is_live()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    // ---------------------------------------------------------------------
    // Lifecycle
    // ---------------------------------------------------------------------

    fn transition(&mut self, event: LifecycleEvent) -> bool {
        let Some(next) = self.lifecycle.next(event) else {
            tracing::warn!(
                state = self.lifecycle.label(),
                ?event,
                "ignoring lifecycle event"
            );
            return false;
        };
        tracing::info!(
            from = self.lifecycle.label(),
            to = next.label(),
            "bridge lifecycle"
        );
        self.lifecycle = next;
        true
    }

    pub fn mount(&mut self) {
        if !self.transition(LifecycleEvent::Mount) {
            return;
        }
        self.click = Some(ClickSubscription::acquire(self.collab.events.clone()));
        let width = self.collab.layout.container_width(&self.config.container_id);
        self.resize.record(width);
    }

    /// Takes ownership of the initialized widget and brings it in line with
    /// the current props. A widget arriving outside `Attaching` is dropped.
    pub fn widget_ready(&mut self, widget: W) {
        if !self.transition(LifecycleEvent::WidgetReady) {
            return;
        }

        let on_line_update = self.callbacks.on_marker_line_update.clone();
        let widget = self.widget.insert(widget);

        let ctx = PluginContext {
            document_id: self.props.document.id.as_str(),
            spec_object: &self.props.spec_object,
        };
        run_plugins(widget, &self.props, &self.collab.plugins, &ctx);

        widget.set_value(&self.last_pushed);

        let options = self.config.widget_defaults.merged(&self.props.editor_options);
        sync_options(Some(&mut *widget), &options);
        sync_annotations(Some(&mut *widget), &self.props.errors);

        self.markers.apply(
            Some(&mut *widget),
            &self.props.markers,
            self.collab.placer.as_mut(),
            on_line_update,
        );

        if let Some(on_load) = self.callbacks.on_load.clone() {
            on_load(widget, &self.props);
        }
    }

    pub fn unmount(&mut self) {
        if !self.transition(LifecycleEvent::Unmount) {
            return;
        }
        self.teardown();
    }

    fn teardown(&mut self) {
        let cancelled = self.timers.cancel_all();
        self.markers.dispose(self.widget.as_mut());
        self.widget = None;
        self.click = None;
        self.pending_undo_reset = false;
        tracing::debug!(cancelled, "bridge torn down");
    }

    // ---------------------------------------------------------------------
    // Reconciliation
    // ---------------------------------------------------------------------

    pub fn update(&mut self, next: BridgeProps) -> ReconcileResult {
        let mut result = ReconcileResult::default();
        let attached = self.widget.is_some();
        let prev = std::mem::take(&mut self.props);

        if next.errors != prev.errors {
            sync_annotations(self.widget.as_mut(), &next.errors);
            result.annotations_synced = attached;
        }

        if next.markers != prev.markers {
            self.markers.apply(
                self.widget.as_mut(),
                &next.markers,
                self.collab.placer.as_mut(),
                self.callbacks.on_marker_line_update.clone(),
            );
            result.markers_synced = attached;
        }

        if next.editor_options != prev.editor_options {
            sync_options(self.widget.as_mut(), &next.editor_options);
            result.options_synced = attached;
        }

        if let (Some(widget), Some(goto)) = (self.widget.as_mut(), next.go_to_line) {
            if prev.go_to_line != next.go_to_line {
                widget.goto_line(goto.line);
                result.went_to_line = true;
            }
        }

        self.pending_undo_reset = should_reset_undo(&prev.document, &next.document);

        if next.document.value != prev.document.value {
            result.value_pushed = self.render(&next.document.value);
        }

        self.props = next;
        result.undo_reset_scheduled = self.commit();

        tracing::debug!(?result, "reconciled");
        result
    }

    /// Pushes a changed store value unless it is what the widget already
    /// holds. A store value that has not moved is never pushed, so it cannot
    /// clobber edits the store has not caught up with yet.
    fn render(&mut self, value: &str) -> bool {
        if value == self.last_pushed {
            return false;
        }
        self.last_pushed = value.to_string();

        match self.widget.as_mut() {
            Some(widget) => {
                widget.set_value(value);
                true
            }
            None => false,
        }
    }

    fn commit(&mut self) -> bool {
        let mut scheduled = false;
        if std::mem::take(&mut self.pending_undo_reset) && self.widget.is_some() {
            let now = self.collab.clock.now();
            self.timers
                .schedule(now, self.config.undo_reset_delay(), Deferred::UndoReset);
            scheduled = true;
        }

        // Edits may have shifted the lines markers sit on.
        self.markers.apply(
            self.widget.as_mut(),
            &self.props.markers,
            self.collab.placer.as_mut(),
            self.callbacks.on_marker_line_update.clone(),
        );
        scheduled
    }

    // ---------------------------------------------------------------------
    // Widget and host events
    // ---------------------------------------------------------------------

    /// The widget reports its buffer changed. Returns whether `on_change`
    /// fired; a report that matches the echo is our own push coming back.
    pub fn content_changed(&mut self, text: &str) -> bool {
        if text == self.last_pushed {
            return false;
        }
        self.last_pushed = text.to_string();
        (self.callbacks.on_change)(text);
        true
    }

    /// A click landed anywhere in the host document.
    pub fn on_click(&mut self) {
        if self.click.is_none() {
            return;
        }
        let now = self.collab.clock.now();
        self.timers
            .schedule(now, self.config.resize_settle(), Deferred::Remeasure);
    }

    /// The host knows the container's new width directly.
    pub fn container_resized(&mut self, width: f64) -> bool {
        if !self.lifecycle.is_mounted() {
            return false;
        }
        self.resize.remeasure(self.widget.as_mut(), Some(width))
    }

    /// Runs every deferred task that is due. Returns how many ran.
    pub fn tick(&mut self) -> usize {
        let now = self.collab.clock.now();
        let due = self.timers.take_due(now);
        for task in &due {
            self.run_deferred(*task);
        }
        due.len()
    }

    fn run_deferred(&mut self, task: Deferred) {
        let Some(widget) = self.widget.as_mut() else {
            tracing::debug!(?task, "deferred task fired without a widget");
            return;
        };

        match task {
            Deferred::Remeasure => {
                let measured = self.collab.layout.container_width(&self.config.container_id);
                self.resize.remeasure(Some(widget), measured);
            }
            Deferred::UndoReset => {
                widget.reset_undo_history();
                tracing::debug!("undo history reset");
            }
        }
    }
}

impl<W: EditorWidget> Drop for StateBridge<W> {
    fn drop(&mut self) {
        if self.lifecycle.is_mounted() {
            self.lifecycle = Lifecycle::Detached;
            self.teardown();
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/bridge.rs"]
mod tests;
