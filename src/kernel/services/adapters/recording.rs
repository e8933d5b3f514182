//! In-memory widget that records every call made on it.
//!
//! Used by the replay tool and the tests. Clones share one widget, so a test
//! can keep a handle while the bridge owns another.

use crate::kernel::model::{Annotation, EditorOptions, LineRange, MarkerLineUpdate, MarkerMap};
use crate::kernel::services::ports::{
    EditorWidget, LineUpdateCallback, MarkerDisposer, MarkerPlacer,
};
use compact_str::CompactString;
use ropey::Rope;
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::cell::{Ref, RefCell};
use std::rc::Rc;

pub const CHAR_WIDTH_PX: f64 = 8.0;
const DEFAULT_WRAP_LIMIT: u32 = 80;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum WidgetCall {
    SetValue {
        text: String,
    },
    SetAnnotations {
        annotations: Vec<Annotation>,
    },
    SetOptions {
        options: EditorOptions,
    },
    SetReadOnly {
        read_only: bool,
    },
    GotoLine {
        line: u32,
    },
    Resize {
        wrap_limit: u32,
    },
    SetPrintMarginColumn {
        column: u32,
    },
    ResetUndoHistory,
    AddDecoration {
        id: u64,
        marker: CompactString,
        range: LineRange,
    },
    RemoveDecoration {
        id: u64,
    },
}

#[derive(Debug)]
struct Inner {
    buffer: Rope,
    annotations: Vec<Annotation>,
    options: EditorOptions,
    read_only: bool,
    cursor_line: u32,
    wrap_limit: u32,
    print_margin: Option<u32>,
    layout_width: Option<f64>,
    undo_depth: usize,
    decorations: FxHashMap<u64, (CompactString, LineRange)>,
    next_decoration: u64,
    calls: Vec<WidgetCall>,
}

impl Default for Inner {
    fn default() -> Self {
        Self {
            buffer: Rope::new(),
            annotations: Vec::new(),
            options: EditorOptions::new(),
            read_only: false,
            cursor_line: 1,
            wrap_limit: DEFAULT_WRAP_LIMIT,
            print_margin: None,
            layout_width: None,
            undo_depth: 0,
            decorations: FxHashMap::default(),
            next_decoration: 0,
            calls: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordingWidget {
    inner: Rc<RefCell<Inner>>,
}

impl RecordingWidget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> String {
        self.inner.borrow().buffer.to_string()
    }

    pub fn line_count(&self) -> usize {
        self.inner.borrow().buffer.len_lines()
    }

    pub fn annotations(&self) -> Vec<Annotation> {
        self.inner.borrow().annotations.clone()
    }

    pub fn options(&self) -> EditorOptions {
        self.inner.borrow().options.clone()
    }

    pub fn is_read_only(&self) -> bool {
        self.inner.borrow().read_only
    }

    pub fn cursor_line(&self) -> u32 {
        self.inner.borrow().cursor_line
    }

    pub fn print_margin(&self) -> Option<u32> {
        self.inner.borrow().print_margin
    }

    pub fn undo_depth(&self) -> usize {
        self.inner.borrow().undo_depth
    }

    pub fn decoration_count(&self) -> usize {
        self.inner.borrow().decorations.len()
    }

    pub fn calls(&self) -> Ref<'_, [WidgetCall]> {
        Ref::map(self.inner.borrow(), |inner| inner.calls.as_slice())
    }

    pub fn take_calls(&self) -> Vec<WidgetCall> {
        std::mem::take(&mut self.inner.borrow_mut().calls)
    }

    pub fn count_calls(&self, pred: impl Fn(&WidgetCall) -> bool) -> usize {
        self.inner.borrow().calls.iter().filter(|c| pred(*c)).count()
    }

    /// Width the next `resize` lays out against.
    pub fn set_layout_width(&self, width: Option<f64>) {
        self.inner.borrow_mut().layout_width = width;
    }

    /// Simulates the user typing: replaces the buffer and grows the undo
    /// stack without going through the bridge. Returns the new text so the
    /// caller can report it.
    pub fn user_edit(&self, text: &str) -> String {
        let mut inner = self.inner.borrow_mut();
        inner.buffer = Rope::from_str(text);
        inner.undo_depth += 1;
        text.to_string()
    }

    pub fn add_decoration(&mut self, marker: &str, range: LineRange) -> u64 {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_decoration;
        inner.next_decoration += 1;
        let marker = CompactString::from(marker);
        inner.decorations.insert(id, (marker.clone(), range));
        inner.calls.push(WidgetCall::AddDecoration { id, marker, range });
        id
    }

    pub fn remove_decoration(&mut self, id: u64) {
        let mut inner = self.inner.borrow_mut();
        if inner.decorations.remove(&id).is_some() {
            inner.calls.push(WidgetCall::RemoveDecoration { id });
        }
    }

    fn record(&mut self, call: WidgetCall) {
        self.inner.borrow_mut().calls.push(call);
    }
}

impl EditorWidget for RecordingWidget {
    fn set_value(&mut self, text: &str) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.buffer = Rope::from_str(text);
            inner.undo_depth += 1;
        }
        self.record(WidgetCall::SetValue {
            text: text.to_string(),
        });
    }

    fn set_annotations(&mut self, annotations: Vec<Annotation>) {
        self.inner.borrow_mut().annotations = annotations.clone();
        self.record(WidgetCall::SetAnnotations { annotations });
    }

    fn set_options(&mut self, options: &EditorOptions) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.options = inner.options.merged(options);
        }
        self.record(WidgetCall::SetOptions {
            options: options.clone(),
        });
    }

    fn set_read_only(&mut self, read_only: bool) {
        self.inner.borrow_mut().read_only = read_only;
        self.record(WidgetCall::SetReadOnly { read_only });
    }

    fn goto_line(&mut self, line: u32) {
        let last = u32::try_from(self.line_count()).unwrap_or(u32::MAX);
        self.inner.borrow_mut().cursor_line = line.clamp(1, last.max(1));
        self.record(WidgetCall::GotoLine { line });
    }

    fn resize(&mut self) {
        let wrap_limit = {
            let mut inner = self.inner.borrow_mut();
            if let Some(width) = inner.layout_width {
                inner.wrap_limit = ((width / CHAR_WIDTH_PX).floor() as u32).max(1);
            }
            inner.wrap_limit
        };
        self.record(WidgetCall::Resize { wrap_limit });
    }

    fn wrap_limit(&self) -> u32 {
        self.inner.borrow().wrap_limit
    }

    fn set_print_margin_column(&mut self, column: u32) {
        self.inner.borrow_mut().print_margin = Some(column);
        self.record(WidgetCall::SetPrintMarginColumn { column });
    }

    fn reset_undo_history(&mut self) {
        self.inner.borrow_mut().undo_depth = 0;
        self.record(WidgetCall::ResetUndoHistory);
    }
}

/// Places one decoration per marker, clamped to the buffer. Clamped markers
/// are reported through the line update callback.
#[derive(Debug, Default)]
pub struct RecordingPlacer;

impl MarkerPlacer<RecordingWidget> for RecordingPlacer {
    fn place(
        &mut self,
        widget: &mut RecordingWidget,
        markers: &MarkerMap,
        on_line_update: LineUpdateCallback,
    ) -> MarkerDisposer<RecordingWidget> {
        let last_line = u32::try_from(widget.line_count())
            .unwrap_or(u32::MAX)
            .max(1);

        let mut ids = Vec::with_capacity(markers.len());
        for (_, marker) in markers.iter() {
            let start = marker.line_range.start.clamp(1, last_line);
            let end = marker.line_range.end.clamp(start, last_line);
            let range = LineRange::new(start, end);
            if range != marker.line_range {
                on_line_update(MarkerLineUpdate {
                    marker_id: marker.id.clone(),
                    line_range: range,
                });
            }
            ids.push(widget.add_decoration(&marker.id, range));
        }

        MarkerDisposer::new(move |widget: &mut RecordingWidget| {
            for id in ids {
                widget.remove_decoration(id);
            }
        })
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/recording.rs"]
mod tests;
