use crate::kernel::model::{Annotation, EditorOptions};

/// The live text-editing surface.
///
/// Implementations own cursor, undo and rendering state; the bridge only ever
/// pushes into it. Content changes flow the other way through
/// [`StateBridge::content_changed`](crate::kernel::StateBridge::content_changed).
pub trait EditorWidget {
    /// Replaces the whole buffer.
    fn set_value(&mut self, text: &str);

    /// Replaces the full annotation set.
    fn set_annotations(&mut self, annotations: Vec<Annotation>);

    fn set_options(&mut self, options: &EditorOptions);

    fn set_read_only(&mut self, read_only: bool);

    /// Moves cursor and viewport to a 1-based line.
    fn goto_line(&mut self, line: u32);

    /// Recomputes layout after the container changed size.
    fn resize(&mut self);

    fn wrap_limit(&self) -> u32;

    fn set_print_margin_column(&mut self, column: u32);

    /// Clears undo and redo history.
    fn reset_undo_history(&mut self);
}
