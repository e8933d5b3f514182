//! Error list -> widget gutter annotations. Always a full replace.

use super::model::{Annotation, ErrorAnnotation};
use super::services::ports::EditorWidget;

pub fn to_annotation(err: &ErrorAnnotation) -> Annotation {
    Annotation {
        // A malformed line 0 lands on the first row.
        row: err.line.saturating_sub(1),
        column: 0,
        kind: err.level,
        text: err.message.clone(),
    }
}

pub fn to_annotations(errors: &[ErrorAnnotation]) -> Vec<Annotation> {
    errors.iter().map(to_annotation).collect()
}

pub fn sync_annotations<W: EditorWidget>(widget: Option<&mut W>, errors: &[ErrorAnnotation]) {
    let Some(widget) = widget else {
        return;
    };

    widget.set_annotations(to_annotations(errors));
    tracing::debug!(count = errors.len(), "annotations replaced");
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/annotations.rs"]
mod tests;
