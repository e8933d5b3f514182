use super::model::Document;

/// Whether moving from `prev` to `next` warrants wiping undo history.
///
/// True when a different document is loaded, or when the slot goes from
/// empty to non-empty (the first load of a document). Ordinary edits never
/// qualify.
pub fn should_reset_undo(prev: &Document, next: &Document) -> bool {
    prev.id != next.id || (!next.value.is_empty() && prev.value.is_empty())
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/undo.rs"]
mod tests;
