use super::*;
use crate::kernel::services::adapters::{RecordingWidget, WidgetCall};
use serde_json::json;

#[test]
fn test_missing_read_only_defaults_to_false() {
    let options = EditorOptions::new().with("tabSize", 4);
    assert!(!resolved_read_only(&options));
    assert!(!resolved_read_only(&EditorOptions::new()));
}

#[test]
fn test_read_only_applied_through_dedicated_call() {
    let mut widget = RecordingWidget::new();
    let options = EditorOptions::new()
        .with("readOnly", true)
        .with("fontSize", 16);

    sync_options(Some(&mut widget), &options);

    assert_eq!(
        widget.take_calls(),
        vec![
            WidgetCall::SetOptions {
                options: EditorOptions::new().with("fontSize", 16),
            },
            WidgetCall::SetReadOnly { read_only: true },
        ]
    );
    assert!(widget.is_read_only());
    assert_eq!(widget.options().get("readOnly"), None);
    assert_eq!(widget.options().get("fontSize"), Some(&json!(16)));
}

#[test]
fn test_read_only_reset_when_dropped_from_options() {
    let mut widget = RecordingWidget::new();
    sync_options(Some(&mut widget), &EditorOptions::new().with("readOnly", true));
    assert!(widget.is_read_only());

    sync_options(Some(&mut widget), &EditorOptions::new());
    assert!(!widget.is_read_only());
}

#[test]
fn test_no_widget_is_a_noop() {
    sync_options::<RecordingWidget>(None, &EditorOptions::new().with("readOnly", true));
}
