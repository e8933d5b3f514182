use super::*;
use crate::kernel::model::LineRange;

const SCRIPT: &str = r#"{
    "width": 640,
    "props": { "document": { "id": "a", "value": "" } },
    "plugins": [ { "name": "snippets", "options": { "enableSnippets": true } } ],
    "steps": [
        { "op": "mount" },
        { "op": "ready" },
        { "op": "update", "props": {
            "document": { "id": "a", "value": "foo:" },
            "errors": [ { "line": 3, "level": "error", "message": "bad indent" } ],
            "markers": { "m": { "id": "m", "lineRange": { "start": 4, "end": 6 }, "kind": "error" } }
        } },
        { "op": "advance", "ms": 100 },
        { "op": "edit", "text": "foo: bar" },
        { "op": "update", "props": {
            "document": { "id": "a", "value": "foo: bar" },
            "errors": [ { "line": 3, "level": "error", "message": "bad indent" } ],
            "markers": { "m": { "id": "m", "lineRange": { "start": 4, "end": 6 }, "kind": "error" } }
        } },
        { "op": "set_width", "width": 800 },
        { "op": "click" },
        { "op": "advance", "ms": 40 },
        { "op": "unmount" }
    ]
}"#;

#[test]
fn test_replay_scenario() {
    let script = parse_script(SCRIPT).unwrap();
    let report = run(script, None);

    assert_eq!(report.cycles.len(), 2);
    assert!(report.cycles[0].value_pushed);
    assert!(report.cycles[0].undo_reset_scheduled);
    assert!(!report.cycles[1].value_pushed);
    assert!(!report.cycles[1].undo_reset_scheduled);

    assert_eq!(report.changes, vec!["foo: bar".to_string()]);
    assert_eq!(report.final_text, "foo: bar");
    assert_eq!(report.loads, vec!["a".to_string()]);
    assert_eq!(report.listeners_live, 0);

    // Single-line buffer: the marker gets pulled up to line 1.
    assert!(report
        .line_updates
        .iter()
        .all(|u| u.marker_id == "m" && u.line_range == LineRange::single(1)));
    assert!(!report.line_updates.is_empty());

    let resets = report
        .calls
        .iter()
        .filter(|c| matches!(c, WidgetCall::ResetUndoHistory))
        .count();
    assert_eq!(resets, 1);
    assert!(report
        .calls
        .iter()
        .any(|c| matches!(c, WidgetCall::SetPrintMarginColumn { column: 100 })));
    assert!(matches!(
        report.calls.first(),
        Some(WidgetCall::SetOptions { .. })
    ));
}

#[test]
fn test_config_override_wins() {
    let script = parse_script(
        r#"{ "config": { "undo_reset_delay_ms": 5 },
             "steps": [
                { "op": "mount" }, { "op": "ready" },
                { "op": "update", "props": { "document": { "id": "b", "value": "x" } } },
                { "op": "advance", "ms": 5 }
             ] }"#,
    )
    .unwrap();

    let slow = BridgeConfig {
        undo_reset_delay_ms: 500,
        ..BridgeConfig::default()
    };
    let report = run(script.clone(), Some(slow));
    assert!(!report
        .calls
        .iter()
        .any(|c| matches!(c, WidgetCall::ResetUndoHistory)));

    let report = run(script, None);
    assert!(report
        .calls
        .iter()
        .any(|c| matches!(c, WidgetCall::ResetUndoHistory)));
}

#[test]
fn test_bad_script_is_a_parse_error() {
    let err = parse_script(r#"{ "steps": [ { "op": "explode" } ] }"#).unwrap_err();
    assert!(matches!(err, ReplayError::Parse(_)));

    let err = load_script(Path::new("/definitely/not/here.json")).unwrap_err();
    assert!(matches!(err, ReplayError::Io { .. }));
}
