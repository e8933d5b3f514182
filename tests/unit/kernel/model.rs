use super::*;
use serde_json::json;

#[test]
fn test_props_defaults_from_empty_object() {
    let props: BridgeProps = serde_json::from_value(json!({})).unwrap();
    assert_eq!(props.document.id, UNKNOWN_DOCUMENT_ID);
    assert_eq!(props.document.value, "");
    assert!(props.errors.is_empty());
    assert!(props.markers.is_empty());
    assert!(props.editor_options.is_empty());
    assert_eq!(props.go_to_line, None);
    assert_eq!(props, BridgeProps::default());
}

#[test]
fn test_non_map_markers_degrade_to_empty() {
    for markers in [json!([1, 2, 3]), json!("nope"), json!(7), json!(null)] {
        let props: BridgeProps = serde_json::from_value(json!({ "markers": markers })).unwrap();
        assert!(props.markers.is_empty());
    }
}

#[test]
fn test_malformed_marker_entries_are_skipped() {
    let markers = MarkerMap::from_value(&json!({
        "ok": { "id": "ok", "lineRange": { "start": 2, "end": 4 }, "kind": "warning" },
        "bad": { "id": "bad" },
        "worse": 12,
    }));
    assert_eq!(markers.len(), 1);
    let marker = markers.get("ok").unwrap();
    assert_eq!(marker.line_range, LineRange::new(2, 4));
    assert_eq!(marker.kind, "warning");
}

#[test]
fn test_errors_accept_level_or_severity_and_skip_garbage() {
    let props: BridgeProps = serde_json::from_value(json!({
        "errors": [
            { "line": 3, "level": "error", "message": "bad indent" },
            { "line": 5, "severity": "warning", "message": "dup key" },
            { "message": "no line" },
            "not an error",
        ]
    }))
    .unwrap();
    assert_eq!(
        props.errors,
        vec![
            ErrorAnnotation::new(3, Severity::Error, "bad indent"),
            ErrorAnnotation::new(5, Severity::Warning, "dup key"),
        ]
    );

    let props: BridgeProps = serde_json::from_value(json!({ "errors": null })).unwrap();
    assert!(props.errors.is_empty());
}

#[test]
fn test_null_editor_options_are_empty() {
    let props: BridgeProps = serde_json::from_value(json!({ "editorOptions": null })).unwrap();
    assert!(props.editor_options.is_empty());
}

#[test]
fn test_editor_options_read_only_split() {
    let options = EditorOptions::new()
        .with("readOnly", true)
        .with("tabSize", 4);
    assert_eq!(options.read_only(), Some(true));

    let rest = options.without_read_only();
    assert_eq!(rest.len(), 1);
    assert_eq!(rest.get("tabSize"), Some(&json!(4)));
    assert_eq!(rest.read_only(), None);

    let odd = EditorOptions::new().with("readOnly", "yes");
    assert_eq!(odd.read_only(), None);
}

#[test]
fn test_editor_options_merge_prefers_overlay() {
    let base = EditorOptions::new().with("tabSize", 2).with("mode", "yaml");
    let overlay = EditorOptions::new().with("tabSize", 8);
    let merged = base.merged(&overlay);
    assert_eq!(merged.get("tabSize"), Some(&json!(8)));
    assert_eq!(merged.get("mode"), Some(&json!("yaml")));
}

#[test]
fn test_marker_maps_compare_structurally() {
    let a = MarkerMap::new().with("m1", Marker::new("m1", LineRange::single(3), "error"));
    let b = MarkerMap::new().with("m1", Marker::new("m1", LineRange::single(3), "error"));
    let c = MarkerMap::new().with("m1", Marker::new("m1", LineRange::single(4), "error"));
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_marker_map_keys_match_store_keys() {
    let parsed = MarkerMap::from_value(&json!({
        "row-3": { "id": "m1", "lineRange": { "start": 3, "end": 3 }, "kind": "error" },
    }));
    let built = MarkerMap::new().with("row-3", Marker::new("m1", LineRange::single(3), "error"));
    assert_eq!(parsed, built);
    assert!(parsed.get("row-3").is_some());
    assert!(parsed.get("m1").is_none());
}

#[test]
fn test_annotation_serializes_type_field() {
    let annotation = Annotation {
        row: 2,
        column: 0,
        kind: Severity::Error,
        text: "bad indent".to_string(),
    };
    assert_eq!(
        serde_json::to_value(&annotation).unwrap(),
        json!({ "row": 2, "column": 0, "type": "error", "text": "bad indent" })
    );
}
