use super::*;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_config_service() {
    let mut service = ConfigService::new();
    assert_eq!(service.config().resize_settle_ms, 40);

    service.set_resize_settle_ms(10);
    service.set_undo_reset_delay_ms(250);
    assert_eq!(service.config().resize_settle_ms, 10);
    assert_eq!(service.config().undo_reset_delay_ms, 250);
}

#[test]
fn test_partial_json_keeps_defaults() {
    let service = ConfigService::from_json_str(r#"{ "undo_reset_delay_ms": 5 }"#).unwrap();
    let config = service.config();
    assert_eq!(config.undo_reset_delay_ms, 5);
    assert_eq!(config.resize_settle_ms, 40);
    assert_eq!(config.container_id, "editor-wrapper");
    assert!(!config.widget_defaults.is_empty());
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "container_id": "pane", "widget_defaults": {{ "tabSize": 8 }} }}"#
    )
    .unwrap();

    let config = ConfigService::load(file.path()).unwrap().into_config();
    assert_eq!(config.container_id, "pane");
    assert_eq!(config.widget_defaults.len(), 1);
}

#[test]
fn test_load_errors_are_typed() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.json");
    match ConfigService::load(&missing) {
        Err(ConfigError::Io { path, .. }) => assert_eq!(path, missing),
        other => panic!("expected io error, got {:?}", other.map(|s| s.into_config())),
    }

    let err = ConfigService::from_json_str("{ nope").err().unwrap();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("Invalid config"));
}
