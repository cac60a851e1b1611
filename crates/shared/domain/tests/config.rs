use serde_json::json;
use vbridge_domain::config::{BridgeConfig, DispatchConfig, LoggingConfig, MismatchPolicy};

#[test]
fn config_defaults_are_sane() {
    let logging = LoggingConfig::default();
    assert_eq!(logging.name, "vbridge");
    assert_eq!(logging.level, "info");
    assert!(logging.console);
    assert!(logging.directory.is_none());
    assert_eq!(logging.max_files, 10);

    let dispatch = DispatchConfig::default();
    assert_eq!(dispatch.type_mismatch, MismatchPolicy::Error);
}

#[test]
fn bridge_config_deserializes() {
    let raw = json!({
        "logging": { "name": "shell", "level": "debug", "directory": "/tmp/logs", "json": true },
        "dispatch": { "type_mismatch": "panic" }
    });

    let cfg: BridgeConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.logging.name, "shell");
    assert_eq!(cfg.logging.level, "debug");
    assert!(cfg.logging.json);
    assert!(cfg.logging.console, "omitted fields fall back to defaults");
    assert_eq!(cfg.logging.directory, Some(std::path::PathBuf::from("/tmp/logs")));
    assert_eq!(cfg.dispatch.type_mismatch, MismatchPolicy::Panic);
}

#[test]
fn empty_document_is_all_defaults() {
    let cfg: BridgeConfig = serde_json::from_value(json!({})).expect("config deserialize");
    assert_eq!(cfg.logging.name, "vbridge");
    assert_eq!(cfg.dispatch.type_mismatch, MismatchPolicy::Error);
}

#[test]
fn deref_mut_copies_on_write() {
    let original = BridgeConfig::default();
    let mut edited = original.clone();
    edited.dispatch.type_mismatch = MismatchPolicy::Panic;

    assert_eq!(original.dispatch.type_mismatch, MismatchPolicy::Error);
    assert_eq!(edited.dispatch.type_mismatch, MismatchPolicy::Panic);
}
