use cstudio_domain::config::{LogConfig, SelectorConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let cfg = SelectorConfig::default();
    assert!(cfg.catalog.is_none());
    assert_eq!(cfg.initial_type, "all-rights-reserved");
    assert!(!cfg.show_preview);

    let log = LogConfig::default();
    assert_eq!(log.level, "info");
    assert!(log.path.is_none());
    assert!(!log.json);
}

#[test]
fn selector_config_deserializes() {
    let raw = json!({
        "catalog": "/etc/cstudio/licenses.json",
        "show_preview": true,
        "log": { "level": "debug", "json": true }
    });

    let cfg: SelectorConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.catalog.as_deref(), Some(std::path::Path::new("/etc/cstudio/licenses.json")));
    assert!(cfg.show_preview);
    assert_eq!(cfg.initial_type, "all-rights-reserved");
    assert_eq!(cfg.log.level, "debug");
    assert!(cfg.log.json);
}

#[test]
fn selector_config_is_cheap_to_clone_and_copy_on_write() {
    let original = SelectorConfig::default();
    let mut edited = original.clone();
    edited.show_preview = true;

    assert!(!original.show_preview);
    assert!(edited.show_preview);
}
