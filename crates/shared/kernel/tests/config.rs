use cstudio_kernel::config::{ConfigError, load_config};
use cstudio_kernel::domain::SelectorConfig;
use serial_test::serial;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

#[test]
#[serial]
fn reads_toml_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("licsel.toml");
    fs::write(
        &path,
        r#"
initial_type = "creative-commons"
show_preview = true

[log]
level = "debug"
"#,
    )?;

    let cfg: SelectorConfig = load_config(Some(&path))?;
    assert_eq!(cfg.initial_type, "creative-commons");
    assert!(cfg.show_preview);
    assert_eq!(cfg.log.level, "debug");
    assert!(cfg.catalog.is_none());
    Ok(())
}

#[test]
#[serial]
fn explicit_missing_file_is_an_error() {
    let path = Path::new("/nonexistent/licsel.toml");
    let err = load_config::<SelectorConfig>(Some(path)).unwrap_err();
    assert!(matches!(err, ConfigError::Config { .. }));
    assert!(err.to_string().contains("Failed to build config"));
}

#[test]
#[serial]
fn no_path_falls_back_to_defaults() -> Result<(), ConfigError> {
    let cfg: SelectorConfig = load_config(None::<&Path>)?;
    assert_eq!(cfg.initial_type, "all-rights-reserved");
    assert!(!cfg.show_preview);
    Ok(())
}
