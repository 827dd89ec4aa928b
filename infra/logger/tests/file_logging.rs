use cstudio_domain::LogConfig;
use cstudio_logger::Logger;
use serial_test::serial;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::tempdir;

fn log_files(dir: &std::path::Path) -> Vec<PathBuf> {
    fs::read_dir(dir)
        .map(|entries| {
            entries
                .flatten()
                .map(|entry| entry.path())
                .filter(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
                .collect()
        })
        .unwrap_or_default()
}

#[test]
#[serial]
fn config_with_path_writes_json_lines() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let log_dir = tmp.path().join("logs");
    let config = LogConfig {
        level: "debug".into(),
        filter: None,
        path: Some(log_dir.clone()),
        json: true,
    };

    let logger = Logger::from_config("licsel-file", &config)?;
    assert!(logger.has_file_output());

    tracing::info!(license = "creative-commons", "hello from the file test");
    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let files = log_files(&log_dir);
    assert_eq!(files.len(), 1, "expected a single rolling file in {}", log_dir.display());

    let contents = fs::read_to_string(&files[0])?;
    let line = contents.lines().find(|line| line.contains("hello from the file test")).unwrap();
    assert!(line.starts_with('{'), "not json: {line}");
    assert!(line.contains("creative-commons"));
    Ok(())
}
