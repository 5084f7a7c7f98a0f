//! Integration tests for logging functionality
//!
//! The global subscriber can only be installed once per process, so the
//! initialization checks live in a single test.

use slide_export::config::LoggingConfig;
use slide_export::core::export::ExportSummary;
use slide_export::logging::init_logging;
use slide_export::logging::structured::LOG_FILE_NAME;
use tempfile::TempDir;

#[test]
fn test_logging_config_default() {
    let config = LoggingConfig::default();
    assert!(!config.local_enabled);
    assert_eq!(config.local_path, "logs");
    assert_eq!(config.local_rotation, "daily");
}

#[test]
fn test_file_logging_writes_json_and_initializes_once() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("logs");

    let config = LoggingConfig {
        local_enabled: true,
        local_path: log_path.to_string_lossy().to_string(),
        local_rotation: "never".to_string(),
    };

    let guard = init_logging("info", &config).unwrap();
    assert!(log_path.is_dir());

    ExportSummary::new(3, 1).log_summary();

    // A second subscriber cannot be installed
    assert!(init_logging("info", &LoggingConfig::default()).is_err());

    // Dropping the guard flushes the non-blocking writer
    drop(guard);

    let contents = std::fs::read_to_string(log_path.join(LOG_FILE_NAME)).unwrap();
    let line = contents
        .lines()
        .find(|line| line.contains("Export summary"))
        .expect("summary event in log file");
    let event: serde_json::Value = serde_json::from_str(line).unwrap();
    assert_eq!(event["level"], "INFO");
    assert_eq!(event["fields"]["total_slides"], 3);
}

#[test]
fn test_invalid_log_level_is_rejected() {
    assert!(init_logging("loud", &LoggingConfig::default()).is_err());
}
