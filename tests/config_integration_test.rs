//! Integration tests for configuration loading and validation
//!
//! Tests that touch environment variables hold `ENV_MUTEX` so they do not
//! interfere with each other.

use secrecy::ExposeSecret;
use slide_export::config::{load_config, resolve_config};
use test_case::test_case;
use slide_export::domain::{OutputFormat, SlideExportError};
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn lock_env() -> std::sync::MutexGuard<'static, ()> {
    ENV_MUTEX.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Helper function to clean up environment variables
fn cleanup_env_vars() {
    std::env::remove_var("SLIDE_EXPORT_APPLICATION_LOG_LEVEL");
    std::env::remove_var("SLIDE_EXPORT_SLIDES_ACCESS_TOKEN");
    std::env::remove_var("SLIDE_EXPORT_OUTPUT_FORMAT");
    std::env::remove_var("SLIDE_EXPORT_OUTPUT_JPEG_QUALITY");
    std::env::remove_var("SLIDE_EXPORT_EXPORT_MAX_PARALLEL");
    std::env::remove_var("SLIDE_EXPORT_EXPORT_DRY_RUN");
    std::env::remove_var("SLIDE_EXPORT_SLIDES_TIMEOUT_SECONDS");
    std::env::remove_var("TEST_SLIDES_TOKEN");
}

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_complete_config() {
    let _lock = lock_env();
    cleanup_env_vars();

    let file = write_config(
        r#"
[application]
log_level = "debug"

[slides]
base_url = "https://slides.example.com/v1"
api_key = "AIza-test"
thumbnail_size = "MEDIUM"
timeout_seconds = 15

[output]
format = "jpeg"
output_dir = "/tmp/deck"
name_template = "deck-{ordinal:03}.{ext}"
jpeg_quality = 75

[export]
max_parallel = 6
dry_run = true

[logging]
local_enabled = false
local_path = "/tmp/slide-export-logs"
local_rotation = "hourly"
"#,
    );

    let config = load_config(file.path()).unwrap();

    assert_eq!(config.application.log_level, "debug");
    assert_eq!(config.slides.base_url, "https://slides.example.com/v1");
    assert_eq!(
        config.slides.api_key.as_ref().unwrap().expose_secret(),
        "AIza-test"
    );
    assert!(config.slides.access_token.is_none());
    assert_eq!(config.slides.thumbnail_size, "MEDIUM");
    assert_eq!(config.slides.timeout_seconds, 15);
    assert_eq!(config.output.format, OutputFormat::Jpeg);
    assert_eq!(config.output.output_dir, "/tmp/deck");
    assert_eq!(config.output.name_template, "deck-{ordinal:03}.{ext}");
    assert_eq!(config.output.jpeg_quality, 75);
    assert_eq!(config.export.effective_max_parallel(), 6);
    assert!(config.export.dry_run);
    assert_eq!(config.logging.local_rotation, "hourly");
}

#[test]
fn test_load_minimal_config_with_defaults() {
    let _lock = lock_env();
    cleanup_env_vars();

    let file = write_config("[application]\nlog_level = \"warn\"\n");
    let config = load_config(file.path()).unwrap();

    assert_eq!(config.application.log_level, "warn");
    assert_eq!(config.output.format, OutputFormat::Png);
    assert_eq!(config.output.output_dir, ".");
    assert_eq!(config.output.name_template, "slide{ordinal:04}.{ext}");
    assert_eq!(config.output.jpeg_quality, 100);
    assert!(config.export.max_parallel.is_none());
    assert!(config.export.effective_max_parallel() >= 1);
    assert!(!config.export.dry_run);
}

#[test]
fn test_env_var_substitution() {
    let _lock = lock_env();
    cleanup_env_vars();
    std::env::set_var("TEST_SLIDES_TOKEN", "ya29.substituted");

    let file = write_config(
        r#"
[slides]
access_token = "${TEST_SLIDES_TOKEN}"
"#,
    );
    let config = load_config(file.path()).unwrap();

    assert_eq!(
        config.slides.access_token.as_ref().unwrap().expose_secret(),
        "ya29.substituted"
    );
    assert!(!format!("{config:?}").contains("ya29.substituted"));

    cleanup_env_vars();
}

#[test]
fn test_missing_substitution_variable() {
    let _lock = lock_env();
    cleanup_env_vars();

    let file = write_config("[slides]\naccess_token = \"${TEST_SLIDES_TOKEN}\"\n");
    let err = load_config(file.path()).unwrap_err();

    match err {
        SlideExportError::Configuration(msg) => assert!(msg.contains("TEST_SLIDES_TOKEN")),
        other => panic!("Expected Configuration error, got {other:?}"),
    }
}

#[test]
fn test_env_var_overrides() {
    let _lock = lock_env();
    cleanup_env_vars();
    std::env::set_var("SLIDE_EXPORT_OUTPUT_FORMAT", "jpg");
    std::env::set_var("SLIDE_EXPORT_OUTPUT_JPEG_QUALITY", "60");
    std::env::set_var("SLIDE_EXPORT_EXPORT_MAX_PARALLEL", "2");
    std::env::set_var("SLIDE_EXPORT_EXPORT_DRY_RUN", "true");

    let file = write_config(
        r#"
[output]
format = "png"
jpeg_quality = 90

[export]
max_parallel = 8
"#,
    );
    let config = load_config(file.path()).unwrap();

    assert_eq!(config.output.format, OutputFormat::Jpeg);
    assert_eq!(config.output.jpeg_quality, 60);
    assert_eq!(config.export.max_parallel, Some(2));
    assert!(config.export.dry_run);

    cleanup_env_vars();
}

#[test]
fn test_env_override_is_validated() {
    let _lock = lock_env();
    cleanup_env_vars();
    std::env::set_var("SLIDE_EXPORT_OUTPUT_JPEG_QUALITY", "0");

    let file = write_config("");
    let result = load_config(file.path());
    assert!(matches!(result, Err(SlideExportError::Configuration(_))));

    cleanup_env_vars();
}

#[test_case("SLIDE_EXPORT_OUTPUT_FORMAT", "gif" ; "unknown format")]
#[test_case("SLIDE_EXPORT_OUTPUT_JPEG_QUALITY", "high" ; "non numeric quality")]
#[test_case("SLIDE_EXPORT_EXPORT_MAX_PARALLEL", "-1" ; "negative parallelism")]
#[test_case("SLIDE_EXPORT_SLIDES_TIMEOUT_SECONDS", "soon" ; "non numeric timeout")]
#[test_case("SLIDE_EXPORT_EXPORT_DRY_RUN", "maybe" ; "non boolean dry run")]
fn test_unparsable_env_override_is_rejected(name: &str, value: &str) {
    let _lock = lock_env();
    cleanup_env_vars();
    std::env::set_var(name, value);

    let file = write_config("");
    let from_file = load_config(file.path());
    let from_defaults = resolve_config(None);

    cleanup_env_vars();

    for result in [from_file, from_defaults] {
        match result {
            Err(SlideExportError::Configuration(message)) => {
                assert!(message.contains(name), "message should name {name}: {message}");
            }
            other => panic!("expected configuration error, got {other:?}"),
        }
    }
}

#[test]
fn test_invalid_config_validation() {
    let _lock = lock_env();
    cleanup_env_vars();

    let cases = [
        "[output]\njpeg_quality = 101\n",
        "[output]\nname_template = \"slide.png\"\n",
        "[output]\nformat = \"tiff\"\n",
        "[export]\nmax_parallel = 0\n",
        "[slides]\nthumbnail_size = \"HUGE\"\n",
        "[application]\nlog_level = \"chatty\"\n",
    ];

    for contents in cases {
        let file = write_config(contents);
        let result = load_config(file.path());
        assert!(
            matches!(result, Err(SlideExportError::Configuration(_))),
            "expected configuration error for {contents:?}"
        );
    }
}

#[test]
fn test_missing_explicit_file_is_error() {
    let result = load_config("/nonexistent/slide-export.toml");
    assert!(matches!(result, Err(SlideExportError::Configuration(_))));
}
