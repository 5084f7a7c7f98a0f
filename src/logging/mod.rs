//! Logging and observability
//!
//! Structured logging through `tracing`, with console output and optional
//! JSON file logging with rotation.
//!
//! # Example
//!
//! ```no_run
//! use slide_export::logging::init_logging;
//! use slide_export::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, parse_log_level, LoggingGuard};

/// Log the start of an export run
///
/// # Example
///
/// ```no_run
/// use slide_export::log_export_start;
/// use slide_export::domain::PresentationId;
///
/// let id = PresentationId::new("deck-123").unwrap();
/// log_export_start!(&id, 12, 4);
/// ```
#[macro_export]
macro_rules! log_export_start {
    ($presentation_id:expr, $slides:expr, $max_parallel:expr) => {
        tracing::info!(
            presentation_id = %$presentation_id,
            slides = $slides,
            max_parallel = $max_parallel,
            "Starting export"
        );
    };
}

/// Log that an output file was created
///
/// # Example
///
/// ```no_run
/// use slide_export::log_slide_created;
/// use std::path::Path;
///
/// log_slide_created!(3, Path::new("out/slide0003.png"));
/// ```
#[macro_export]
macro_rules! log_slide_created {
    ($ordinal:expr, $path:expr) => {
        tracing::info!(ordinal = $ordinal, "create {}", $path.display());
    };
}

/// Log the completion of an export run
///
/// # Example
///
/// ```no_run
/// use slide_export::log_export_complete;
/// use std::time::Duration;
///
/// log_export_complete!(42, Duration::from_secs(10));
/// ```
#[macro_export]
macro_rules! log_export_complete {
    ($count:expr, $duration:expr) => {
        tracing::info!(
            count = $count,
            duration_ms = $duration.as_millis(),
            "Export completed"
        );
    };
}
