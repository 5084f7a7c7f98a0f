//! Configuration management for slide-export.
//!
//! Settings come from an optional TOML file, then `SLIDE_EXPORT_*`
//! environment variables, then command-line flags (highest precedence).
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use slide_export::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("slide-export.toml")?;
//!
//! println!("Slides API: {}", config.slides.base_url);
//! println!("Format: {}", config.output.format);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Log level
//! - [`SlidesConfig`] - API base URL, credentials, thumbnail size, timeout
//! - [`OutputConfig`] - Format, output directory, name template, JPEG quality
//! - [`ExportConfig`] - Parallelism and dry-run mode
//! - [`LoggingConfig`] - Optional JSON file logging
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [slides]
//! access_token = "${GOOGLE_SLIDES_TOKEN}"
//! thumbnail_size = "LARGE"
//!
//! [output]
//! format = "jpg"
//! output_dir = "./slides"
//! name_template = "slide{ordinal:04}.{ext}"
//! jpeg_quality = 90
//!
//! [export]
//! max_parallel = 8
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::{load_config, resolve_config, DEFAULT_CONFIG_FILE};
pub use schema::{
    ApplicationConfig, ExportConfig, LoggingConfig, OutputConfig, SlideExportConfig, SlidesConfig,
};
pub use secret::{secret_string, SecretString, SecretValue};
