//! Configuration schema types
//!
//! Every section has serde defaults, so an empty file (or no file at all) is a
//! valid configuration.

use crate::config::SecretString;
use crate::core::template::NameTemplate;
use crate::domain::OutputFormat;
use serde::{Deserialize, Serialize};

/// Main configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SlideExportConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Google Slides API settings
    #[serde(default)]
    pub slides: SlidesConfig,

    /// Output file settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Export run settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SlideExportConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.slides.validate()?;
        self.output.validate()?;
        self.export.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Google Slides API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlidesConfig {
    /// Base URL of the Slides REST API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// OAuth bearer token sent with API requests (optional)
    #[serde(default)]
    pub access_token: Option<SecretString>,

    /// API key sent as the `key` query parameter (optional, public decks only)
    #[serde(default)]
    pub api_key: Option<SecretString>,

    /// Requested thumbnail size (LARGE, MEDIUM, SMALL)
    #[serde(default = "default_thumbnail_size")]
    pub thumbnail_size: String,

    /// HTTP request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl SlidesConfig {
    fn validate(&self) -> Result<(), String> {
        use secrecy::ExposeSecret;

        if self.base_url.is_empty() {
            return Err("slides.base_url cannot be empty".to_string());
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err("slides.base_url must start with http:// or https://".to_string());
        }

        let valid_sizes = ["LARGE", "MEDIUM", "SMALL"];
        if !valid_sizes.contains(&self.thumbnail_size.to_uppercase().as_str()) {
            return Err(format!(
                "Invalid slides.thumbnail_size '{}'. Must be one of: {}",
                self.thumbnail_size,
                valid_sizes.join(", ")
            ));
        }

        if self.timeout_seconds == 0 {
            return Err("slides.timeout_seconds must be > 0".to_string());
        }

        if self
            .access_token
            .as_ref()
            .map(|t| t.expose_secret().is_empty())
            .unwrap_or(false)
        {
            return Err("slides.access_token cannot be empty when set".to_string());
        }

        if self
            .api_key
            .as_ref()
            .map(|k| k.expose_secret().is_empty())
            .unwrap_or(false)
        {
            return Err("slides.api_key cannot be empty when set".to_string());
        }

        Ok(())
    }
}

impl Default for SlidesConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            access_token: None,
            api_key: None,
            thumbnail_size: default_thumbnail_size(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

/// Output file configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Image format (png, jpeg, jpg)
    #[serde(default)]
    pub format: OutputFormat,

    /// Directory the images are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// File name template; `{ordinal}` (optionally `{ordinal:04}`) and `{ext}`
    #[serde(default = "default_name_template")]
    pub name_template: String,

    /// JPEG quality, 1-100
    #[serde(default = "default_jpeg_quality")]
    pub jpeg_quality: u8,
}

impl OutputConfig {
    fn validate(&self) -> Result<(), String> {
        if self.output_dir.trim().is_empty() {
            return Err("output.output_dir cannot be empty".to_string());
        }

        NameTemplate::parse(&self.name_template)
            .map_err(|e| format!("Invalid output.name_template: {e}"))?;

        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(format!(
                "output.jpeg_quality must be between 1 and 100, got {}",
                self.jpeg_quality
            ));
        }

        Ok(())
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            output_dir: default_output_dir(),
            name_template: default_name_template(),
            jpeg_quality: default_jpeg_quality(),
        }
    }
}

/// Export run configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ExportConfig {
    /// Maximum number of slides processed concurrently
    /// (default: available parallelism of the host)
    #[serde(default)]
    pub max_parallel: Option<usize>,

    /// Dry run mode - enumerate slides and print planned file names only
    #[serde(default)]
    pub dry_run: bool,
}

impl ExportConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(parallel) = self.max_parallel {
            if parallel == 0 || parallel > 256 {
                return Err(format!(
                    "export.max_parallel must be between 1 and 256, got {parallel}"
                ));
            }
        }
        Ok(())
    }

    /// Worker pool size for this run
    pub fn effective_max_parallel(&self) -> usize {
        self.max_parallel.unwrap_or_else(default_max_parallel)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable JSON file logging next to console output
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Rotation policy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local_enabled".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_base_url() -> String {
    "https://slides.googleapis.com/v1".to_string()
}

fn default_thumbnail_size() -> String {
    "LARGE".to_string()
}

fn default_timeout_seconds() -> u64 {
    60
}

fn default_output_dir() -> String {
    ".".to_string()
}

fn default_name_template() -> String {
    "slide{ordinal:04}.{ext}".to_string()
}

fn default_jpeg_quality() -> u8 {
    100
}

fn default_max_parallel() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

fn default_local_path() -> String {
    "logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::secret_string;

    #[test]
    fn test_default_config_is_valid() {
        let config = SlideExportConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.output.format, OutputFormat::Png);
        assert_eq!(config.output.jpeg_quality, 100);
        assert_eq!(config.output.output_dir, ".");
    }

    #[test]
    fn test_application_config_validation() {
        let mut config = ApplicationConfig::default();
        assert!(config.validate().is_ok());

        config.log_level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_slides_config_validation() {
        let mut config = SlidesConfig::default();
        assert!(config.validate().is_ok());

        config.base_url = "slides.googleapis.com".to_string();
        assert!(config.validate().is_err());

        config.base_url = default_base_url();
        config.thumbnail_size = "medium".to_string();
        assert!(config.validate().is_ok());

        config.thumbnail_size = "HUGE".to_string();
        assert!(config.validate().is_err());

        config.thumbnail_size = default_thumbnail_size();
        config.access_token = Some(secret_string(String::new()));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_output_config_jpeg_quality_range() {
        let mut config = OutputConfig::default();

        config.jpeg_quality = 0;
        assert!(config.validate().is_err());

        config.jpeg_quality = 1;
        assert!(config.validate().is_ok());

        config.jpeg_quality = 101;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_output_config_rejects_bad_template() {
        let config = OutputConfig {
            name_template: "slide.png".to_string(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.contains("name_template"));
    }

    #[test]
    fn test_export_config_max_parallel() {
        let mut config = ExportConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.effective_max_parallel() >= 1);

        config.max_parallel = Some(0);
        assert!(config.validate().is_err());

        config.max_parallel = Some(3);
        assert!(config.validate().is_ok());
        assert_eq!(config.effective_max_parallel(), 3);
    }

    #[test]
    fn test_logging_config_validation() {
        let mut config = LoggingConfig::default();
        assert!(config.validate().is_ok());

        config.local_rotation = "weekly".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: SlideExportConfig = toml::from_str("").unwrap();
        assert_eq!(config.application.log_level, "info");
        assert_eq!(config.slides.base_url, "https://slides.googleapis.com/v1");
        assert_eq!(config.output.name_template, "slide{ordinal:04}.{ext}");
        assert!(!config.export.dry_run);
    }
}
