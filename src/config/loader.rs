//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::SlideExportConfig;
use super::secret::secret_string;
use crate::domain::errors::SlideExportError;
use crate::domain::result::Result;
use regex::Regex;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// File looked up in the working directory when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "slide-export.toml";

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into [`SlideExportConfig`]
/// 4. Applies environment variable overrides (SLIDE_EXPORT_* prefix); an
///    override that does not parse is an error
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns a configuration error if the file is missing or unreadable, if
/// parsing, substitution or an environment override fails, or if validation
/// fails.
///
/// # Examples
///
/// ```no_run
/// use slide_export::config::loader::load_config;
///
/// let config = load_config("slide-export.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<SlideExportConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(SlideExportError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        SlideExportError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: SlideExportConfig = toml::from_str(&contents)
        .map_err(|e| SlideExportError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        SlideExportError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Resolves the configuration for a CLI run
///
/// An explicitly given path must exist. Without one, [`DEFAULT_CONFIG_FILE`]
/// is used when present; otherwise built-in defaults plus environment
/// overrides apply.
pub fn resolve_config(explicit: Option<&str>) -> Result<SlideExportConfig> {
    if let Some(path) = explicit {
        return load_config(path);
    }

    if Path::new(DEFAULT_CONFIG_FILE).exists() {
        return load_config(DEFAULT_CONFIG_FILE);
    }

    tracing::debug!("No configuration file found, using defaults");
    let mut config = SlideExportConfig::default();
    apply_env_overrides(&mut config)?;
    config.validate().map_err(|e| {
        SlideExportError::Configuration(format!("Configuration validation failed: {e}"))
    })?;
    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| SlideExportError::Configuration(e.to_string()))?;
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(SlideExportError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the SLIDE_EXPORT_* prefix
///
/// Variables follow the pattern `SLIDE_EXPORT_<SECTION>_<KEY>`, for example
/// `SLIDE_EXPORT_OUTPUT_FORMAT` or `SLIDE_EXPORT_SLIDES_ACCESS_TOKEN`.
///
/// # Errors
///
/// Returns a configuration error naming the variable if a value does not parse
/// into the type of its setting.
fn apply_env_overrides(config: &mut SlideExportConfig) -> Result<()> {
    if let Ok(val) = std::env::var("SLIDE_EXPORT_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Slides API overrides
    if let Ok(val) = std::env::var("SLIDE_EXPORT_SLIDES_BASE_URL") {
        config.slides.base_url = val;
    }
    if let Ok(val) = std::env::var("SLIDE_EXPORT_SLIDES_ACCESS_TOKEN") {
        config.slides.access_token = Some(secret_string(val));
    }
    if let Ok(val) = std::env::var("SLIDE_EXPORT_SLIDES_API_KEY") {
        config.slides.api_key = Some(secret_string(val));
    }
    if let Ok(val) = std::env::var("SLIDE_EXPORT_SLIDES_THUMBNAIL_SIZE") {
        config.slides.thumbnail_size = val;
    }
    if let Some(secs) = parse_env("SLIDE_EXPORT_SLIDES_TIMEOUT_SECONDS")? {
        config.slides.timeout_seconds = secs;
    }

    // Output overrides
    if let Some(format) = parse_env("SLIDE_EXPORT_OUTPUT_FORMAT")? {
        config.output.format = format;
    }
    if let Ok(val) = std::env::var("SLIDE_EXPORT_OUTPUT_DIR") {
        config.output.output_dir = val;
    }
    if let Ok(val) = std::env::var("SLIDE_EXPORT_OUTPUT_NAME_TEMPLATE") {
        config.output.name_template = val;
    }
    if let Some(quality) = parse_env("SLIDE_EXPORT_OUTPUT_JPEG_QUALITY")? {
        config.output.jpeg_quality = quality;
    }

    // Export overrides
    if let Some(parallel) = parse_env("SLIDE_EXPORT_EXPORT_MAX_PARALLEL")? {
        config.export.max_parallel = Some(parallel);
    }
    if let Some(dry_run) = parse_env("SLIDE_EXPORT_EXPORT_DRY_RUN")? {
        config.export.dry_run = dry_run;
    }

    // Logging overrides
    if let Some(enabled) = parse_env("SLIDE_EXPORT_LOGGING_LOCAL_ENABLED")? {
        config.logging.local_enabled = enabled;
    }
    if let Ok(val) = std::env::var("SLIDE_EXPORT_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("SLIDE_EXPORT_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}

/// Reads and parses an override; `None` when the variable is unset
fn parse_env<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match std::env::var(name) {
        Ok(val) => val.trim().parse().map(Some).map_err(|e| {
            SlideExportError::Configuration(format!("Invalid value '{val}' for {name}: {e}"))
        }),
        Err(_) => Ok(None),
    }
}
