//! Validate config command implementation

use crate::config::{resolve_config, DEFAULT_CONFIG_FILE};
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    ///
    /// Loading already validates, so any failure here is reported with exit
    /// code 2.
    pub async fn execute(&self, config_path: Option<&str>) -> anyhow::Result<i32> {
        let shown_path = config_path.unwrap_or(DEFAULT_CONFIG_FILE);
        tracing::info!(config_path = %shown_path, "Validating configuration");

        let config = match resolve_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("Configuration is invalid: {shown_path}");
                println!("  Error: {e}");
                return Ok(2);
            }
        };

        println!("Configuration is valid: {shown_path}");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Slides API: {}", config.slides.base_url);
        println!(
            "  Credentials: {}",
            match (&config.slides.access_token, &config.slides.api_key) {
                (Some(_), _) => "access token",
                (None, Some(_)) => "API key",
                (None, None) => "none",
            }
        );
        println!("  Thumbnail Size: {}", config.slides.thumbnail_size);
        println!("  Format: {}", config.output.format);
        println!("  Output Directory: {}", config.output.output_dir);
        println!("  Name Template: {}", config.output.name_template);
        println!("  JPEG Quality: {}", config.output.jpeg_quality);
        println!(
            "  Max Parallel: {}",
            config.export.effective_max_parallel()
        );
        println!();
        Ok(0)
    }
}
