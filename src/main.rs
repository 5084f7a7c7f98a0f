// slide-export - Google Slides to image exporter
// Copyright (c) 2025 slide-export Contributors
// Licensed under the MIT License

use clap::Parser;
use slide_export::cli::{Cli, Commands};
use slide_export::config::{resolve_config, LoggingConfig};
use slide_export::logging::init_logging;
use std::process;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    // Usage errors (e.g. a missing presentation id) exit with code 2 here
    let cli = Cli::parse();

    let exit_code = match execute_command(&cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            1
        }
    };

    process::exit(exit_code);
}

/// Execute the CLI command
///
/// The logging guard lives for the duration of this call so buffered file
/// logs are flushed before the process exits.
async fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::ValidateConfig(args) => {
            let log_level = cli.log_level.as_deref().unwrap_or("info");
            let _guard = match init_logging(log_level, &LoggingConfig::default()) {
                Ok(guard) => guard,
                Err(e) => {
                    eprintln!("Error: {e}");
                    return Ok(2);
                }
            };
            args.execute(cli.config.as_deref()).await
        }
        Commands::Export(args) => {
            let config = match resolve_config(cli.config.as_deref()) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Error: {e}");
                    return Ok(2);
                }
            };

            let log_level = cli
                .log_level
                .as_deref()
                .unwrap_or(&config.application.log_level);
            let _guard = match init_logging(log_level, &config.logging) {
                Ok(guard) => guard,
                Err(e) => {
                    eprintln!("Error: {e}");
                    return Ok(2);
                }
            };

            tracing::debug!(version = env!("CARGO_PKG_VERSION"), "slide-export starting");
            args.execute(config).await
        }
    }
}
