//! CLI interface and argument parsing
//!
//! This module provides the command-line interface using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// slide-export - save every visible slide of a Google Slides deck as an image
#[derive(Parser, Debug)]
#[command(name = "slide-export")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (defaults to ./slide-export.toml when present)
    #[arg(short, long, env = "SLIDE_EXPORT_CONFIG", global = true)]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "SLIDE_EXPORT_LOG_LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export the slides of a presentation as image files
    Export(commands::export::ExportArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::OutputFormat;

    #[test]
    fn test_cli_parse_export() {
        let cli = Cli::parse_from(["slide-export", "export", "deck-123"]);
        assert!(cli.config.is_none());
        match cli.command {
            Commands::Export(args) => {
                assert_eq!(args.presentation_id, "deck-123");
                assert!(args.format.is_none());
                assert!(!args.dry_run);
            }
            other => panic!("Expected export command, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_export_overrides() {
        let cli = Cli::parse_from([
            "slide-export",
            "export",
            "deck-123",
            "--format",
            "jpg",
            "--output",
            "out",
            "--name",
            "page-{ordinal}.{ext}",
            "--jpeg-quality",
            "85",
            "--max-parallel",
            "3",
            "--dry-run",
        ]);
        let Commands::Export(args) = cli.command else {
            panic!("Expected export command");
        };
        assert_eq!(args.format, Some(OutputFormat::Jpeg));
        assert_eq!(args.output.as_deref(), Some("out"));
        assert_eq!(args.name.as_deref(), Some("page-{ordinal}.{ext}"));
        assert_eq!(args.jpeg_quality, Some(85));
        assert_eq!(args.max_parallel, Some(3));
        assert!(args.dry_run);
    }

    #[test]
    fn test_cli_requires_presentation_id() {
        let err = Cli::try_parse_from(["slide-export", "export"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["slide-export", "export", "deck", "--format", "gif"]).is_err());
    }

    #[test]
    fn test_cli_rejects_out_of_range_quality() {
        assert!(
            Cli::try_parse_from(["slide-export", "export", "deck", "--jpeg-quality", "0"]).is_err()
        );
        assert!(
            Cli::try_parse_from(["slide-export", "export", "deck", "--jpeg-quality", "101"])
                .is_err()
        );
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["slide-export", "--config", "custom.toml", "export", "deck"]);
        assert_eq!(cli.config.as_deref(), Some("custom.toml"));
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["slide-export", "--log-level", "debug", "validate-config"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }
}
