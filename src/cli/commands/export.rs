//! Export command implementation
//!
//! Enumerates the presentation, then either prints the planned file names
//! (dry run) or hands the jobs to the [`ExportCoordinator`].

use super::exit_code_for;
use crate::adapters::slides::{GoogleSlidesClient, SlidesApi};
use crate::adapters::transport::{ByteTransport, HttpTransport};
use crate::config::SlideExportConfig;
use crate::core::enumerate::enumerate_slides;
use crate::core::export::{ExportCoordinator, ExportSummary};
use crate::core::fetch::ThumbnailFetcher;
use crate::core::materialize::{ensure_output_dir, OutputSettings};
use crate::domain::{OutputFormat, Result, SlideExportError};
use clap::Args;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Presentation id, as found in `https://docs.google.com/presentation/d/<ID>/edit`
    pub presentation_id: String,

    /// Output image format (png, jpeg, jpg)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Directory the images are written to
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<String>,

    /// File name template, e.g. "slide{ordinal:04}.{ext}"
    #[arg(short, long, value_name = "TEMPLATE")]
    pub name: Option<String>,

    /// JPEG quality (1-100)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=100))]
    pub jpeg_quality: Option<u8>,

    /// Maximum number of slides processed concurrently
    #[arg(short = 'j', long)]
    pub max_parallel: Option<usize>,

    /// Dry run mode - list the files that would be written without fetching
    #[arg(long)]
    pub dry_run: bool,
}

impl ExportArgs {
    /// Apply command-line overrides on top of the loaded configuration
    pub fn apply_overrides(&self, config: &mut SlideExportConfig) {
        if let Some(format) = self.format {
            tracing::debug!(format = %format, "Overriding output format from CLI");
            config.output.format = format;
        }
        if let Some(output) = &self.output {
            config.output.output_dir = output.clone();
        }
        if let Some(name) = &self.name {
            config.output.name_template = name.clone();
        }
        if let Some(quality) = self.jpeg_quality {
            config.output.jpeg_quality = quality;
        }
        if let Some(parallel) = self.max_parallel {
            config.export.max_parallel = Some(parallel);
        }
        if self.dry_run {
            config.export.dry_run = true;
        }
    }

    /// Execute the export command
    pub async fn execute(&self, mut config: SlideExportConfig) -> anyhow::Result<i32> {
        self.apply_overrides(&mut config);

        if let Err(e) = config.validate() {
            tracing::error!(error = %e, "Configuration validation failed");
            eprintln!("Error: {}", SlideExportError::Configuration(e));
            return Ok(2);
        }

        let api = match GoogleSlidesClient::new(&config.slides) {
            Ok(client) => Arc::new(client),
            Err(e) => return Ok(report_failure(&e)),
        };
        let transport =
            match HttpTransport::new(Duration::from_secs(config.slides.timeout_seconds)) {
                Ok(transport) => Arc::new(transport),
                Err(e) => return Ok(report_failure(&e)),
            };

        match run_export(api, transport, &self.presentation_id, &config).await {
            Ok(summary) => {
                print_summary(&summary);
                Ok(0)
            }
            Err(e) => Ok(report_failure(&e)),
        }
    }
}

/// Run one export against the given collaborators
///
/// In dry-run mode the planned file paths are printed to stdout and nothing
/// is fetched or written.
///
/// # Errors
///
/// Returns the configuration, lookup or first per-slide error.
pub async fn run_export(
    api: Arc<dyn SlidesApi>,
    transport: Arc<dyn ByteTransport>,
    presentation_id: &str,
    config: &SlideExportConfig,
) -> Result<ExportSummary> {
    let start_time = Instant::now();
    let output = Arc::new(OutputSettings::from_config(&config.output)?);

    let slides = enumerate_slides(api.as_ref(), presentation_id).await?;

    if config.export.dry_run {
        tracing::info!("Dry run mode enabled - no files will be written");
        for job in slides.exportable() {
            println!("{}", output.path_for(job.ordinal).display());
        }
        let summary = ExportSummary::dry_run(slides.jobs.len(), slides.skipped_count())
            .with_duration(start_time.elapsed());
        summary.log_summary();
        return Ok(summary);
    }

    ensure_output_dir(&output.output_dir)?;

    let fetcher = Arc::new(ThumbnailFetcher::new(
        api,
        transport,
        slides.presentation_id.clone(),
    ));
    let coordinator =
        ExportCoordinator::new(fetcher, output, config.export.effective_max_parallel());

    let summary = coordinator.run(slides.jobs).await?;
    summary.log_summary();
    Ok(summary)
}

/// Print the single user-facing error line and pick the exit code
///
/// The coordinator has already logged the failure, so only a debug event is
/// added here.
fn report_failure(error: &SlideExportError) -> i32 {
    let exit_code = exit_code_for(error);
    tracing::debug!(error = %error, exit_code, "Export failed");
    eprintln!("Error: {error}");
    exit_code
}

fn print_summary(summary: &ExportSummary) {
    if summary.dry_run {
        println!(
            "Dry run: {} slide(s) would be exported, {} skipped",
            summary.exportable_slides(),
            summary.skipped_slides
        );
        return;
    }

    println!("Export Summary:");
    println!("  Total slides: {}", summary.total_slides);
    println!("  Skipped: {}", summary.skipped_slides);
    println!("  Exported: {}", summary.exported);
    println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Mutex;
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLog {
        type Writer = CapturedLog;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn args() -> ExportArgs {
        ExportArgs {
            presentation_id: "deck-1".to_string(),
            format: None,
            output: None,
            name: None,
            jpeg_quality: None,
            max_parallel: None,
            dry_run: false,
        }
    }

    #[test]
    fn test_no_overrides_keeps_config() {
        let mut config = SlideExportConfig::default();
        args().apply_overrides(&mut config);

        assert_eq!(config.output.format, OutputFormat::Png);
        assert_eq!(config.output.output_dir, ".");
        assert!(config.export.max_parallel.is_none());
        assert!(!config.export.dry_run);
    }

    #[test]
    fn test_overrides_win_over_config() {
        let mut config = SlideExportConfig::default();
        config.output.jpeg_quality = 50;

        let args = ExportArgs {
            format: Some(OutputFormat::Jpeg),
            output: Some("out".to_string()),
            name: Some("{ordinal}.{ext}".to_string()),
            jpeg_quality: Some(90),
            max_parallel: Some(2),
            dry_run: true,
            ..args()
        };
        args.apply_overrides(&mut config);

        assert_eq!(config.output.format, OutputFormat::Jpeg);
        assert_eq!(config.output.output_dir, "out");
        assert_eq!(config.output.name_template, "{ordinal}.{ext}");
        assert_eq!(config.output.jpeg_quality, 90);
        assert_eq!(config.export.effective_max_parallel(), 2);
        assert!(config.export.dry_run);
    }

    #[tokio::test]
    async fn test_invalid_override_is_config_error() {
        let args = ExportArgs {
            name: Some("fixed.png".to_string()),
            ..args()
        };
        let code = args.execute(SlideExportConfig::default()).await.unwrap();
        assert_eq!(code, 2);
    }

    #[test]
    fn test_report_failure_logs_nothing_at_info() {
        let captured = CapturedLog::default();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_ansi(false)
            .with_writer(captured.clone())
            .finish();

        let error = SlideExportError::Worker("boom".to_string());
        let code = tracing::subscriber::with_default(subscriber, || report_failure(&error));

        assert_eq!(code, 1);
        assert!(captured.0.lock().unwrap().is_empty());
    }
}
