//! Export summary and reporting

use std::path::PathBuf;
use std::time::Duration;

/// Summary of an export run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportSummary {
    /// Slides in the presentation, skipped ones included
    pub total_slides: usize,

    /// Slides excluded because they are marked skipped
    pub skipped_slides: usize,

    /// Files written
    pub exported: usize,

    /// Written files in ordinal order
    pub written_files: Vec<PathBuf>,

    /// Wall-clock duration of the run
    pub duration: Duration,

    /// True when nothing was fetched or written
    pub dry_run: bool,
}

impl ExportSummary {
    /// Create an empty summary for a presentation of `total_slides`
    pub fn new(total_slides: usize, skipped_slides: usize) -> Self {
        Self {
            total_slides,
            skipped_slides,
            ..Default::default()
        }
    }

    /// Summary of a dry run; nothing is written
    pub fn dry_run(total_slides: usize, skipped_slides: usize) -> Self {
        Self {
            dry_run: true,
            ..Self::new(total_slides, skipped_slides)
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Record a written file
    pub fn add_written_file(&mut self, path: PathBuf) {
        self.written_files.push(path);
        self.exported = self.written_files.len();
    }

    /// Number of slides that should have produced a file
    pub fn exportable_slides(&self) -> usize {
        self.total_slides.saturating_sub(self.skipped_slides)
    }

    /// Check that every exportable slide was written
    pub fn is_complete(&self) -> bool {
        self.dry_run || self.exported == self.exportable_slides()
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            total_slides = self.total_slides,
            skipped_slides = self.skipped_slides,
            exported = self.exported,
            dry_run = self.dry_run,
            duration_ms = self.duration.as_millis(),
            "Export summary"
        );

        if !self.is_complete() {
            tracing::warn!(
                expected = self.exportable_slides(),
                exported = self.exported,
                "Export summary does not cover every slide"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_summary_creation() {
        let summary = ExportSummary::new(5, 1);

        assert_eq!(summary.total_slides, 5);
        assert_eq!(summary.skipped_slides, 1);
        assert_eq!(summary.exported, 0);
        assert_eq!(summary.exportable_slides(), 4);
        assert_eq!(summary.duration, Duration::from_secs(0));
        assert!(!summary.dry_run);
        assert!(!summary.is_complete());
    }

    #[test]
    fn test_add_written_file() {
        let mut summary = ExportSummary::new(2, 0);
        summary.add_written_file(PathBuf::from("slide0001.png"));
        summary.add_written_file(PathBuf::from("slide0002.png"));

        assert_eq!(summary.exported, 2);
        assert!(summary.is_complete());
    }

    #[test]
    fn test_dry_run_is_complete_without_files() {
        let summary = ExportSummary::dry_run(3, 1).with_duration(Duration::from_millis(5));
        assert!(summary.dry_run);
        assert!(summary.is_complete());
        assert_eq!(summary.duration, Duration::from_millis(5));
    }
}
