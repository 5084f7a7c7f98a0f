//! Export coordinator - bounded, fail-fast fan-out over export jobs
//!
//! Jobs are dispatched in ordinal order, each after acquiring a permit from a
//! semaphore of `max_parallel` permits. A worker fetches its thumbnail and then
//! materializes it on a blocking thread, holding the permit throughout.
//!
//! The first worker to fail claims the failure cell and cancels the shared
//! token. After that no further job is dispatched, dispatched workers that have
//! not fetched yet do nothing, and workers that have fetched skip the write.
//! Work already in flight finishes on its own. Every dispatched worker is
//! joined before `run` returns, and only the claimed error is reported.

use crate::core::export::summary::ExportSummary;
use crate::core::fetch::ThumbnailFetcher;
use crate::core::materialize::{materialize, OutputSettings};
use crate::domain::{ExportJob, Result, SlideExportError, UNASSIGNED_ORDINAL};
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};
use std::time::Instant;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

/// Shared abort state of one run
struct FailFast {
    token: CancellationToken,

    /// Ordinal of the job that failed first; set at most once
    first_failure: OnceLock<u32>,
}

impl FailFast {
    fn new() -> Self {
        Self {
            token: CancellationToken::new(),
            first_failure: OnceLock::new(),
        }
    }

    fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Report a failure; only the first reported failure is kept
    fn fail(&self, ordinal: u32, error: SlideExportError) -> JobOutcome {
        if self.first_failure.set(ordinal).is_ok() {
            tracing::warn!(ordinal, error = %error, "Slide export failed, cancelling remaining work");
            self.token.cancel();
            JobOutcome::Failed(error)
        } else {
            tracing::debug!(ordinal, error = %error, "Discarding failure after cancellation");
            JobOutcome::Abandoned { ordinal }
        }
    }
}

/// What a single worker did
enum JobOutcome {
    Written { ordinal: u32, path: PathBuf },
    Abandoned { ordinal: u32 },
    Failed(SlideExportError),
}

/// Export coordinator
pub struct ExportCoordinator {
    fetcher: Arc<ThumbnailFetcher>,
    output: Arc<OutputSettings>,
    max_parallel: usize,
}

impl ExportCoordinator {
    /// Create a coordinator; `max_parallel` below 1 is treated as 1
    pub fn new(
        fetcher: Arc<ThumbnailFetcher>,
        output: Arc<OutputSettings>,
        max_parallel: usize,
    ) -> Self {
        Self {
            fetcher,
            output,
            max_parallel: max_parallel.max(1),
        }
    }

    pub fn max_parallel(&self) -> usize {
        self.max_parallel
    }

    /// Export every non-skipped job
    ///
    /// Skipped jobs are counted in the summary and never dispatched.
    ///
    /// # Errors
    ///
    /// Returns the first per-slide failure, or [`SlideExportError::Worker`] if
    /// a worker task panicked.
    pub async fn run(&self, jobs: Vec<ExportJob>) -> Result<ExportSummary> {
        let start_time = Instant::now();
        let total_slides = jobs.len();
        let (skipped, exportable): (Vec<ExportJob>, Vec<ExportJob>) =
            jobs.into_iter().partition(|job| job.skipped);

        crate::log_export_start!(
            self.fetcher.presentation_id(),
            exportable.len(),
            self.max_parallel
        );

        let mut summary = ExportSummary::new(total_slides, skipped.len());
        let abort = Arc::new(FailFast::new());
        let semaphore = Arc::new(Semaphore::new(self.max_parallel));
        let mut workers = JoinSet::new();

        for job in exportable {
            let permit = tokio::select! {
                biased;
                _ = abort.token.cancelled() => break,
                permit = semaphore.clone().acquire_owned() => permit,
            };
            // The semaphore is never closed
            let Ok(permit) = permit else { break };

            if abort.is_cancelled() {
                break;
            }

            tracing::trace!(ordinal = job.ordinal, slide_id = %job.slide_id, "Dispatching slide");

            let fetcher = Arc::clone(&self.fetcher);
            let output = Arc::clone(&self.output);
            let abort = Arc::clone(&abort);
            workers.spawn(async move {
                let _permit = permit;
                run_job(job, fetcher, output, abort).await
            });
        }

        let mut first_error = None;
        let mut written = Vec::new();

        while let Some(joined) = workers.join_next().await {
            match joined {
                Ok(JobOutcome::Written { ordinal, path }) => written.push((ordinal, path)),
                Ok(JobOutcome::Abandoned { ordinal }) => {
                    tracing::debug!(ordinal, "Slide abandoned after cancellation");
                }
                Ok(JobOutcome::Failed(error)) => first_error = Some(error),
                Err(join_error) => {
                    let error = SlideExportError::Worker(join_error.to_string());
                    if let JobOutcome::Failed(error) = abort.fail(UNASSIGNED_ORDINAL, error) {
                        first_error = Some(error);
                    }
                }
            }
        }

        if let Some(error) = first_error {
            return Err(error);
        }

        written.sort_by_key(|(ordinal, _)| *ordinal);
        for (_, path) in written {
            summary.add_written_file(path);
        }

        let summary = summary.with_duration(start_time.elapsed());
        crate::log_export_complete!(summary.exported, summary.duration);
        Ok(summary)
    }
}

/// Fetch then materialize one slide, honoring cancellation between steps
async fn run_job(
    job: ExportJob,
    fetcher: Arc<ThumbnailFetcher>,
    output: Arc<OutputSettings>,
    abort: Arc<FailFast>,
) -> JobOutcome {
    let ExportJob {
        ordinal, slide_id, ..
    } = job;

    if abort.is_cancelled() {
        return JobOutcome::Abandoned { ordinal };
    }

    let bytes = match fetcher.fetch(&slide_id).await {
        Ok(bytes) => bytes,
        Err(source) => {
            return abort.fail(
                ordinal,
                SlideExportError::Fetch {
                    ordinal,
                    slide_id,
                    source,
                },
            )
        }
    };

    if abort.is_cancelled() {
        return JobOutcome::Abandoned { ordinal };
    }

    let materialized =
        tokio::task::spawn_blocking(move || materialize(&bytes, ordinal, &output)).await;

    match materialized {
        Ok(Ok(path)) => JobOutcome::Written { ordinal, path },
        Ok(Err(source)) => abort.fail(
            ordinal,
            SlideExportError::Materialize {
                ordinal,
                slide_id,
                source,
            },
        ),
        Err(join_error) => abort.fail(ordinal, SlideExportError::Worker(join_error.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_first_failure_is_kept() {
        let abort = FailFast::new();

        let first = abort.fail(2, SlideExportError::Worker("first".to_string()));
        let second = abort.fail(3, SlideExportError::Worker("second".to_string()));

        assert!(abort.is_cancelled());
        assert!(matches!(first, JobOutcome::Failed(SlideExportError::Worker(ref m)) if m == "first"));
        assert!(matches!(second, JobOutcome::Abandoned { ordinal: 3 }));
        assert_eq!(abort.first_failure.get(), Some(&2));
    }
}
