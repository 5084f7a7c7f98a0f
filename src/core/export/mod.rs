//! Export orchestration
//!
//! - [`coordinator`] - bounded, fail-fast worker pool over export jobs
//! - [`summary`] - run summary and reporting

pub mod coordinator;
pub mod summary;

pub use coordinator::ExportCoordinator;
pub use summary::ExportSummary;
