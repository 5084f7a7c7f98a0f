//! CLI command implementations

pub mod export;
pub mod validate;

use crate::domain::{LookupError, SlideExportError};

/// Process exit code for a failed run
///
/// - 1: a slide failed to fetch, decode, encode or write
/// - 2: configuration error (including a blank presentation id)
/// - 4: presentation lookup failed
pub fn exit_code_for(error: &SlideExportError) -> i32 {
    match error {
        SlideExportError::Configuration(_) => 2,
        SlideExportError::Lookup(LookupError::MissingPresentationId) => 2,
        SlideExportError::Lookup(LookupError::Api(_)) => 4,
        SlideExportError::Fetch { .. }
        | SlideExportError::Materialize { .. }
        | SlideExportError::Worker(_)
        | SlideExportError::Io(_) => 1,
    }
}
