//! Slide enumeration
//!
//! Turns a presentation id into the ordered list of export jobs. Ordinals are
//! dense over the visible slides: with slides `[a, b(skipped), c]` the jobs are
//! `a -> 1`, `b -> skipped`, `c -> 2`.

use crate::adapters::slides::SlidesApi;
use crate::domain::{ExportJob, LookupError, PresentationId, SlideRef};

/// Result of enumerating a presentation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumeratedSlides {
    pub presentation_id: PresentationId,
    pub title: Option<String>,

    /// One job per slide in presentation order, skipped slides included
    pub jobs: Vec<ExportJob>,
}

impl EnumeratedSlides {
    /// Jobs that will actually be fetched and written
    pub fn exportable(&self) -> impl Iterator<Item = &ExportJob> {
        self.jobs.iter().filter(|job| !job.skipped)
    }

    pub fn exportable_count(&self) -> usize {
        self.exportable().count()
    }

    pub fn skipped_count(&self) -> usize {
        self.jobs.iter().filter(|job| job.skipped).count()
    }
}

/// Look up a presentation and build its export jobs
///
/// Calls [`SlidesApi::get_presentation`] exactly once.
///
/// # Errors
///
/// Returns [`LookupError::MissingPresentationId`] for a blank id, or
/// [`LookupError::Api`] when the lookup fails.
pub async fn enumerate_slides(
    api: &dyn SlidesApi,
    presentation_id: &str,
) -> Result<EnumeratedSlides, LookupError> {
    let presentation_id =
        PresentationId::new(presentation_id).map_err(|_| LookupError::MissingPresentationId)?;

    tracing::debug!(presentation_id = %presentation_id, "Enumerating slides");

    let presentation = api.get_presentation(&presentation_id).await?;
    let jobs = jobs_from_slides(&presentation.slides);

    let enumerated = EnumeratedSlides {
        presentation_id: presentation.presentation_id,
        title: presentation.title,
        jobs,
    };

    tracing::info!(
        presentation_id = %enumerated.presentation_id,
        slides = enumerated.jobs.len(),
        skipped = enumerated.skipped_count(),
        "Enumerated presentation"
    );

    Ok(enumerated)
}

/// Assign ordinals to slides in order, counting only visible ones
pub fn jobs_from_slides(slides: &[SlideRef]) -> Vec<ExportJob> {
    let mut next_ordinal = 1u32;
    slides
        .iter()
        .map(|slide| {
            if slide.skipped {
                ExportJob::skipped(slide.slide_id.clone())
            } else {
                let job = ExportJob::new(next_ordinal, slide.slide_id.clone());
                next_ordinal += 1;
                job
            }
        })
        .collect()
}
