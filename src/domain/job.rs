//! Presentation metadata and per-slide export jobs

use crate::domain::ids::{PresentationId, SlideId};

/// A presentation as returned by the metadata lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    /// Presentation identifier
    pub presentation_id: PresentationId,

    /// Presentation title, if the API returned one
    pub title: Option<String>,

    /// Slides in presentation order
    pub slides: Vec<SlideRef>,
}

/// One slide entry of a presentation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideRef {
    /// Slide identifier
    pub slide_id: SlideId,

    /// Whether the slide is hidden from presentation mode
    pub skipped: bool,
}

impl SlideRef {
    /// Create a visible slide entry
    pub fn visible(slide_id: SlideId) -> Self {
        Self {
            slide_id,
            skipped: false,
        }
    }

    /// Create a skipped slide entry
    pub fn skipped(slide_id: SlideId) -> Self {
        Self {
            slide_id,
            skipped: true,
        }
    }
}

/// Ordinal carried by skipped jobs; never used for a file name.
pub const UNASSIGNED_ORDINAL: u32 = 0;

/// One unit of work for the export coordinator
///
/// Visible slides get dense ordinals starting at 1 in enumeration order.
/// Skipped slides keep [`UNASSIGNED_ORDINAL`] and are dropped before dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportJob {
    /// 1-based export position among non-skipped slides
    pub ordinal: u32,

    /// Slide to export
    pub slide_id: SlideId,

    /// Whether the slide is excluded from the export
    pub skipped: bool,
}

impl ExportJob {
    /// Create a job for a visible slide
    pub fn new(ordinal: u32, slide_id: SlideId) -> Self {
        Self {
            ordinal,
            slide_id,
            skipped: false,
        }
    }

    /// Create a placeholder for a skipped slide
    pub fn skipped(slide_id: SlideId) -> Self {
        Self {
            ordinal: UNASSIGNED_ORDINAL,
            slide_id,
            skipped: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skipped_job_has_no_ordinal() {
        let job = ExportJob::skipped(SlideId::new("p3").unwrap());
        assert!(job.skipped);
        assert_eq!(job.ordinal, UNASSIGNED_ORDINAL);
    }

    #[test]
    fn test_slide_ref_constructors() {
        let id = SlideId::new("p1").unwrap();
        assert!(!SlideRef::visible(id.clone()).skipped);
        assert!(SlideRef::skipped(id).skipped);
    }
}
