//! Domain models and types.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`PresentationId`], [`SlideId`])
//! - **Domain models** ([`Presentation`], [`SlideRef`], [`ExportJob`], [`OutputFormat`])
//! - **Error types** ([`SlideExportError`] and the per-stage errors)
//! - **Result type alias** ([`Result`])
//!
//! # Type Safety
//!
//! Identifiers use the newtype pattern so a slide id can never be passed where
//! a presentation id is expected:
//!
//! ```rust
//! use slide_export::domain::{PresentationId, SlideId};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let presentation = PresentationId::new("deck-123")?;
//! let slide = SlideId::new("g1f2e3d4c5_0_12")?;
//!
//! // let wrong: PresentationId = slide;  // Compile error!
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod format;
pub mod ids;
pub mod job;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::{
    FetchError, LookupError, MaterializeError, SlideExportError, SlidesApiError, TransportError,
};
pub use format::OutputFormat;
pub use ids::{PresentationId, SlideId};
pub use job::{ExportJob, Presentation, SlideRef, UNASSIGNED_ORDINAL};
pub use result::Result;
