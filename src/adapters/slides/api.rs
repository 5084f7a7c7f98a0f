//! Slides API trait
//!
//! The exporter only needs two read operations from the Slides service. They
//! sit behind a trait so the pipeline can run against an in-memory fake.

use crate::domain::{Presentation, PresentationId, SlideId, SlidesApiError};
use async_trait::async_trait;

/// Read access to presentation metadata and slide thumbnails
///
/// # Example
///
/// ```no_run
/// use slide_export::adapters::slides::{GoogleSlidesClient, SlidesApi};
/// use slide_export::config::SlidesConfig;
/// use slide_export::domain::PresentationId;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = GoogleSlidesClient::new(&SlidesConfig::default())?;
/// let id = PresentationId::new("1EAYk18WDjIG-zp_0vLm3CsfQh_i8eXc67Jo2O9C6Vuc")?;
///
/// let presentation = client.get_presentation(&id).await?;
/// for slide in &presentation.slides {
///     let url = client.get_thumbnail_url(&id, &slide.slide_id).await?;
///     println!("{} -> {}", slide.slide_id, url);
/// }
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait SlidesApi: Send + Sync {
    /// Fetch the presentation with its slides in presentation order
    async fn get_presentation(
        &self,
        presentation_id: &PresentationId,
    ) -> Result<Presentation, SlidesApiError>;

    /// Resolve a slide to the URL its rendered thumbnail can be downloaded from
    async fn get_thumbnail_url(
        &self,
        presentation_id: &PresentationId,
        slide_id: &SlideId,
    ) -> Result<String, SlidesApiError>;
}
