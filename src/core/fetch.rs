//! Thumbnail fetching
//!
//! Two steps per slide: resolve the thumbnail content URL through the Slides
//! API, then download it. No retries.

use crate::adapters::slides::SlidesApi;
use crate::adapters::transport::ByteTransport;
use crate::domain::{FetchError, PresentationId, SlideId};
use std::sync::Arc;

/// Fetches the rendered thumbnail bytes of slides in one presentation
pub struct ThumbnailFetcher {
    api: Arc<dyn SlidesApi>,
    transport: Arc<dyn ByteTransport>,
    presentation_id: PresentationId,
}

impl ThumbnailFetcher {
    pub fn new(
        api: Arc<dyn SlidesApi>,
        transport: Arc<dyn ByteTransport>,
        presentation_id: PresentationId,
    ) -> Self {
        Self {
            api,
            transport,
            presentation_id,
        }
    }

    pub fn presentation_id(&self) -> &PresentationId {
        &self.presentation_id
    }

    /// Resolve and download one slide's thumbnail
    ///
    /// # Errors
    ///
    /// [`FetchError::Resolve`] if the URL lookup fails, [`FetchError::Transport`]
    /// if the download fails or returns a non-2xx status.
    pub async fn fetch(&self, slide_id: &SlideId) -> Result<Vec<u8>, FetchError> {
        let url = self
            .api
            .get_thumbnail_url(&self.presentation_id, slide_id)
            .await
            .map_err(FetchError::Resolve)?;

        tracing::debug!(slide_id = %slide_id, "Downloading thumbnail");

        let bytes = self
            .transport
            .get(&url)
            .await
            .map_err(FetchError::Transport)?;

        tracing::debug!(slide_id = %slide_id, bytes = bytes.len(), "Fetched thumbnail");
        Ok(bytes)
    }
}
