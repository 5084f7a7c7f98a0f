//! Wire models for the Google Slides REST API
//!
//! Only the fields the exporter reads are modelled; everything else in the
//! response is ignored by serde.

use crate::domain::{Presentation, PresentationId, SlideId, SlideRef, SlidesApiError};
use serde::Deserialize;

/// Response of `GET /presentations/{presentationId}`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationResponse {
    #[serde(default)]
    pub presentation_id: Option<String>,

    #[serde(default)]
    pub title: Option<String>,

    /// Slides in presentation order; absent for an empty deck
    #[serde(default)]
    pub slides: Vec<PageResponse>,
}

/// A single page of the presentation
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse {
    pub object_id: String,

    #[serde(default)]
    pub slide_properties: Option<SlidePropertiesResponse>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlidePropertiesResponse {
    #[serde(default)]
    pub is_skipped: bool,
}

/// Response of `GET /presentations/{id}/pages/{pageId}/thumbnail`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThumbnailResponse {
    pub content_url: String,

    #[serde(default)]
    pub width: Option<u32>,

    #[serde(default)]
    pub height: Option<u32>,
}

/// Google API error envelope: `{"error": {"code": 404, "message": "..."}}`
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: String,
}

impl PresentationResponse {
    /// Convert into the domain model, keeping the API's slide order
    ///
    /// The requested id is used when the response omits `presentationId`.
    pub fn into_domain(self, requested: &PresentationId) -> Result<Presentation, SlidesApiError> {
        let presentation_id = match self.presentation_id {
            Some(id) => PresentationId::new(id).map_err(SlidesApiError::InvalidResponse)?,
            None => requested.clone(),
        };

        let slides = self
            .slides
            .into_iter()
            .map(|page| {
                let slide_id = SlideId::new(page.object_id).map_err(|e| {
                    SlidesApiError::InvalidResponse(format!("slide without object id: {e}"))
                })?;
                let skipped = page
                    .slide_properties
                    .map(|p| p.is_skipped)
                    .unwrap_or(false);
                Ok(SlideRef { slide_id, skipped })
            })
            .collect::<Result<Vec<_>, SlidesApiError>>()?;

        Ok(Presentation {
            presentation_id,
            title: self.title,
            slides,
        })
    }
}

/// Pull the human-readable message out of an error body, falling back to the
/// raw text
pub fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) if !envelope.error.message.is_empty() => envelope.error.message,
        _ => body.trim().to_string(),
    }
}
