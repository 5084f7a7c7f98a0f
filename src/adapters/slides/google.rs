//! Google Slides REST API client
//!
//! Talks to `presentations.get` and `presentations.pages.getThumbnail`.
//! Credentials are optional: a bearer token is sent as `Authorization`, an
//! API key as the `key` query parameter.

use super::api::SlidesApi;
use super::models::{error_message, PresentationResponse, ThumbnailResponse};
use crate::config::{SecretString, SlidesConfig};
use crate::domain::{
    Presentation, PresentationId, Result, SlideExportError, SlideId, SlidesApiError,
};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, StatusCode};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

/// Google Slides API client
pub struct GoogleSlidesClient {
    /// Parsed API base, e.g. `https://slides.googleapis.com/v1`
    base_url: Url,

    /// Base URL as configured, returned by [`GoogleSlidesClient::base_url`]
    base_url_raw: String,

    client: Client,
    access_token: Option<SecretString>,
    api_key: Option<SecretString>,
    thumbnail_size: String,
}

impl GoogleSlidesClient {
    /// Create a client from the `[slides]` configuration section
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the base URL cannot be parsed or the
    /// HTTP client cannot be built.
    pub fn new(config: &SlidesConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            SlideExportError::Configuration(format!(
                "Invalid slides.base_url '{}': {}",
                config.base_url, e
            ))
        })?;

        if base_url.cannot_be_a_base() {
            return Err(SlideExportError::Configuration(format!(
                "slides.base_url '{}' cannot be used as a base URL",
                config.base_url
            )));
        }

        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(30))
            .user_agent(concat!("slide-export/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                SlideExportError::Configuration(format!("Failed to build HTTP client: {e}"))
            })?;

        tracing::debug!(base_url = %base_url, "Slides API client configured");

        Ok(Self {
            base_url,
            base_url_raw: config.base_url.trim_end_matches('/').to_string(),
            client,
            access_token: config.access_token.clone(),
            api_key: config.api_key.clone(),
            thumbnail_size: config.thumbnail_size.to_uppercase(),
        })
    }

    /// Base URL requests are sent to, without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url_raw
    }

    /// Append path segments to the base URL, percent-encoding each one
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        resource: &str,
    ) -> std::result::Result<T, SlidesApiError> {
        tracing::debug!(url = %url, "Slides API request");

        let mut request = self.client.get(url);

        if let Some(token) = &self.access_token {
            let token: &str = token.expose_secret().as_ref();
            request = request.bearer_auth(token);
        }
        if let Some(key) = &self.api_key {
            let key: &str = key.expose_secret().as_ref();
            request = request.query(&[("key", key)]);
        }

        let resp = request
            .send()
            .await
            .map_err(|e| SlidesApiError::ConnectionFailed(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(status_error(status, resource, &body));
        }

        resp.json::<T>()
            .await
            .map_err(|e| SlidesApiError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl SlidesApi for GoogleSlidesClient {
    async fn get_presentation(
        &self,
        presentation_id: &PresentationId,
    ) -> std::result::Result<Presentation, SlidesApiError> {
        let url = self.endpoint(&["presentations", presentation_id.as_str()]);
        let resource = format!("presentation {presentation_id}");

        let response: PresentationResponse = self.get_json(url, &resource).await?;
        let presentation = response.into_domain(presentation_id)?;

        tracing::debug!(
            presentation_id = %presentation.presentation_id,
            slides = presentation.slides.len(),
            "Fetched presentation metadata"
        );

        Ok(presentation)
    }

    async fn get_thumbnail_url(
        &self,
        presentation_id: &PresentationId,
        slide_id: &SlideId,
    ) -> std::result::Result<String, SlidesApiError> {
        let mut url = self.endpoint(&[
            "presentations",
            presentation_id.as_str(),
            "pages",
            slide_id.as_str(),
            "thumbnail",
        ]);
        url.query_pairs_mut()
            .append_pair("thumbnailProperties.mimeType", "PNG")
            .append_pair("thumbnailProperties.thumbnailSize", &self.thumbnail_size);

        let resource = format!("slide {slide_id} of presentation {presentation_id}");
        let thumbnail: ThumbnailResponse = self.get_json(url, &resource).await?;

        if thumbnail.content_url.trim().is_empty() {
            return Err(SlidesApiError::InvalidResponse(format!(
                "empty contentUrl for {resource}"
            )));
        }

        tracing::trace!(
            slide_id = %slide_id,
            width = thumbnail.width,
            height = thumbnail.height,
            "Resolved thumbnail"
        );

        Ok(thumbnail.content_url)
    }
}

fn status_error(status: StatusCode, resource: &str, body: &str) -> SlidesApiError {
    match status {
        StatusCode::NOT_FOUND => SlidesApiError::NotFound(resource.to_string()),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            SlidesApiError::PermissionDenied(format!("{resource}: {}", error_message(body)))
        }
        _ => SlidesApiError::Status {
            status: status.as_u16(),
            message: error_message(body),
        },
    }
}
