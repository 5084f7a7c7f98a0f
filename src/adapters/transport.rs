//! Raw byte transport for thumbnail downloads
//!
//! Thumbnail content URLs are short-lived and already authorized, so they are
//! fetched without API credentials.

use crate::domain::{Result, SlideExportError, TransportError};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;

/// Download the full body of a URL
#[async_trait]
pub trait ByteTransport: Send + Sync {
    /// GET `url` and return the body
    ///
    /// Non-2xx responses are errors; there are no retries.
    async fn get(&self, url: &str) -> std::result::Result<Vec<u8>, TransportError>;
}

/// reqwest-backed [`ByteTransport`]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport with the given request timeout
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(30))
            .user_agent(concat!("slide-export/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                SlideExportError::Configuration(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self { client })
    }
}

#[async_trait]
impl ByteTransport for HttpTransport {
    async fn get(&self, url: &str) -> std::result::Result<Vec<u8>, TransportError> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| TransportError::Connection(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
            });
        }

        let bytes = resp
            .bytes()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;

        tracing::trace!(bytes = bytes.len(), "Downloaded thumbnail");
        Ok(bytes.to_vec())
    }
}
