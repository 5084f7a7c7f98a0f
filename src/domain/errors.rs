//! Domain error types
//!
//! This module defines the error hierarchy for slide exports. Errors are split
//! by pipeline stage (lookup, fetch, materialize) and none of them expose
//! third-party types, so adapters convert HTTP and codec failures into strings.

use crate::domain::ids::SlideId;
use thiserror::Error;

/// Main error type
///
/// Exactly one of these is surfaced per run. Per-slide failures carry the
/// ordinal and slide id of the job that failed first.
#[derive(Debug, Error)]
pub enum SlideExportError {
    /// Bad or missing input detected before any work starts
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Slide enumeration failed
    #[error("Lookup error: {0}")]
    Lookup(#[from] LookupError),

    /// Thumbnail resolution or download failed for one slide
    #[error("Slide {ordinal} ({slide_id}): {source}")]
    Fetch {
        ordinal: u32,
        slide_id: SlideId,
        #[source]
        source: FetchError,
    },

    /// Decode, encode or write failed for one slide
    #[error("Slide {ordinal} ({slide_id}): {source}")]
    Materialize {
        ordinal: u32,
        slide_id: SlideId,
        #[source]
        source: MaterializeError,
    },

    /// A worker task panicked or was torn down
    #[error("Worker error: {0}")]
    Worker(String),

    /// Filesystem errors outside of a single slide (e.g. output directory)
    #[error("I/O error: {0}")]
    Io(String),
}

/// Errors returned by the Slides REST API adapter
#[derive(Debug, Error)]
pub enum SlidesApiError {
    /// Failed to reach the API
    #[error("Failed to connect to Slides API: {0}")]
    ConnectionFailed(String),

    /// Presentation or page does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Caller is not allowed to read the presentation (401/403)
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Any other non-success status
    #[error("Slides API returned {status}: {message}")]
    Status { status: u16, message: String },

    /// Body could not be decoded into the expected shape
    #[error("Invalid response from Slides API: {0}")]
    InvalidResponse(String),
}

/// Enumeration failures
#[derive(Debug, Error)]
pub enum LookupError {
    /// The presentation id was empty or unspecified
    #[error("presentation id must be specified")]
    MissingPresentationId,

    /// The metadata lookup itself failed
    #[error("failed to look up presentation: {0}")]
    Api(#[from] SlidesApiError),
}

/// Errors from the raw byte transport
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection, TLS or timeout failure
    #[error("connection failed: {0}")]
    Connection(String),

    /// Server answered with a non-2xx status
    #[error("unexpected status {status}")]
    Status { status: u16 },

    /// Body could not be read to the end
    #[error("failed to read response body: {0}")]
    Body(String),
}

/// Thumbnail fetch failures
#[derive(Debug, Error)]
pub enum FetchError {
    /// Resolving the slide to a content URL failed
    #[error("failed to resolve thumbnail URL: {0}")]
    Resolve(#[source] SlidesApiError),

    /// Downloading the content URL failed
    #[error("failed to download thumbnail: {0}")]
    Transport(#[source] TransportError),
}

/// Image materialization failures
#[derive(Debug, Error)]
pub enum MaterializeError {
    /// Bytes are not a recognized raster format
    #[error("failed to decode image: {0}")]
    Decode(String),

    /// The codec rejected the image or options
    #[error("failed to encode image: {0}")]
    Encode(String),

    /// Creating, writing, syncing or renaming the file failed
    #[error("failed to write image: {0}")]
    Io(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for MaterializeError {
    fn from(err: std::io::Error) -> Self {
        MaterializeError::Io(err.to_string())
    }
}

impl From<std::io::Error> for SlideExportError {
    fn from(err: std::io::Error) -> Self {
        SlideExportError::Io(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for SlideExportError {
    fn from(err: toml::de::Error) -> Self {
        SlideExportError::Configuration(format!("TOML parse error: {err}"))
    }
}
