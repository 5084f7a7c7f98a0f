//! External system integrations.
//!
//! - [`slides`] - Google Slides REST API (metadata and thumbnail lookup)
//! - [`transport`] - plain HTTP download of thumbnail bytes
//!
//! Both sit behind traits ([`slides::SlidesApi`], [`transport::ByteTransport`])
//! so the export pipeline can be exercised with in-memory fakes.
//!
//! ```rust,no_run
//! use slide_export::adapters::slides::GoogleSlidesClient;
//! use slide_export::adapters::transport::HttpTransport;
//! use slide_export::config::SlidesConfig;
//! use std::time::Duration;
//!
//! # fn example() -> slide_export::domain::Result<()> {
//! let config = SlidesConfig::default();
//! let api = GoogleSlidesClient::new(&config)?;
//! let transport = HttpTransport::new(Duration::from_secs(config.timeout_seconds))?;
//! # Ok(())
//! # }
//! ```

pub mod slides;
pub mod transport;
