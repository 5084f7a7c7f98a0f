//! Core export pipeline.
//!
//! # Modules
//!
//! - [`enumerate`] - presentation id to ordered export jobs
//! - [`fetch`] - slide id to thumbnail bytes
//! - [`materialize`] - bytes to an encoded file on disk
//! - [`template`] - output file name templates
//! - [`export`] - concurrent coordination and summary
//!
//! # Example
//!
//! ```rust,no_run
//! use slide_export::adapters::slides::GoogleSlidesClient;
//! use slide_export::adapters::transport::HttpTransport;
//! use slide_export::config::load_config;
//! use slide_export::core::enumerate::enumerate_slides;
//! use slide_export::core::export::ExportCoordinator;
//! use slide_export::core::fetch::ThumbnailFetcher;
//! use slide_export::core::materialize::OutputSettings;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("slide-export.toml")?;
//! let api = Arc::new(GoogleSlidesClient::new(&config.slides)?);
//! let transport = Arc::new(HttpTransport::new(Duration::from_secs(60))?);
//!
//! let slides = enumerate_slides(api.as_ref(), "1EAYk18WDjIG-zp_0vLm3CsfQh_i8eXc67Jo2O9C6Vuc").await?;
//! let fetcher = Arc::new(ThumbnailFetcher::new(api, transport, slides.presentation_id.clone()));
//! let output = Arc::new(OutputSettings::from_config(&config.output)?);
//!
//! let coordinator = ExportCoordinator::new(fetcher, output, config.export.effective_max_parallel());
//! let summary = coordinator.run(slides.jobs).await?;
//! println!("Exported {} slides", summary.exported);
//! # Ok(())
//! # }
//! ```

pub mod enumerate;
pub mod export;
pub mod fetch;
pub mod materialize;
pub mod template;
