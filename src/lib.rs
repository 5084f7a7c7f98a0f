// slide-export - Google Slides to image exporter
// Copyright (c) 2025 slide-export Contributors
// Licensed under the MIT License

//! # slide-export
//!
//! Exports every visible slide of a Google Slides presentation as a local
//! PNG or JPEG file.
//!
//! ## Overview
//!
//! For each slide the exporter resolves a thumbnail URL through the Slides
//! REST API, downloads the image, re-encodes it in the requested format and
//! writes it under a name derived from the slide's position. Slides are
//! processed concurrently with a fixed upper bound, and the first failure
//! stops the remaining work.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Enumeration, fetching, materialization and coordination
//! - [`adapters`] - Google Slides API client and HTTP transport
//! - [`domain`] - Identifiers, jobs, formats and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use slide_export::adapters::slides::GoogleSlidesClient;
//! use slide_export::adapters::transport::HttpTransport;
//! use slide_export::cli::commands::export::run_export;
//! use slide_export::config::load_config;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("slide-export.toml")?;
//!     let api = Arc::new(GoogleSlidesClient::new(&config.slides)?);
//!     let transport = Arc::new(HttpTransport::new(Duration::from_secs(60))?);
//!
//!     let summary = run_export(api, transport, "1EAYk18WDjIG-zp_0vLm3CsfQh_i8eXc67Jo2O9C6Vuc", &config).await?;
//!     println!("Exported {} slides", summary.exported);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations return [`domain::SlideExportError`]. A run reports
//! exactly one error: the first slide that failed, or the lookup or
//! configuration problem that stopped it from starting.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
