//! Google Slides integration
//!
//! - [`api`] - the [`SlidesApi`] trait the pipeline depends on
//! - [`google`] - reqwest implementation against the public REST API
//! - [`models`] - JSON wire types

pub mod api;
pub mod google;
pub mod models;

pub use api::SlidesApi;
pub use google::GoogleSlidesClient;
