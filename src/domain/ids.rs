//! Domain identifier types with validation
//!
//! Newtype wrappers for Google Slides identifiers. Both identifiers are opaque
//! strings; the only rule enforced here is that they are not blank.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Presentation identifier newtype wrapper
///
/// The opaque id that appears in a presentation URL
/// (`https://docs.google.com/presentation/d/<id>/edit`).
///
/// # Examples
///
/// ```
/// use slide_export::domain::ids::PresentationId;
/// use std::str::FromStr;
///
/// let id = PresentationId::from_str("1EAYk18WDjIG-zp_0vLm3CsfQh_i8eXc67Jo2O9C6Vuc").unwrap();
/// assert_eq!(id.as_str(), "1EAYk18WDjIG-zp_0vLm3CsfQh_i8eXc67Jo2O9C6Vuc");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PresentationId(String);

impl PresentationId {
    /// Creates a new PresentationId from a string
    ///
    /// Returns `Err` if the identifier is empty or whitespace only.
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Presentation ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the presentation ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PresentationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PresentationId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for PresentationId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Slide (page object) identifier newtype wrapper
///
/// Names one slide within a presentation; the API calls it `objectId`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlideId(String);

impl SlideId {
    /// Creates a new SlideId from a string
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Slide ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the slide ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SlideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SlideId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for SlideId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
