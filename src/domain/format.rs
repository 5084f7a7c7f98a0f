//! Output raster formats

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Raster format written for each slide
///
/// `jpg` is accepted as an alias of `jpeg` everywhere a format is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Lossless PNG
    #[default]
    Png,
    /// Lossy JPEG, quality taken from the output configuration
    #[serde(alias = "jpg")]
    Jpeg,
}

impl OutputFormat {
    /// File suffix used in generated names
    pub fn suffix(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpeg => "jpg",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Png => write!(f, "png"),
            OutputFormat::Jpeg => write!(f, "jpeg"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "png" => Ok(OutputFormat::Png),
            "jpeg" | "jpg" => Ok(OutputFormat::Jpeg),
            other => Err(format!(
                "Invalid image format '{other}'. Must be one of: png, jpeg, jpg"
            )),
        }
    }
}
