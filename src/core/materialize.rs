//! Image materialization
//!
//! Decodes fetched thumbnail bytes, re-encodes them in the configured format
//! and writes the result under a name derived from the slide ordinal.
//!
//! The source format is sniffed from the bytes. Output is written to a
//! temporary file in the destination directory, synced and then renamed over
//! the destination, so a final file only ever appears complete.

use crate::config::OutputConfig;
use crate::core::template::NameTemplate;
use crate::domain::{MaterializeError, OutputFormat, Result, SlideExportError};
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{DynamicImage, ImageError};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Immutable output settings shared by all workers of a run
#[derive(Debug, Clone)]
pub struct OutputSettings {
    pub format: OutputFormat,
    pub output_dir: PathBuf,
    pub name_template: NameTemplate,

    /// Only used for JPEG; range-checked when the configuration is validated
    pub jpeg_quality: u8,
}

impl OutputSettings {
    /// Build settings from the `[output]` configuration section
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the name template does not parse.
    pub fn from_config(config: &OutputConfig) -> Result<Self> {
        let name_template = NameTemplate::parse(&config.name_template).map_err(|e| {
            SlideExportError::Configuration(format!("Invalid output.name_template: {e}"))
        })?;

        Ok(Self {
            format: config.format,
            output_dir: PathBuf::from(&config.output_dir),
            name_template,
            jpeg_quality: config.jpeg_quality,
        })
    }

    /// File name for an ordinal, e.g. `slide0003.png`
    pub fn file_name(&self, ordinal: u32) -> String {
        self.name_template.render(ordinal, self.format.suffix())
    }

    /// Destination path for an ordinal
    pub fn path_for(&self, ordinal: u32) -> PathBuf {
        self.output_dir.join(self.file_name(ordinal))
    }
}

/// Create the output directory (and parents) if missing
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|e| {
        SlideExportError::Io(format!(
            "Failed to create output directory {}: {}",
            dir.display(),
            e
        ))
    })
}

/// Decode image bytes, detecting the format from their content
pub fn decode(bytes: &[u8]) -> std::result::Result<DynamicImage, MaterializeError> {
    image::load_from_memory(bytes).map_err(|e| MaterializeError::Decode(e.to_string()))
}

/// Encode `image` in `format` into `writer`
///
/// JPEG has no alpha channel, so the image is flattened to RGB first.
pub fn encode<W: Write>(
    image: &DynamicImage,
    format: OutputFormat,
    jpeg_quality: u8,
    writer: W,
) -> std::result::Result<(), MaterializeError> {
    let result = match format {
        OutputFormat::Png => image.write_with_encoder(PngEncoder::new(writer)),
        OutputFormat::Jpeg => {
            let rgb = DynamicImage::ImageRgb8(image.to_rgb8());
            rgb.write_with_encoder(JpegEncoder::new_with_quality(writer, jpeg_quality))
        }
    };

    result.map_err(|e| match e {
        ImageError::IoError(io) => MaterializeError::Io(io.to_string()),
        other => MaterializeError::Encode(other.to_string()),
    })
}

/// Decode, re-encode and write one slide image
///
/// Blocking; callers on an async runtime should run it on a blocking thread.
/// Returns the path of the written file.
pub fn materialize(
    bytes: &[u8],
    ordinal: u32,
    output: &OutputSettings,
) -> std::result::Result<PathBuf, MaterializeError> {
    let image = decode(bytes)?;
    let target = output.path_for(ordinal);

    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = tempfile::Builder::new()
        .prefix(".slide-export-")
        .suffix(".tmp")
        .tempfile_in(dir)?;

    {
        let mut writer = BufWriter::new(temp.as_file_mut());
        encode(&image, output.format, output.jpeg_quality, &mut writer)?;
        writer.flush()?;
    }
    temp.as_file().sync_all()?;

    // A dropped temp file is removed, so nothing partial is left behind
    temp.persist(&target)
        .map_err(|e| MaterializeError::Io(e.error.to_string()))?;

    crate::log_slide_created!(ordinal, target);
    Ok(target)
}
