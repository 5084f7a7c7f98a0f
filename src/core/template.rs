//! Output file name templates
//!
//! A template is literal text with two placeholders:
//!
//! - `{ordinal}` - the slide ordinal; `{ordinal:4}` pads with spaces and
//!   `{ordinal:04}` pads with zeros to the given width
//! - `{ext}` - the format suffix (`png` or `jpg`)
//!
//! Rendering is a pure function of (ordinal, suffix), so the same inputs
//! always produce the same file name.

use regex::Regex;
use std::fmt;

const PLACEHOLDER_PATTERN: &str = r"\{([A-Za-z_]+)(?::(0)?([0-9]{1,2}))?\}";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Ordinal { width: usize, zero_pad: bool },
    Ext,
}

/// A parsed file name template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameTemplate {
    raw: String,
    segments: Vec<Segment>,
}

impl NameTemplate {
    /// Parse and validate a template
    ///
    /// # Errors
    ///
    /// Returns an error if the template is empty, uses an unknown placeholder,
    /// contains a path separator, or lacks `{ordinal}` or `{ext}`.
    ///
    /// # Example
    ///
    /// ```
    /// use slide_export::core::template::NameTemplate;
    ///
    /// let template = NameTemplate::parse("slide{ordinal:03}.{ext}").unwrap();
    /// assert_eq!(template.render(7, "png"), "slide007.png");
    /// ```
    pub fn parse(raw: &str) -> Result<Self, String> {
        if raw.trim().is_empty() {
            return Err("template cannot be empty".to_string());
        }
        if raw.contains('/') || raw.contains('\\') {
            return Err(format!("template '{raw}' must not contain path separators"));
        }

        let re = Regex::new(PLACEHOLDER_PATTERN).map_err(|e| e.to_string())?;
        let mut segments = Vec::new();
        let mut last_end = 0;
        let mut has_ordinal = false;
        let mut has_ext = false;

        for caps in re.captures_iter(raw) {
            let Some(whole) = caps.get(0) else { continue };
            if whole.start() > last_end {
                segments.push(Segment::Literal(raw[last_end..whole.start()].to_string()));
            }
            last_end = whole.end();

            let width = caps
                .get(3)
                .map(|m| m.as_str().parse::<usize>().unwrap_or(0))
                .unwrap_or(0);
            let zero_pad = caps.get(2).is_some();

            match &caps[1] {
                "ordinal" => {
                    has_ordinal = true;
                    segments.push(Segment::Ordinal { width, zero_pad });
                }
                "ext" => {
                    if caps.get(3).is_some() {
                        return Err("{ext} does not take a width".to_string());
                    }
                    has_ext = true;
                    segments.push(Segment::Ext);
                }
                other => return Err(format!("unknown placeholder '{{{other}}}'")),
            }
        }
        if last_end < raw.len() {
            segments.push(Segment::Literal(raw[last_end..].to_string()));
        }

        let stray_brace = segments.iter().any(|s| match s {
            Segment::Literal(text) => text.contains('{') || text.contains('}'),
            _ => false,
        });
        if stray_brace {
            return Err(format!("template '{raw}' contains a malformed placeholder"));
        }
        if !has_ordinal {
            return Err(format!("template '{raw}' must contain {{ordinal}}"));
        }
        if !has_ext {
            return Err(format!("template '{raw}' must contain {{ext}}"));
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    /// Render the file name for an ordinal and suffix
    pub fn render(&self, ordinal: u32, ext: &str) -> String {
        let mut out = String::with_capacity(self.raw.len() + 8);
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Ordinal { width, zero_pad } => {
                    if *zero_pad {
                        out.push_str(&format!("{ordinal:0width$}", width = *width));
                    } else {
                        out.push_str(&format!("{ordinal:width$}", width = *width));
                    }
                }
                Segment::Ext => out.push_str(ext),
            }
        }
        out
    }

    /// The template as written in the configuration
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for NameTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
