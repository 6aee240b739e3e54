//! Conversion options, loadable from a TOML file.
//!
//! ```toml
//! charset = " .:-=+*#%@"
//! font = "/usr/share/fonts/TTF/DejaVuSansMono.ttf"
//! invert = true
//! spacing = 1
//! resize = [160, 90]
//! dither = false
//! output = "text"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::charset::{CHARSET_PRINTABLE, Charset};
use crate::error::ConfigError;

/// Pixel em size the original tool rasterized its font at.
pub const DEFAULT_FONT_SIZE: f32 = 12.0;

/// Largest accepted line spacing in pixels.
pub const MAX_SPACING: u32 = 4096;

/// What the conversion entry point hands back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Render the text grid back to a raster image.
    #[default]
    Image,
    /// Return the text grid itself.
    Text,
}

/// Every option of a single conversion.
///
/// Missing fields take the defaults of [`ConvertConfig::default`].
///
/// # Example
/// ```
/// use tt_core::config::{ConvertConfig, OutputMode};
/// let config = ConvertConfig::default();
/// assert!(config.dither);
/// assert!(!config.invert);
/// assert_eq!(config.output, OutputMode::Image);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConvertConfig {
    /// Candidate characters.
    pub charset: String,
    /// Path of a TrueType/OpenType font file.
    pub font: Option<PathBuf>,
    /// Em size in pixels used for calibration and rendering.
    pub font_size: f32,
    /// Target dark ink on light background instead of light on dark.
    pub invert: bool,
    /// Extra pixels between text lines.
    pub spacing: u32,
    /// Explicit source resolution `[width, height]`; overrides `in_scale`.
    pub resize: Option<[u32; 2]>,
    /// Source image scale factor applied before conversion.
    pub in_scale: f32,
    /// Rendered image scale factor applied after rendering.
    pub out_scale: f32,
    /// Error-diffusion dithering.
    pub dither: bool,
    pub output: OutputMode,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            charset: CHARSET_PRINTABLE.to_string(),
            font: None,
            font_size: DEFAULT_FONT_SIZE,
            invert: false,
            spacing: 0,
            resize: None,
            in_scale: 1.0,
            out_scale: 1.0,
            dither: true,
            output: OutputMode::Image,
        }
    }
}

impl ConvertConfig {
    /// Read and validate a TOML config file.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if the file cannot be read, parsed or validated.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check option ranges.
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.charset.is_empty() {
            return Err(invalid("charset", "must contain at least one character"));
        }
        check_factor("font_size", self.font_size)?;
        check_factor("in_scale", self.in_scale)?;
        check_factor("out_scale", self.out_scale)?;
        if self.spacing > MAX_SPACING {
            return Err(invalid(
                "spacing",
                format!("{} exceeds {MAX_SPACING} pixels", self.spacing),
            ));
        }
        if let Some([w, h]) = self.resize {
            if w == 0 || h == 0 {
                return Err(invalid("resize", format!("{w}x{h} has a zero dimension")));
            }
        }
        Ok(())
    }

    /// Deduplicated candidate characters.
    #[must_use]
    pub fn charset(&self) -> Charset {
        Charset::new(&self.charset)
    }
}

fn check_factor(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("{value} is not a positive number")))
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}
