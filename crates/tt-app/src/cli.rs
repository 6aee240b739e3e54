//! Command-line interface definitions.

use std::path::PathBuf;

use clap::Parser;
use tt_core::charset::preset;
use tt_core::config::{ConvertConfig, OutputMode};
use tt_core::error::ConfigError;

/// Convert an image to text whose glyph density follows the image's luminance.
#[derive(Debug, Parser)]
#[command(name = "tonetext", version)]
pub struct Cli {
    /// Image to convert.
    pub input: PathBuf,

    /// File to save the result to (`-` prints text to stdout).
    pub output: PathBuf,

    /// TOML file with default options; flags given here override it.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// TrueType/OpenType font file to target.
    #[arg(short, long)]
    pub font: Option<PathBuf>,

    /// Font em size in pixels.
    #[arg(long)]
    pub font_size: Option<f32>,

    /// Target black on white instead of white on black.
    #[arg(short, long)]
    pub invert: bool,

    /// Line spacing in pixels.
    #[arg(short, long)]
    pub spacing: Option<u32>,

    /// Set of candidate characters. Defaults to printable ASCII.
    #[arg(short, long, conflicts_with = "preset")]
    pub charset: Option<String>,

    /// Named character set.
    #[arg(long, value_parser = ["printable", "compact", "standard", "minimal", "digital"])]
    pub preset: Option<String>,

    /// Resize the source image to this resolution before converting.
    #[arg(short, long, num_args = 2, value_names = ["WIDTH", "HEIGHT"])]
    pub resize: Option<Vec<u32>>,

    /// Scale factor applied to the source image (ignored with --resize).
    #[arg(long)]
    pub in_scale: Option<f32>,

    /// Scale factor applied to the rendered image.
    #[arg(long)]
    pub out_scale: Option<f32>,

    /// Output a text file instead of an image.
    #[arg(short, long)]
    pub text: bool,

    /// Don't apply dithering to the output.
    #[arg(long, visible_alias = "nd")]
    pub no_dither: bool,
}

impl Cli {
    /// Load the config file (if any), apply flag overrides and validate.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if the file cannot be loaded or the merged
    /// options are invalid.
    pub fn resolve_config(&self) -> Result<ConvertConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => ConvertConfig::load(path)?,
            None => ConvertConfig::default(),
        };
        self.apply(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Override `config` with every flag that was given.
    pub fn apply(&self, config: &mut ConvertConfig) {
        if let Some(font) = &self.font {
            config.font = Some(font.clone());
        }
        if let Some(size) = self.font_size {
            config.font_size = size;
        }
        if self.invert {
            config.invert = true;
        }
        if let Some(spacing) = self.spacing {
            config.spacing = spacing;
        }
        if let Some(charset) = &self.charset {
            config.charset.clone_from(charset);
        } else if let Some(chars) = self.preset.as_deref().and_then(preset) {
            config.charset = chars.to_string();
        }
        if let Some(&[width, height]) = self.resize.as_deref() {
            config.resize = Some([width, height]);
        }
        if let Some(scale) = self.in_scale {
            config.in_scale = scale;
        }
        if let Some(scale) = self.out_scale {
            config.out_scale = scale;
        }
        if self.text {
            config.output = OutputMode::Text;
        }
        if self.no_dither {
            config.dither = false;
        }
    }
}
