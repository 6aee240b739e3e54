//! Typed errors shared by every tonetext crate.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to build a lookup table from a charset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalibrationError {
    /// Every candidate glyph was taller than a single text row (or the charset was empty).
    #[error("no usable glyphs: every character exceeds the maximum cell height")]
    NoUsableGlyphs,
    /// All surviving glyphs share the same intensity, so no range can be normalized.
    #[error("degenerate charset: fewer than two distinct glyph intensities")]
    DegenerateCharset,
}

/// The requested font cannot be loaded or rasterized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot load font {identifier}: {reason}")]
pub struct FontResolutionError {
    pub identifier: String,
    pub reason: String,
}

/// Malformed or unsupported input image.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot decode image from {origin}: {reason}")]
pub struct ImageDecodeError {
    /// File path, or `<memory>` for in-memory payloads.
    pub origin: String,
    pub reason: String,
}

/// Resampling to the requested resolution failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot resize image to {width}x{height}: {reason}")]
pub struct ResizeError {
    pub width: u32,
    pub height: u32,
    pub reason: String,
}

/// Configuration file or option errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid option `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Any failure of the full conversion entry point.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Calibration(#[from] CalibrationError),
    #[error(transparent)]
    Font(#[from] FontResolutionError),
    #[error(transparent)]
    Decode(#[from] ImageDecodeError),
    #[error(transparent)]
    Resize(#[from] ResizeError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
