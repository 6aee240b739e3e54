//! Encoding of rendered luminance frames.

use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result};
use image::{GrayImage, ImageFormat};
use tt_core::frame::LumaFrame;

/// Wrap a frame as an `image` grayscale buffer.
///
/// # Errors
/// Returns an error if the frame's buffer does not match its dimensions.
pub fn to_gray_image(frame: &LumaFrame) -> Result<GrayImage> {
    GrayImage::from_raw(frame.width, frame.height, frame.data.clone()).with_context(|| {
        format!(
            "frame buffer of {} bytes does not match {}x{}",
            frame.data.len(),
            frame.width,
            frame.height
        )
    })
}

/// Save a frame, the format is chosen from the file extension.
///
/// # Errors
/// Returns an error for an unknown extension or a write failure.
pub fn save_luma(frame: &LumaFrame, path: &Path) -> Result<()> {
    to_gray_image(frame)?
        .save(path)
        .with_context(|| format!("Impossible d'écrire {}", path.display()))?;
    log::info!("wrote {}x{} image to {}", frame.width, frame.height, path.display());
    Ok(())
}

/// Encode a frame as PNG bytes.
///
/// # Errors
/// Returns an error if encoding fails.
///
/// # Example
/// ```
/// use tt_core::frame::LumaFrame;
/// use tt_export::image::encode_png;
/// let png = encode_png(&LumaFrame::filled(4, 4, 255)).unwrap();
/// assert_eq!(&png[1..4], b"PNG");
/// ```
pub fn encode_png(frame: &LumaFrame) -> Result<Vec<u8>> {
    let mut out = Cursor::new(Vec::new());
    to_gray_image(frame)?
        .write_to(&mut out, ImageFormat::Png)
        .context("PNG encoding failed")?;
    Ok(out.into_inner())
}
