//! Decoding of source images into luminance frames.

use std::path::Path;

use tt_core::error::ImageDecodeError;
use tt_core::frame::LumaFrame;

/// Load an image from disk and convert it to single-channel luminance.
///
/// Alpha is ignored; animated formats yield their first frame.
///
/// # Errors
/// Returns [`ImageDecodeError`] if the file cannot be read or decoded.
///
/// # Example
/// ```no_run
/// use tt_source::image::load_luma;
/// use std::path::Path;
/// let frame = load_luma(Path::new("photo.png")).unwrap();
/// ```
pub fn load_luma(path: &Path) -> Result<LumaFrame, ImageDecodeError> {
    let img = image::open(path).map_err(|e| ImageDecodeError {
        origin: path.display().to_string(),
        reason: e.to_string(),
    })?;
    log::debug!("decoded {} ({}x{})", path.display(), img.width(), img.height());
    Ok(into_luma(&img))
}

/// Decode an in-memory payload (attachment, HTTP body...).
///
/// # Errors
/// Returns [`ImageDecodeError`] if the bytes are not a supported image.
pub fn decode_luma(bytes: &[u8]) -> Result<LumaFrame, ImageDecodeError> {
    let img = image::load_from_memory(bytes).map_err(|e| ImageDecodeError {
        origin: "<memory>".to_string(),
        reason: e.to_string(),
    })?;
    Ok(into_luma(&img))
}

/// Convert any decoded image to a luminance frame.
#[must_use]
pub fn into_luma(img: &image::DynamicImage) -> LumaFrame {
    let luma = img.to_luma8();
    let (width, height) = luma.dimensions();
    LumaFrame {
        data: luma.into_raw(),
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
    use std::io::Cursor;

    fn png_bytes(img: &DynamicImage) -> Vec<u8> {
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn decodes_png_to_luma() {
        let mut rgb = RgbImage::new(3, 2);
        rgb.put_pixel(0, 0, Rgb([255, 255, 255]));
        rgb.put_pixel(2, 1, Rgb([0, 0, 0]));
        let frame = decode_luma(&png_bytes(&DynamicImage::ImageRgb8(rgb))).unwrap();
        assert_eq!((frame.width, frame.height), (3, 2));
        assert_eq!(frame.get(0, 0), 255);
        assert_eq!(frame.get(2, 1), 0);
    }

    #[test]
    fn gray_pixels_keep_their_value() {
        let rgb = RgbImage::from_pixel(2, 2, Rgb([128, 128, 128]));
        let frame = into_luma(&DynamicImage::ImageRgb8(rgb));
        assert!(frame.data.iter().all(|&v| v == 128));
    }

    #[test]
    fn garbage_is_a_decode_error() {
        let err = decode_luma(b"definitely not an image").unwrap_err();
        assert_eq!(err.origin, "<memory>");
    }

    #[test]
    fn missing_file_is_a_decode_error() {
        let err = load_luma(Path::new("/nonexistent/input.png")).unwrap_err();
        assert!(err.origin.contains("input.png"));
    }
}
