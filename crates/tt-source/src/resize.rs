//! Luminance frame resampling backed by `fast_image_resize`.

use fast_image_resize::images::Image;
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer};
use tt_core::error::ResizeError;
use tt_core::frame::LumaFrame;

/// Resampling quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizeFilter {
    /// Lanczos3 convolution, for photographic sources.
    #[default]
    Smooth,
    /// Nearest neighbour, keeps rendered glyph edges crisp.
    Nearest,
}

impl ResizeFilter {
    fn algorithm(self) -> ResizeAlg {
        match self {
            Self::Smooth => ResizeAlg::Convolution(FilterType::Lanczos3),
            Self::Nearest => ResizeAlg::Nearest,
        }
    }
}

/// Resample `frame` to exactly `width × height`.
///
/// # Errors
/// Returns [`ResizeError`] for a zero target dimension or a resampler failure.
///
/// # Example
/// ```
/// use tt_core::frame::LumaFrame;
/// use tt_source::resize::{resize_luma, ResizeFilter};
/// let frame = LumaFrame::filled(8, 8, 90);
/// let small = resize_luma(&frame, 4, 2, ResizeFilter::Smooth).unwrap();
/// assert_eq!((small.width, small.height), (4, 2));
/// ```
pub fn resize_luma(
    frame: &LumaFrame,
    width: u32,
    height: u32,
    filter: ResizeFilter,
) -> Result<LumaFrame, ResizeError> {
    let fail = |reason: String| ResizeError {
        width,
        height,
        reason,
    };
    if width == 0 || height == 0 {
        return Err(fail("target has a zero dimension".to_string()));
    }
    if frame.is_empty() {
        return Err(fail("source image is empty".to_string()));
    }
    if (width, height) == (frame.width, frame.height) {
        return Ok(frame.clone());
    }

    let src = Image::from_vec_u8(frame.width, frame.height, frame.data.clone(), PixelType::U8)
        .map_err(|e| fail(e.to_string()))?;
    let mut dst = Image::new(width, height, PixelType::U8);
    let options = ResizeOptions::new().resize_alg(filter.algorithm());
    Resizer::new()
        .resize(&src, &mut dst, &options)
        .map_err(|e| fail(e.to_string()))?;

    log::debug!(
        "resized {}x{} -> {width}x{height} ({filter:?})",
        frame.width,
        frame.height
    );
    Ok(LumaFrame {
        data: dst.into_vec(),
        width,
        height,
    })
}

/// Scale both dimensions by `factor`, rounding and never going below 1 pixel.
///
/// # Errors
/// Returns [`ResizeError`] if `factor` is not a positive finite number or the
/// resampler fails.
///
/// # Example
/// ```
/// use tt_core::frame::LumaFrame;
/// use tt_source::resize::{scale_luma, ResizeFilter};
/// let frame = LumaFrame::filled(10, 4, 0);
/// let big = scale_luma(&frame, 2.5, ResizeFilter::Nearest).unwrap();
/// assert_eq!((big.width, big.height), (25, 10));
/// ```
pub fn scale_luma(
    frame: &LumaFrame,
    factor: f32,
    filter: ResizeFilter,
) -> Result<LumaFrame, ResizeError> {
    let (width, height) = scaled_size(frame.width, frame.height, factor);
    if !(factor.is_finite() && factor > 0.0) {
        return Err(ResizeError {
            width,
            height,
            reason: format!("invalid scale factor {factor}"),
        });
    }
    if (factor - 1.0).abs() < f32::EPSILON {
        return Ok(frame.clone());
    }
    resize_luma(frame, width, height, filter)
}

/// Dimensions after scaling by `factor`, at least 1×1.
#[must_use]
pub fn scaled_size(width: u32, height: u32, factor: f32) -> (u32, u32) {
    let scale = |v: u32| ((v as f32 * factor).round() as u32).max(1);
    (scale(width), scale(height))
}
