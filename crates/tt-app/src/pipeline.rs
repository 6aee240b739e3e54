use tt_ascii::calibrate::{Calibration, calibrate};
use tt_ascii::convert::convert;
use tt_core::config::{ConvertConfig, OutputMode};
use tt_core::error::ConvertError;
use tt_core::frame::{LumaFrame, TextGrid};
use tt_core::traits::GlyphRasterizer;
use tt_render::text::render_text;
use tt_source::resize::{ResizeFilter, resize_luma, scale_luma};

/// Result of a conversion, as selected by [`ConvertConfig::output`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertOutput {
    Text(TextGrid),
    Image(LumaFrame),
}

/// Single conversion entry point: calibrate `font` for the configured charset,
/// convert `image` and either return the text or render it back to an image.
///
/// # Errors
/// Returns [`ConvertError`] for invalid options, a charset that cannot be
/// calibrated, or a resampling failure.
///
/// # Example
/// ```
/// use tt_core::config::{ConvertConfig, OutputMode};
/// use tt_core::frame::LumaFrame;
/// use tt_core::testing::CoverageFont;
/// use tt_app::pipeline::{full_convert, ConvertOutput};
///
/// let font = CoverageFont::new(5, 10).with_glyph('#', 1.0);
/// let config = ConvertConfig {
///     charset: " #".into(),
///     output: OutputMode::Text,
///     ..ConvertConfig::default()
/// };
/// let image = LumaFrame::from_raw(2, 1, vec![255, 0]).unwrap();
/// let ConvertOutput::Text(grid) = full_convert(&image, &font, &config).unwrap() else {
///     unreachable!()
/// };
/// assert_eq!(grid.to_string(), "##  ");
/// ```
pub fn full_convert<F>(
    image: &LumaFrame,
    font: &F,
    config: &ConvertConfig,
) -> Result<ConvertOutput, ConvertError>
where
    F: GlyphRasterizer + ?Sized,
{
    config.validate()?;
    log::info!("generating mapping");
    let calibration = calibrate(&config.charset(), font, config.invert)?;
    log::debug!(
        "{} glyphs in use, cell {}x{}",
        calibration.table.distinct_chars().len(),
        calibration.cell_width,
        calibration.cell_height
    );
    convert_calibrated(image, &calibration, font, config)
}

/// Same as [`full_convert`] with a calibration built earlier, for callers that
/// cache lookup tables per (charset, font, invert).
///
/// The calibration must come from the same font and `invert` flag as `config`.
///
/// # Errors
/// Returns [`ConvertError`] for invalid options or a resampling failure.
pub fn convert_calibrated<F>(
    image: &LumaFrame,
    calibration: &Calibration,
    font: &F,
    config: &ConvertConfig,
) -> Result<ConvertOutput, ConvertError>
where
    F: GlyphRasterizer + ?Sized,
{
    config.validate()?;
    let source = prepare_source(image, config)?;

    log::info!("performing conversion");
    let ratio = calibration.horizontal_ratio(config.spacing);
    let grid = convert(&source, &calibration.table, ratio, config.dither);

    match config.output {
        OutputMode::Text => Ok(ConvertOutput::Text(grid)),
        OutputMode::Image => {
            log::info!("rendering text");
            let rendered = render_text(&grid, font, config.invert, config.spacing);
            if rendered.is_empty() {
                return Ok(ConvertOutput::Image(rendered));
            }
            let scaled = scale_luma(&rendered, config.out_scale, ResizeFilter::Nearest)?;
            Ok(ConvertOutput::Image(scaled))
        }
    }
}

/// Apply `resize` (explicit resolution) or else `in_scale` to the source.
fn prepare_source(image: &LumaFrame, config: &ConvertConfig) -> Result<LumaFrame, ConvertError> {
    if image.is_empty() {
        return Ok(image.clone());
    }
    let source = match config.resize {
        Some([width, height]) => resize_luma(image, width, height, ResizeFilter::Smooth)?,
        None => scale_luma(image, config.in_scale, ResizeFilter::Smooth)?,
    };
    Ok(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tt_core::error::{CalibrationError, ConfigError};
    use tt_core::testing::CoverageFont;

    fn font() -> CoverageFont {
        CoverageFont::new(5, 10)
            .with_glyph(' ', 0.0)
            .with_glyph('.', 0.3)
            .with_glyph('#', 1.0)
    }

    fn config(output: OutputMode) -> ConvertConfig {
        ConvertConfig {
            charset: " .#".into(),
            output,
            ..ConvertConfig::default()
        }
    }

    fn text(output: ConvertOutput) -> TextGrid {
        match output {
            ConvertOutput::Text(grid) => grid,
            ConvertOutput::Image(_) => panic!("expected text"),
        }
    }

    fn image(output: ConvertOutput) -> LumaFrame {
        match output {
            ConvertOutput::Image(frame) => frame,
            ConvertOutput::Text(_) => panic!("expected image"),
        }
    }

    #[test]
    fn text_rows_are_aspect_corrected() {
        let source = LumaFrame::filled(4, 2, 90);
        let grid = text(full_convert(&source, &font(), &config(OutputMode::Text)).unwrap());
        assert_eq!(grid.height(), 2);
        // Cell 5x10 gives two columns per pixel.
        assert!(grid.rows().iter().all(|row| row.len() == 8));
    }

    #[test]
    fn spacing_widens_rows() {
        let source = LumaFrame::filled(4, 1, 90);
        let cfg = ConvertConfig {
            spacing: 5,
            ..config(OutputMode::Text)
        };
        let grid = text(full_convert(&source, &font(), &cfg).unwrap());
        assert_eq!(grid.rows()[0].len(), 12);
    }

    #[test]
    fn image_output_matches_text_metrics() {
        let source = LumaFrame::filled(4, 2, 90);
        let frame = image(full_convert(&source, &font(), &config(OutputMode::Image)).unwrap());
        assert_eq!((frame.width, frame.height), (40, 20));
    }

    #[test]
    fn out_scale_resizes_rendered_image() {
        let source = LumaFrame::filled(4, 2, 90);
        let cfg = ConvertConfig {
            out_scale: 0.5,
            ..config(OutputMode::Image)
        };
        let frame = image(full_convert(&source, &font(), &cfg).unwrap());
        assert_eq!((frame.width, frame.height), (20, 10));
    }

    #[test]
    fn resize_overrides_in_scale() {
        let source = LumaFrame::filled(40, 20, 90);
        let cfg = ConvertConfig {
            resize: Some([3, 2]),
            in_scale: 4.0,
            ..config(OutputMode::Text)
        };
        let grid = text(full_convert(&source, &font(), &cfg).unwrap());
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.rows()[0].len(), 6);
    }

    #[test]
    fn in_scale_shrinks_source() {
        let source = LumaFrame::filled(8, 4, 90);
        let cfg = ConvertConfig {
            in_scale: 0.5,
            ..config(OutputMode::Text)
        };
        let grid = text(full_convert(&source, &font(), &cfg).unwrap());
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.rows()[0].len(), 8);
    }

    #[test]
    fn rendered_polarity_follows_invert() {
        let dark = LumaFrame::filled(3, 2, 0);
        let frame = image(full_convert(&dark, &font(), &config(OutputMode::Image)).unwrap());
        assert!(frame.data.iter().all(|&v| v == 0));

        let light = LumaFrame::filled(3, 2, 255);
        let cfg = ConvertConfig {
            invert: true,
            ..config(OutputMode::Image)
        };
        let frame = image(full_convert(&light, &font(), &cfg).unwrap());
        assert!(frame.data.iter().all(|&v| v == 255));
    }

    #[test]
    fn degenerate_charset_is_reported() {
        let cfg = ConvertConfig {
            charset: "#".into(),
            ..config(OutputMode::Text)
        };
        let err = full_convert(&LumaFrame::filled(2, 2, 9), &font(), &cfg).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::Calibration(CalibrationError::DegenerateCharset)
        ));
    }

    #[test]
    fn invalid_options_are_reported() {
        let cfg = ConvertConfig {
            out_scale: -1.0,
            ..config(OutputMode::Image)
        };
        let err = full_convert(&LumaFrame::filled(2, 2, 9), &font(), &cfg).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::Config(ConfigError::Invalid { field: "out_scale", .. })
        ));
    }

    #[test]
    fn cached_calibration_gives_same_result() {
        let cfg = config(OutputMode::Text);
        let source = LumaFrame::from_raw(3, 1, vec![10, 130, 250]).unwrap();
        let cal = calibrate(&cfg.charset(), &font(), cfg.invert).unwrap();
        let cached = convert_calibrated(&source, &cal, &font(), &cfg).unwrap();
        assert_eq!(cached, full_convert(&source, &font(), &cfg).unwrap());
    }
}
