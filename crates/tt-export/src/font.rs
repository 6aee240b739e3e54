//! TrueType/OpenType glyph rasterizer on top of `ab_glyph`.

use std::path::Path;

use ab_glyph::{Font, FontVec, GlyphId, OutlinedGlyph, PxScale, ScaleFont, point};
use tt_core::error::FontResolutionError;
use tt_core::frame::GlyphBitmap;
use tt_core::traits::GlyphRasterizer;

/// A parsed font rasterized at a fixed pixel em size.
///
/// Cells are `ceil(advance)` wide. The baseline sits on the pixel row nearest
/// to the ascent, and a cell reaches from the top down to the baseline or to
/// the lowest ink row, whichever is lower: descenders (`g`, `j`, `y`...)
/// produce taller cells than the rest of the font.
pub struct TrueTypeFont {
    font: FontVec,
    scale: PxScale,
}

impl TrueTypeFont {
    /// Read and parse a font file.
    ///
    /// # Errors
    /// Returns [`FontResolutionError`] if the file is unreadable or not a font.
    ///
    /// # Example
    /// ```no_run
    /// use tt_export::font::TrueTypeFont;
    /// use std::path::Path;
    /// let font = TrueTypeFont::from_path(Path::new("DejaVuSansMono.ttf"), 12.0).unwrap();
    /// ```
    pub fn from_path(path: &Path, em_px: f32) -> Result<Self, FontResolutionError> {
        let identifier = path.display().to_string();
        let bytes = std::fs::read(path).map_err(|e| FontResolutionError {
            identifier: identifier.clone(),
            reason: e.to_string(),
        })?;
        let font = Self::from_bytes(&identifier, bytes, em_px)?;
        log::debug!("loaded font {identifier} at {em_px}px");
        Ok(font)
    }

    /// Parse font data already in memory.
    ///
    /// # Errors
    /// Returns [`FontResolutionError`] if `bytes` is not a TrueType/OpenType font.
    pub fn from_bytes(
        identifier: &str,
        bytes: Vec<u8>,
        em_px: f32,
    ) -> Result<Self, FontResolutionError> {
        let font = FontVec::try_from_vec(bytes).map_err(|e| FontResolutionError {
            identifier: identifier.to_string(),
            reason: e.to_string(),
        })?;
        // PxScale is the ascent-to-descent height; convert from the em size.
        let units = font.units_per_em().unwrap_or_else(|| font.height_unscaled());
        let scale = PxScale::from(em_px * font.height_unscaled() / units);
        Ok(Self { font, scale })
    }

    /// Rows above the baseline, snapped to a whole pixel.
    fn baseline(&self) -> f32 {
        self.font.as_scaled(self.scale).ascent().round().max(0.0)
    }

    fn outline(&self, id: GlyphId) -> Option<OutlinedGlyph> {
        self.font
            .outline_glyph(id.with_scale_and_position(self.scale, point(0.0, self.baseline())))
    }
}

/// One past the last row holding at least half-covered ink. Fainter
/// antialiasing below it (round overshoot under the baseline) is clipped.
fn ink_bottom(outlined: &OutlinedGlyph) -> u32 {
    let top = outlined.px_bounds().min.y as i64;
    let mut bottom = 0i64;
    outlined.draw(|_, gy, coverage| {
        if coverage >= 0.5 {
            bottom = bottom.max(top + i64::from(gy) + 1);
        }
    });
    bottom.max(0) as u32
}

impl GlyphRasterizer for TrueTypeFont {
    fn measure(&self, ch: char) -> (u32, u32) {
        let id = self.font.glyph_id(ch);
        let width = self.font.as_scaled(self.scale).h_advance(id).ceil().max(0.0) as u32;
        let baseline = self.baseline() as u32;
        let bottom = self.outline(id).map_or(0, |g| ink_bottom(&g));
        (width, bottom.max(baseline))
    }

    fn rasterize(&self, ch: char, foreground: u8, background: u8) -> GlyphBitmap {
        let (width, height) = self.measure(ch);
        let mut bitmap = GlyphBitmap::filled(width, height, background);
        let Some(outlined) = self.outline(self.font.glyph_id(ch)) else {
            return bitmap;
        };

        let bounds = outlined.px_bounds();
        let (left, top) = (bounds.min.x as i64, bounds.min.y as i64);
        let (bg, fg) = (f32::from(background), f32::from(foreground));
        outlined.draw(|gx, gy, coverage| {
            let x = left + i64::from(gx);
            let y = top + i64::from(gy);
            if x < 0 || y < 0 || x >= i64::from(width) || y >= i64::from(height) {
                return;
            }
            let value = bg + (fg - bg) * coverage.clamp(0.0, 1.0);
            bitmap.set(x as u32, y as u32, value.round() as u8);
        });
        bitmap
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tt_ascii::calibrate::{MAX_GLYPH_HEIGHT, calibrate};
    use tt_core::charset::Charset;

    const SYSTEM_MONO: &[&str] = &[
        "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
        "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
        "/usr/share/fonts/dejavu/DejaVuSansMono.ttf",
        "/Library/Fonts/Courier New.ttf",
        "C:\\Windows\\Fonts\\consola.ttf",
    ];

    fn system_mono() -> Option<TrueTypeFont> {
        SYSTEM_MONO
            .iter()
            .map(Path::new)
            .find(|p| p.exists())
            .and_then(|p| TrueTypeFont::from_path(p, 12.0).ok())
    }

    #[test]
    fn missing_file_is_a_resolution_error() {
        let err = TrueTypeFont::from_path(Path::new("/nonexistent/font.ttf"), 12.0)
            .err()
            .unwrap();
        assert!(err.identifier.ends_with("font.ttf"));
    }

    #[test]
    fn garbage_bytes_are_a_resolution_error() {
        let err = TrueTypeFont::from_bytes("junk", vec![0; 64], 12.0).err().unwrap();
        assert_eq!(err.identifier, "junk");
    }

    #[test]
    fn system_font_cells_and_ink() {
        let Some(font) = system_mono() else {
            return;
        };
        let (w, h) = font.measure('M');
        assert!(w > 0 && h > 0);
        // Monospace: every printable glyph shares the advance.
        assert_eq!(font.measure('.').0, w);
        assert!(font.measure('g').1 >= font.measure('a').1);

        let space = font.rasterize(' ', 255, 0);
        assert_eq!((space.width, space.height), font.measure(' '));
        assert!(space.data.iter().all(|&v| v == 0));

        let at = font.rasterize('@', 255, 0);
        assert!(at.data.iter().any(|&v| v > 0));
        let inverted = font.rasterize('@', 0, 255);
        assert!(inverted.data.iter().any(|&v| v < 255));
    }

    #[test]
    fn system_font_body_glyphs_share_baseline_height() {
        let Some(font) = system_mono() else {
            return;
        };
        let body = font.measure('x').1;
        assert!(body <= MAX_GLYPH_HEIGHT, "x is {body} rows");
        for ch in ['.', ' ', 'a', 'o', 's', 'A', 'M'] {
            assert_eq!(font.measure(ch).1, body, "{ch:?}");
        }
        assert!(font.measure('g').1 > body);
    }

    #[test]
    fn system_font_calibrates_at_default_size() {
        let Some(font) = system_mono() else {
            return;
        };
        let cal = calibrate(&Charset::default(), &font, false).unwrap();
        assert!(cal.cell_height <= MAX_GLYPH_HEIGHT);
        assert_eq!(cal.cell_width, font.measure('M').0);
        let used = cal.table.distinct_chars();
        for descender in ['g', 'y', 'j'] {
            assert!(!used.contains(&descender), "{descender:?} in table");
        }
        assert_eq!(cal.table.map(0), ' ');
        assert!(used.len() > 10);
    }
}
