use crate::frame::{GlyphBitmap, LumaFrame};

/// Font capability consumed by calibration and text rendering.
///
/// Implementors provide per-character metrics and bitmaps at a fixed size;
/// multi-line measurement and drawing are derived from those two.
pub trait GlyphRasterizer {
    /// Cell size `(width, height)` of `ch` at the font's fixed size.
    fn measure(&self, ch: char) -> (u32, u32);

    /// Render `ch` into a bitmap of exactly `measure(ch)` pixels, ink in
    /// `foreground` over `background`.
    fn rasterize(&self, ch: char, foreground: u8, background: u8) -> GlyphBitmap;

    /// Distance from the top of one text line to the next, without spacing.
    fn line_height(&self) -> u32 {
        self.measure('A').1
    }

    /// Canvas size needed by [`GlyphRasterizer::draw_multiline`].
    ///
    /// Width is the widest line, height is `lines * (line_height + spacing) - spacing`.
    fn measure_multiline(&self, text: &str, spacing: u32) -> (u32, u32) {
        let step = self.line_height().saturating_add(spacing);
        let mut lines = 0u32;
        let mut width = 0u32;
        for line in text.split('\n') {
            lines += 1;
            width = width.max(line.chars().map(|ch| self.measure(ch).0).sum());
        }
        (width, lines.saturating_mul(step).saturating_sub(spacing))
    }

    /// Draw `text` onto `canvas` starting at the top-left corner, blending
    /// glyph coverage toward `foreground`. Pixels outside the canvas are clipped.
    fn draw_multiline(&self, canvas: &mut LumaFrame, text: &str, foreground: u8, spacing: u32) {
        let step = self.line_height().saturating_add(spacing);
        for (row, line) in text.split('\n').enumerate() {
            let top = (row as u32).saturating_mul(step);
            if top >= canvas.height {
                break;
            }
            let mut left = 0u32;
            for ch in line.chars() {
                let coverage = self.rasterize(ch, 255, 0);
                blend_glyph(canvas, &coverage, left, top, foreground);
                left += coverage.width;
            }
        }
    }
}

/// Blend a coverage bitmap (255 = full ink) onto `canvas` at `(left, top)`.
fn blend_glyph(canvas: &mut LumaFrame, coverage: &GlyphBitmap, left: u32, top: u32, ink: u8) {
    for gy in 0..coverage.height {
        let y = top + gy;
        if y >= canvas.height {
            break;
        }
        for gx in 0..coverage.width {
            let x = left + gx;
            if x >= canvas.width {
                break;
            }
            let c = coverage.get(gx, gy);
            if c == 0 {
                continue;
            }
            let old = f32::from(canvas.get(x, y));
            let new = old + (f32::from(ink) - old) * f32::from(c) / 255.0;
            canvas.set(x, y, new.round().clamp(0.0, 255.0) as u8);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::CoverageFont;

    fn font() -> CoverageFont {
        CoverageFont::new(4, 8).with_glyph('#', 1.0).with_glyph(' ', 0.0)
    }

    #[test]
    fn multiline_size_accounts_for_spacing() {
        let f = font();
        assert_eq!(f.measure_multiline("##\n#", 0), (8, 16));
        assert_eq!(f.measure_multiline("##\n#", 3), (8, 19));
        assert_eq!(f.measure_multiline("#", 3), (4, 8));
    }

    #[test]
    fn huge_spacing_saturates() {
        let f = font();
        assert_eq!(f.measure_multiline("#\n#", u32::MAX), (4, 0));
        let mut canvas = LumaFrame::filled(4, 8, 0);
        f.draw_multiline(&mut canvas, "#\n#", 255, u32::MAX);
        assert!(canvas.data.iter().all(|&v| v == 255));
    }

    #[test]
    fn draw_fills_full_coverage_glyphs() {
        let f = font();
        let mut canvas = LumaFrame::filled(8, 8, 0);
        f.draw_multiline(&mut canvas, "# ", 255, 0);
        assert_eq!(canvas.get(0, 0), 255);
        assert_eq!(canvas.get(3, 7), 255);
        assert_eq!(canvas.get(4, 0), 0);
    }

    #[test]
    fn draw_clips_outside_canvas() {
        let f = font();
        let mut canvas = LumaFrame::filled(2, 2, 255);
        f.draw_multiline(&mut canvas, "###\n###", 0, 0);
        assert!(canvas.data.iter().all(|&v| v == 0));
    }
}
