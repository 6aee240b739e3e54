//! Deterministic rasterizer for tests, no font file required.

use std::collections::HashMap;

use crate::frame::GlyphBitmap;
use crate::traits::GlyphRasterizer;

/// Fake font where each glyph is a cell whose first `coverage * w * h`
/// samples (row-major) are ink.
///
/// Characters never registered render as blank cells of the default size.
#[derive(Debug, Clone)]
pub struct CoverageFont {
    cell: (u32, u32),
    glyphs: HashMap<char, Glyph>,
}

#[derive(Debug, Clone, Copy)]
struct Glyph {
    coverage: f32,
    size: (u32, u32),
}

impl CoverageFont {
    /// Font whose default cell is `width × height`.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            cell: (width, height),
            glyphs: HashMap::new(),
        }
    }

    /// Register `ch` with the default cell size and an ink fraction in [0, 1].
    #[must_use]
    pub fn with_glyph(self, ch: char, coverage: f32) -> Self {
        let (w, h) = self.cell;
        self.with_sized_glyph(ch, coverage, w, h)
    }

    /// Register `ch` with its own cell size.
    #[must_use]
    pub fn with_sized_glyph(mut self, ch: char, coverage: f32, width: u32, height: u32) -> Self {
        self.glyphs.insert(
            ch,
            Glyph {
                coverage: coverage.clamp(0.0, 1.0),
                size: (width, height),
            },
        );
        self
    }

    fn glyph(&self, ch: char) -> Glyph {
        self.glyphs.get(&ch).copied().unwrap_or(Glyph {
            coverage: 0.0,
            size: self.cell,
        })
    }
}

impl GlyphRasterizer for CoverageFont {
    fn measure(&self, ch: char) -> (u32, u32) {
        self.glyph(ch).size
    }

    fn rasterize(&self, ch: char, foreground: u8, background: u8) -> GlyphBitmap {
        let glyph = self.glyph(ch);
        let (w, h) = glyph.size;
        let total = w as usize * h as usize;
        let ink = ((glyph.coverage * total as f32).round() as usize).min(total);
        let mut bitmap = GlyphBitmap::filled(w, h, background);
        bitmap.data[..ink].fill(foreground);
        bitmap
    }
}
