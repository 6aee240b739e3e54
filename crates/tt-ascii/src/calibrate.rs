//! Charset calibration against a font's rendered glyph intensities.

use tt_core::charset::Charset;
use tt_core::error::CalibrationError;
use tt_core::frame::GlyphBitmap;
use tt_core::traits::GlyphRasterizer;

/// Glyphs taller than this many rows do not fit in a single text line.
pub const MAX_GLYPH_HEIGHT: u32 = 11;

/// One entry per 8-bit luminance level.
pub const LUT_SIZE: usize = 256;

/// A character and its own normalized intensity in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LutEntry {
    pub intensity: f32,
    pub ch: char,
}

/// Luminance [0..255] → (normalized intensity, character).
///
/// Immutable once built; share it freely between conversions.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupTable {
    entries: Box<[LutEntry; LUT_SIZE]>,
}

impl LookupTable {
    #[inline(always)]
    #[must_use]
    pub fn entry(&self, luminance: u8) -> LutEntry {
        self.entries[luminance as usize]
    }

    /// Character for a luminance value, no dithering.
    #[inline(always)]
    #[must_use]
    pub fn map(&self, luminance: u8) -> char {
        self.entries[luminance as usize].ch
    }

    #[must_use]
    pub fn entries(&self) -> &[LutEntry; LUT_SIZE] {
        &self.entries
    }

    /// Characters used by the table, in order of first appearance.
    #[must_use]
    pub fn distinct_chars(&self) -> Vec<char> {
        let mut chars = Vec::new();
        for entry in self.entries.iter() {
            if !chars.contains(&entry.ch) {
                chars.push(entry.ch);
            }
        }
        chars
    }
}

/// Result of [`calibrate`]: the lookup table plus the font's glyph cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Calibration {
    pub table: LookupTable,
    pub cell_width: u32,
    pub cell_height: u32,
}

impl Calibration {
    /// Columns emitted per source pixel so that text cells come out square:
    /// `(cell_height + line_spacing) / cell_width`.
    #[must_use]
    pub fn horizontal_ratio(&self, line_spacing: u32) -> f32 {
        self.cell_height.saturating_add(line_spacing) as f32 / self.cell_width as f32
    }
}

/// Quadratic mean of a bitmap's samples, `sqrt(Σ v² / n)`. Zero for an empty bitmap.
///
/// # Example
/// ```
/// use tt_core::frame::LumaFrame;
/// use tt_ascii::calibrate::glyph_intensity;
/// let bmp = LumaFrame::from_raw(2, 1, vec![0, 200]).unwrap();
/// assert!((glyph_intensity(&bmp) - 141.42136).abs() < 1e-3);
/// ```
#[must_use]
pub fn glyph_intensity(bitmap: &GlyphBitmap) -> f32 {
    if bitmap.data.is_empty() {
        return 0.0;
    }
    let sum_sq: u64 = bitmap.data.iter().map(|&v| u64::from(v) * u64::from(v)).sum();
    (sum_sq as f64 / bitmap.data.len() as f64).sqrt() as f32
}

/// Build the luminance lookup table for `charset` rendered with `font`.
///
/// Each glyph is rendered light-on-dark (`invert == false`) or dark-on-light
/// (`invert == true`) and measured with [`glyph_intensity`]. Glyphs taller than
/// [`MAX_GLYPH_HEIGHT`] or with an empty cell are skipped. Entry `n` holds the
/// glyph whose normalized intensity is nearest to `n / 255`; ties go to the
/// earlier character of the charset.
///
/// # Errors
/// - [`CalibrationError::NoUsableGlyphs`] if no glyph survives the filter.
/// - [`CalibrationError::DegenerateCharset`] if all survivors measure the same.
///
/// # Example
/// ```
/// use tt_core::charset::Charset;
/// use tt_core::error::CalibrationError;
/// use tt_core::testing::CoverageFont;
/// use tt_ascii::calibrate::calibrate;
///
/// let font = CoverageFont::new(6, 10).with_glyph(' ', 0.0).with_glyph('@', 0.8);
/// let cal = calibrate(&Charset::new(" @"), &font, false).unwrap();
/// assert_eq!(cal.table.map(0), ' ');
/// assert_eq!(cal.table.map(255), '@');
///
/// let err = calibrate(&Charset::new("@"), &font, false).unwrap_err();
/// assert_eq!(err, CalibrationError::DegenerateCharset);
/// ```
pub fn calibrate<F>(
    charset: &Charset,
    font: &F,
    invert: bool,
) -> Result<Calibration, CalibrationError>
where
    F: GlyphRasterizer + ?Sized,
{
    let (foreground, background) = if invert { (0, 255) } else { (255, 0) };

    let mut measured: Vec<(char, f32)> = Vec::with_capacity(charset.len());
    let mut cell = None;
    for &ch in charset.chars() {
        let (w, h) = font.measure(ch);
        if h > MAX_GLYPH_HEIGHT || w == 0 || h == 0 {
            continue;
        }
        let bitmap = font.rasterize(ch, foreground, background);
        measured.push((ch, glyph_intensity(&bitmap)));
        cell = Some((w, h));
    }

    let Some((cell_width, cell_height)) = cell else {
        return Err(CalibrationError::NoUsableGlyphs);
    };

    let (min, max) = measured
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &(_, v)| {
            (lo.min(v), hi.max(v))
        });
    if max <= min {
        return Err(CalibrationError::DegenerateCharset);
    }

    let range = max - min;
    let normalized: Vec<LutEntry> = measured
        .iter()
        .map(|&(ch, v)| LutEntry {
            intensity: (v - min) / range,
            ch,
        })
        .collect();

    let entries = Box::new(std::array::from_fn(|n| {
        let target = n as f32 / 255.0;
        let mut best = normalized[0];
        for &candidate in &normalized[1..] {
            if (target - candidate.intensity).abs() < (target - best.intensity).abs() {
                best = candidate;
            }
        }
        best
    }));

    Ok(Calibration {
        table: LookupTable { entries },
        cell_width,
        cell_height,
    })
}
