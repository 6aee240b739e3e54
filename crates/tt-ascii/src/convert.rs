use tt_core::frame::{LumaFrame, TextGrid};

use crate::calibrate::LookupTable;
use crate::dither::ErrorDiffuser;

/// Convert a luminance image into a text grid, one text row per image row.
///
/// Each source pixel emits `floor(c)` copies of its character, where `c`
/// accumulates `horizontal_ratio` along the row and keeps its fractional part.
/// The accumulator restarts at every row. With `dither`, characters are chosen
/// with Floyd–Steinberg error diffusion; otherwise by direct table lookup.
///
/// # Example
/// ```
/// use tt_core::charset::Charset;
/// use tt_core::frame::LumaFrame;
/// use tt_core::testing::CoverageFont;
/// use tt_ascii::calibrate::calibrate;
/// use tt_ascii::convert::convert;
///
/// let font = CoverageFont::new(6, 10).with_glyph(' ', 0.0).with_glyph('#', 1.0);
/// let cal = calibrate(&Charset::new(" #"), &font, false).unwrap();
/// let image = LumaFrame::from_raw(2, 2, vec![0, 255, 255, 0]).unwrap();
/// let grid = convert(&image, &cal.table, 2.0, false);
/// assert_eq!(grid.to_string(), "  ##\n##  ");
/// ```
#[must_use]
pub fn convert(
    image: &LumaFrame,
    table: &LookupTable,
    horizontal_ratio: f32,
    dither: bool,
) -> TextGrid {
    let mut grid = TextGrid::new();
    if image.is_empty() {
        return grid;
    }

    let width = image.width as usize;
    let height = image.height as usize;
    let capacity = (width as f32 * horizontal_ratio).ceil() as usize;
    let mut diffuser = dither.then(|| ErrorDiffuser::new(width));

    for (y, row) in image.rows().enumerate() {
        let has_next_row = y + 1 < height;
        let line = grid.push_row(capacity);
        let mut carry = 0.0f32;

        for (x, &luminance) in row.iter().enumerate() {
            let ch = match diffuser.as_mut() {
                Some(d) => d.quantize(x, luminance, table, has_next_row),
                None => table.map(luminance),
            };

            carry += horizontal_ratio;
            let repeat = carry.floor();
            carry -= repeat;
            line.extend(std::iter::repeat_n(ch, repeat as usize));
        }

        if let Some(d) = diffuser.as_mut() {
            d.next_row();
        }
    }
    grid
}
