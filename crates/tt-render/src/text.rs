use tt_core::frame::{LumaFrame, TextGrid};
use tt_core::traits::GlyphRasterizer;

/// Background and foreground luminance for a polarity.
///
/// `invert == false` is light ink on a dark canvas.
#[must_use]
pub fn polarity(invert: bool) -> (u8, u8) {
    if invert { (255, 0) } else { (0, 255) }
}

/// Render a text grid back into a luminance image with `font`.
///
/// The canvas is sized by the font's multi-line metrics, filled with the
/// background of the chosen polarity, then the text is drawn in the
/// foreground colour with `line_spacing` extra pixels between rows.
///
/// # Example
/// ```
/// use tt_core::frame::TextGrid;
/// use tt_core::testing::CoverageFont;
/// use tt_render::text::render_text;
///
/// let font = CoverageFont::new(4, 8).with_glyph('#', 1.0);
/// let grid = TextGrid::from_rows(vec![vec!['#', ' '], vec![' ', '#']]);
/// let image = render_text(&grid, &font, false, 2);
/// assert_eq!((image.width, image.height), (8, 18));
/// assert_eq!(image.get(0, 0), 255);
/// assert_eq!(image.get(7, 0), 0);
/// ```
#[must_use]
pub fn render_text<F>(grid: &TextGrid, font: &F, invert: bool, line_spacing: u32) -> LumaFrame
where
    F: GlyphRasterizer + ?Sized,
{
    let text = grid.to_string();
    let (background, foreground) = polarity(invert);
    let (width, height) = font.measure_multiline(&text, line_spacing);
    let mut canvas = LumaFrame::filled(width, height, background);
    font.draw_multiline(&mut canvas, &text, foreground, line_spacing);
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;
    use tt_core::testing::CoverageFont;

    fn font() -> CoverageFont {
        CoverageFont::new(3, 6)
            .with_glyph(' ', 0.0)
            .with_glyph('.', 0.2)
            .with_glyph('#', 1.0)
    }

    fn grid(text: &str) -> TextGrid {
        TextGrid::from_rows(text.split('\n').map(|l| l.chars().collect()).collect())
    }

    #[test]
    fn blank_text_shows_background_polarity() {
        let g = grid("   \n   ");
        let dark = render_text(&g, &font(), false, 0);
        assert!(dark.data.iter().all(|&v| v == 0));
        let light = render_text(&g, &font(), true, 0);
        assert!(light.data.iter().all(|&v| v == 255));
    }

    #[test]
    fn ink_uses_foreground_polarity() {
        let g = grid("#");
        assert!(render_text(&g, &font(), false, 0).data.iter().all(|&v| v == 255));
        assert!(render_text(&g, &font(), true, 0).data.iter().all(|&v| v == 0));
    }

    #[test]
    fn spacing_separates_rows() {
        let g = grid("#\n#");
        let image = render_text(&g, &font(), false, 4);
        assert_eq!((image.width, image.height), (3, 16));
        // Gap rows between the two lines stay background.
        for y in 6..10 {
            assert_eq!(image.get(0, y), 0);
        }
        assert_eq!(image.get(0, 10), 255);
    }

    #[test]
    fn widest_row_sets_width() {
        let image = render_text(&grid("#\n.#.#"), &font(), false, 0);
        assert_eq!(image.width, 12);
        assert_eq!(image.height, 12);
    }

    #[test]
    fn rendering_is_pure() {
        let g = grid(".#.\n#.#");
        assert_eq!(render_text(&g, &font(), true, 1), render_text(&g, &font(), true, 1));
    }
}
