use std::fmt;

/// Single-channel luminance raster, row-major, 0 = darkest, 255 = lightest.
///
/// Used for source images, glyph bitmaps and rendered output alike.
///
/// # Example
/// ```
/// use tt_core::frame::LumaFrame;
/// let mut frame = LumaFrame::filled(3, 2, 10);
/// frame.set(2, 1, 200);
/// assert_eq!(frame.get(2, 1), 200);
/// assert_eq!(frame.get(0, 0), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LumaFrame {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Bitmap of one rendered character, same layout as any other frame.
pub type GlyphBitmap = LumaFrame;

impl LumaFrame {
    /// Create a black frame.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, 0)
    }

    /// Create a frame with every sample set to `value`.
    #[must_use]
    pub fn filled(width: u32, height: u32, value: u8) -> Self {
        Self {
            data: vec![value; width as usize * height as usize],
            width,
            height,
        }
    }

    /// Wrap an existing buffer. Returns `None` if `data.len() != width * height`.
    #[must_use]
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        (data.len() == width as usize * height as usize).then_some(Self {
            data,
            width,
            height,
        })
    }

    #[inline(always)]
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.data[self.index(x, y)]
    }

    #[inline(always)]
    pub fn set(&mut self, x: u32, y: u32, value: u8) {
        let i = self.index(x, y);
        self.data[i] = value;
    }

    /// Iterate over rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(self.width.max(1) as usize)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[inline(always)]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

/// Rows of characters produced by the conversion engine.
///
/// `Display` joins rows with `\n`, without a trailing newline.
///
/// # Example
/// ```
/// use tt_core::frame::TextGrid;
/// let grid = TextGrid::from_rows(vec![vec!['a', 'b'], vec!['c']]);
/// assert_eq!(grid.to_string(), "ab\nc");
/// assert_eq!(grid.width(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextGrid {
    rows: Vec<Vec<char>>,
}

impl TextGrid {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_rows(rows: Vec<Vec<char>>) -> Self {
        Self { rows }
    }

    /// Append a row and return it for filling.
    pub fn push_row(&mut self, capacity: usize) -> &mut Vec<char> {
        self.rows.push(Vec::with_capacity(capacity));
        let last = self.rows.len() - 1;
        &mut self.rows[last]
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<char>] {
        &self.rows
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row.
    #[must_use]
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl fmt::Display for TextGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for ch in row {
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_rejects_wrong_length() {
        assert!(LumaFrame::from_raw(2, 2, vec![0; 3]).is_none());
        assert!(LumaFrame::from_raw(2, 2, vec![0; 4]).is_some());
    }

    #[test]
    fn rows_split_by_width() {
        let frame = LumaFrame::from_raw(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let rows: Vec<&[u8]> = frame.rows().collect();
        assert_eq!(rows, vec![&[1u8, 2][..], &[3u8, 4][..], &[5u8, 6][..]]);
    }

    #[test]
    fn empty_grid_displays_nothing() {
        assert_eq!(TextGrid::new().to_string(), "");
        assert_eq!(TextGrid::new().width(), 0);
    }

    #[test]
    fn push_row_appends() {
        let mut grid = TextGrid::new();
        grid.push_row(2).extend(['x', 'y']);
        grid.push_row(0);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.to_string(), "xy\n");
    }
}
