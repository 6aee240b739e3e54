//! Floyd–Steinberg error diffusion over a character lookup table.
//!
//! Pending error lives in a two-row rolling buffer owned by one conversion.
//! Neighbours outside the image receive nothing: error never wraps from the
//! last column of a row into the first column of the next.

use crate::calibrate::LookupTable;

/// Share of the error pushed to the right neighbour.
pub const WEIGHT_RIGHT: f32 = 7.0 / 16.0;
/// Share pushed below-left.
pub const WEIGHT_BELOW_LEFT: f32 = 3.0 / 16.0;
/// Share pushed straight below.
pub const WEIGHT_BELOW: f32 = 5.0 / 16.0;
/// Share pushed below-right.
pub const WEIGHT_BELOW_RIGHT: f32 = 1.0 / 16.0;

/// Pending quantization error for the current and next image rows.
///
/// # Example
/// ```
/// use tt_ascii::dither::ErrorDiffuser;
/// let mut d = ErrorDiffuser::new(3);
/// let kept = d.diffuse(1, 16.0, true);
/// assert_eq!(kept, 16.0);
/// assert_eq!(d.pending(2), 7.0);
/// d.next_row();
/// assert_eq!(d.pending(0), 3.0);
/// assert_eq!(d.pending(1), 5.0);
/// assert_eq!(d.pending(2), 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct ErrorDiffuser {
    current: Vec<f32>,
    next: Vec<f32>,
}

impl ErrorDiffuser {
    #[must_use]
    pub fn new(width: usize) -> Self {
        Self {
            current: vec![0.0; width],
            next: vec![0.0; width],
        }
    }

    /// Error accumulated so far for column `x` of the current row.
    #[inline(always)]
    #[must_use]
    pub fn pending(&self, x: usize) -> f32 {
        self.current[x]
    }

    /// Spread `error` from column `x` of the current row to its unvisited
    /// neighbours. `has_next_row` is false on the last image row.
    ///
    /// Returns the part of `error` that landed inside the image.
    pub fn diffuse(&mut self, x: usize, error: f32, has_next_row: bool) -> f32 {
        let width = self.current.len();
        let has_right = x + 1 < width;
        let has_left = x > 0;
        let mut kept = 0.0;

        if has_right {
            self.current[x + 1] += error * WEIGHT_RIGHT;
            kept += error * WEIGHT_RIGHT;
        }
        if has_next_row {
            if has_left {
                self.next[x - 1] += error * WEIGHT_BELOW_LEFT;
                kept += error * WEIGHT_BELOW_LEFT;
            }
            self.next[x] += error * WEIGHT_BELOW;
            kept += error * WEIGHT_BELOW;
            if has_right {
                self.next[x + 1] += error * WEIGHT_BELOW_RIGHT;
                kept += error * WEIGHT_BELOW_RIGHT;
            }
        }
        kept
    }

    /// Pick the character for `luminance` at column `x`, then diffuse the
    /// difference between the adjusted value and the character's own tone.
    pub fn quantize(
        &mut self,
        x: usize,
        luminance: u8,
        table: &LookupTable,
        has_next_row: bool,
    ) -> char {
        let adjusted = (f32::from(luminance) + self.pending(x)).clamp(0.0, 255.0);
        let entry = table.entry(adjusted.round() as u8);
        let error = adjusted - entry.intensity * 255.0;
        self.diffuse(x, error, has_next_row);
        entry.ch
    }

    /// Finish the current row: the next row becomes current and a cleared
    /// buffer takes its place.
    pub fn next_row(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
        self.next.fill(0.0);
    }
}
