//! Output side of tonetext: the TrueType rasterizer used for calibration and
//! rendering, plus image and text writers.

pub mod font;
pub mod image;
pub mod text;
