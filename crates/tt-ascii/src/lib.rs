//! Conversion engine: charset calibration, luminance → character mapping,
//! error-diffusion dithering and aspect-correcting repetition.

pub mod calibrate;
pub mod convert;
pub mod dither;

pub use calibrate::{Calibration, LookupTable, LutEntry, calibrate};
pub use convert::convert;
