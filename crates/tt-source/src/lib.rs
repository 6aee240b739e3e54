//! Source image decoding and resampling for tonetext.

pub mod image;
pub mod resize;
