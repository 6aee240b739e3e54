//! Shared data model for tonetext: charsets, options, frames, errors and the
//! glyph rasterizer capability.

pub mod charset;
pub mod config;
pub mod error;
pub mod frame;
pub mod traits;

#[cfg(any(test, feature = "test-util"))]
pub mod testing;
