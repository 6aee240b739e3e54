//! Text renderer: draws a converted text grid back into a raster image.

pub mod text;

pub use text::render_text;
