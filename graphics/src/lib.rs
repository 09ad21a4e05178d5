//! Rasterizes knight paths as PNG images.

pub mod error;
pub mod render;
pub mod style;

pub use error::RenderError;
pub use render::BoardRenderer;
pub use style::{Color, RenderStyle, MAX_IMAGE_SIZE};
