//! Rendering module for arthash.
//!
//! Composes a seed's selected masks and palette into a pixel grid, scales
//! it, and exports PNG files.

mod compose;
mod png;

pub use compose::{compose, generate, RenderedIcon};
pub use png::{scale_pixels, write_png};
