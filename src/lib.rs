//! arthash - Deterministic pixel-art avatar generation
//!
//! A library for deriving small, reproducible pixel-art icons from seed
//! strings: the same seed always produces the same image, and different
//! seeds vary in shape, orientation, colour scheme, and framing.

pub mod cli;
pub mod derive;
pub mod error;
pub mod masks;
pub mod output;
pub mod render;
pub mod types;

pub use derive::{digest, Selection};
pub use error::{ArtError, Result};
pub use masks::{BorderKind, ShapeKind};
pub use render::{compose, generate, scale_pixels, write_png, RenderedIcon};
pub use types::{Colour, Mask, Palette, Size, GRID_SIZE, PALETTES};
