//! Core domain types for arthash.
//!
//! This module contains the fundamental types used throughout the pipeline:
//! - `Colour` - RGBA colour values
//! - `Mask` - 16×16 boolean occupancy grids
//! - `Palette` - Four-colour schemes with fixed layer roles
//! - `Size` - Integer output scale selection

mod colour;
mod mask;
mod palette;
mod size;

pub use colour::Colour;
pub use mask::{Mask, GRID_SIZE};
pub use palette::{Palette, PALETTES};
pub use size::Size;
