//! PNG output for rendered icons.
//!
//! Converts rendered icons to PNG files; integer scaling happens before
//! export via [`scale_pixels`].

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::error::{ArtError, Result};
use crate::types::Colour;

use super::RenderedIcon;

/// Write a rendered icon to a PNG file.
pub fn write_png(icon: &RenderedIcon, path: &Path) -> Result<()> {
    let width = icon.width() as u32;
    let height = icon.height() as u32;

    let mut img: RgbaImage = ImageBuffer::new(width, height);

    for (y, row) in icon.pixels().iter().enumerate() {
        for (x, colour) in row.iter().enumerate() {
            img.put_pixel(x as u32, y as u32, Rgba(colour.to_rgba()));
        }
    }

    img.save(path).map_err(|e| ArtError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}

/// Scale a pixel grid by an integer factor.
///
/// Uses nearest-neighbour replication for crisp pixel art: each source
/// pixel at (x, y) fills a factor×factor block. A factor of 1 returns the
/// grid unchanged.
pub fn scale_pixels(pixels: &[Vec<Colour>], factor: u32) -> Vec<Vec<Colour>> {
    if factor <= 1 {
        return pixels.to_vec();
    }

    let factor = factor as usize;
    let height = pixels.len();
    let width = pixels.first().map_or(0, |row| row.len());

    let mut scaled = vec![vec![Colour::TRANSPARENT; width * factor]; height * factor];

    for (y, row) in pixels.iter().enumerate() {
        for (x, &colour) in row.iter().enumerate() {
            for sy in 0..factor {
                for sx in 0..factor {
                    scaled[y * factor + sy][x * factor + sx] = colour;
                }
            }
        }
    }

    scaled
}
