//! Icon compositing - layers masks and a palette into final pixel colours.

use crate::derive::Selection;
use crate::masks::{BorderKind, ShapeKind};
use crate::types::{Colour, Mask, Palette, Size, GRID_SIZE, PALETTES};

use super::png::scale_pixels;

/// A rendered icon - a grid of colours derived from a seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedIcon {
    /// The seed the icon was derived from.
    pub seed: String,

    /// Pixel grid (row-major: pixels[y][x]).
    pixels: Vec<Vec<Colour>>,

    /// Width in pixels.
    width: usize,

    /// Height in pixels.
    height: usize,
}

impl RenderedIcon {
    /// Create a new rendered icon.
    pub fn new(seed: impl Into<String>, pixels: Vec<Vec<Colour>>) -> Self {
        let height = pixels.len();
        let width = pixels.first().map_or(0, |row| row.len());

        Self {
            seed: seed.into(),
            pixels,
            width,
            height,
        }
    }

    /// Get the width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the dimensions as (width, height).
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Get a pixel at the given position.
    pub fn get(&self, x: usize, y: usize) -> Option<Colour> {
        self.pixels.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Get a reference to the pixel grid.
    pub fn pixels(&self) -> &[Vec<Colour>] {
        &self.pixels
    }

    /// Convert to a flat RGBA buffer (for image output).
    pub fn to_rgba_buffer(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(self.width * self.height * 4);
        for row in &self.pixels {
            for colour in row {
                buffer.extend_from_slice(&colour.to_rgba());
            }
        }
        buffer
    }
}

/// Layer masks and a palette into a 16×16 pixel grid.
///
/// Per-pixel priority, highest first: border, overlay (accent), primary,
/// background. Where layers coincide the higher layer always wins, so a
/// border crossing the shape at the grid edge shows the border colour.
/// Every pixel receives exactly one of the four palette colours; there is
/// no blending.
pub fn compose(
    primary: &Mask,
    overlay: Option<&Mask>,
    border: Option<&Mask>,
    palette: &Palette,
) -> Vec<Vec<Colour>> {
    let mut pixels = vec![vec![palette.background; GRID_SIZE]; GRID_SIZE];

    for (y, row) in pixels.iter_mut().enumerate() {
        for (x, pixel) in row.iter_mut().enumerate() {
            *pixel = if border.is_some_and(|m| m.get(x, y)) {
                palette.border
            } else if overlay.is_some_and(|m| m.get(x, y)) {
                palette.accent
            } else if primary.get(x, y) {
                palette.primary
            } else {
                palette.background
            };
        }
    }

    pixels
}

/// Generate the icon for a seed at the given size.
///
/// The pipeline is digest → selection → catalog lookups → flip → compose →
/// scale. For a fixed (seed, size) pair the result is bit-for-bit identical
/// across calls, processes, and platforms.
pub fn generate(seed: &str, size: Size) -> RenderedIcon {
    let selection = Selection::from_seed(seed);
    let palette = &PALETTES[selection.palette];

    let mut primary = selection.template.mask();
    let mut overlay = selection.overlay.map(ShapeKind::mask);
    if selection.flip {
        // Flip both layers so orientation stays consistent between them
        primary = primary.flip_horizontal();
        overlay = overlay.map(|m| m.flip_horizontal());
    }
    let border = selection.border.map(BorderKind::mask);

    let pixels = compose(&primary, overlay.as_ref(), border.as_ref(), palette);
    let pixels = scale_pixels(&pixels, size.factor());
    RenderedIcon::new(seed, pixels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn full_mask() -> Mask {
        let mut m = Mask::empty();
        for y in 0..GRID_SIZE as i32 {
            for x in 0..GRID_SIZE as i32 {
                m.set(x, y);
            }
        }
        m
    }

    #[test]
    fn test_layering_priority_border_wins() {
        // All three layers mark every cell; the border colour must win
        let all = full_mask();
        let palette = &PALETTES[0];

        let pixels = compose(&all, Some(&all), Some(&all), palette);
        for row in &pixels {
            for &pixel in row {
                assert_eq!(pixel, palette.border);
            }
        }
    }

    #[test]
    fn test_layering_priority_overlay_beats_primary() {
        let all = full_mask();
        let palette = &PALETTES[0];

        let pixels = compose(&all, Some(&all), None, palette);
        assert_eq!(pixels[0][0], palette.accent);
        assert_eq!(pixels[8][8], palette.accent);
    }

    #[test]
    fn test_compose_background_fills_unset_cells() {
        let empty = Mask::empty();
        let palette = &PALETTES[2];

        let pixels = compose(&empty, None, None, palette);
        for row in &pixels {
            for &pixel in row {
                assert_eq!(pixel, palette.background);
            }
        }
    }

    #[test]
    fn test_generate_is_deterministic() {
        for seed in ["HAZNOODLi", "", "a", "hello world"] {
            let first = generate(seed, Size::Small);
            let second = generate(seed, Size::Small);
            assert_eq!(first, second, "seed {:?} not reproducible", seed);
        }
    }

    #[test]
    fn test_generate_base_dimensions() {
        let icon = generate("monster", Size::Small);
        assert_eq!(icon.size(), (16, 16));
    }

    #[test]
    fn test_scaled_generate_replicates_base_pixels() {
        let base = generate("HAZNOODLi", Size::Small);
        let large = generate("HAZNOODLi", Size::Large);

        assert_eq!(large.size(), (64, 64));
        for y in 0..64 {
            for x in 0..64 {
                assert_eq!(large.get(x, y), base.get(x / 4, y / 4));
            }
        }
    }

    #[test]
    fn test_generate_known_seed_uses_selected_palette() {
        // "HAZNOODLi" selects palette 1 with no border; the corner cell is
        // outside the star and its flipped dog overlay, so it holds the
        // background colour.
        let icon = generate("HAZNOODLi", Size::Small);
        assert_eq!(icon.get(0, 0), Some(PALETTES[1].background));
    }

    #[test]
    fn test_generate_applies_border() {
        // The empty seed derives a rect border; every perimeter pixel holds
        // the border colour regardless of the shape underneath.
        let icon = generate("", Size::Small);
        let border = PALETTES[0].border;
        for i in 0..16 {
            assert_eq!(icon.get(i, 0), Some(border));
            assert_eq!(icon.get(i, 15), Some(border));
            assert_eq!(icon.get(0, i), Some(border));
            assert_eq!(icon.get(15, i), Some(border));
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = generate("a", Size::Small);
        let b = generate("b", Size::Small);
        assert_ne!(a.pixels(), b.pixels());
    }

    #[test]
    fn test_rendered_icon_accessors() {
        let pixels = vec![
            vec![Colour::BLACK, Colour::WHITE],
            vec![Colour::WHITE, Colour::BLACK],
        ];
        let icon = RenderedIcon::new("test", pixels);

        assert_eq!(icon.seed, "test");
        assert_eq!(icon.width(), 2);
        assert_eq!(icon.height(), 2);
        assert_eq!(icon.get(0, 0), Some(Colour::BLACK));
        assert_eq!(icon.get(5, 5), None);
    }

    #[test]
    fn test_rendered_icon_to_rgba_buffer() {
        let pixels = vec![vec![Colour::rgb(255, 0, 0), Colour::rgb(0, 255, 0)]];
        let icon = RenderedIcon::new("test", pixels);

        let buffer = icon.to_rgba_buffer();
        assert_eq!(buffer.len(), 8);
        assert_eq!(&buffer[0..4], &[255, 0, 0, 255]);
        assert_eq!(&buffer[4..8], &[0, 255, 0, 255]);
    }
}
