//! Palette catalog for icon colouring.

use super::Colour;

/// A named four-colour scheme with fixed layer roles.
///
/// Each colour maps to exactly one compositing layer: `background` fills
/// unoccupied cells, `primary` the main silhouette, `accent` the overlay
/// shape, and `border` the frame decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub name: &'static str,
    pub background: Colour,
    pub primary: Colour,
    pub accent: Colour,
    pub border: Colour,
}

impl Palette {
    const fn new(
        name: &'static str,
        background: Colour,
        primary: Colour,
        accent: Colour,
        border: Colour,
    ) -> Self {
        Self {
            name,
            background,
            primary,
            accent,
            border,
        }
    }
}

/// The fixed, ordered palette catalog.
///
/// Selection is always a digest byte taken modulo the table length, so
/// lookups cannot go out of range. The table is immutable after compile;
/// concurrent reads need no coordination.
pub const PALETTES: [Palette; 16] = [
    Palette::new(
        "paper",
        Colour::rgb(240, 240, 240),
        Colour::rgb(30, 30, 30),
        Colour::rgb(200, 0, 0),
        Colour::rgb(0, 0, 0),
    ),
    Palette::new(
        "midnight",
        Colour::rgb(10, 10, 50),
        Colour::rgb(220, 220, 255),
        Colour::rgb(255, 200, 0),
        Colour::rgb(50, 50, 100),
    ),
    Palette::new(
        "terminal",
        Colour::rgb(0, 0, 0),
        Colour::rgb(100, 255, 100),
        Colour::rgb(255, 50, 50),
        Colour::rgb(255, 255, 255),
    ),
    Palette::new(
        "orchid",
        Colour::rgb(255, 240, 240),
        Colour::rgb(200, 100, 200),
        Colour::rgb(50, 50, 150),
        Colour::rgb(150, 50, 150),
    ),
    Palette::new(
        "lavender",
        Colour::rgb(230, 230, 250),
        Colour::rgb(75, 0, 130),
        Colour::rgb(138, 43, 226),
        Colour::rgb(72, 61, 139),
    ),
    Palette::new(
        "goldenrod",
        Colour::rgb(255, 250, 205),
        Colour::rgb(255, 215, 0),
        Colour::rgb(218, 165, 32),
        Colour::rgb(184, 134, 11),
    ),
    Palette::new(
        "lagoon",
        Colour::rgb(224, 255, 255),
        Colour::rgb(0, 206, 209),
        Colour::rgb(72, 209, 204),
        Colour::rgb(95, 158, 160),
    ),
    Palette::new(
        "flamingo",
        Colour::rgb(255, 228, 225),
        Colour::rgb(255, 105, 180),
        Colour::rgb(255, 20, 147),
        Colour::rgb(199, 21, 133),
    ),
    Palette::new(
        "sienna",
        Colour::rgb(245, 245, 220),
        Colour::rgb(160, 82, 45),
        Colour::rgb(210, 105, 30),
        Colour::rgb(139, 69, 19),
    ),
    Palette::new(
        "forest",
        Colour::rgb(224, 238, 224),
        Colour::rgb(34, 139, 34),
        Colour::rgb(0, 100, 0),
        Colour::rgb(85, 107, 47),
    ),
    Palette::new(
        "dune",
        Colour::rgb(245, 222, 179),
        Colour::rgb(210, 180, 140),
        Colour::rgb(222, 184, 135),
        Colour::rgb(160, 82, 45),
    ),
    Palette::new(
        "cobalt",
        Colour::rgb(176, 196, 222),
        Colour::rgb(65, 105, 225),
        Colour::rgb(25, 25, 112),
        Colour::rgb(0, 0, 139),
    ),
    Palette::new(
        "amber",
        Colour::rgb(255, 228, 181),
        Colour::rgb(255, 165, 0),
        Colour::rgb(255, 140, 0),
        Colour::rgb(255, 69, 0),
    ),
    Palette::new(
        "teal",
        Colour::rgb(240, 255, 255),
        Colour::rgb(32, 178, 170),
        Colour::rgb(0, 139, 139),
        Colour::rgb(47, 79, 79),
    ),
    Palette::new(
        "sandstone",
        Colour::rgb(255, 239, 213),
        Colour::rgb(244, 164, 96),
        Colour::rgb(210, 105, 30),
        Colour::rgb(160, 82, 45),
    ),
    Palette::new(
        "salmon",
        Colour::rgb(253, 245, 230),
        Colour::rgb(233, 150, 122),
        Colour::rgb(250, 128, 114),
        Colour::rgb(205, 92, 92),
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_names_unique() {
        let names: HashSet<_> = PALETTES.iter().map(|p| p.name).collect();
        assert_eq!(names.len(), PALETTES.len());
    }

    #[test]
    fn test_catalog_colours_opaque() {
        for palette in &PALETTES {
            for colour in [
                palette.background,
                palette.primary,
                palette.accent,
                palette.border,
            ] {
                assert_eq!(colour.a, 255, "palette {} has a non-opaque colour", palette.name);
            }
        }
    }

    #[test]
    fn test_background_differs_from_primary() {
        for palette in &PALETTES {
            assert_ne!(
                palette.background, palette.primary,
                "palette {} would render an invisible shape",
                palette.name
            );
        }
    }
}
