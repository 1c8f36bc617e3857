//! Border mask catalog.
//!
//! Frame decorations confined to the outermost ring of the grid (row/column
//! 0 and 15). Every entry leaves interior cells untouched, which the
//! compositor relies on when layering a border over a shape.

use crate::types::{Mask, GRID_SIZE};

const EDGE: i32 = GRID_SIZE as i32 - 1;

/// The fixed, ordered catalog of frame decorations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderKind {
    Rect,
    Ring,
    Dots,
    Checker,
}

impl BorderKind {
    /// All borders in catalog order.
    pub const ALL: [BorderKind; 4] = [
        BorderKind::Rect,
        BorderKind::Ring,
        BorderKind::Dots,
        BorderKind::Checker,
    ];

    /// Catalog lookup by digest byte; wraps modulo the catalog length.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Display name for CLI output.
    pub fn name(self) -> &'static str {
        match self {
            BorderKind::Rect => "rect",
            BorderKind::Ring => "ring",
            BorderKind::Dots => "dots",
            BorderKind::Checker => "checker",
        }
    }

    /// Generate the frame mask for this border.
    pub fn mask(self) -> Mask {
        match self {
            BorderKind::Rect => rect(),
            BorderKind::Ring => ring(),
            BorderKind::Dots => dots(),
            BorderKind::Checker => checker(),
        }
    }
}

/// The four perimeter cells in column/row `i`.
fn perimeter_cells(i: i32) -> [(i32, i32); 4] {
    [(i, 0), (i, EDGE), (0, i), (EDGE, i)]
}

fn rect() -> Mask {
    let mut m = Mask::empty();
    for i in 0..GRID_SIZE as i32 {
        for (x, y) in perimeter_cells(i) {
            m.set(x, y);
        }
    }
    m
}

/// Perimeter cells within the distance band of a grid-centred circle of
/// radius 7.5, giving a frame with the corners cut away.
fn ring() -> Mask {
    let mut m = Mask::empty();
    let centre = (GRID_SIZE as f64 - 1.0) / 2.0;
    let radius = GRID_SIZE as f64 / 2.0 - 0.5;
    let limit = (radius + 0.5) * (radius + 0.5);
    for i in 0..GRID_SIZE as i32 {
        for (x, y) in perimeter_cells(i) {
            let dx = f64::from(x) - centre;
            let dy = f64::from(y) - centre;
            if dx * dx + dy * dy <= limit {
                m.set(x, y);
            }
        }
    }
    m
}

/// Every second perimeter cell, stride-2 along each edge.
fn dots() -> Mask {
    let mut m = Mask::empty();
    for i in (0..GRID_SIZE as i32).step_by(2) {
        for (x, y) in perimeter_cells(i) {
            m.set(x, y);
        }
    }
    m
}

/// Checkerboard parity on the perimeter: cells where (x + y) is even, so
/// opposite edges alternate out of phase with each other.
fn checker() -> Mask {
    let mut m = Mask::empty();
    for i in 0..GRID_SIZE as i32 {
        for (x, y) in perimeter_cells(i) {
            if (x + y) % 2 == 0 {
                m.set(x, y);
            }
        }
    }
    m
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on_outer_ring(x: usize, y: usize) -> bool {
        x == 0 || x == GRID_SIZE - 1 || y == 0 || y == GRID_SIZE - 1
    }

    #[test]
    fn test_from_index_wraps() {
        assert_eq!(BorderKind::from_index(0), BorderKind::Rect);
        assert_eq!(BorderKind::from_index(3), BorderKind::Checker);
        assert_eq!(BorderKind::from_index(4), BorderKind::Rect);
    }

    #[test]
    fn test_all_borders_confined_to_outer_ring() {
        for kind in BorderKind::ALL {
            for (x, y) in kind.mask().iter_set() {
                assert!(
                    on_outer_ring(x, y),
                    "{} border marks interior cell ({}, {})",
                    kind.name(),
                    x,
                    y
                );
            }
        }
    }

    #[test]
    fn test_rect_covers_full_perimeter() {
        let m = BorderKind::Rect.mask();
        // 16 cells per edge, corners shared between two edges
        assert_eq!(m.count(), 60);
    }

    #[test]
    fn test_ring_cuts_corners() {
        let m = BorderKind::Ring.mask();
        assert!(!m.get(0, 0));
        assert!(!m.get(15, 15));
        // Middle of each edge stays inside the band
        assert!(m.get(7, 0));
        assert!(m.get(0, 8));
        assert!(m.get(15, 7));
        assert!(m.get(8, 15));
        // Band boundary on the top edge: x 5..=10 in, x 4 out
        assert!(m.get(5, 0));
        assert!(m.get(10, 0));
        assert!(!m.get(4, 0));
        assert!(!m.get(11, 0));
    }

    #[test]
    fn test_dots_stride() {
        let m = BorderKind::Dots.mask();
        assert!(m.get(0, 0));
        assert!(!m.get(1, 0));
        assert!(m.get(2, 0));
        assert!(m.get(14, 15));
        assert!(!m.get(15, 15));
    }

    #[test]
    fn test_checker_alternates_parity_across_edges() {
        let m = BorderKind::Checker.mask();
        // Top edge holds even columns, bottom edge odd columns
        assert!(m.get(0, 0));
        assert!(!m.get(1, 0));
        assert!(m.get(1, 15));
        assert!(!m.get(0, 15));
        // So checker and dots are distinct catalog entries
        assert_ne!(m, BorderKind::Dots.mask());
    }
}
