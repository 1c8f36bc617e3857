//! Shape template catalog.
//!
//! Each template is hand-authored closed-form geometry over the 16×16 grid:
//! filled-disk tests for heads, axis-aligned rectangles for bodies and limbs,
//! parametric lines for star points. The templates contain no randomness;
//! all variation comes from which template is selected and how the result is
//! transformed afterwards. Every write goes through the clipping `Mask::set`.

use crate::types::Mask;

/// The fixed, ordered catalog of shape silhouettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Person,
    Dog,
    Cat,
    Tree,
    Star,
}

impl ShapeKind {
    /// All shapes in catalog order.
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Person,
        ShapeKind::Dog,
        ShapeKind::Cat,
        ShapeKind::Tree,
        ShapeKind::Star,
    ];

    /// Catalog lookup by digest byte; wraps modulo the catalog length.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Display name for CLI output.
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Person => "person",
            ShapeKind::Dog => "dog",
            ShapeKind::Cat => "cat",
            ShapeKind::Tree => "tree",
            ShapeKind::Star => "star",
        }
    }

    /// Generate the silhouette mask for this shape.
    pub fn mask(self) -> Mask {
        match self {
            ShapeKind::Person => person(),
            ShapeKind::Dog => dog(),
            ShapeKind::Cat => cat(),
            ShapeKind::Tree => tree(),
            ShapeKind::Star => star(),
        }
    }
}

/// Fill a disk of radius `r` centred at (cx, cy): dx² + dy² ≤ r².
fn disk(m: &mut Mask, cx: i32, cy: i32, r: i32) {
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy <= r * r {
                m.set(cx + dx, cy + dy);
            }
        }
    }
}

/// Fill an axis-aligned rectangle with inclusive bounds.
fn rect(m: &mut Mask, x0: i32, y0: i32, x1: i32, y1: i32) {
    for y in y0..=y1 {
        for x in x0..=x1 {
            m.set(x, y);
        }
    }
}

fn person() -> Mask {
    let mut m = Mask::empty();
    // Head
    disk(&mut m, 7, 2, 2);
    // Torso
    rect(&mut m, 6, 5, 9, 10);
    // Arms
    rect(&mut m, 4, 5, 5, 8);
    rect(&mut m, 10, 5, 11, 8);
    // Legs
    rect(&mut m, 6, 11, 6, 15);
    rect(&mut m, 9, 11, 9, 15);
    m
}

fn dog() -> Mask {
    let mut m = Mask::empty();
    // Body
    rect(&mut m, 3, 8, 11, 12);
    // Head
    disk(&mut m, 12, 6, 2);
    // Ears
    m.set(11, 3);
    m.set(13, 3);
    // Legs
    rect(&mut m, 4, 13, 4, 15);
    rect(&mut m, 10, 13, 10, 15);
    // Tail, rising diagonally off the rear
    for i in 0..4 {
        m.set(3 - i, 8 - i);
    }
    m
}

fn cat() -> Mask {
    let mut m = Mask::empty();
    // Head
    disk(&mut m, 8, 4, 2);
    // Ears
    m.set(6, 2);
    m.set(10, 2);
    // Body
    rect(&mut m, 6, 6, 10, 10);
    // Tail
    for i in 0..4 {
        m.set(10, 10 + i);
    }
    m
}

fn tree() -> Mask {
    let mut m = Mask::empty();
    // Triangular foliage widening row by row
    for y in 0..8 {
        for x in (8 - y)..=(7 + y) {
            m.set(x, y + 2);
        }
    }
    // Trunk
    for y in 10..16 {
        m.set(7, y);
        m.set(8, y);
    }
    m
}

fn star() -> Mask {
    let mut m = Mask::empty();
    let (cx, cy) = (7, 7);
    // Horizontal and vertical rays spanning the full grid
    for i in 0..16 {
        m.set(i, cy);
        m.set(cx, i);
    }
    // Shorter diagonal rays
    for d in -3..=3 {
        m.set(cx + d, cy + d);
        m.set(cx + d, cy - d);
    }
    m
}
