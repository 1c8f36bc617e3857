//! Seed digestion and selection derivation.
//!
//! Every visual choice is read from a fixed byte offset of a single SHA-256
//! digest of the seed. Reusing disjoint offsets of one digest avoids a
//! seeded PRNG state machine and keeps the whole derivation a pure function
//! of the seed bytes: one hash invocation fully determines the icon.

use sha2::{Digest, Sha256};

use crate::masks::{BorderKind, ShapeKind};
use crate::types::PALETTES;

// Digest byte offsets. Disjoint positions keep every choice independent.
const BYTE_TEMPLATE: usize = 0;
const BYTE_PALETTE: usize = 1;
const BYTE_FLIP: usize = 2;
const BYTE_OVERLAY: usize = 3;
const BYTE_OVERLAY_SHAPE: usize = 4;
const BYTE_BORDER: usize = 5;
const BYTE_BORDER_SHAPE: usize = 6;

/// Compute the SHA-256 digest of a seed.
///
/// Total over all byte sequences, including empty input. The digest serves
/// only as a deterministic pseudo-random source, never as a security
/// boundary.
pub fn digest(seed: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(seed);
    hasher.finalize().into()
}

/// The complete set of visual choices derived from a seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Primary shape template.
    pub template: ShapeKind,

    /// Index into [`PALETTES`].
    pub palette: usize,

    /// Mirror the primary shape (and overlay) horizontally.
    pub flip: bool,

    /// Secondary shape layered in the accent colour, if any.
    pub overlay: Option<ShapeKind>,

    /// Frame decoration, if any.
    pub border: Option<BorderKind>,
}

impl Selection {
    /// Derive the selection for a seed string.
    pub fn from_seed(seed: &str) -> Self {
        Self::from_digest(&digest(seed.as_bytes()))
    }

    /// Derive the selection from a precomputed digest.
    ///
    /// Catalog indices are taken modulo the catalog lengths and boolean
    /// flags from byte parity, so every digest value maps to an in-range
    /// selection.
    pub fn from_digest(h: &[u8; 32]) -> Self {
        let template = ShapeKind::from_index(h[BYTE_TEMPLATE] as usize);
        let palette = h[BYTE_PALETTE] as usize % PALETTES.len();
        let flip = h[BYTE_FLIP] % 2 == 0;
        let overlay = (h[BYTE_OVERLAY] % 2 == 0)
            .then(|| ShapeKind::from_index(h[BYTE_OVERLAY_SHAPE] as usize));
        let border = (h[BYTE_BORDER] % 2 == 0)
            .then(|| BorderKind::from_index(h[BYTE_BORDER_SHAPE] as usize));

        Self {
            template,
            palette,
            flip,
            overlay,
            border,
        }
    }
}
