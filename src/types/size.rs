//! Output size selection.

use clap::ValueEnum;

/// Integer scale selector for the final icon.
///
/// The base grid is 16×16; the scaler replicates each pixel by the factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Size {
    /// 16×16, no scaling.
    Small,
    /// 32×32 (2× nearest-neighbour).
    Medium,
    /// 64×64 (4× nearest-neighbour).
    #[default]
    Large,
}

impl Size {
    /// The nearest-neighbour replication factor.
    pub const fn factor(self) -> u32 {
        match self {
            Size::Small => 1,
            Size::Medium => 2,
            Size::Large => 4,
        }
    }
}
