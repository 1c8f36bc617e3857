pub mod batch;
pub mod completions;
pub mod generate;
pub mod palette;

use clap::{Parser, Subcommand};

/// arthash - deterministic pixel-art avatars from seed strings
#[derive(Parser, Debug)]
#[command(name = "arthash")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render icons for the given seeds
    Generate(generate::GenerateArgs),

    /// Render icons for randomly generated demo seeds
    Batch(batch::BatchArgs),

    /// List the palette catalog or inspect a seed's derived selection
    Palette(palette::PaletteArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
