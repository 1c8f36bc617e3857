use arthash::cli::{Cli, Commands};
use clap::Parser;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => arthash::cli::generate::run(args)?,
        Commands::Batch(args) => arthash::cli::batch::run(args)?,
        Commands::Palette(args) => arthash::cli::palette::run(args)?,
        Commands::Completions(args) => arthash::cli::completions::run(args)?,
    }

    Ok(())
}
