//! Palette listing and seed inspection.

use clap::Args;

use crate::derive::Selection;
use crate::error::Result;
use crate::output::{plural, Printer};
use crate::types::{Palette, PALETTES};

/// List the palette catalog or inspect a seed's derived selection
#[derive(Args, Debug)]
pub struct PaletteArgs {
    /// Show the full selection derived from this seed
    #[arg(long)]
    pub seed: Option<String>,
}

pub fn run(args: PaletteArgs) -> Result<()> {
    let printer = Printer::new();

    if let Some(seed) = &args.seed {
        let selection = Selection::from_seed(seed);
        let palette = &PALETTES[selection.palette];

        printer.info("Derived", &format!("selection for {:?}", seed));
        println!("template: {}", selection.template.name());
        println!("palette:  {}", palette.name);
        println!("flip:     {}", selection.flip);
        println!(
            "overlay:  {}",
            selection.overlay.map_or("none", |shape| shape.name())
        );
        println!(
            "border:   {}",
            selection.border.map_or("none", |border| border.name())
        );
        return Ok(());
    }

    printer.info(
        "Listing",
        &plural(PALETTES.len(), "palette", "palettes"),
    );
    for palette in &PALETTES {
        println!("{}", format_palette(palette));
    }
    Ok(())
}

fn format_palette(palette: &Palette) -> String {
    format!(
        "{:<10} bg {} primary {} accent {} border {}",
        palette.name, palette.background, palette.primary, palette.accent, palette.border
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_palette() {
        let line = format_palette(&PALETTES[0]);
        assert!(line.starts_with("paper"));
        assert!(line.contains("bg #F0F0F0"));
        assert!(line.contains("border #000000"));
    }
}
