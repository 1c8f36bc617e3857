//! Generate command implementation.
//!
//! Renders one icon per seed and writes PNG files into the output directory.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::error::{ArtError, Result};
use crate::output::{display_path, plural, Printer};
use crate::render::{generate, write_png};
use crate::types::Size;

/// Render icons for the given seeds
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Seed strings to render
    #[arg(required = true)]
    pub seeds: Vec<String>,

    /// Output size
    #[arg(long, short, value_enum, default_value_t = Size::Large)]
    pub size: Size,

    /// Output directory
    #[arg(long, short, default_value = "out")]
    pub output: PathBuf,
}

pub fn run(args: GenerateArgs) -> Result<()> {
    let printer = Printer::new();

    ensure_output_dir(&args.output)?;

    for seed in &args.seeds {
        let path = write_icon(seed, args.size, &args.output)?;
        printer.status("Saved", &display_path(&path));
    }

    printer.success(
        "Finished",
        &format!(
            "{} in {}",
            plural(args.seeds.len(), "icon", "icons"),
            display_path(&args.output)
        ),
    );
    Ok(())
}

/// Create the output directory if it does not exist.
pub(crate) fn ensure_output_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| ArtError::Io {
            path: dir.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }
    Ok(())
}

/// Render a seed and write `<sanitized seed>.png` into `dir`.
pub(crate) fn write_icon(seed: &str, size: Size, dir: &Path) -> Result<PathBuf> {
    let icon = generate(seed, size);
    let path = dir.join(format!("{}.png", sanitize(seed)));
    write_png(&icon, &path)?;
    Ok(path)
}

/// Map a seed to a filesystem-safe file stem.
///
/// The icon is derived from the raw seed; only the file name is cleaned, so
/// seeds differing in special characters may share a name and overwrite each
/// other on disk.
fn sanitize(seed: &str) -> String {
    let cleaned: String = seed
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect();

    if cleaned.is_empty() {
        "empty".to_string()
    } else {
        cleaned
    }
}
