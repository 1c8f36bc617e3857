//! Batch command implementation.
//!
//! Renders icons for a batch of randomly generated seeds, for demos and
//! eyeballing catalog variety. The randomness only picks the seed strings;
//! each icon itself is still the deterministic function of its seed.

use std::path::PathBuf;

use clap::Args;
use rand::Rng;

use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::types::Size;

use super::generate::{ensure_output_dir, write_icon};

const SEED_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Render icons for randomly generated demo seeds
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Number of icons to generate
    #[arg(long, short, default_value = "28")]
    pub count: usize,

    /// Length of each random seed
    #[arg(long, default_value = "8")]
    pub length: usize,

    /// Output size
    #[arg(long, short, value_enum, default_value_t = Size::Large)]
    pub size: Size,

    /// Output directory
    #[arg(long, short, default_value = "out")]
    pub output: PathBuf,
}

pub fn run(args: BatchArgs) -> Result<()> {
    let printer = Printer::new();

    ensure_output_dir(&args.output)?;

    let mut rng = rand::rng();
    for _ in 0..args.count {
        let seed = random_seed(&mut rng, args.length);
        // One bad write shouldn't abort the rest of the batch
        match write_icon(&seed, args.size, &args.output) {
            Ok(path) => printer.status("Saved", &display_path(&path)),
            Err(e) => printer.error("Failed", &format!("{}: {}", seed, e)),
        }
    }

    printer.success(
        "Finished",
        &format!(
            "{} in {}",
            plural(args.count, "icon", "icons"),
            display_path(&args.output)
        ),
    );
    Ok(())
}

/// Random alphanumeric seed of the given length.
fn random_seed(rng: &mut impl Rng, length: usize) -> String {
    (0..length)
        .map(|_| SEED_ALPHABET[rng.random_range(0..SEED_ALPHABET.len())] as char)
        .collect()
}
