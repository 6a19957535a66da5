//! bmfcgen: Generate AngelCode Bitmap Font Generator configuration files
//!
//! Reads a JSON description of many font configs that share a template and
//! writes one `.bmfc` file per entry, leaving unchanged files untouched.

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
