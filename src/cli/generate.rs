//! Generate and resolve commands

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use bmfcgen::codec::serialize;
use bmfcgen::config::{load_description, resolve_entries};
use bmfcgen::domain::GenConfig;
use bmfcgen::output::write_configs;

#[derive(Args)]
pub struct InputArgs {
    /// JSON description file (comments allowed)
    #[arg(
        short,
        long,
        value_name = "FILE",
        env = "BMFCGEN_INPUT",
        default_value = "bmfcgen.json"
    )]
    pub input: PathBuf,
}

fn load(args: &InputArgs) -> Result<Vec<GenConfig>> {
    let description = load_description(&args.input)
        .with_context(|| format!("Failed loading description {}", args.input.display()))?;
    resolve_entries(&description)
        .with_context(|| format!("Failed resolving configs from {}", args.input.display()))
}

pub fn run(args: InputArgs) -> Result<()> {
    let configs = load(&args)?;

    println!("Generating bmfc files...");
    let report = write_configs(&configs, |record| println!("{record}"))
        .context("Failed writing bmfc files")?;
    println!(
        "{} files processed ({} written, {} skipped)",
        report.processed(),
        report.written(),
        report.skipped()
    );

    Ok(())
}

pub fn resolve(args: InputArgs) -> Result<()> {
    let configs = load(&args)?;
    for config in &configs {
        println!("==> {}", config.bmfc_file().display());
        print!("{}", serialize(&config.font));
    }
    Ok(())
}
