//! Command-line interface for bmfcgen
//!
//! Provides `generate`, `resolve`, `fix-face` and `fix-height` subcommands.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod fix;
mod generate;

/// Generate AngelCode Bitmap Font Generator configs from shared JSON templates
#[derive(Parser)]
#[command(name = "bmfcgen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write one .bmfc file per config entry, skipping unchanged files
    Generate(generate::InputArgs),

    /// Print the resolved config entries without writing anything
    Resolve(generate::InputArgs),

    /// Remove whitespace from the face name in .fnt files
    FixFace(fix::FixFaceArgs),

    /// Adjust line height, base and glyph rows in .fnt files
    FixHeight(fix::FixHeightArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let filter = log_filter(cli.verbose, std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref());
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Generate(args) => generate::run(args),
        Commands::Resolve(args) => generate::resolve(args),
        Commands::FixFace(args) => fix::run_face(args),
        Commands::FixHeight(args) => fix::run_height(args),
    }
}

/// A non-empty RUST_LOG is used as given. Otherwise `--verbose` selects DEBUG
/// and the default is WARN.
fn log_filter(verbose: bool, env: Option<&str>) -> EnvFilter {
    match env {
        Some(directives) if !directives.trim().is_empty() => EnvFilter::new(directives),
        _ => {
            let level = if verbose { LevelFilter::DEBUG } else { LevelFilter::WARN };
            EnvFilter::default().add_directive(level.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_filter_defaults_by_verbosity() {
        assert_eq!(log_filter(false, None).to_string(), "warn");
        assert_eq!(log_filter(true, None).to_string(), "debug");
        assert_eq!(log_filter(true, Some("  ")).to_string(), "debug");
    }

    #[test]
    fn log_filter_keeps_rust_log_untouched() {
        assert_eq!(log_filter(false, Some("bmfcgen=trace")).to_string(), "bmfcgen=trace");
        assert_eq!(log_filter(true, Some("error")).to_string(), "error");
    }
}
