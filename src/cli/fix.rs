//! In-place `.fnt` patch commands

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};

use bmfcgen::fnt::{fix_face, fix_height, HeightAdjust};

#[derive(Args)]
pub struct FixFaceArgs {
    /// One or more .fnt files
    #[arg(required = true, value_name = "FILES")]
    pub files: Vec<PathBuf>,
}

#[derive(Args)]
pub struct FixHeightArgs {
    /// New lineHeight value (match the source font)
    #[arg(long = "lh", value_name = "N")]
    pub line_height: Option<i64>,

    /// New base value (match the source font)
    #[arg(long = "ba", value_name = "N")]
    pub base: Option<i64>,

    /// Offset added to every glyph's y
    #[arg(
        short = 'y',
        long = "y-offset",
        value_name = "N",
        default_value_t = 0,
        allow_negative_numbers = true
    )]
    pub y: i64,

    /// Offset added to every glyph's height
    #[arg(
        short = 't',
        long = "height-offset",
        value_name = "N",
        default_value_t = 0,
        allow_negative_numbers = true
    )]
    pub height: i64,

    /// One or more .fnt files
    #[arg(required = true, value_name = "FILES")]
    pub files: Vec<PathBuf>,
}

fn rewrite<F>(path: &Path, patch: F) -> Result<()>
where
    F: FnOnce(&str) -> Result<String>,
{
    let text =
        fs::read_to_string(path).with_context(|| format!("Failed reading {}", path.display()))?;
    let patched = patch(&text).with_context(|| format!("Failed patching {}", path.display()))?;
    fs::write(path, patched).with_context(|| format!("Failed writing {}", path.display()))?;
    tracing::debug!("Patched {}", path.display());
    Ok(())
}

pub fn run_face(args: FixFaceArgs) -> Result<()> {
    for file in &args.files {
        rewrite(file, |text| Ok(fix_face(text)?))?;
    }
    Ok(())
}

pub fn run_height(args: FixHeightArgs) -> Result<()> {
    let adjust = HeightAdjust {
        line_height: args.line_height,
        base: args.base,
        y: args.y,
        height: args.height,
    };
    for file in &args.files {
        rewrite(file, |text| Ok(fix_height(text, &adjust)?))?;
    }
    Ok(())
}
