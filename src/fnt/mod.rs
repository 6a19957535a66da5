//! Patching of generated `.fnt` metrics files
//!
//! The first line holds `info face="..." size=...`, the second
//! `common lineHeight=... base=...`, and later lines describe one glyph each.
//! Only the targeted numbers or names change; every other byte is kept.

pub mod patch;

pub use patch::{fix_face, fix_height, HeightAdjust};
