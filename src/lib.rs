//! Configuration model, codecs and writer for AngelCode Bitmap Font Generator
//! `.bmfc` files.
//!
//! The pipeline is: [`config::load_description`] -> [`config::resolve_entries`]
//! -> [`output::write_configs`].

pub mod codec;
pub mod config;
pub mod domain;
pub mod error;
pub mod fnt;
pub mod output;
pub mod utils;

pub use error::{BmfcError, Result};
