//! Writing resolved configs to disk

pub mod writer;

pub use writer::{write_configs, write_if_changed, WriteOutcome, WriteRecord, WriteReport};
