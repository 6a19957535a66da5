//! Text codecs for generator config documents

pub mod bmfc;
pub mod chars;

pub use bmfc::{apply_text, deserialize, overlay, serialize, FieldSink, RawValue};
pub use chars::{format_chars, parse_chars};
