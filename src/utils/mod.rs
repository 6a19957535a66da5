//! Shared helpers

pub mod hashing;
pub mod jsonc;

pub use hashing::{content_digest, file_digest};
pub use jsonc::strip_comments;
