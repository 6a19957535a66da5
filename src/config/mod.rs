//! Description loading and template merging
//!
//! A description names an optional base template and a list of entries. Each
//! entry is merged onto its own copy of the base to yield one [`GenConfig`].
//!
//! [`GenConfig`]: crate::domain::GenConfig

pub mod loader;
pub mod merge;

pub use loader::{load_description, read_template, Description, TEMPLATE_KEY};
pub use merge::resolve_entries;
