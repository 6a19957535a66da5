//! Description file loading

use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BmfcError, Result};
use crate::utils::strip_comments;

/// Key naming a template file, at the top level and inside entries.
pub const TEMPLATE_KEY: &str = "template";

/// A parsed description file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Description {
    /// Base template shared by every entry.
    #[serde(default)]
    pub template: Option<PathBuf>,

    /// Entry objects, in output order.
    #[serde(default)]
    pub config: Vec<Map<String, Value>>,

    /// Directory relative paths are resolved against.
    #[serde(skip)]
    pub base_dir: PathBuf,
}

impl Description {
    /// Parse description text. Comments are stripped first.
    pub fn parse(text: &str, origin: &Path) -> Result<Self> {
        let stripped = strip_comments(text);
        serde_json::from_str(&stripped)
            .map_err(|source| BmfcError::Json { path: origin.to_path_buf(), source })
    }

    /// Resolve a path from the description against [`Description::base_dir`].
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}

/// Read and parse a description file. Relative paths inside it resolve
/// against the file's own directory.
pub fn load_description(path: &Path) -> Result<Description> {
    let text = fs::read_to_string(path).map_err(|e| BmfcError::io(path, e))?;
    let mut description = Description::parse(&text, path)?;
    description.base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
    tracing::debug!(
        "Loaded description {} ({} entries)",
        path.display(),
        description.config.len()
    );
    Ok(description)
}

/// Read a template document as text.
pub fn read_template(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| BmfcError::io(path, e))
}
