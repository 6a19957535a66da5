//! Font config bound to an output file name

use std::path::{Path, PathBuf};

use crate::domain::FontConfig;

/// Key naming the base output file in templates and JSON entries.
pub const OUTPUT_FILE_KEY: &str = "outputfile";

/// A [`FontConfig`] plus the base name its generated files are written under.
///
/// The base name is not part of the serialized document; it only decides
/// where the document and the generator's outputs live.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenConfig {
    pub font: FontConfig,
    pub outputfile: String,
}

impl GenConfig {
    pub fn new(outputfile: impl Into<String>) -> Self {
        Self { font: FontConfig::default(), outputfile: outputfile.into() }
    }

    /// The generator config file, `<outputfile>.bmfc`.
    pub fn bmfc_file(&self) -> PathBuf {
        PathBuf::from(format!("{}.bmfc", self.outputfile))
    }

    /// The metrics file the generator produces, `<outputfile>.fnt`.
    pub fn fnt_file(&self) -> PathBuf {
        PathBuf::from(format!("{}.fnt", self.outputfile))
    }

    /// The first atlas page the generator produces, `<outputfile>_0.png`.
    pub fn png_file(&self) -> PathBuf {
        PathBuf::from(format!("{}_0.png", self.outputfile))
    }

    /// Re-root a relative `outputfile` under `base`. Absolute names are kept.
    pub fn rebase(&mut self, base: &Path) {
        let current = Path::new(&self.outputfile);
        if current.is_relative() && !base.as_os_str().is_empty() {
            self.outputfile = base.join(current).to_string_lossy().into_owned();
        }
    }
}
