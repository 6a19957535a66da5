//! Change-aware config writer
//!
//! A file is only rewritten when its bytes would change, so downstream build
//! steps keyed on modification time are not retriggered.

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::codec::serialize;
use crate::domain::GenConfig;
use crate::error::{BmfcError, Result};
use crate::utils::{content_digest, file_digest};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    Skipped,
}

impl fmt::Display for WriteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteOutcome::Written => f.write_str("Gen==>"),
            WriteOutcome::Skipped => f.write_str("skip=>"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteRecord {
    pub path: PathBuf,
    pub outcome: WriteOutcome,
}

impl fmt::Display for WriteRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.outcome, self.path.display())
    }
}

/// Per-entry outcomes of one writer run, in entry order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteReport {
    pub records: Vec<WriteRecord>,
}

impl WriteReport {
    pub fn processed(&self) -> usize {
        self.records.len()
    }

    pub fn written(&self) -> usize {
        self.count(WriteOutcome::Written)
    }

    pub fn skipped(&self) -> usize {
        self.count(WriteOutcome::Skipped)
    }

    fn count(&self, outcome: WriteOutcome) -> usize {
        self.records.iter().filter(|r| r.outcome == outcome).count()
    }
}

/// Write every config to its `.bmfc` file, calling `on_record` after each one.
///
/// Stops at the first failure. Files written before it stay on disk.
pub fn write_configs<F>(configs: &[GenConfig], mut on_record: F) -> Result<WriteReport>
where
    F: FnMut(&WriteRecord),
{
    let mut report = WriteReport::default();
    for config in configs {
        let path = config.bmfc_file();
        let outcome = write_if_changed(&path, &serialize(&config.font))?;
        let record = WriteRecord { path, outcome };
        on_record(&record);
        report.records.push(record);
    }
    tracing::info!(
        "{} configs processed: {} written, {} skipped",
        report.processed(),
        report.written(),
        report.skipped()
    );
    Ok(report)
}

/// Write `content` to `path` unless the file already holds exactly these bytes.
pub fn write_if_changed(path: &Path, content: &str) -> Result<WriteOutcome> {
    if is_unchanged(path, content)? {
        tracing::debug!("Unchanged: {}", path.display());
        return Ok(WriteOutcome::Skipped);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| BmfcError::io(parent, e))?;
    }
    fs::write(path, content).map_err(|e| BmfcError::io(path, e))?;
    Ok(WriteOutcome::Written)
}

/// Length first, digest only when the lengths agree.
fn is_unchanged(path: &Path, content: &str) -> Result<bool> {
    let meta = match fs::metadata(path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(BmfcError::io(path, e)),
    };
    if !meta.is_file() || meta.len() != content.len() as u64 {
        return Ok(false);
    }
    let existing = file_digest(path).map_err(|e| BmfcError::io(path, e))?;
    Ok(existing == content_digest(content.as_bytes()))
}
