//! Template merging
//!
//! Base template -> per-entry copy -> per-entry template -> entry overrides.

use serde_json::{Map, Value};
use std::path::Path;

use super::loader::{read_template, Description, TEMPLATE_KEY};
use crate::codec::{apply_text, overlay};
use crate::domain::{GenConfig, OUTPUT_FILE_KEY};
use crate::error::{BmfcError, Result};

/// Resolve every entry of `description` into a complete [`GenConfig`].
///
/// Entries come back in description order. Any failure aborts the whole
/// batch; no partial list is returned.
pub fn resolve_entries(description: &Description) -> Result<Vec<GenConfig>> {
    let base = load_base(description)?;

    description
        .config
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            resolve_entry(description, &base, entry).map_err(|e| BmfcError::in_entry(index, e))
        })
        .collect()
}

fn load_base(description: &Description) -> Result<GenConfig> {
    let mut base = GenConfig::default();
    if let Some(template) = &description.template {
        let path = description.resolve(template);
        let text = read_template(&path)?;
        apply_text(&mut base, &text).map_err(|e| BmfcError::in_template(&path, e))?;
        tracing::info!("Loaded base template {}", path.display());
    }
    Ok(base)
}

fn resolve_entry(
    description: &Description,
    base: &GenConfig,
    entry: &Map<String, Value>,
) -> Result<GenConfig> {
    // Owned copy: the character list must never be shared with the base.
    let mut resolved = base.clone();

    if let Some(template) = entry.get(TEMPLATE_KEY) {
        let Value::String(template) = template else {
            return Err(BmfcError::Config(format!("'{TEMPLATE_KEY}' must be a file path string")));
        };
        let path = description.resolve(Path::new(template));
        let text = read_template(&path)?;
        apply_text(&mut resolved, &text).map_err(|e| BmfcError::in_template(&path, e))?;
        tracing::debug!("Applied entry template {}", path.display());
    }

    let overrides: Map<String, Value> = entry
        .iter()
        .filter(|(key, _)| key.as_str() != TEMPLATE_KEY)
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    overlay(&mut resolved, &overrides)?;

    if resolved.outputfile.is_empty() {
        return Err(BmfcError::Config(format!("missing '{OUTPUT_FILE_KEY}'")));
    }
    resolved.rebase(&description.base_dir);
    tracing::debug!("Resolved {}", resolved.outputfile);

    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NumRange;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn description(value: Value, base_dir: &Path) -> Description {
        let mut desc: Description = serde_json::from_value(value).expect("description");
        desc.base_dir = base_dir.to_path_buf();
        desc
    }

    #[test]
    fn test_single_entry_without_template() {
        let desc = description(
            json!({"config": [{"outputfile": "x", "fontSize": 12, "chars": "65-90,97-122"}]}),
            Path::new(""),
        );
        let entries = resolve_entries(&desc).expect("resolve");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].outputfile, "x");
        assert_eq!(entries[0].font.font_size, 12);
        assert_eq!(entries[0].font.chars, vec![NumRange::new(65, 90), NumRange::new(97, 122)]);
    }

    #[test]
    fn test_entries_do_not_share_base_chars() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join("base.bmfc"), "fontName=Base\nchars=32-126\n").expect("write");

        let desc = description(
            json!({
                "template": "base.bmfc",
                "config": [
                    {"outputfile": "a", "chars": "12354-12435"},
                    {"outputfile": "b", "fontName": "Other"},
                ]
            }),
            tmp.path(),
        );
        let base_before = load_base(&desc).expect("base");
        let entries = resolve_entries(&desc).expect("resolve");

        assert_eq!(
            entries[0].font.chars,
            vec![NumRange::new(32, 126), NumRange::new(12354, 12435)]
        );
        assert_eq!(entries[1].font.chars, vec![NumRange::new(32, 126)]);
        assert_eq!(entries[0].font.font_name, "Base");
        assert_eq!(entries[1].font.font_name, "Other");
        assert_eq!(load_base(&desc).expect("base"), base_before);
    }

    #[test]
    fn test_overlay_leaves_base_untouched() {
        let mut base = GenConfig::default();
        base.font.chars.push(NumRange::single(32));
        base.font.font_size = 20;
        let snapshot = base.clone();

        let desc = description(json!({}), Path::new(""));
        let entry = json!({"outputfile": "e", "fontSize": 9, "chars": "48-57"});
        let Value::Object(entry) = entry else { unreachable!() };
        let resolved = resolve_entry(&desc, &base, &entry).expect("resolve");

        assert_eq!(base, snapshot);
        assert_eq!(resolved.font.font_size, 9);
        assert_eq!(resolved.font.chars, vec![NumRange::single(32), NumRange::new(48, 57)]);
    }

    #[test]
    fn test_entry_template_overrides_then_appends() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join("base.bmfc"), "fontSize=16\npaddingUp=1\nchars=32-126\n")
            .expect("write base");
        fs::write(tmp.path().join("bold-template.bmfc"), "isBold=1\nfontSize=18\nchars=65-90\n")
            .expect("write entry template");

        let desc = description(
            json!({
                "template": "base.bmfc",
                "config": [{"template": "bold-template.bmfc", "outputfile": "bold", "fontSize": 20}]
            }),
            tmp.path(),
        );
        let entries = resolve_entries(&desc).expect("resolve");
        let font = &entries[0].font;
        assert_eq!(font.is_bold, 1);
        assert_eq!(font.padding_up, 1);
        assert_eq!(font.font_size, 20);
        assert_eq!(font.chars, vec![NumRange::new(32, 126), NumRange::new(65, 90)]);
        assert_eq!(entries[0].bmfc_file(), tmp.path().join("bold.bmfc"));
    }

    #[test]
    fn test_outputfile_may_come_from_template() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join("ui.bmfc"), "outputfile=ui\n").expect("write");
        let desc = description(json!({"config": [{"template": "ui.bmfc"}]}), tmp.path());
        let entries = resolve_entries(&desc).expect("resolve");
        assert_eq!(entries[0].outputfile, tmp.path().join("ui").to_string_lossy());
    }

    #[test]
    fn test_missing_templates_abort() {
        let tmp = TempDir::new().expect("tmp");
        let desc = description(json!({"template": "none.bmfc", "config": []}), tmp.path());
        assert!(matches!(resolve_entries(&desc).unwrap_err(), BmfcError::Io { .. }));

        let desc = description(
            json!({"config": [{"outputfile": "ok"}, {"template": "none.bmfc", "outputfile": "x"}]}),
            tmp.path(),
        );
        match resolve_entries(&desc).unwrap_err() {
            BmfcError::Entry { index, source } => {
                assert_eq!(index, 1);
                assert!(matches!(*source, BmfcError::Io { .. }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_entry_without_outputfile_is_rejected() {
        let desc = description(json!({"config": [{"fontSize": 12}]}), Path::new(""));
        match resolve_entries(&desc).unwrap_err() {
            BmfcError::Entry { source, .. } => assert!(matches!(*source, BmfcError::Config(_))),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_bad_base_template_names_file() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join("base.bmfc"), "fontSize=abc\n").expect("write");
        let desc = description(json!({"template": "base.bmfc"}), tmp.path());
        match resolve_entries(&desc).unwrap_err() {
            BmfcError::Template { path, source } => {
                assert_eq!(path, tmp.path().join("base.bmfc"));
                assert!(matches!(*source, BmfcError::Format { .. }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
