//! `.bmfc` text documents and JSON overlays
//!
//! The document is a flat list of `key=value` lines under fixed comment
//! banners. Loading is lenient about unknown keys and strict about values:
//! a known key whose value does not coerce to the field's type is an error.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

use super::chars::{format_chars, parse_chars};
use crate::domain::{
    FieldKind, FontConfig, GenConfig, NumRange, Scalar, CHARS_KEY, FIELDS, OUTPUT_FILE_KEY,
    TEXTURE_SIZE_KEY,
};
use crate::error::{BmfcError, Result};

const HEADER: &str = "# AngelCode Bitmap Font Generator configuration file";
const CHARS_BANNER: &str = "# selected chars";
const TRAILER: &str = "# imported icon images";

static SKIP_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*(#|$)").expect("valid regex"));
static CHARS_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^chars=(\S+)").expect("valid regex"));
static PAIR_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\w+)=(.+)").expect("valid regex"));

/// A value on its way into a field, before coercion.
#[derive(Debug, Clone, Copy)]
pub enum RawValue<'a> {
    /// Right-hand side of a `key=value` line.
    Text(&'a str),
    /// A value from a JSON entry.
    Json(&'a Value),
}

/// Anything that accepts named field assignments and character ranges.
pub trait FieldSink {
    /// Assign a scalar by key. Returns `Ok(false)` for keys this sink does not know.
    fn set_field(&mut self, key: &str, value: RawValue<'_>) -> Result<bool>;

    fn chars_mut(&mut self) -> &mut Vec<NumRange>;
}

impl FieldSink for FontConfig {
    fn set_field(&mut self, key: &str, value: RawValue<'_>) -> Result<bool> {
        if key == TEXTURE_SIZE_KEY {
            return match value {
                RawValue::Json(json) => {
                    self.set_texture_size(&texture_size_values(json)?)?;
                    Ok(true)
                }
                RawValue::Text(_) => Ok(false),
            };
        }

        let Some(def) = FontConfig::field_def(key) else {
            return Ok(false);
        };
        let scalar = coerce(def.kind, key, value)?;
        self.set_scalar(key, scalar)
    }

    fn chars_mut(&mut self) -> &mut Vec<NumRange> {
        &mut self.chars
    }
}

impl FieldSink for GenConfig {
    fn set_field(&mut self, key: &str, value: RawValue<'_>) -> Result<bool> {
        if key == OUTPUT_FILE_KEY {
            if let Scalar::Text(name) = coerce(FieldKind::Text, key, value)? {
                self.outputfile = name;
            }
            return Ok(true);
        }
        self.font.set_field(key, value)
    }

    fn chars_mut(&mut self) -> &mut Vec<NumRange> {
        self.font.chars_mut()
    }
}

/// Convert a raw value to the static type `kind` of field `key`.
pub fn coerce(kind: FieldKind, key: &str, value: RawValue<'_>) -> Result<Scalar> {
    match value {
        RawValue::Text(text) => coerce_text(kind, key, text),
        RawValue::Json(json) => coerce_json(kind, key, json),
    }
}

fn coerce_text(kind: FieldKind, key: &str, text: &str) -> Result<Scalar> {
    Ok(match kind {
        FieldKind::Int => {
            Scalar::Int(text.trim().parse().map_err(|e| BmfcError::format(key, text, e))?)
        }
        FieldKind::Float => {
            Scalar::Float(text.trim().parse().map_err(|e| BmfcError::format(key, text, e))?)
        }
        FieldKind::Text => Scalar::Text(text.to_string()),
    })
}

fn coerce_json(kind: FieldKind, key: &str, json: &Value) -> Result<Scalar> {
    Ok(match (kind, json) {
        (kind, Value::String(s)) => return coerce_text(kind, key, s),
        (FieldKind::Int, Value::Number(n)) => Scalar::Int(match n.as_i64() {
            Some(i) => i,
            None => n.as_f64().map(|f| f.trunc() as i64).unwrap_or_default(),
        }),
        (FieldKind::Int, Value::Bool(b)) => Scalar::Int(i64::from(*b)),
        (FieldKind::Float, Value::Number(n)) => Scalar::Float(n.as_f64().unwrap_or_default()),
        (FieldKind::Float, Value::Bool(b)) => Scalar::Float(if *b { 1.0 } else { 0.0 }),
        (FieldKind::Text, Value::Number(n)) => Scalar::Text(n.to_string()),
        (_, other) => {
            return Err(BmfcError::Config(format!(
                "'{key}' cannot be set from JSON {}",
                json_kind(other)
            )))
        }
    })
}

fn texture_size_values(json: &Value) -> Result<Vec<i64>> {
    let Value::Array(items) = json else {
        return Err(BmfcError::Config(format!(
            "{TEXTURE_SIZE_KEY} must be a [width, height] array, got {}",
            json_kind(json)
        )));
    };
    items
        .iter()
        .map(|item| match coerce_json(FieldKind::Int, TEXTURE_SIZE_KEY, item)? {
            Scalar::Int(v) => Ok(v),
            other => Err(BmfcError::Config(format!("{TEXTURE_SIZE_KEY} got {other:?}"))),
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Apply a `.bmfc` document on top of `target`.
///
/// Fields named in the document replace the current values; `chars=` lines
/// append to the current character list in file order.
pub fn apply_text<T: FieldSink + ?Sized>(target: &mut T, text: &str) -> Result<()> {
    for line in text.lines() {
        if SKIP_LINE.is_match(line) {
            continue;
        }
        if let Some(caps) = CHARS_LINE.captures(line) {
            let ranges = parse_chars(&caps[1])?;
            target.chars_mut().extend(ranges);
            continue;
        }
        if let Some(caps) = PAIR_LINE.captures(line) {
            let key = &caps[1];
            if !target.set_field(key, RawValue::Text(&caps[2]))? {
                tracing::debug!("Ignoring unknown key '{}'", key);
            }
        }
    }
    Ok(())
}

/// Apply a loosely typed JSON mapping on top of `target`.
///
/// `chars` is parsed like a `chars=` line and appended. Unknown keys are ignored.
pub fn overlay<T: FieldSink + ?Sized>(target: &mut T, mapping: &Map<String, Value>) -> Result<()> {
    for (key, value) in mapping {
        if key == CHARS_KEY {
            let Value::String(text) = value else {
                return Err(BmfcError::Config(format!(
                    "'{CHARS_KEY}' must be a string like \"32-126\", got {}",
                    json_kind(value)
                )));
            };
            let ranges = parse_chars(text)?;
            target.chars_mut().extend(ranges);
            continue;
        }
        if !target.set_field(key, RawValue::Json(value))? {
            tracing::debug!("Ignoring unknown key '{}'", key);
        }
    }
    Ok(())
}

/// Parse a document into a fresh config, starting from defaults.
pub fn deserialize(text: &str) -> Result<FontConfig> {
    let mut config = FontConfig::default();
    apply_text(&mut config, text)?;
    Ok(config)
}

/// Render the full document the generator reads.
pub fn serialize(config: &FontConfig) -> String {
    let mut out = String::with_capacity(1024);
    out.push_str(HEADER);
    out.push('\n');

    let mut section = "";
    for def in FIELDS {
        if def.section != section {
            out.push_str("\n# ");
            out.push_str(def.section);
            out.push('\n');
            section = def.section;
        }
        if let Some(value) = config.field(def.name) {
            out.push_str(def.name);
            out.push('=');
            out.push_str(&value.to_string());
            out.push('\n');
        }
    }

    out.push('\n');
    out.push_str(CHARS_BANNER);
    out.push('\n');
    out.push_str(&format_chars(&config.chars));
    out.push('\n');
    out.push_str(TRAILER);
    out.push('\n');
    out
}
