//! Line patches for `.fnt` files

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{BmfcError, Result};

static FACE: Lazy<Regex> = Lazy::new(|| Regex::new(r#" face="(.*?)" "#).expect("valid regex"));
static LINE_HEIGHT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" lineHeight=\d+ ").expect("valid regex"));
static BASE: Lazy<Regex> = Lazy::new(|| Regex::new(r" base=\d+ ").expect("valid regex"));
static GLYPH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(.+\sy=)(\d+)(\s.+\sheight=)(\d+)(\s.+)$").expect("valid regex")
});

/// Adjustments applied by [`fix_height`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeightAdjust {
    /// New `lineHeight` on the common line.
    pub line_height: Option<i64>,
    /// New `base` on the common line.
    pub base: Option<i64>,
    /// Added to every glyph's `y`.
    pub y: i64,
    /// Added to every glyph's `height`.
    pub height: i64,
}

/// Remove whitespace from the face name on the info line.
pub fn fix_face(text: &str) -> Result<String> {
    let mut lines = split_lines(text);
    let Some((first, _)) = lines.first_mut() else {
        return Err(BmfcError::format("face", "", "empty file"));
    };

    let Some(caps) = FACE.captures(first) else {
        return Err(BmfcError::format("face", first, "face attribute not found on first line"));
    };
    let name = caps.get(1).map(|m| m.range()).unwrap_or_default();
    let compact: String = first[name.clone()].chars().filter(|c| !c.is_whitespace()).collect();
    let mut patched = String::with_capacity(first.len());
    patched.push_str(&first[..name.start]);
    patched.push_str(&compact);
    patched.push_str(&first[name.end..]);
    *first = patched;

    Ok(join_lines(&lines))
}

/// Rewrite the common line and shift every glyph's `y` and `height`.
///
/// A shift that leaves the `i64` range is a format error naming the field.
pub fn fix_height(text: &str, adjust: &HeightAdjust) -> Result<String> {
    let mut lines = split_lines(text);

    if let Some((common, _)) = lines.get_mut(1) {
        if let Some(value) = adjust.line_height {
            *common = LINE_HEIGHT.replace_all(common, format!(" lineHeight={value} ")).into_owned();
        }
        if let Some(value) = adjust.base {
            *common = BASE.replace_all(common, format!(" base={value} ")).into_owned();
        }
    }

    if adjust.y != 0 || adjust.height != 0 {
        for (line, _) in lines.iter_mut().skip(2) {
            let Some(caps) = GLYPH.captures(line) else {
                continue;
            };
            let shifted = format!(
                "{}{}{}{}{}",
                &caps[1],
                shift("y", &caps[2], adjust.y)?,
                &caps[3],
                shift("height", &caps[4], adjust.height)?,
                &caps[5]
            );
            *line = shifted;
        }
    }

    Ok(join_lines(&lines))
}

fn shift(key: &str, number: &str, delta: i64) -> Result<String> {
    let n: i64 = number.parse().map_err(|e| BmfcError::format(key, number, e))?;
    n.checked_add(delta)
        .map(|v| v.to_string())
        .ok_or_else(|| BmfcError::format(key, number, format!("shifting by {delta} overflows")))
}

/// Split into (content, terminator) pairs so line endings survive a rewrite.
fn split_lines(text: &str) -> Vec<(String, &str)> {
    text.split_inclusive('\n')
        .map(|piece| {
            let body = piece.strip_suffix('\n').map(|b| b.strip_suffix('\r').unwrap_or(b));
            match body {
                Some(body) => (body.to_string(), &piece[body.len()..]),
                None => (piece.to_string(), ""),
            }
        })
        .collect()
}

fn join_lines(lines: &[(String, &str)]) -> String {
    let mut out = String::new();
    for (body, ending) in lines {
        out.push_str(body);
        out.push_str(ending);
    }
    out
}
