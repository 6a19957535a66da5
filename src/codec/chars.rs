//! Run-length text form of the selected character list
//!
//! `65-90,97-122,12354` on the way in; wrapped `chars=` lines on the way out.

use crate::domain::{NumRange, CHARS_KEY};
use crate::error::{BmfcError, Result};

/// Maximum token text per `chars=` line, commas included, prefix excluded.
pub const LINE_BUDGET: usize = 99;

const LINE_PREFIX: &str = "chars=";

/// Parse a comma-separated list of codes and `A-B` ranges.
///
/// Bounds may be given in either order; they are normalized.
pub fn parse_chars(text: &str) -> Result<Vec<NumRange>> {
    text.split(',').map(parse_token).collect()
}

fn parse_token(token: &str) -> Result<NumRange> {
    let token = token.trim();
    match token.split_once('-') {
        Some((a, b)) => Ok(NumRange::new(parse_code(a, token)?, parse_code(b, token)?)),
        None => Ok(NumRange::single(parse_code(token, token)?)),
    }
}

fn parse_code(part: &str, token: &str) -> Result<u32> {
    part.trim().parse::<u32>().map_err(|e| BmfcError::format(CHARS_KEY, token, e))
}

/// Render ranges as one or more `chars=` lines, each newline-terminated.
///
/// Ranges are written in stored order. Nothing is emitted for an empty list.
pub fn format_chars(ranges: &[NumRange]) -> String {
    let mut out = String::new();
    let mut line = String::new();

    for range in ranges {
        let token = range.to_string();
        if !line.is_empty() && line.len() + 1 + token.len() > LINE_BUDGET {
            push_line(&mut out, &line);
            line.clear();
        }
        if !line.is_empty() {
            line.push(',');
        }
        line.push_str(&token);
    }
    if !line.is_empty() {
        push_line(&mut out, &line);
    }

    out
}

fn push_line(out: &mut String, tokens: &str) {
    out.push_str(LINE_PREFIX);
    out.push_str(tokens);
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_singles_and_reversed_ranges() {
        let ranges = parse_chars("32-126,12354,90-65").expect("parse");
        assert_eq!(
            ranges,
            vec![NumRange::new(32, 126), NumRange::single(12354), NumRange::new(65, 90)]
        );
    }

    #[test]
    fn parse_rejects_bad_tokens() {
        for bad in ["", "65,", "a-z", "1-2-3", "-5", "65-"] {
            let err = parse_chars(bad).unwrap_err();
            assert!(
                matches!(err, BmfcError::Format { ref key, .. } if key == "chars"),
                "{bad:?} should be a format error, got {err:?}"
            );
        }
    }

    #[test]
    fn format_empty_emits_nothing() {
        assert_eq!(format_chars(&[]), "");
    }

    #[test]
    fn format_keeps_stored_order() {
        let ranges = vec![NumRange::new(97, 122), NumRange::single(32), NumRange::new(65, 90)];
        assert_eq!(format_chars(&ranges), "chars=97-122,32,65-90\n");
    }

    #[test]
    fn format_wraps_within_budget() {
        let ranges: Vec<NumRange> =
            (0..200u32).map(|i| NumRange::new(10000 + i * 10, 10005 + i * 10)).collect();
        let text = format_chars(&ranges);

        let lines: Vec<&str> = text.lines().collect();
        assert!(lines.len() > 1);
        for line in &lines {
            let tokens = line.strip_prefix("chars=").expect("prefix");
            assert!(tokens.len() <= LINE_BUDGET, "line too long: {}", tokens.len());
        }

        let reparsed: Vec<NumRange> = lines
            .iter()
            .flat_map(|l| parse_chars(&l["chars=".len()..]).expect("reparse"))
            .collect();
        assert_eq!(reparsed, ranges);
    }

    #[test]
    fn format_fills_line_exactly_to_budget() {
        // 33 two-digit tokens plus 32 commas is exactly 98; one more needs 3.
        let ranges: Vec<NumRange> = (10..44u32).map(NumRange::single).collect();
        let text = format_chars(&ranges);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].len() - "chars=".len(), 98);
        assert_eq!(lines[1], "chars=43");
    }
}
