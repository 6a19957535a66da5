//! Comment stripping for JSON description files
//!
//! Removes `// line` and `/* block */` comments outside of string literals.
//! Newlines inside comments are kept so parser errors still point at the
//! right line.

pub fn strip_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut in_string = false;

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            match c {
                '\\' => {
                    if let Some(escaped) = chars.next() {
                        out.push(escaped);
                    }
                }
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        let next = chars.peek().copied();
        match (c, next) {
            ('"', _) => {
                in_string = true;
                out.push(c);
            }
            ('/', Some('/')) => {
                for skipped in chars.by_ref() {
                    if skipped == '\n' {
                        out.push('\n');
                        break;
                    }
                }
            }
            ('/', Some('*')) => {
                chars.next();
                let mut prev = '\0';
                for skipped in chars.by_ref() {
                    if prev == '*' && skipped == '/' {
                        break;
                    }
                    if skipped == '\n' {
                        out.push('\n');
                    }
                    prev = skipped;
                }
            }
            _ => out.push(c),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::strip_comments;

    #[test]
    fn strips_line_and_block_comments() {
        let text = "{\n  // base\n  \"a\": 1, /* inline */ \"b\": 2\n}\n";
        let stripped = strip_comments(text);
        let value: serde_json::Value = serde_json::from_str(&stripped).expect("json");
        assert_eq!(value["a"], 1);
        assert_eq!(value["b"], 2);
    }

    #[test]
    fn keeps_comment_markers_inside_strings() {
        let text = r#"{"url": "http://example.com/*x*/", "q": "say \"//hi\""}"#;
        assert_eq!(strip_comments(text), text);
    }

    #[test]
    fn block_comment_keeps_line_count() {
        let text = "/* one\ntwo\nthree */{}";
        assert_eq!(strip_comments(text), "\n\n{}");
    }

    #[test]
    fn block_comment_needs_its_own_star() {
        assert_eq!(strip_comments("/*/ x */1"), "1");
    }
}
