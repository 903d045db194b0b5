//! Text helpers applied to multi-line fields.
//!
//! Markdown table cells cannot carry literal line breaks, so multi-line
//! descriptions are either collapsed onto one line or suffixed with `<br>`.

/// Append ` <br>` to every line and join the lines with no separator.
///
/// Kept for base templates that call `{{ add_breaks(description) }}`; the
/// built-in sections use [`strip_newlines`] instead.
pub fn add_breaks(text: &str) -> String {
    split_lines(text)
        .into_iter()
        .map(|line| format!("{line} <br>"))
        .collect()
}

/// Collapse a multi-line string onto one line, joining lines with a space.
pub fn strip_newlines(text: &str) -> String {
    split_lines(text).join(" ")
}

/// Line boundaries recognised by [`split_lines`]: ASCII newlines and
/// separators plus NEL and the Unicode line and paragraph separators.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Split on any line boundary. A trailing line break does not produce an
/// empty final line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        match rest.char_indices().find(|&(_, c)| is_line_break(c)) {
            Some((idx, c)) => {
                lines.push(&rest[..idx]);
                let skip = if rest[idx..].starts_with("\r\n") { 2 } else { c.len_utf8() };
                rest = &rest[idx + skip..];
            }
            None => {
                lines.push(rest);
                break;
            }
        }
    }
    lines
}
