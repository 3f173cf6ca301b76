//! Single-line rendering for plain terminals and pipes.

use crate::theme::Theme;

/// Carriage return plus erase-line, so each frame overwrites the last.
const REWRITE_LINE: &str = "\r\x1b[2K";

/// Join prefix, text and caret into one line.
///
/// Parts may already carry ANSI styling; an empty prefix adds no separator.
pub fn compose(prefix: &str, text: &str, caret: &str, caret_visible: bool) -> String {
    let mut line = String::with_capacity(prefix.len() + text.len() + caret.len() + 1);
    if !prefix.is_empty() {
        line.push_str(prefix);
        line.push(' ');
    }
    line.push_str(text);
    if caret_visible {
        line.push_str(caret);
    }
    line
}

/// Full inline frame: rewrite sequence followed by the themed line.
pub fn inline_line(
    theme: &Theme,
    prefix: &str,
    text: &str,
    caret: &str,
    caret_visible: bool,
) -> String {
    let prefix = if prefix.is_empty() {
        String::new()
    } else {
        theme.primary_text(prefix)
    };
    let line = compose(
        &prefix,
        &theme.accent_text(text),
        &theme.caret_text(caret),
        caret_visible,
    );
    format!("{}{}", REWRITE_LINE, line)
}
