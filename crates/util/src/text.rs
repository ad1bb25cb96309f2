//! Display-width-aware text helpers for the TUI.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Ellipsis appended to truncated strings; occupies one terminal cell.
const ELLIPSIS: char = '…';

/// Truncates `text` so its terminal display width does not exceed
/// `max_width`, appending an ellipsis when anything was cut.
///
/// Width is measured in terminal cells, not chars, so CJK titles and emoji
/// do not overflow their grid cell.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(text) <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1; // reserve one cell for the ellipsis
    let mut out = String::new();
    let mut used = 0usize;
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push(ELLIPSIS);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello", 5), "hello");
    }

    #[test]
    fn long_text_gets_an_ellipsis_within_budget() {
        let out = truncate_to_width("hello world", 8);
        assert_eq!(out, "hello w…");
        assert!(UnicodeWidthStr::width(out.as_str()) <= 8);
    }

    #[test]
    fn wide_characters_count_as_two_cells() {
        // Each CJK character is two cells wide.
        let out = truncate_to_width("日本語のタイトル", 7);
        assert!(UnicodeWidthStr::width(out.as_str()) <= 7);
        assert!(out.ends_with(ELLIPSIS));
    }

    #[test]
    fn zero_width_budget_yields_empty() {
        assert_eq!(truncate_to_width("anything", 0), "");
    }
}
