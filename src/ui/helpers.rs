//! Shared rendering utilities.
//!
//! Highlight ranges work on `char` positions rather than bytes, so glyphs and
//! accented names never split mid-codepoint. Layout math uses terminal
//! columns: most emoji occupy two.
//!
//! # Example
//!
//! ```
//! use emoji_catalog::ui::helpers::{find_matches, sanitize, truncate};
//!
//! assert_eq!(sanitize("a\u{1b}[2Jb\tc"), "a[2Jb c");
//! assert_eq!(find_matches("Red Apple", "apple"), vec![(4, 9)]);
//! assert_eq!(truncate("Grinning Face", 8), "Grinnin…");
//! ```

use crate::ui::frame::Frame;
use crate::ui::theme::Theme;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Makes remote text safe to print into a terminal.
///
/// C0 and C1 control characters and DEL are dropped, except newline, carriage
/// return and tab which become a single space each.
#[must_use]
pub fn sanitize(text: &str) -> String {
    text.chars()
        .filter_map(|c| match c {
            '\n' | '\r' | '\t' => Some(' '),
            c if c.is_control() => None,
            c => Some(c),
        })
        .collect()
}

/// Number of terminal columns `text` occupies.
#[must_use]
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Cuts `text` to at most `width` columns, ending with `…` when shortened.
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if display_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let budget = width - 1;
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

/// Keeps the end of `text` that fits in `width` columns.
#[must_use]
pub fn keep_tail(text: &str, width: usize) -> String {
    let mut used = 0;
    let mut start = text.len();
    for (index, c) in text.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = index;
    }
    text[start..].to_string()
}

fn fold(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Finds non-overlapping, case-insensitive occurrences of `term` in `text`.
///
/// Returns `(start, end)` character ranges, end exclusive. An empty term
/// matches nothing.
#[must_use]
pub fn find_matches(text: &str, term: &str) -> Vec<(usize, usize)> {
    let needle: Vec<char> = term.chars().map(fold).collect();
    if needle.is_empty() {
        return vec![];
    }
    let hay: Vec<char> = text.chars().map(fold).collect();

    let mut ranges = vec![];
    let mut i = 0;
    while i + needle.len() <= hay.len() {
        if hay[i..i + needle.len()] == needle[..] {
            ranges.push((i, i + needle.len()));
            i += needle.len();
        } else {
            i += 1;
        }
    }
    ranges
}

/// Writes `text` with the given character ranges highlighted.
///
/// Selected items skip match highlighting so the selection background stays
/// uniform. `base` is re-applied after every highlighted span.
pub fn write_highlighted(
    frame: &mut Frame,
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    base: &str,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        frame.text(text);
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut cursor = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start > cursor {
            frame.text(&chars[cursor..start].iter().collect::<String>());
        }
        frame
            .style(&Theme::fg(&theme.colors.match_highlight_fg))
            .style(&Theme::bg(&theme.colors.match_highlight_bg))
            .text(&chars[start..end].iter().collect::<String>())
            .reset()
            .style(base);
        cursor = end;
    }

    if cursor < chars.len() {
        frame.text(&chars[cursor..].iter().collect::<String>());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_strips_escape_sequences_introducer() {
        assert_eq!(sanitize("\u{1b}]0;pwned\u{7}ok"), "]0;pwnedok");
        assert_eq!(sanitize("bell\u{7f}\u{9b}"), "bell");
        assert_eq!(sanitize("line\nbreak"), "line break");
    }

    #[test]
    fn sanitize_keeps_emoji() {
        assert_eq!(sanitize("😀 face"), "😀 face");
    }

    #[test]
    fn matches_are_case_insensitive_and_non_overlapping() {
        assert_eq!(find_matches("Banana", "AN"), vec![(1, 3), (3, 5)]);
        assert_eq!(find_matches("aaa", "aa"), vec![(0, 2)]);
        assert!(find_matches("Apple", "").is_empty());
        assert!(find_matches("Apple", "pear").is_empty());
    }

    #[test]
    fn matches_use_char_positions() {
        assert_eq!(find_matches("Crème brûlée", "brû"), vec![(6, 9)]);
    }

    #[test]
    fn truncate_respects_width() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdef", 4), "abc…");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn wide_glyphs_count_two_columns() {
        assert_eq!(display_width("🍎"), 2);
        assert_eq!(display_width("🍎 Apple"), 8);
        assert_eq!(truncate("🍎🍎🍎", 4), "🍎…");
        assert_eq!(display_width(&truncate("🍎🍎🍎", 4)), 3);
        assert_eq!(truncate("a🍎b", 2), "a…");
    }

    #[test]
    fn tail_fits_width() {
        assert_eq!(keep_tail("abcdef", 3), "def");
        assert_eq!(keep_tail("a🍎🍎", 3), "🍎");
        assert_eq!(keep_tail("abc", 10), "abc");
        assert_eq!(keep_tail("abc", 0), "");
    }

    #[test]
    fn highlighted_text_restores_base_style() {
        let theme = Theme::default();
        let mut frame = Frame::new();
        write_highlighted(&mut frame, "Apple", &[(0, 2)], &theme, "<base>", false);
        let out = frame.into_string();
        assert!(out.contains("Ap"));
        assert!(out.ends_with("<base>ple"));
    }

    #[test]
    fn selected_text_skips_highlight() {
        let theme = Theme::default();
        let mut frame = Frame::new();
        write_highlighted(&mut frame, "Apple", &[(0, 2)], &theme, "", true);
        assert_eq!(frame.as_str(), "Apple");
    }
}
