pub mod markdown;

use unicode_width::UnicodeWidthChar;

pub use markdown::render_markdown;

/// Shortens `s` to at most `max_chars` characters, ending in "..." when cut.
pub fn truncate_string(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let head: String = s.chars().take(keep).collect();
    format!("{}...", head)
}

/// Byte ranges of the visual lines `text` occupies in a box `max_width`
/// columns wide, breaking on explicit newlines and on overflow.
fn visual_line_ranges(text: &str, max_width: usize) -> Vec<(usize, usize)> {
    let mut ranges = Vec::new();
    let mut start = 0;
    let mut width = 0;

    for (idx, ch) in text.char_indices() {
        if ch == '\n' {
            ranges.push((start, idx));
            start = idx + 1;
            width = 0;
            continue;
        }

        let ch_width = ch.width().unwrap_or(1);
        if width > 0 && width + ch_width > max_width {
            ranges.push((start, idx));
            start = idx;
            width = 0;
        }
        width += ch_width;
    }

    ranges.push((start, text.len()));
    ranges
}

/// (line, column) of a byte cursor inside `text` once wrapped to `max_width`.
pub fn calculate_wrapped_cursor_position(
    text: &str,
    cursor_index: usize,
    max_width: usize,
) -> (usize, usize) {
    if text.is_empty() || cursor_index == 0 || max_width == 0 {
        return (0, 0);
    }
    let cursor_index = cursor_index.min(text.len());
    let ranges = visual_line_ranges(text, max_width);

    // A cursor sitting exactly on a wrap boundary belongs to the next line,
    // unless it is the end of the text.
    for (line, &(start, end)) in ranges.iter().enumerate() {
        let is_last = line + 1 == ranges.len();
        if cursor_index >= start && (cursor_index < end || (is_last && cursor_index == end)) {
            let column = text[start..cursor_index]
                .chars()
                .map(|c| c.width().unwrap_or(1))
                .sum();
            return (line, column);
        }
        if cursor_index == end && text[end..].starts_with('\n') {
            let column = text[start..end].chars().map(|c| c.width().unwrap_or(1)).sum();
            return (line, column);
        }
    }

    (ranges.len() - 1, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string_no_truncation() {
        assert_eq!(truncate_string("Hello", 10), "Hello");
    }

    #[test]
    fn test_truncate_string_with_truncation() {
        assert_eq!(truncate_string("Hello World", 8), "Hello...");
    }

    #[test]
    fn test_truncate_string_multibyte() {
        assert_eq!(truncate_string("ñññññññ", 5), "ññ...");
    }

    #[test]
    fn test_truncate_string_empty() {
        assert_eq!(truncate_string("", 5), "");
    }

    #[test]
    fn test_cursor_empty_text() {
        assert_eq!(calculate_wrapped_cursor_position("", 0, 10), (0, 0));
    }

    #[test]
    fn test_cursor_single_line() {
        assert_eq!(calculate_wrapped_cursor_position("Hello", 3, 10), (0, 3));
        assert_eq!(calculate_wrapped_cursor_position("Hello", 5, 10), (0, 5));
    }

    #[test]
    fn test_cursor_wraps_to_second_line() {
        // "Hello" fills the first line, "World" starts the second.
        assert_eq!(calculate_wrapped_cursor_position("HelloWorld", 5, 5), (1, 0));
        assert_eq!(calculate_wrapped_cursor_position("HelloWorld", 7, 5), (1, 2));
        assert_eq!(calculate_wrapped_cursor_position("HelloWorld", 10, 5), (1, 5));
    }

    #[test]
    fn test_cursor_after_explicit_newline() {
        let text = "ab\ncd";
        assert_eq!(calculate_wrapped_cursor_position(text, 2, 10), (0, 2));
        assert_eq!(calculate_wrapped_cursor_position(text, 3, 10), (1, 0));
        assert_eq!(calculate_wrapped_cursor_position(text, 5, 10), (1, 2));
    }

    #[test]
    fn test_cursor_beyond_text_is_clamped() {
        assert_eq!(calculate_wrapped_cursor_position("abc", 99, 10), (0, 3));
    }
}
