//! Text wrapping utilities for terminal display.
//!
//! Wraps prose at word boundaries, falling back to a hard character wrap
//! for words wider than the target width. Widths are measured in Unicode
//! scalar count, which is sufficient for the prose fields rendered here.

/// Wraps a multi-line text block to a maximum width.
///
/// Each input line is wrapped independently; empty lines (paragraph
/// breaks) pass through unchanged. A `max_width` of zero disables
/// wrapping.
#[must_use]
pub fn wrap_text(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return text.to_owned();
    }

    text.lines()
        .map(|line| wrap_line(line, max_width))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Hard-wraps a single line at exactly `max_width` characters.
#[must_use]
pub fn wrap_to_width(line: &str, max_width: usize) -> String {
    if max_width == 0 || line.chars().count() <= max_width {
        return line.to_owned();
    }

    let mut result = String::with_capacity(line.len() + 1);
    let mut current_width = 0;
    for ch in line.chars() {
        if current_width >= max_width {
            result.push('\n');
            current_width = 0;
        }
        result.push(ch);
        current_width += 1;
    }
    result
}

/// Wraps one line at word boundaries.
fn wrap_line(line: &str, max_width: usize) -> String {
    if line.chars().count() <= max_width {
        return line.to_owned();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in line.split_whitespace() {
        let word_width = word.chars().count();
        if current_width > 0 && current_width + 1 + word_width > max_width {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }
        if current_width > 0 {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(word);
        current_width += word_width;
    }
    lines.push(current);

    // Words wider than the target still need a hard wrap.
    lines
        .iter()
        .map(|wrapped| wrap_to_width(wrapped, max_width))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_lines_pass_through() {
        assert_eq!(wrap_text("hello world", 20), "hello world");
    }

    #[test]
    fn long_lines_wrap_at_word_boundaries() {
        assert_eq!(
            wrap_text("the quick brown fox jumps", 10),
            "the quick\nbrown fox\njumps"
        );
    }

    #[test]
    fn empty_lines_are_preserved() {
        assert_eq!(wrap_text("one\n\ntwo", 10), "one\n\ntwo");
    }

    #[test]
    fn overlong_words_hard_wrap() {
        assert_eq!(wrap_text("abcdefghij", 4), "abcd\nefgh\nij");
    }

    #[test]
    fn zero_width_disables_wrapping() {
        assert_eq!(wrap_text("anything goes here", 0), "anything goes here");
    }

    #[test]
    fn wrap_to_width_counts_characters_not_bytes() {
        assert_eq!(wrap_to_width("héllo", 3), "hél\nlo");
    }
}
