//! Text truncation helpers for fixed-height terminal views.
//!
//! The helpers in this module trim rendered strings to a maximum number of
//! lines or terminal columns while preserving a clear "cut-off" indicator.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates output to a maximum number of lines.
///
/// When `max_height` is non-zero and the output exceeds that number of
/// lines, the content is truncated and an ellipsis line is appended. The
/// final output contains at most `max_height` lines.
pub(crate) fn truncate_to_height(output: &mut String, max_height: usize) {
    if max_height == 0 {
        return;
    }

    let line_count = output.lines().count();
    if line_count <= max_height {
        return;
    }

    let lines_to_keep = max_height.saturating_sub(1);
    let truncate_at = if lines_to_keep == 0 {
        Some(0)
    } else {
        find_nth_newline_position(output, lines_to_keep - 1).map(|pos| pos + 1)
    };

    if let Some(pos) = truncate_at {
        output.truncate(pos);
        output.push_str("...\n");
    }
}

/// Finds the byte index of the nth newline character in a string (0-indexed).
fn find_nth_newline_position(s: &str, n: usize) -> Option<usize> {
    let mut count = 0;
    for (i, ch) in s.char_indices() {
        if ch == '\n' {
            count += 1;
            if count > n {
                return Some(i);
            }
        }
    }
    None
}

/// Truncates text to the provided display width and appends an ellipsis.
///
/// This helper measures width in terminal columns, not Unicode scalar
/// count, so wide (e.g. CJK) characters are accounted for correctly.
pub(crate) fn truncate_to_display_width(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if text.width() <= max_width {
        return text.to_owned();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let target_width = max_width.saturating_sub(3);
    let mut truncated = String::new();
    let mut current_width = 0;
    for ch in text.chars() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if current_width + char_width > target_width {
            break;
        }
        truncated.push(ch);
        current_width += char_width;
    }
    format!("{truncated}...")
}
