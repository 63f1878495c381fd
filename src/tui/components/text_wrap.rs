//! Text wrapping for terminal display.
//!
//! Wraps prose at word boundaries using display width (via `unicode-width`)
//! rather than character count, so CJK and emoji text lays out correctly.
//! Continuation lines keep the original line's leading indentation.

use unicode_width::UnicodeWidthChar;

/// Wraps a multi-line text block to a maximum display width.
///
/// Lines already within `max_width` pass through unchanged, as do all lines
/// when `max_width` is zero. Empty lines (paragraph breaks) are preserved.
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

fn display_width(text: &str) -> usize {
    text.chars()
        .map(|character| UnicodeWidthChar::width(character).unwrap_or(0))
        .sum()
}

/// Wraps one line, indenting continuation lines like the original.
fn wrap_line(line: &str, max_width: usize) -> String {
    if display_width(line) <= max_width {
        return line.to_owned();
    }

    let trimmed = line.trim_start();
    let indent: String = line
        .chars()
        .take(line.chars().count() - trimmed.chars().count())
        .collect();
    let indent_width = display_width(&indent);

    // An indent consuming the whole width leaves no room for words.
    if indent_width >= max_width {
        return hard_wrap(line, max_width);
    }

    let available = max_width - indent_width;
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in trimmed.split_whitespace() {
        let word_width = display_width(word);
        let current_width = display_width(&current);

        if !current.is_empty() && current_width + 1 + word_width > available {
            lines.push(std::mem::take(&mut current));
        }

        if word_width > available && current.is_empty() {
            let mut parts = hard_wrap(word, available)
                .lines()
                .map(str::to_owned)
                .collect::<Vec<_>>();
            current = parts.pop().unwrap_or_default();
            lines.append(&mut parts);
            continue;
        }

        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
        .iter()
        .map(|content| format!("{indent}{content}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Breaks a line at exactly `max_width` display columns, ignoring word
/// boundaries. Fallback for words or indents wider than the line.
fn hard_wrap(line: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut width = 0;

    for character in line.chars() {
        let char_width = UnicodeWidthChar::width(character).unwrap_or(0);
        if width + char_width > max_width && width > 0 {
            result.push('\n');
            width = 0;
        }
        result.push(character);
        width += char_width;
    }

    result
}
