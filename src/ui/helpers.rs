//! Shared rendering utilities.
//!
//! Low-level helpers used across UI components: cursor positioning and
//! centered line output with full-width padding (so stale content from the
//! previous frame is always overwritten).

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H`. Coordinates are
/// 1-indexed (row 1 = first row, col 1 = first column).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Prints `text` horizontally centered on the current line, padded with
/// spaces to fill the full terminal width.
///
/// The caller positions the cursor and applies colors before calling; the
/// padding inherits whatever styling is active. If the text exceeds the
/// terminal width it is printed as-is and padding is skipped.
pub fn print_centered(text: &str, cols: usize) {
    let text_len = text.chars().count().min(cols);
    let padding = (cols.saturating_sub(text_len)) / 2;
    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
}

/// Wraps `text` into lines of at most `width` characters, breaking on
/// whitespace. Words longer than `width` occupy a line of their own.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        let current_len = current.chars().count();

        if current.is_empty() {
            current.push_str(word);
        } else if current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}
