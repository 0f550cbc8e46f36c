//! Results table component renderer.
//!
//! Renders the company result list as a two-column table with NAME and
//! INDUSTRY columns, preceded by a match count line. Supports selection
//! highlighting across the full row width.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ResultRow;

/// Fixed width of the NAME column, including the gap before INDUSTRY.
const NAME_COLUMN_WIDTH: usize = 37;

/// Renders the match count line at the specified row.
///
/// Uses the accent color so the count reads as metadata rather than a
/// result. Returns the next available row position.
pub fn render_count_line(row: usize, count_line: &str, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.accent_fg));
    print!("{count_line}");
    print!("{}", " ".repeat(cols.saturating_sub(count_line.chars().count().min(cols))));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the table column headers at the specified row.
///
/// Returns the next available row position.
pub fn render_table_headers(row: usize, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{:<width$}{}", "NAME", "INDUSTRY", width = NAME_COLUMN_WIDTH);
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all visible result rows starting at the specified row.
///
/// Returns the next available row position (row + number of rows).
pub fn render_table_rows(row: usize, items: &[ResultRow], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders a single result row.
///
/// The NAME column is truncated to fit its fixed width; INDUSTRY takes the
/// remaining space. Selected rows get the selection colors across the full
/// terminal width, unselected rows render the industry in the accent color.
fn render_table_row(row: usize, item: &ResultRow, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    let name: String = item.name.chars().take(NAME_COLUMN_WIDTH - 2).collect();
    let name_len = name.chars().count();
    print!("{name}");
    print!("{}", " ".repeat(NAME_COLUMN_WIDTH.saturating_sub(name_len)));

    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.accent_fg));
    }
    print!("{}", item.industry);

    let line_len = NAME_COLUMN_WIDTH + item.industry.chars().count();
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}
