//! Header component renderer.
//!
//! Renders the view title bar with centered text and an optional dimmed
//! tagline underneath.

use crate::ui::helpers::{position_cursor, print_centered};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header block at the specified row.
///
/// The title is centered and bold; when a tagline is present it is rendered
/// dimmed on the following line. Both lines are padded to fill the full
/// terminal width.
///
/// Returns the next available row position.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print_centered(&header.title, cols);
    print!("{}", Theme::reset());

    let mut next_row = row + 1;
    if let Some(tagline) = &header.tagline {
        position_cursor(next_row, 1);
        print!("{}", Theme::dim());
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print_centered(tagline, cols);
        print!("{}", Theme::reset());
        next_row += 1;
    }

    next_row
}
