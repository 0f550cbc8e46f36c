//! State notice component renderer.
//!
//! Renders the centered two-line message shown instead of results or a
//! company card: idle prompt, loading indicator, zero matches, missing
//! record, or a fetch failure. The tone selects the message color.

use crate::ui::helpers::{position_cursor, print_centered};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Notice, NoticeTone};

/// Renders a state notice starting at the specified row.
///
/// The primary message is colored by tone (notice color for info and
/// loading, error color for failures); the subtitle line is dimmed. Both
/// lines are centered and padded to the full terminal width.
///
/// Returns the next available row position (row + 2).
pub fn render_notice(row: usize, notice: &Notice, theme: &Theme, cols: usize) -> usize {
    let message_color = match notice.tone {
        NoticeTone::Info | NoticeTone::Loading => &theme.colors.notice_fg,
        NoticeTone::Error => &theme.colors.error_fg,
    };

    position_cursor(row, 1);
    print!("{}", Theme::fg(message_color));
    print_centered(&notice.message, cols);
    print!("{}", Theme::reset());

    position_cursor(row + 1, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print_centered(&notice.subtitle, cols);
    print!("{}", Theme::reset());

    row + 2
}
