//! Composable UI component renderers.
//!
//! Specialized rendering components for different UI elements, following a
//! component-based architecture. Each component renders one part of the
//! interface and returns the next free row.
//!
//! # Components
//!
//! - [`header`]: Title bar with optional tagline
//! - [`footer`]: Keybinding hints
//! - [`search`]: Search input box (border, query text, cursor marker)
//! - [`table`]: Result list with count line and NAME/INDUSTRY columns
//! - [`notice`]: Centered state message (idle, loading, empty, error)
//! - [`detail`]: Company record card
//!
//! # Layout Modes
//!
//! Two high-level layout functions compose the components:
//!
//! - [`render_search_view`]: Header + search bar + results or notice + footer
//! - [`render_detail_view`]: Header + company card or notice + footer

mod detail;
mod footer;
mod header;
mod notice;
mod search;
mod table;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DetailBody, DetailViewModel, SearchBody, SearchViewModel};

use detail::render_company_card;
use footer::render_footer;
use header::render_header;
use notice::render_notice;
use search::render_search_bar;
use table::{render_count_line, render_table_headers, render_table_rows};

/// Rows of vertical offset before a notice, so state messages sit in the
/// body area instead of hugging the chrome.
const NOTICE_OFFSET: usize = 2;

/// Renders a horizontal border line at the specified row.
///
/// Used to separate UI sections (header/body, body/footer).
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the search view layout.
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header + tagline]
/// [Border]
/// [Search bar - 3 lines]
/// [Count line + table headers + rows | centered notice]
/// [Blank padding to fill screen]
/// [Border]
/// [Footer]
/// ```
pub fn render_search_view(vm: &SearchViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_search_bar(current_row, &vm.search_bar, theme, cols);

    match &vm.body {
        SearchBody::Results { rows: items, count_line } => {
            current_row = render_count_line(current_row, count_line, theme, cols);
            current_row = render_table_headers(current_row, theme);
            let _current_row = render_table_rows(current_row, items, theme, cols);
        }
        SearchBody::Notice(notice) => {
            let _current_row = render_notice(current_row + NOTICE_OFFSET, notice, theme, cols);
        }
    }

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}

/// Renders the detail view layout.
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Company card | centered notice]
/// [Blank padding to fill screen]
/// [Border]
/// [Footer]
/// ```
pub fn render_detail_view(vm: &DetailViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    match &vm.body {
        DetailBody::Company(card) => {
            let _current_row = render_company_card(current_row + 1, card, theme, cols);
        }
        DetailBody::Notice(notice) => {
            let _current_row = render_notice(current_row + NOTICE_OFFSET, notice, theme, cols);
        }
    }

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}
