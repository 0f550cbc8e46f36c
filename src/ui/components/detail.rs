//! Company card component renderer.
//!
//! Renders a fetched company record: name, industry and location tags, the
//! formatted fact lines, and the wrapped description paragraph.

use crate::ui::helpers::{position_cursor, wrap_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CompanyCard;

/// Left margin for card content.
const CARD_MARGIN: usize = 3;

/// Width reserved for fact labels so values line up.
const FACT_LABEL_WIDTH: usize = 12;

/// Renders the company card starting at the specified row.
///
/// # Layout
///
/// ```text
///    Acme Corporation
///    [Technology]  San Francisco, CA
///
///    Employees:  12,500
///    Founded:    1998
///
///    A global leader in cloud infrastructure and
///    developer tooling...
/// ```
///
/// The description wraps to the available width. Returns the next available
/// row position.
pub fn render_company_card(row: usize, card: &CompanyCard, theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;

    position_cursor(current_row, CARD_MARGIN);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{}", card.name);
    print!("{}", Theme::reset());
    current_row += 1;

    position_cursor(current_row, CARD_MARGIN);
    print!("{}", Theme::fg(&theme.colors.accent_fg));
    print!("[{}]", card.industry);
    if let Some(location) = &card.location {
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("  {location}");
    }
    print!("{}", Theme::reset());
    current_row += 2;

    for (label, value) in &card.facts {
        position_cursor(current_row, CARD_MARGIN);
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{:<width$}", format!("{label}:"), width = FACT_LABEL_WIDTH);
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("{value}");
        print!("{}", Theme::reset());
        current_row += 1;
    }

    if let Some(description) = &card.description {
        current_row += 1;
        let width = cols.saturating_sub(CARD_MARGIN * 2);
        for line in wrap_text(description, width) {
            position_cursor(current_row, CARD_MARGIN);
            print!("{}", Theme::fg(&theme.colors.text_normal));
            print!("{line}");
            print!("{}", Theme::reset());
            current_row += 1;
        }
    }

    current_row
}
