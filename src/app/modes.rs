//! Focus mode for the search view.
//!
//! The search view interprets keys differently depending on whether the
//! user is editing the query or walking the result list. The detail view
//! has no comparable split; its keybindings are unconditional.

/// Focus state within the search view.
///
/// Controls which keybindings are active and where the footer hints point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// The query input box has focus.
    ///
    /// Characters and backspace edit the query; Enter submits the search.
    Input,

    /// The result list has focus.
    ///
    /// j/k and the arrow keys move the selection; Enter opens the selected
    /// company; `/` or Esc return focus to the input box.
    Results,
}
