//! Top-level rendering coordinator.
//!
//! The main rendering entry point: computes the view model from application
//! state and delegates to the layout for the active view.
//!
//! # Architecture
//!
//! Rendering is a two-step process:
//!
//! 1. **View model computation**: Transform `AppState` into `UiViewModel`
//! 2. **Component rendering**: Delegate to the view's layout function
//!
//! The renderer clears the screen each frame; the runtime shim owns the
//! alternate screen and raw mode lifecycle.

use std::io::{self, Write};

use crate::app::AppState;
use crate::ui::components;
use crate::ui::viewmodel::UiViewModel;

/// Renders the full UI to stdout.
///
/// Clears the screen, computes the view model for the current route, and
/// renders the matching layout. Output is flushed so the frame appears even
/// when stdout is line-buffered.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    print!("\u{1b}[2J\u{1b}[H");

    let viewmodel = state.compute_viewmodel(rows, cols);

    match &viewmodel {
        UiViewModel::Search(vm) => components::render_search_view(vm, &state.theme, cols, rows),
        UiViewModel::Detail(vm) => components::render_detail_view(vm, &state.theme, cols, rows),
    }

    let _ = io::stdout().flush();
}
