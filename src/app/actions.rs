//! Actions representing side effects to be executed by the runtime shim.
//!
//! The event handler returns a `Vec<Action>` after processing each event,
//! keeping state transitions pure: the handler mutates [`super::AppState`]
//! and describes the effects, and the terminal shim in `main.rs` executes
//! them (spawning fetch tasks, exiting the loop).

use crate::worker::FetchRequest;

/// Commands produced by the event handler for the runtime shim to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Issue exactly one directory fetch off the event loop.
    ///
    /// The request carries the generation token of the controller that
    /// started it; the matching response is routed back as an event.
    Fetch(FetchRequest),

    /// Tear down the terminal and exit the application.
    Quit,
}
