//! Application layer: state machine, event handling and actions.
//!
//! This module is the logic core of the crate. It owns the two view
//! controllers, the shared fetch state machine they specialize, the route
//! type linking them, and the event handler that drives all transitions.
//!
//! # Modules
//!
//! - [`actions`]: Side-effect commands returned by the event handler
//! - [`fetch`]: Generic fetch state machine with generation tokens
//! - [`handler`]: Event types and the `handle_event` entry point
//! - [`modes`]: Focus mode for the search view
//! - [`route`]: Path ↔ view mapping
//! - [`state`]: `AppState` and the two view controllers

pub mod actions;
pub mod fetch;
pub mod handler;
pub mod modes;
pub mod route;
pub mod state;

pub use actions::Action;
pub use fetch::{FetchState, Generation};
pub use handler::{handle_event, Event};
pub use modes::SearchFocus;
pub use route::Route;
pub use state::AppState;
