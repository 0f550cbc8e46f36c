//! Terminal UI rendering.
//!
//! Transforms application state into ANSI-styled terminal output using a
//! view-model pattern: state is first reduced to display-ready data, then
//! rendered by small positional components.
//!
//! # Modules
//!
//! - [`components`]: Per-element renderers and the two view layouts
//! - [`helpers`]: Cursor positioning, centering, text wrapping
//! - [`renderer`]: The `render` entry point
//! - [`theme`]: Color schemes and ANSI escape generation
//! - [`viewmodel`]: Display-ready snapshots of application state

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
