//! Firmscout: a terminal client for exploring a company directory.
//!
//! Firmscout talks to a company search REST API and presents two views: a
//! search view with an input box and navigable result list, and a detail
//! view for a single company record. Fetches run concurrently with input
//! handling, and stale responses from superseded requests are discarded.
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal Shim (main.rs)                            │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Business logic
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ API Layer     │   │ Worker Layer  │
//! │ (ui/)         │   │ (api/)        │   │ (worker/)     │
//! │ - Rendering   │   │ - HTTP client │   │ - Fetch tasks │
//! │ - Theming     │   │ - Decoding    │   │ - Response    │
//! │ - Components  │   │ - Status map  │   │   channel     │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Company model (domain/company)                   │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`api`]: Directory trait and reqwest-backed HTTP client
//! - [`domain`]: Core domain types (Company, Query, errors)
//! - [`infrastructure`]: Platform paths
//! - [`worker`]: Async fetch tasks bridging the API to the event loop
//! - [`ui`]: Terminal rendering with theme support
//! - `observability`: File-based tracing (internal)
//!
//! # Initialization Flow
//!
//! 1. **Startup** (`main.rs`): load configuration, initialize tracing,
//!    build the HTTP client and `AppState`, enter the alternate screen.
//! 2. **Event Loop**: `tokio::select!` over terminal input and fetch
//!    responses; every event flows through [`handle_event`].
//! 3. **Actions**: `Fetch` actions spawn a task per request; the response
//!    is delivered back as an event carrying its generation token.
//! 4. **Rendering**: when a handler reports a visible change, the view
//!    model is recomputed and printed as ANSI output.

pub mod api;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, Route, SearchFocus};
pub use domain::{Company, CompanySummary, Query, Result, ScoutError};
pub use ui::Theme;

use std::path::Path;

use serde::Deserialize;

/// Application configuration, loaded from a TOML file.
///
/// The file lives at `~/.config/firmscout/config.toml` by default (override
/// with the `FIRMSCOUT_CONFIG` environment variable). All fields are
/// optional; a missing file yields the defaults.
///
/// # Example
///
/// ```toml
/// base_url = "http://127.0.0.1:5000"
/// request_timeout_secs = 30
/// theme = "catppuccin-latte"
/// trace_level = "debug"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the company directory API.
    pub base_url: String,

    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`. Ignored if
    /// `theme_file` is set.
    #[serde(rename = "theme")]
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme`. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// Tracing filter directive for the log file.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`, or any
    /// `EnvFilter` directive. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            request_timeout_secs: 30,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// A missing file is not an error: defaults are returned so the client
    /// works out of the box against a local API.
    ///
    /// # Errors
    ///
    /// Returns [`ScoutError::Config`] when the file exists but cannot be
    /// read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ScoutError::Config(format!("cannot read {}: {e}", path.display())))?;
        toml::from_str(&content)
            .map_err(|e| ScoutError::Config(format!("invalid config {}: {e}", path.display())))
    }
}

/// Initializes the application state from configuration.
///
/// Resolves the theme (custom file takes precedence over built-in name,
/// either falling back to the default on failure) and creates a fresh
/// `AppState` on the search view.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing firmscout");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(
                Theme::default,
                |theme_name| {
                    Theme::from_name(theme_name).unwrap_or_else(|| {
                        tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                        Theme::default()
                    })
                },
            )
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(theme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_config_file_yields_defaults() {
        let config = Config::load("/nonexistent/config.toml").expect("defaults");
        assert_eq!(config.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.request_timeout_secs, 30);
        assert!(config.theme_name.is_none());
    }

    #[test]
    fn partial_config_file_fills_in_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "base_url = \"https://api.example.com\"").expect("write");

        let config = Config::load(file.path()).expect("config should load");
        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn malformed_config_file_reports_config_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "base_url = [not a string").expect("write");

        let error = Config::load(file.path()).expect_err("must fail");
        assert!(matches!(error, ScoutError::Config(_)));
    }

    #[test]
    fn initialize_resolves_named_theme() {
        let config = Config {
            theme_name: Some("catppuccin-latte".to_string()),
            ..Default::default()
        };
        let state = initialize(&config);
        assert_eq!(state.theme.name, "catppuccin-latte");
    }

    #[test]
    fn initialize_falls_back_on_unknown_theme() {
        let config = Config {
            theme_name: Some("no-such-theme".to_string()),
            ..Default::default()
        };
        let state = initialize(&config);
        assert_eq!(state.theme.name, "catppuccin-mocha");
    }
}
