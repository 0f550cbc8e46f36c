//! Filesystem location management.
//!
//! Resolves the XDG-style directories used for configuration and log files,
//! honoring `XDG_CONFIG_HOME` / `XDG_DATA_HOME` and falling back to the
//! conventional locations under `$HOME`.

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for firmscout.
///
/// Resolves to `$XDG_CONFIG_HOME/firmscout` when set, otherwise
/// `~/.config/firmscout`. The `config.toml` and custom theme files live
/// here.
#[must_use]
pub fn config_dir() -> PathBuf {
    base_dir("XDG_CONFIG_HOME", ".config").join("firmscout")
}

/// Returns the data directory for firmscout.
///
/// Resolves to `$XDG_DATA_HOME/firmscout` when set, otherwise
/// `~/.local/share/firmscout`. Trace log files are written here so stdout
/// stays free for the UI.
#[must_use]
pub fn data_dir() -> PathBuf {
    base_dir("XDG_DATA_HOME", ".local/share").join("firmscout")
}

fn base_dir(xdg_var: &str, home_fallback: &str) -> PathBuf {
    if let Some(dir) = env::var_os(xdg_var).filter(|v| !v.is_empty()) {
        return PathBuf::from(dir);
    }
    let home = env::var_os("HOME").unwrap_or_else(|| ".".into());
    PathBuf::from(home).join(home_fallback)
}
