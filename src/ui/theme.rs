//! Theme management and ANSI escape sequence generation.
//!
//! Color schemes for the terminal UI, with two built-in palettes and support
//! for custom themes loaded from TOML files. Colors are hex strings
//! converted to truecolor ANSI escapes at render time.
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#f5c2e7"
//! accent_fg = "#94e2d5"
//! notice_fg = "#89b4fa"
//! error_fg = "#f38ba8"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::error::{Result, ScoutError};

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header title color.
    pub header_fg: String,
    /// Selected row foreground color.
    pub selection_fg: String,
    /// Selected row background color.
    pub selection_bg: String,
    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text color (taglines, footer, secondary info).
    pub text_dim: String,
    /// Border and separator line color.
    pub border: String,
    /// Search bar border color when focused.
    pub search_bar_border: String,
    /// Accent color (industry tags, result counts).
    pub accent_fg: String,
    /// Informational notice color (idle, empty, not-found states).
    pub notice_fg: String,
    /// Error notice color.
    pub error_fg: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self::mocha()
    }
}

impl Theme {
    /// The default dark palette (Catppuccin Mocha).
    #[must_use]
    pub fn mocha() -> Self {
        Self {
            name: "catppuccin-mocha".to_string(),
            colors: ThemeColors {
                header_fg: "#cdd6f4".to_string(),
                selection_fg: "#1e1e2e".to_string(),
                selection_bg: "#f5c2e7".to_string(),
                text_normal: "#cdd6f4".to_string(),
                text_dim: "#6c7086".to_string(),
                border: "#45475a".to_string(),
                search_bar_border: "#f5c2e7".to_string(),
                accent_fg: "#94e2d5".to_string(),
                notice_fg: "#89b4fa".to_string(),
                error_fg: "#f38ba8".to_string(),
            },
        }
    }

    /// A light palette (Catppuccin Latte).
    #[must_use]
    pub fn latte() -> Self {
        Self {
            name: "catppuccin-latte".to_string(),
            colors: ThemeColors {
                header_fg: "#4c4f69".to_string(),
                selection_fg: "#eff1f5".to_string(),
                selection_bg: "#ea76cb".to_string(),
                text_normal: "#4c4f69".to_string(),
                text_dim: "#9ca0b0".to_string(),
                border: "#bcc0cc".to_string(),
                search_bar_border: "#ea76cb".to_string(),
                accent_fg: "#179299".to_string(),
                notice_fg: "#1e66f5".to_string(),
                error_fg: "#d20f39".to_string(),
            },
        }
    }

    /// Loads a built-in theme by name, `None` if the name is unknown.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "catppuccin-mocha" => Some(Self::mocha()),
            "catppuccin-latte" => Some(Self::latte()),
            _ => None,
        }
    }

    /// Loads a custom theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ScoutError::Theme`] when the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| ScoutError::Theme(format!("cannot read theme file: {e}")))?;
        toml::from_str(&content).map_err(|e| ScoutError::Theme(format!("invalid theme file: {e}")))
    }

    /// Returns the ANSI escape setting the foreground to a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = hex_components(hex);
        format!("\u{1b}[38;2;{r};{g};{b}m")
    }

    /// Returns the ANSI escape setting the background to a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = hex_components(hex);
        format!("\u{1b}[48;2;{r};{g};{b}m")
    }

    /// Returns the ANSI reset escape.
    #[must_use]
    pub fn reset() -> &'static str {
        "\u{1b}[0m"
    }

    /// Returns the ANSI bold escape.
    #[must_use]
    pub fn bold() -> &'static str {
        "\u{1b}[1m"
    }

    /// Returns the ANSI dim escape.
    #[must_use]
    pub fn dim() -> &'static str {
        "\u{1b}[2m"
    }
}

/// Parses `#rrggbb` into components, falling back to a neutral grey for
/// malformed values so a bad theme degrades instead of breaking rendering.
fn hex_components(hex: &str) -> (u8, u8, u8) {
    let raw = hex.trim_start_matches('#');
    if raw.len() != 6 {
        return (170, 170, 170);
    }
    let parse = |range: std::ops::Range<usize>| {
        raw.get(range)
            .and_then(|s| u8::from_str_radix(s, 16).ok())
    };
    match (parse(0..2), parse(2..4), parse(4..6)) {
        (Some(r), Some(g), Some(b)) => (r, g, b),
        _ => (170, 170, 170),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn built_in_themes_resolve_by_name() {
        assert!(Theme::from_name("catppuccin-mocha").is_some());
        assert!(Theme::from_name("catppuccin-latte").is_some());
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn fg_produces_truecolor_escape() {
        assert_eq!(Theme::fg("#ff0080"), "\u{1b}[38;2;255;0;128m");
    }

    #[test]
    fn malformed_hex_falls_back_instead_of_panicking() {
        assert_eq!(hex_components("#zzz"), (170, 170, 170));
        assert_eq!(hex_components("nope"), (170, 170, 170));
    }

    #[test]
    fn custom_theme_loads_from_toml_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r##"
name = "custom"

[colors]
header_fg = "#111111"
selection_fg = "#222222"
selection_bg = "#333333"
text_normal = "#444444"
text_dim = "#555555"
border = "#666666"
search_bar_border = "#777777"
accent_fg = "#888888"
notice_fg = "#999999"
error_fg = "#aaaaaa"
"##
        )
        .expect("write theme");

        let theme = Theme::from_file(file.path()).expect("theme should load");
        assert_eq!(theme.name, "custom");
        assert_eq!(theme.colors.error_fg, "#aaaaaa");
    }

    #[test]
    fn unreadable_theme_file_reports_theme_error() {
        let error = Theme::from_file("/nonexistent/theme.toml").expect_err("must fail");
        assert!(matches!(error, ScoutError::Theme(_)));
    }
}
