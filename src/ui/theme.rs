//! Color themes and ANSI escape sequence generation.
//!
//! Themes are TOML documents. Three Catppuccin flavours are embedded in the
//! binary; any other palette can be loaded from a file with the same shape.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: dark (default)
//! - `catppuccin-macchiato`: dark, lower contrast
//! - `catppuccin-latte`: light
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! tab_active_fg = "#1e1e2e"
//! tab_active_bg = "#f5c2e7"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#f5c2e7"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! status_available_fg = "#a6e3a1"
//! status_sold_fg = "#f38ba8"
//! price_fg = "#fab387"
//! notice_fg = "#a6e3a1"
//! invalid_fg = "#f38ba8"
//! dialog_border = "#cba6f7"
//! ```
//!
//! # Example
//!
//! ```rust
//! use cardealer::ui::theme::Theme;
//!
//! let theme = Theme::from_name("catppuccin-latte").expect("built-in theme");
//! let line = format!("{}{}Sold{}", Theme::bold(), Theme::fg(&theme.colors.status_sold_fg), Theme::reset());
//! assert!(line.starts_with("\u{1b}[1m"));
//! ```

use crate::domain::error::{CarDealerError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "catppuccin-mocha";

/// Named color palette.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex colors (`#rrggbb`) for every styled UI element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Active view tab.
    pub tab_active_fg: String,
    pub tab_active_bg: String,

    /// Selected table row and focused form field.
    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    /// Footer, column headings and secondary info.
    pub text_dim: String,

    pub border: String,

    pub search_bar_border: String,
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    pub empty_state_fg: String,

    pub status_available_fg: String,
    pub status_sold_fg: String,
    pub price_fg: String,

    /// Purchase success notice.
    pub notice_fg: String,
    /// Invalid form field marker and error line.
    pub invalid_fg: String,
    pub dialog_border: String,
}

impl Theme {
    /// Loads a built-in theme by name, `None` for unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-macchiato" => include_str!("../../themes/catppuccin-macchiato.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// [`CarDealerError::Io`] if the file cannot be read and
    /// [`CarDealerError::Theme`] if it is not a valid theme document.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| CarDealerError::Theme(e.to_string()))
    }

    /// Built-in palette used if the embedded default cannot be parsed.
    fn fallback() -> Self {
        let c = |hex: &str| hex.to_string();
        Self {
            name: DEFAULT_THEME.to_string(),
            colors: ThemeColors {
                header_fg: c("#cdd6f4"),
                header_bg: None,
                tab_active_fg: c("#1e1e2e"),
                tab_active_bg: c("#f5c2e7"),
                selection_fg: c("#1e1e2e"),
                selection_bg: c("#f5c2e7"),
                text_normal: c("#cdd6f4"),
                text_dim: c("#6c7086"),
                border: c("#45475a"),
                search_bar_border: c("#f5c2e7"),
                match_highlight_fg: c("#1e1e2e"),
                match_highlight_bg: c("#f9e2af"),
                empty_state_fg: c("#89b4fa"),
                status_available_fg: c("#a6e3a1"),
                status_sold_fg: c("#f38ba8"),
                price_fg: c("#fab387"),
                notice_fg: c("#a6e3a1"),
                invalid_fg: c("#f38ba8"),
                dialog_border: c("#cba6f7"),
            },
        }
    }

    /// Parses `#rrggbb`; malformed input renders as white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');
        let channel = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|digits| u8::from_str_radix(digits, 16).ok())
        };

        match (hex.len(), channel(0..2), channel(2..4), channel(4..6)) {
            (6, Some(r), Some(g), Some(b)) => (r, g, b),
            _ => (255, 255, 255),
        }
    }

    /// 24-bit foreground escape for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background escape for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn underline() -> &'static str {
        "\u{001b}[4m"
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).unwrap_or_else(Self::fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_themes_parse() {
        for name in ["catppuccin-mocha", "catppuccin-macchiato", "catppuccin-latte"] {
            let theme = Theme::from_name(name).expect("embedded theme parses");
            assert_eq!(theme.name, name);
        }
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn default_matches_embedded_mocha() {
        assert_eq!(Theme::default(), Theme::fallback());
    }

    #[test]
    fn hex_parsing_falls_back_to_white() {
        assert_eq!(Theme::fg("#a6e3a1"), "\u{1b}[38;2;166;227;161m");
        assert_eq!(Theme::bg("#zzzzzz"), "\u{1b}[48;2;255;255;255m");
        assert_eq!(Theme::fg("#fff"), "\u{1b}[38;2;255;255;255m");
    }

    #[test]
    fn from_file_reports_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name = \"broken\"").unwrap();
        let err = Theme::from_file(file.path()).unwrap_err();
        assert!(matches!(err, CarDealerError::Theme(_)));
    }
}
