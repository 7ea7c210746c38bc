//! Colors for the rendered status line.

use crate::config::Config;

/// Fallback for the dark color when neither config nor host theme set one.
pub const DEFAULT_DARK: &str = "#00FFFF";
/// Fallback for the bright color.
pub const DEFAULT_BRIGHT: &str = "#FFFF00";
/// Fallback for the degraded color.
pub const DEFAULT_DEGRADED: &str = "#FFFF00";

/// Color constants supplied by the hosting bar's theme, where it has any.
#[derive(Debug, Clone, Default)]
pub struct Theme {
    pub color_dark: Option<String>,
    pub color_bright: Option<String>,
    pub color_degraded: Option<String>,
}

/// The fully resolved colors used for rendering.
///
/// Resolution order for each slot: the module's own config override, then
/// the host theme constant, then the built-in default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub dark: String,
    pub bright: String,
    pub degraded: String,
}

impl Palette {
    /// Resolves the palette for a configuration against a host theme.
    pub fn resolve(config: &Config, theme: &Theme) -> Palette {
        Palette {
            dark: pick(&config.color_dark, &theme.color_dark, DEFAULT_DARK),
            bright: pick(&config.color_bright, &theme.color_bright, DEFAULT_BRIGHT),
            degraded: pick(&config.color_degraded, &theme.color_degraded, DEFAULT_DEGRADED),
        }
    }
}

fn pick(configured: &Option<String>, themed: &Option<String>, fallback: &str) -> String {
    configured
        .clone()
        .or_else(|| themed.clone())
        .unwrap_or_else(|| fallback.to_string())
}
