//! Theme data model: built-in palettes and resolution from config.
//!
//! Two built-in palettes (dark and light) plus custom color overrides from
//! the config file.

use ratatui::style::Color;

use crate::config::{ThemeColorsConfig, ThemeConfig};

// ── Runtime theme colors ─────────────────────────────────────────────────────

/// All runtime colors used in the UI.
///
/// Constructed from a config-level `ThemeConfig` via `resolve_theme()`.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Entry list
    pub list_fg: Color,
    pub list_selected_bg: Color,
    pub list_selected_fg: Color,
    pub list_dir_fg: Color,
    pub list_file_fg: Color,
    pub list_marked_fg: Color,
    pub list_parent_fg: Color,

    // Header and filter lines
    pub header_fg: Color,
    pub filter_fg: Color,

    // Status bar
    pub status_bg: Color,
    pub status_fg: Color,

    // Dialogs
    pub dialog_bg: Color,
    pub dialog_border_fg: Color,

    // Semantic colors (not configurable, consistent across themes)
    pub error_fg: Color,
    pub success_fg: Color,
    pub dim_fg: Color,
}

// ── Built-in palettes ────────────────────────────────────────────────────────

/// Dark theme using Catppuccin Mocha palette.
pub fn dark_theme() -> ThemeColors {
    ThemeColors {
        list_fg: Color::Rgb(205, 214, 244),          // #cdd6f4 (text)
        list_selected_bg: Color::Rgb(69, 71, 90),    // #45475a (surface1)
        list_selected_fg: Color::Rgb(205, 214, 244), // #cdd6f4
        list_dir_fg: Color::Rgb(137, 180, 250),      // #89b4fa (blue)
        list_file_fg: Color::Rgb(205, 214, 244),     // #cdd6f4
        list_marked_fg: Color::Rgb(166, 227, 161),   // #a6e3a1 (green)
        list_parent_fg: Color::Rgb(108, 112, 134),   // #6c7086 (overlay0)

        header_fg: Color::Rgb(203, 166, 247), // #cba6f7 (mauve)
        filter_fg: Color::Rgb(249, 226, 175), // #f9e2af (yellow)

        status_bg: Color::Rgb(30, 30, 46), // #1e1e2e (base)
        status_fg: Color::Rgb(205, 214, 244),

        dialog_bg: Color::Rgb(49, 50, 68), // #313244 (surface0)
        dialog_border_fg: Color::Rgb(243, 139, 168), // #f38ba8 (red)

        error_fg: Color::Rgb(243, 139, 168),   // #f38ba8 (red)
        success_fg: Color::Rgb(166, 227, 161), // #a6e3a1 (green)
        dim_fg: Color::Rgb(108, 112, 134),     // #6c7086
    }
}

/// Light theme — complementary light palette.
pub fn light_theme() -> ThemeColors {
    ThemeColors {
        list_fg: Color::Rgb(76, 79, 105),            // #4c4f69 (text)
        list_selected_bg: Color::Rgb(204, 208, 218), // #ccd0da (surface1)
        list_selected_fg: Color::Rgb(76, 79, 105),
        list_dir_fg: Color::Rgb(30, 102, 245), // #1e66f5 (blue)
        list_file_fg: Color::Rgb(76, 79, 105),
        list_marked_fg: Color::Rgb(64, 160, 43),   // #40a02b (green)
        list_parent_fg: Color::Rgb(156, 160, 176), // #9ca0b0 (overlay0)

        header_fg: Color::Rgb(136, 57, 239), // #8839ef (mauve)
        filter_fg: Color::Rgb(223, 142, 29), // #df8e1d (yellow)

        status_bg: Color::Rgb(239, 241, 245), // #eff1f5 (base)
        status_fg: Color::Rgb(76, 79, 105),

        dialog_bg: Color::Rgb(230, 233, 239), // #e6e9ef (surface0)
        dialog_border_fg: Color::Rgb(210, 15, 57), // #d20f39 (red)

        error_fg: Color::Rgb(210, 15, 57),   // #d20f39 (red)
        success_fg: Color::Rgb(64, 160, 43), // #40a02b (green)
        dim_fg: Color::Rgb(156, 160, 176),
    }
}

// ── Color parsing ────────────────────────────────────────────────────────────

/// Parse a hex color string like `"#aabbcc"` into a `ratatui::style::Color`.
/// Returns `None` for malformed input.
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

/// Parse a hex color string, falling back to the provided default on error.
fn parse_or(hex_opt: Option<&str>, fallback: Color) -> Color {
    hex_opt.and_then(parse_hex_color).unwrap_or(fallback)
}

// ── Theme resolution ─────────────────────────────────────────────────────────

/// Resolve the final `ThemeColors` from config.
///
/// - `"dark"` (default): dark Catppuccin palette
/// - `"light"`: light Catppuccin palette
/// - `"custom"`: start from dark palette, then override with custom hex values
pub fn resolve_theme(config: &ThemeConfig) -> ThemeColors {
    let scheme = config.scheme.as_deref().unwrap_or("dark");
    match scheme {
        "light" => light_theme(),
        "custom" => {
            let mut theme = dark_theme();
            if let Some(custom) = &config.custom {
                apply_custom_colors(&mut theme, custom);
            }
            theme
        }
        _ => dark_theme(), // "dark" or any unrecognized value
    }
}

/// Apply custom hex color overrides on top of an existing theme.
fn apply_custom_colors(theme: &mut ThemeColors, custom: &ThemeColorsConfig) {
    if let Some(ref c) = custom.list_fg {
        theme.list_fg = parse_or(Some(c), theme.list_fg);
    }
    if let Some(ref c) = custom.list_selected_bg {
        theme.list_selected_bg = parse_or(Some(c), theme.list_selected_bg);
    }
    if let Some(ref c) = custom.list_selected_fg {
        theme.list_selected_fg = parse_or(Some(c), theme.list_selected_fg);
    }
    if let Some(ref c) = custom.list_dir_fg {
        theme.list_dir_fg = parse_or(Some(c), theme.list_dir_fg);
    }
    if let Some(ref c) = custom.list_file_fg {
        theme.list_file_fg = parse_or(Some(c), theme.list_file_fg);
    }
    if let Some(ref c) = custom.list_marked_fg {
        theme.list_marked_fg = parse_or(Some(c), theme.list_marked_fg);
    }
    if let Some(ref c) = custom.list_parent_fg {
        theme.list_parent_fg = parse_or(Some(c), theme.list_parent_fg);
    }
    if let Some(ref c) = custom.header_fg {
        theme.header_fg = parse_or(Some(c), theme.header_fg);
    }
    if let Some(ref c) = custom.filter_fg {
        theme.filter_fg = parse_or(Some(c), theme.filter_fg);
    }
    if let Some(ref c) = custom.status_bg {
        theme.status_bg = parse_or(Some(c), theme.status_bg);
    }
    if let Some(ref c) = custom.status_fg {
        theme.status_fg = parse_or(Some(c), theme.status_fg);
    }
    if let Some(ref c) = custom.dialog_bg {
        theme.dialog_bg = parse_or(Some(c), theme.dialog_bg);
    }
    if let Some(ref c) = custom.dialog_border_fg {
        theme.dialog_border_fg = parse_or(Some(c), theme.dialog_border_fg);
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color_valid() {
        assert_eq!(parse_hex_color("#ff0000"), Some(Color::Rgb(255, 0, 0)));
        assert_eq!(parse_hex_color("#00ff00"), Some(Color::Rgb(0, 255, 0)));
        assert_eq!(parse_hex_color("#1a1b26"), Some(Color::Rgb(26, 27, 38)));
    }

    #[test]
    fn test_parse_hex_color_without_hash() {
        assert_eq!(parse_hex_color("ff0000"), Some(Color::Rgb(255, 0, 0)));
    }

    #[test]
    fn test_parse_hex_color_invalid() {
        assert_eq!(parse_hex_color("#zzzzzz"), None);
        assert_eq!(parse_hex_color("#fff"), None); // too short
        assert_eq!(parse_hex_color(""), None);
        assert_eq!(parse_hex_color("#"), None);
    }

    #[test]
    fn test_resolve_dark_theme() {
        let config = ThemeConfig {
            scheme: Some("dark".to_string()),
            custom: None,
        };
        let theme = resolve_theme(&config);
        assert_eq!(theme.list_dir_fg, Color::Rgb(137, 180, 250));
    }

    #[test]
    fn test_resolve_light_theme() {
        let config = ThemeConfig {
            scheme: Some("light".to_string()),
            custom: None,
        };
        let theme = resolve_theme(&config);
        assert_eq!(theme.list_dir_fg, Color::Rgb(30, 102, 245));
    }

    #[test]
    fn test_resolve_default_is_dark() {
        let config = ThemeConfig::default();
        let theme = resolve_theme(&config);
        assert_eq!(theme.list_dir_fg, Color::Rgb(137, 180, 250));
    }

    #[test]
    fn test_resolve_custom_overrides() {
        let config = ThemeConfig {
            scheme: Some("custom".to_string()),
            custom: Some(ThemeColorsConfig {
                list_fg: Some("#c0caf5".to_string()),
                list_marked_fg: Some("#9ece6a".to_string()),
                ..Default::default()
            }),
        };
        let theme = resolve_theme(&config);
        // Custom values applied
        assert_eq!(theme.list_fg, Color::Rgb(192, 202, 245));
        assert_eq!(theme.list_marked_fg, Color::Rgb(158, 206, 106));
        // Non-custom values fall back to dark theme
        assert_eq!(theme.list_dir_fg, Color::Rgb(137, 180, 250));
    }

    #[test]
    fn test_custom_with_invalid_hex_falls_back() {
        let config = ThemeConfig {
            scheme: Some("custom".to_string()),
            custom: Some(ThemeColorsConfig {
                list_fg: Some("#zzzzzz".to_string()),
                ..Default::default()
            }),
        };
        let theme = resolve_theme(&config);
        assert_eq!(theme.list_fg, dark_theme().list_fg);
    }

    #[test]
    fn test_unknown_scheme_falls_back_to_dark() {
        let config = ThemeConfig {
            scheme: Some("neon".to_string()),
            custom: None,
        };
        let theme = resolve_theme(&config);
        assert_eq!(theme.list_dir_fg, Color::Rgb(137, 180, 250));
    }

    #[test]
    fn test_dark_and_light_different() {
        let dark = dark_theme();
        let light = light_theme();
        assert_ne!(dark.list_fg, light.list_fg);
        assert_ne!(dark.list_selected_bg, light.list_selected_bg);
        assert_ne!(dark.error_fg, light.error_fg);
    }
}
