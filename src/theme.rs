//! UI color palettes. A handful of built-in themes are selectable at
//! runtime from the Widgets Gallery page; a custom palette can be
//! dropped into the config directory as a `key #RRGGBB` conf file.

use ratatui::style::Color;
use std::collections::HashMap;
use std::fs;

/// Theme selected when the session starts with no config.
pub const DEFAULT_THEME: &str = "Matte";

/// Palette roles used by every page.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub accent: Color,        // Active borders, highlights
    pub accent_bright: Color, // Brighter accent for emphasis
    pub danger: Color,        // Errors, destructive hints
    pub success: Color,       // Success indicators
    pub warning: Color,       // Transient status messages
    pub text: Color,          // Primary text
    pub text_dim: Color,      // Dimmed text
    pub bg: Color,            // Background swatch
    pub bg_selected: Color,   // Selection background
    pub inactive: Color,      // Inactive borders
    pub header: Color,        // Table header text
}

impl Default for Theme {
    fn default() -> Self {
        Self::matte()
    }
}

impl Theme {
    /// Names offered by the theme picker, custom palette included when
    /// a conf file is present.
    pub fn available() -> Vec<String> {
        let mut names: Vec<String> = ["Matte", "Catppuccin", "Paper", "Ocean"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        if Self::load_custom().is_some() {
            names.push("Custom".to_string());
        }
        names
    }

    /// Resolve a theme by name, falling back to the default palette for
    /// anything unknown.
    pub fn by_name(name: &str) -> Self {
        match name {
            "Matte" => Self::matte(),
            "Catppuccin" => Self::catppuccin(),
            "Paper" => Self::paper(),
            "Ocean" => Self::ocean(),
            "Custom" => Self::load_custom().unwrap_or_default(),
            other => {
                tracing::warn!("unknown theme '{}', using default", other);
                Self::default()
            }
        }
    }

    fn matte() -> Self {
        Self {
            name: "Matte".to_string(),
            accent: Color::Rgb(255, 193, 7),
            accent_bright: Color::Rgb(255, 213, 79),
            danger: Color::Rgb(211, 95, 95),
            success: Color::Rgb(139, 195, 74),
            warning: Color::Rgb(230, 142, 13),
            text: Color::Rgb(190, 190, 190),
            text_dim: Color::Rgb(138, 138, 141),
            bg: Color::Rgb(18, 18, 18),
            bg_selected: Color::Rgb(51, 51, 51),
            inactive: Color::Rgb(89, 89, 89),
            header: Color::Rgb(211, 95, 95),
        }
    }

    fn catppuccin() -> Self {
        Self {
            name: "Catppuccin".to_string(),
            accent: Color::Rgb(250, 179, 135),
            accent_bright: Color::Rgb(245, 194, 231),
            danger: Color::Rgb(243, 139, 168),
            success: Color::Rgb(166, 218, 149),
            warning: Color::Rgb(249, 226, 175),
            text: Color::Rgb(205, 214, 244),
            text_dim: Color::Rgb(147, 153, 178),
            bg: Color::Rgb(30, 30, 46),
            bg_selected: Color::Rgb(69, 71, 90),
            inactive: Color::Rgb(88, 91, 112),
            header: Color::Rgb(243, 139, 168),
        }
    }

    fn paper() -> Self {
        Self {
            name: "Paper".to_string(),
            accent: Color::Rgb(175, 82, 222),
            accent_bright: Color::Rgb(88, 86, 214),
            danger: Color::Rgb(255, 59, 48),
            success: Color::Rgb(52, 199, 89),
            warning: Color::Rgb(255, 149, 0),
            text: Color::Rgb(28, 28, 30),
            text_dim: Color::Rgb(99, 99, 102),
            bg: Color::Rgb(242, 242, 247),
            bg_selected: Color::Rgb(209, 209, 214),
            inactive: Color::Rgb(174, 174, 178),
            header: Color::Rgb(175, 82, 222),
        }
    }

    fn ocean() -> Self {
        Self {
            name: "Ocean".to_string(),
            accent: Color::Rgb(86, 182, 194),
            accent_bright: Color::Rgb(97, 175, 239),
            danger: Color::Rgb(224, 108, 117),
            success: Color::Rgb(152, 195, 121),
            warning: Color::Rgb(229, 192, 123),
            text: Color::Rgb(171, 178, 191),
            text_dim: Color::Rgb(92, 99, 112),
            bg: Color::Rgb(40, 44, 52),
            bg_selected: Color::Rgb(62, 68, 81),
            inactive: Color::Rgb(76, 82, 99),
            header: Color::Rgb(97, 175, 239),
        }
    }

    /// Load a custom palette from `~/.config/paneru/theme.conf`, a
    /// `key #RRGGBB` file. Missing keys fall back to the default
    /// palette's values.
    fn load_custom() -> Option<Self> {
        let path = dirs::config_dir()?.join("paneru/theme.conf");
        let content = fs::read_to_string(path).ok()?;
        let colors = parse_conf(&content);
        if colors.is_empty() {
            return None;
        }

        let base = Self::default();
        let pick = |key: &str, fallback: Color| colors.get(key).copied().unwrap_or(fallback);

        Some(Self {
            name: "Custom".to_string(),
            accent: pick("accent", base.accent),
            accent_bright: pick("accent_bright", base.accent_bright),
            danger: pick("danger", base.danger),
            success: pick("success", base.success),
            warning: pick("warning", base.warning),
            text: pick("text", base.text),
            text_dim: pick("text_dim", base.text_dim),
            bg: pick("bg", base.bg),
            bg_selected: pick("bg_selected", base.bg_selected),
            inactive: pick("inactive", base.inactive),
            header: pick("header", base.header),
        })
    }
}

/// Parse `key value` lines where value is a hex color. Comments and
/// unparseable lines are skipped.
fn parse_conf(content: &str) -> HashMap<String, Color> {
    let mut colors = HashMap::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parts: Vec<&str> = line.splitn(2, char::is_whitespace).collect();
        if parts.len() == 2 {
            if let Some(color) = parse_hex_color(parts[1].trim()) {
                colors.insert(parts[0].trim().to_string(), color);
            }
        }
    }

    colors
}

/// Parse a hex color string (#RRGGBB or #RGB).
fn parse_hex_color(s: &str) -> Option<Color> {
    let s = s.trim().trim_start_matches('#');

    if s.len() == 6 {
        let r = u8::from_str_radix(&s[0..2], 16).ok()?;
        let g = u8::from_str_radix(&s[2..4], 16).ok()?;
        let b = u8::from_str_radix(&s[4..6], 16).ok()?;
        Some(Color::Rgb(r, g, b))
    } else if s.len() == 3 {
        let r = u8::from_str_radix(&s[0..1], 16).ok()? * 17;
        let g = u8::from_str_radix(&s[1..2], 16).ok()? * 17;
        let b = u8::from_str_radix(&s[2..3], 16).ok()? * 17;
        Some(Color::Rgb(r, g, b))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parsing() {
        assert_eq!(parse_hex_color("#ffc107"), Some(Color::Rgb(255, 193, 7)));
        assert_eq!(parse_hex_color("fff"), Some(Color::Rgb(255, 255, 255)));
        assert_eq!(parse_hex_color("#f0f"), Some(Color::Rgb(255, 0, 255)));
        assert_eq!(parse_hex_color("not-a-color"), None);
        assert_eq!(parse_hex_color("#12345"), None);
    }

    #[test]
    fn conf_parsing_skips_comments_and_garbage() {
        let conf = "# a comment\naccent #ff0000\n\nbroken-line\ntext    #00ff00\nbad #zzz\n";
        let colors = parse_conf(conf);
        assert_eq!(colors.len(), 2);
        assert_eq!(colors["accent"], Color::Rgb(255, 0, 0));
        assert_eq!(colors["text"], Color::Rgb(0, 255, 0));
    }

    #[test]
    fn unknown_theme_falls_back_to_default() {
        let t = Theme::by_name("definitely-not-a-theme");
        assert_eq!(t.name, DEFAULT_THEME);
    }

    #[test]
    fn every_builtin_resolves_by_its_own_name() {
        for name in ["Matte", "Catppuccin", "Paper", "Ocean"] {
            assert_eq!(Theme::by_name(name).name, name);
        }
    }
}
