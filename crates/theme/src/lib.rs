//! Theme system for arbor.

use ratatui::style::Color;

/// Application theme with semantic color assignments.
///
/// Same minimal palette for every view:
/// - 2 base colors (bg, fg)
/// - 2 accented colors (accented_bg, accented_fg)
/// - 2 selection colors (selected_bg, selected_fg)
/// - 1 disabled color
/// - 3 semantic colors (success, warning, error)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Theme name for display
    pub name: &'static str,

    /// Panel backgrounds
    pub bg: Color,
    /// Main text
    pub fg: Color,

    /// Status bar background
    pub accented_bg: Color,
    /// Focused borders, key hints
    pub accented_fg: Color,

    /// Selected list row background
    pub selected_bg: Color,
    /// Selected list row text
    pub selected_fg: Color,

    /// Unfocused borders, secondary text
    pub disabled: Color,

    /// Worktree names in the detail pane
    pub success: Color,
    /// Main/current markers
    pub warning: Color,
    /// Error dialogs
    pub error: Color,
}

const DEFAULT: Theme = Theme {
    name: "default",
    bg: Color::Black,
    fg: Color::White,
    accented_bg: Color::DarkGray,
    accented_fg: Color::Cyan,
    selected_bg: Color::Blue,
    selected_fg: Color::White,
    disabled: Color::Gray,
    success: Color::Green,
    warning: Color::Yellow,
    error: Color::Red,
};

const LIGHT: Theme = Theme {
    name: "light",
    bg: Color::White,
    fg: Color::Black,
    accented_bg: Color::Gray,
    accented_fg: Color::Blue,
    selected_bg: Color::LightBlue,
    selected_fg: Color::Black,
    disabled: Color::DarkGray,
    success: Color::Green,
    warning: Color::Magenta,
    error: Color::Red,
};

/// Built-in themes.
pub const THEMES: &[Theme] = &[DEFAULT, LIGHT];

impl Theme {
    /// Look up a built-in theme, falling back to `default`.
    pub fn get_by_name(name: &str) -> &'static Theme {
        THEMES
            .iter()
            .find(|theme| theme.name.eq_ignore_ascii_case(name))
            .unwrap_or(&THEMES[0])
    }
}

impl Default for Theme {
    fn default() -> Self {
        DEFAULT
    }
}
