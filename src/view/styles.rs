//! Picker styling.
//!
//! Two signals must stay visible at once: which row is selected and which
//! runes matched. With colours off, modifiers carry both.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag or `no_color` config key
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from resolved settings and environment.
    ///
    /// Priority (first match wins):
    /// 1. `no_color` setting (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color: bool) -> Self {
        let enabled = !no_color && std::env::var_os("NO_COLOR").is_none();
        Self { enabled }
    }

    /// Colors explicitly on or off, ignoring the environment.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== PickerStyles =====

/// Styles for the header and the entry rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerStyles {
    /// Query bar and unselected, unmatched runes.
    pub base: Style,
    /// Status summary in the header.
    pub status: Style,
    /// Matched runes on an unselected row.
    pub matched: Style,
    /// Whole selected row.
    pub selected: Style,
    /// Matched runes on the selected row.
    pub selected_matched: Style,
}

impl PickerStyles {
    /// Styles for the given color configuration.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            let selected = Style::default().bg(Color::Blue).fg(Color::White);
            Self {
                base: Style::default(),
                status: Style::default().fg(Color::DarkGray),
                matched: Style::default().fg(Color::Red),
                selected,
                selected_matched: selected.fg(Color::Red),
            }
        } else {
            let marked = Modifier::BOLD | Modifier::UNDERLINED;
            let selected = Style::default().add_modifier(Modifier::REVERSED);
            Self {
                base: Style::default(),
                status: Style::default(),
                matched: Style::default().add_modifier(marked),
                selected,
                selected_matched: selected.add_modifier(marked),
            }
        }
    }

    /// Style for one rune of an entry row.
    pub fn rune_style(&self, selected: bool, matched: bool) -> Style {
        match (selected, matched) {
            (true, true) => self.selected_matched,
            (true, false) => self.selected,
            (false, true) => self.matched,
            (false, false) => self.base,
        }
    }
}

impl Default for PickerStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}
