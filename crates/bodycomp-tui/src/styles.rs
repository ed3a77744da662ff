//! TUI styles and color themes.

use ratatui::style::{Color, Modifier, Style};

/// Color theme for the TUI.
pub struct ColorTheme {
    pub primary: Color,
    pub error: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub field_bg: Color,
    pub focus_bg: Color,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            primary: Color::Rgb(0x34, 0x98, 0xdb),
            error: Color::Rgb(0xe7, 0x4c, 0x3c),
            text: Color::White,
            muted: Color::DarkGray,
            border: Color::Gray,
            field_bg: Color::Rgb(0x3a, 0x3a, 0x3a),
            focus_bg: Color::Rgb(0x42, 0x42, 0x42),
        }
    }
}

impl ColorTheme {
    /// Get the style for a header.
    #[must_use]
    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Get the style for normal text.
    #[must_use]
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Get the style for muted text (placeholders).
    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Get the style for a computed value.
    #[must_use]
    pub fn value_style(&self) -> Style {
        Style::default().fg(self.primary)
    }

    /// Get the style for error text.
    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Get the style for a group border.
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Get the style for an input field, focused or not.
    #[must_use]
    pub fn field_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.text).bg(self.focus_bg)
        } else {
            Style::default().fg(self.text).bg(self.field_bg)
        }
    }

    /// Get the style for the calculate button.
    #[must_use]
    pub fn button_style(&self, focused: bool) -> Style {
        let style = Style::default()
            .fg(Color::White)
            .bg(self.primary)
            .add_modifier(Modifier::BOLD);
        if focused {
            style.add_modifier(Modifier::REVERSED)
        } else {
            style
        }
    }
}
