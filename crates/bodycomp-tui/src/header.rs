//! TUI header panel.

use ratatui::layout::{Alignment, Rect};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Window title.
pub const TITLE: &str = "Body Composition Calculator";

/// Render the header panel.
pub fn render_header(frame: &mut Frame, area: Rect, theme: &ColorTheme) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(theme.border_style());

    let paragraph = Paragraph::new(TITLE)
        .style(theme.header_style())
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}
