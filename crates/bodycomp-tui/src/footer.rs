//! TUI footer panel.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Render the footer panel with keyboard shortcuts.
pub fn render_footer(frame: &mut Frame, area: Rect) {
    let key = Style::default().fg(Color::Yellow);
    let text = vec![Line::from(vec![
        Span::styled("Tab", key),
        Span::raw(": next | "),
        Span::styled("S-Tab", key),
        Span::raw(": prev | "),
        Span::styled("Enter", key),
        Span::raw(": next/calculate | "),
        Span::styled("F5", key),
        Span::raw(": calculate | "),
        Span::styled("^U", key),
        Span::raw(": clear | "),
        Span::styled("Esc", key),
        Span::raw(": quit"),
    ])];

    let block = Block::default().borders(Borders::TOP);
    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}
